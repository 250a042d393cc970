//! VisionTrack web client.
//!
//! A Dioxus application whose navbar resolves the visitor's login state and role from
//! browser storage and the VisionTrack role API, and offers navigation and logout.

#![allow(non_snake_case)]

pub mod client;
pub mod model;
