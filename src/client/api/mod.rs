//! Clients for the VisionTrack REST API.

pub mod role;
