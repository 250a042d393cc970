//! Test doubles for the browser and the role API.

pub mod memory;
pub mod setup;

pub use memory::MemoryStorage;
pub use role_lookup::StubRoleLookup;
pub use setup::{TestBuilder, TestSetup};
