//! CLI command implementations.

pub mod components;
pub mod secrets;
pub mod supervisor;
pub mod version;
