//! Protection-setting calculations for power-distribution equipment.

pub mod config;
pub mod devices;
pub mod error;
pub mod logging;
pub mod numeric;
/// ANSI protection functions.
pub mod protection;
pub mod report;

pub use error::ProtectionError;
