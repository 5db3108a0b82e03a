pub mod config;
pub mod error;
pub mod identity;
pub mod telemetry;
