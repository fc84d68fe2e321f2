pub mod config;
pub mod mint;
pub mod telemetry;
pub mod version;
