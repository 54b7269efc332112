//! Health tools.

pub mod ping;

pub use ping::HealthPingTool;
