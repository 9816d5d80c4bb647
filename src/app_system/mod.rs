//! System orchestration, configuration, startup, and shutdown logic.

pub mod config;
pub mod error;
pub mod little_lemon_system;
pub mod tracing;

pub use config::*;
pub use error::*;
pub use little_lemon_system::*;
pub use self::tracing::*;
