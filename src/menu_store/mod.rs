//! Durable menu table owned by a single actor.

pub mod error;
pub mod store;

pub use error::*;
pub use store::*;
