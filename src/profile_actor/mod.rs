//! Profile-specific state logic: field patches and the reset action.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;
