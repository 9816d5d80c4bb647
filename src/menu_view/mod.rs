//! Displayed subset of the stored menu.

pub mod filter;
pub mod view;

pub use filter::*;
pub use view::*;
