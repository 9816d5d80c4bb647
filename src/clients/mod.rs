//! Typed handles for talking to the actors.

#[macro_use]
mod macros;

pub mod menu_client;
pub mod profile_client;

pub use menu_client::MenuClient;
pub use profile_client::ProfileClient;
