pub mod menu;
pub mod profile;

pub use menu::*;
pub use profile::*;
