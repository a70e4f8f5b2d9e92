pub mod components;
pub mod locale;

pub use components::*;
