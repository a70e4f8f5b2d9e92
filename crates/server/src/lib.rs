#[cfg(feature = "server")]
pub mod config;

#[cfg(feature = "server")]
pub mod remote;

#[cfg(feature = "server")]
pub mod error_convert;

#[cfg(feature = "server")]
pub mod auth;

pub mod api;
