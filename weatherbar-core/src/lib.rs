//! Core library for the `weatherbar` status widget.
//!
//! This crate defines:
//! - Settings & credentials handling
//! - The connectivity probe
//! - The OpenWeatherMap current-weather client
//! - The condition-code glyph table and status-line formatting
//!
//! It is used by `weatherbar-cli`, but can also be reused by other binaries.

pub mod config;
pub mod error;
pub mod icons;
pub mod model;
pub mod owm;
pub mod probe;

pub use config::Settings;
pub use error::{FetchError, IconError};
pub use model::Observation;
pub use owm::OwmClient;
