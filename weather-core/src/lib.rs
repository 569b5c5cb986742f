//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The OpenWeatherMap API client (geocoding + current weather)
//! - IP-based geolocation of the caller
//! - Shared domain models (queries, reports)
//!
//! It is used by `weather-cli`, but can also be reused by other binaries or services.

pub mod client;
pub mod config;
pub mod error;
pub mod locate;
pub mod model;

pub use client::OwmClient;
pub use config::Config;
pub use error::ClientError;
pub use model::{Coordinates, GeoCandidate, LocationQuery, Units, WeatherReport};
