//! Facility directory for medical travel
//!
//! A read-only HTTP API over a catalog of hospitals and clinics abroad:
//! - Filtered facility listings (treatment, budget, region, country)
//! - Facility detail with treatments and doctors
//! - Static reference data for search UIs
//! - CDN-friendly cache headers on every read

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod state;

pub use config::Config;
pub use error::{Error, Result};
pub use state::AppState;
