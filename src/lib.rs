//! Point weather forecasts from the MET Norway location forecast API
//! (the service behind yr.no), cached per coordinate and summarized into
//! fixed-shape views.

pub mod aggregate;
pub mod cache;
pub mod config;
pub mod convert;
pub mod errors;
pub mod forecast;
pub mod manager_met;
pub mod models;
pub mod timevalues;

pub use config::{Config, load_config};
pub use errors::WeatherError;
pub use forecast::Forecast;
