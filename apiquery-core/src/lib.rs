//! Core library for the `apiquery` CLI.
//!
//! This crate defines:
//! - Configuration of service endpoints and the request timeout
//! - A single HTTP client covering every query the menu offers
//! - Typed projections of the JSON responses
//! - One error type for every failed request
//!
//! It is used by `apiquery-cli`, but can also be reused by other binaries.

pub mod client;
pub mod config;
pub mod error;
pub mod model;

pub use client::ApiClient;
pub use config::{Config, Endpoints};
pub use error::QueryError;
pub use model::{Completion, Coordinates, CurrentWeather, Post, Ticker, Todo, User};
