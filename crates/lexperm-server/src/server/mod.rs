//! HTTP service implementation and job coordination logic.
//!
//! This module contains the logic for handling client-facing HTTP requests
//! and the per-job background producers they delegate to.
//!
//! ## Structure
//!
//! - [`config`] - CLI arguments and validated runtime configuration.
//! - [`error`] - API error taxonomy and its JSON response mapping.
//! - [`jobs`] - job registry, id allocation, and producer tasks.
//! - [`service`] - axum router and request handlers.
//! - [`telemetry`] - structured log subscriber setup.

pub mod config;
pub mod error;
pub mod jobs;
pub mod service;
pub mod telemetry;
