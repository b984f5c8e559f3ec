//! Client for the remote Visualization Service.
//!
//! The service turns a natural-language query into a chart. This crate owns the
//! wire types, the error taxonomy and the HTTP transport; the UI depends only on
//! the [`VisualizationService`] trait so it can be driven by fakes in tests.

mod client;
mod error;
mod settings;
mod types;

pub use client::{VisualizationClient, VisualizationService};
pub use error::ApiError;
pub use settings::{ClientConfig, DEFAULT_ENDPOINT};
pub use types::{VisualizationRequest, VisualizationResponse};
