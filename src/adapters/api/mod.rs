//! HTTP API Adapter - Public Service Surface
//!
//! Serves the aggregated yield result over HTTP via axum.
//!
//! Sub-modules:
//! - `error`: typed API errors with stable JSON bodies
//! - `server`: router construction and the serving loop

pub mod error;
pub mod server;

pub use error::ApiError;
pub use server::{router, ApiServer, AppState};
