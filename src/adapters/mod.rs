//! Adapters Layer - Hexagonal Architecture Outer Ring
//!
//! Implements the port traits defined in `crate::ports` with concrete
//! external dependencies (HTTP clients, the axum server). Each
//! sub-module groups adapters by infrastructure concern.
//!
//! Adapter categories:
//! - `api`: axum HTTP surface serving the aggregated result
//! - `sources`: per-protocol HTTP clients and payload normalization

pub mod api;
pub mod sources;
