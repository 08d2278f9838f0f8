//! Ports Layer - Hexagonal Architecture Boundaries
//!
//! Defines the interfaces (traits) that the usecases layer requires
//! from the outside world. Adapters implement these traits.
//!
//! Port categories:
//! - `YieldSource`: Fetch and normalize one protocol's yield data

pub mod yield_source;

pub use yield_source::{SourceError, YieldSource};
