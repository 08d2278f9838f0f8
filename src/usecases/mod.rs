//! Use Cases Layer - Application Business Logic
//!
//! Orchestrates domain logic with port interfaces. Each use case is a
//! self-contained business operation.
//!
//! Use cases:
//! - `HighestApy`: Fetch all sources, aggregate, pick the top yield

pub mod highest_apy;

pub use highest_apy::{HighestApy, HighestApyError};
