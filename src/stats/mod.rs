//! Statistics Module
//!
//! Read-only rollups over the derivation index, recomputed on every request.

pub mod aggregator;
pub mod handlers;
pub mod types;
