//! Root-and-Pattern Morphology Engine
//!
//! Generates words from triliteral roots and templates, decomposes surface
//! words back into candidate roots and patterns, and aggregates corpus
//! statistics. The binary (`main.rs`) serves the engine over HTTP.
//!
//! ## Modules
//! - **`lexicon`**: The store of known roots and patterns, with validation,
//!   ordering and line-delimited bulk import.
//! - **`synthesis`**: Pure template substitution, gated by a data-driven
//!   phonological clash table.
//! - **`derivation`**: The lazily rebuilt per-root index of derivatives and the
//!   corpus frequency ledger.
//! - **`analysis`**: Inverse pattern matching with ranked ambiguity, validation
//!   and corpus ingestion.
//! - **`stats`**: Totals, averages and top roots by frequency.
//! - **`engine`**: The owned instance tying the above together behind one
//!   writer lock, plus the axum router.
//! - **`config`** / **`error`**: Configuration and the shared error type.

pub mod analysis;
pub mod config;
pub mod derivation;
pub mod engine;
pub mod error;
pub mod lexicon;
pub mod stats;
pub mod synthesis;
