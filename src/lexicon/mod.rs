//! Lexicon Store Module
//!
//! The authoritative set of known roots and patterns.
//!
//! ## Responsibilities
//! - **Validation**: Roots are exactly three consonants of the configured
//!   alphabet; patterns carry the markers `1`, `2`, `3` once each, in order.
//! - **Ordering**: Roots list in code point order, patterns in insertion order.
//! - **Bulk import**: Line-delimited input with per-line failure reporting.
//! - **Classification**: Every root is labelled with its `RootType`.
//!
//! ## Submodules
//! - **`alphabet`**: Consonant sets, normalization and default affixes.
//! - **`types`**: `Root`, `RootType` and `Pattern`.
//! - **`store`**: `LexiconState`, the lock-free data behind the engine's `RwLock`.
//! - **`import`**: Line parsing and `ImportReport`.
//! - **`protocol`** / **`handlers`**: HTTP endpoints for roots and schemes.

pub mod alphabet;
pub mod handlers;
pub mod import;
pub mod protocol;
pub mod store;
pub mod types;
