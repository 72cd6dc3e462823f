//! Derivation Index Module
//!
//! Per-root derivatives `(word, pattern, frequency)`, materialized on first
//! read and invalidated by mutations.
//!
//! ## Submodules
//! - **`index`**: `DerivationIndex`, dirty flags plus a global pattern epoch.
//! - **`frequency`**: `FrequencyLedger`, corpus counts per `(root, word)`.
//! - **`types`**: Derivative views.
//! - **`protocol`** / **`handlers`**: `/api/search/*` and `/api/frequencies*`.

pub mod frequency;
pub mod handlers;
pub mod index;
pub mod protocol;
pub mod types;

#[cfg(test)]
mod tests;
