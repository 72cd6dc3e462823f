//! Engine Module
//!
//! The explicitly owned engine instance and its HTTP surface.
//!
//! ## Overview
//! `MorphologyEngine` holds the lexicon store behind a single writer lock,
//! together with the derivation index, the frequency ledger, the synthesizer
//! and the decomposition resolver. Handlers receive it as
//! `Extension<Arc<MorphologyEngine>>`; nothing is global.
//!
//! ## Submodules
//! - **`engine`**: The facade. One method per operation.
//! - **`protocol`**: The `{success, message, data}` response envelope.
//! - **`router`**: Builds the axum `Router` over every module's handlers.

pub mod engine;
pub mod protocol;
pub mod router;

#[cfg(test)]
mod tests;
