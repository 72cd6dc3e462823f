//! Template Substitution Module
//!
//! Pure `(root, pattern) -> word` generation. The rule is walked left to
//! right; markers `1`, `2`, `3` take the root's letters and every other symbol
//! is copied. A data-driven clash table may forbid a letter class in a slot.
//!
//! ## Submodules
//! - **`template`**: The `Synthesizer`.
//! - **`clash`**: `ClashTable` and its line format.
//! - **`types`**: Generation results.
//! - **`protocol`** / **`handlers`**: `/api/generate/*`.

pub mod clash;
pub mod handlers;
pub mod protocol;
pub mod template;
pub mod types;
