//! Decomposition Module
//!
//! Recovers `(root, pattern)` pairs from surface words.
//!
//! ## Responsibilities
//! - **Decomposition**: Ranked candidates, exact matches before matches that
//!   leave prefix or suffix residue.
//! - **Validation**: Exact-only check of a claimed root.
//! - **Corpus ingestion**: Tokenizes text and credits hits to the ledger.
//!
//! ## Submodules
//! - **`resolver`**: Inverse pattern matching.
//! - **`corpus`**: Word tokenizer.
//! - **`types`**: Candidates, verdicts and reports.
//! - **`protocol`** / **`handlers`**: `/api/validate/*` and `/api/corpus/ingest`.

pub mod corpus;
pub mod handlers;
pub mod protocol;
pub mod resolver;
pub mod types;
