use crate::lexicon::types::RootType;

use serde::{Deserialize, Serialize};

/// A generated word together with its corpus frequency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Derivative {
    pub root: String,
    pub pattern: String,
    pub word: String,
    pub frequency: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RootDerivatives {
    pub root: String,
    pub root_type: RootType,
    pub root_type_name: &'static str,
    /// Descending frequency, ties in pattern order.
    pub derivatives: Vec<Derivative>,
    pub total_derivatives: usize,
    pub total_frequency: u64,
}

/// One root's word for a given pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternWord {
    pub root: String,
    pub word: String,
    pub frequency: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternWords {
    pub pattern: String,
    pub rule: String,
    pub words: Vec<PatternWord>,
    pub count: usize,
}
