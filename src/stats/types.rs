use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RootFrequency {
    pub root: String,
    pub derivatives: usize,
    pub frequency: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub total_roots: usize,
    pub total_patterns: usize,
    pub total_derivatives: usize,
    pub total_frequency: u64,
    /// 0 when the lexicon has no roots.
    pub avg_derivatives: f64,
    /// Highest summed frequency first.
    pub top_roots: Vec<RootFrequency>,
}
