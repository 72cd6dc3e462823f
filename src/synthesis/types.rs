use crate::lexicon::types::RootType;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedWord {
    pub root: String,
    pub pattern: String,
    pub rule: String,
    pub word: String,
    pub root_type: RootType,
}

/// Outcome of one pattern within a family. Exactly one of `word` and `error` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FamilyMember {
    pub pattern: String,
    pub rule: String,
    pub word: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordFamily {
    pub root: String,
    pub root_type: RootType,
    /// Store order.
    pub members: Vec<FamilyMember>,
    pub generated: usize,
    pub failed: usize,
}
