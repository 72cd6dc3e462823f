use serde::Serialize;
use std::collections::BTreeSet;

/// How much of the surface word a candidate explains.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "residue", rename_all = "snake_case")]
pub enum MatchKind {
    Exact,
    /// Extra symbols, prefix residue first then suffix residue.
    WithResidue(Vec<char>),
}

impl MatchKind {
    pub fn residue_len(&self) -> usize {
        match self {
            MatchKind::Exact => 0,
            MatchKind::WithResidue(residue) => residue.len(),
        }
    }

    pub fn is_exact(&self) -> bool {
        matches!(self, MatchKind::Exact)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecompositionCandidate {
    pub root: String,
    pub pattern: String,
    pub rule: String,
    /// The part of the word the pattern generated.
    pub base: String,
    /// Fixed symbols contributed by the pattern.
    pub pattern_affixes: Vec<char>,
    #[serde(rename = "match")]
    pub matched: MatchKind,
    #[serde(skip)]
    pub(crate) pattern_order: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Validation {
    pub word: String,
    pub root: String,
    pub valid: bool,
    pub pattern: Option<String>,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CorpusReport {
    pub tokens: usize,
    pub credited: usize,
    /// Distinct roots whose derivatives received hits.
    pub roots: BTreeSet<String>,
    pub unmatched: BTreeSet<String>,
}
