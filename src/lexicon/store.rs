//! Authoritative set of roots and patterns.
//!
//! `LexiconState` is plain data with no interior locking. The engine wraps it
//! in a single `RwLock` and is responsible for invalidating the derivation
//! index while it still holds the write guard.

use super::alphabet::Alphabet;
use super::import::{ImportReport, meaningful_lines, split_fields};
use super::types::{Pattern, Root, validate_pattern_name};
use crate::error::{MorphologyError, Result};

use serde::Serialize;
use std::collections::BTreeMap;

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// One page of roots, 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RootPage {
    pub roots: Vec<Root>,
    pub page: usize,
    pub total_pages: usize,
    pub total: usize,
}

#[derive(Debug)]
pub struct LexiconState {
    alphabet: Alphabet,
    roots: BTreeMap<String, Root>,
    /// Insertion order; updates keep their position.
    patterns: Vec<Pattern>,
}

impl LexiconState {
    pub fn new(alphabet: Alphabet) -> Self {
        Self {
            alphabet,
            roots: BTreeMap::new(),
            patterns: Vec::new(),
        }
    }

    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    // --- Roots ---

    pub fn add_root(&mut self, raw: &str) -> Result<Root> {
        let root = Root::parse(raw, self.alphabet)?;
        if self.roots.contains_key(root.as_str()) {
            return Err(MorphologyError::DuplicateRoot(root.to_string()));
        }
        self.roots.insert(root.to_string(), root.clone());
        Ok(root)
    }

    pub fn remove_root(&mut self, raw: &str) -> Result<Root> {
        let key = self.alphabet.normalize(raw);
        self.roots
            .remove(&key)
            .ok_or_else(|| MorphologyError::root_not_found(&key))
    }

    /// Looks up a stored root, normalizing the key first.
    pub fn root(&self, raw: &str) -> Option<&Root> {
        self.roots.get(&self.alphabet.normalize(raw))
    }

    /// Exact-key lookup for callers that already hold a normalized key.
    pub fn root_by_key(&self, key: &str) -> Option<&Root> {
        self.roots.get(key)
    }

    pub fn require_root(&self, raw: &str) -> Result<&Root> {
        self.root(raw)
            .ok_or_else(|| MorphologyError::root_not_found(&self.alphabet.normalize(raw)))
    }

    /// All roots in lexicographic order.
    pub fn roots(&self) -> impl Iterator<Item = &Root> {
        self.roots.values()
    }

    pub fn root_count(&self) -> usize {
        self.roots.len()
    }

    /// Prefix filter over lexicographic order. `page < 1` reads as 1 and
    /// `page_size < 1` as [`DEFAULT_PAGE_SIZE`].
    pub fn list_roots(&self, prefix: Option<&str>, page: usize, page_size: usize) -> RootPage {
        let page = page.max(1);
        let page_size = if page_size < 1 { DEFAULT_PAGE_SIZE } else { page_size };
        let prefix = prefix
            .map(|p| self.alphabet.normalize(p))
            .unwrap_or_default();

        let matching: Vec<&Root> = self
            .roots
            .range(prefix.clone()..)
            .take_while(|(key, _)| key.starts_with(&prefix))
            .map(|(_, root)| root)
            .collect();

        let total = matching.len();
        let total_pages = total.div_ceil(page_size);
        let roots = matching
            .into_iter()
            .skip((page - 1).saturating_mul(page_size))
            .take(page_size)
            .cloned()
            .collect();

        RootPage {
            roots,
            page,
            total_pages,
            total,
        }
    }

    /// Adds one root per meaningful line.
    pub fn import_roots(&mut self, text: &str) -> ImportReport {
        let mut report = ImportReport::default();
        for (line_no, line) in meaningful_lines(text) {
            match self.add_root(line) {
                Ok(root) => report.accept(root.as_str()),
                Err(e) => report.reject(line_no, line, e),
            }
        }
        report
    }

    // --- Patterns ---

    pub fn add_pattern(&mut self, name: &str, rule: &str) -> Result<Pattern> {
        let pattern = Pattern::new(name, &self.alphabet.normalize(rule))?;
        if self.position(&pattern.name).is_some() {
            return Err(MorphologyError::DuplicatePattern(pattern.name));
        }
        self.patterns.push(pattern.clone());
        Ok(pattern)
    }

    pub fn update_pattern(&mut self, name: &str, rule: &str) -> Result<Pattern> {
        let name = validate_pattern_name(name)?;
        let idx = self
            .position(&name)
            .ok_or_else(|| MorphologyError::pattern_not_found(&name))?;
        let pattern = Pattern::new(&name, &self.alphabet.normalize(rule))?;
        self.patterns[idx] = pattern.clone();
        Ok(pattern)
    }

    pub fn remove_pattern(&mut self, name: &str) -> Result<Pattern> {
        let name = name.trim();
        let idx = self
            .position(name)
            .ok_or_else(|| MorphologyError::pattern_not_found(name))?;
        Ok(self.patterns.remove(idx))
    }

    pub fn pattern(&self, name: &str) -> Option<&Pattern> {
        self.position(name.trim()).map(|i| &self.patterns[i])
    }

    pub fn require_pattern(&self, name: &str) -> Result<&Pattern> {
        self.pattern(name)
            .ok_or_else(|| MorphologyError::pattern_not_found(name.trim()))
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    /// Adds one `name|rule` pattern per meaningful line.
    pub fn import_patterns(&mut self, text: &str) -> ImportReport {
        let mut report = ImportReport::default();
        for (line_no, line) in meaningful_lines(text) {
            let added = split_fields(line_no, line, 2)
                .and_then(|fields| self.add_pattern(fields[0], fields[1]));
            match added {
                Ok(pattern) => report.accept(pattern.name),
                Err(e) => report.reject(line_no, line, e),
            }
        }
        report
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.patterns.iter().position(|p| p.name == name)
    }
}
