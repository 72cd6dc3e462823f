//! Line-delimited bulk input.
//!
//! Blank lines and lines starting with `#` are ignored. Every other line is
//! applied independently; a failing line never aborts the batch.

use crate::error::MorphologyError;

use serde::Serialize;

/// Separator between fields of a pattern, frequency or clash line.
pub const FIELD_SEPARATOR: char = '|';

/// Yields `(line_number, trimmed_line)` for every meaningful line. Line numbers are 1-based.
pub fn meaningful_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
}

/// Splits a line into exactly `expected` trimmed fields.
pub fn split_fields(line_no: usize, line: &str, expected: usize) -> Result<Vec<&str>, MorphologyError> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).map(str::trim).collect();
    if fields.len() != expected {
        return Err(MorphologyError::malformed_line(
            line_no,
            format!(
                "expected {} '{}'-separated fields, got {}",
                expected,
                FIELD_SEPARATOR,
                fields.len()
            ),
        ));
    }
    Ok(fields)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportFailure {
    pub line: usize,
    pub content: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    pub succeeded: usize,
    /// Keys of the entries that were applied, in input order.
    pub accepted: Vec<String>,
    pub failed: Vec<ImportFailure>,
}

impl ImportReport {
    pub fn accept(&mut self, key: impl Into<String>) {
        self.succeeded += 1;
        self.accepted.push(key.into());
    }

    /// Records `error` against `line`. The batch carries on.
    pub fn reject(&mut self, line: usize, content: &str, error: MorphologyError) {
        let reason = match error {
            MorphologyError::MalformedImportLine { reason, .. } => reason,
            other => other.to_string(),
        };
        tracing::warn!("Rejected import line {}: {}", line, reason);
        self.failed.push(ImportFailure {
            line,
            content: content.to_string(),
            reason,
        });
    }
}
