//! Flagged text spans.

use crate::Severity;

/// A contiguous run of text flagged by a rule, with optional suggested
/// replacements.
///
/// Spans are produced by rule execution and never mutated afterwards; the
/// merge step only reads them. Offsets are document-relative byte positions.
/// A span of length 0 is a pure insertion point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckSpan {
    /// Byte offset of the span start
    pub start: usize,
    /// Byte length of the flagged run (0 for a pure insertion point)
    pub length: usize,
    /// Identifier of the rule that produced this span
    pub rule: String,
    /// Severity of the finding
    pub severity: Severity,
    /// Human-readable message
    pub message: String,
    /// Ordered suggested replacements (may be empty)
    pub suggestions: Vec<String>,
}

impl CheckSpan {
    /// Create a new span with no suggestions
    #[must_use]
    pub fn new(
        start: usize,
        length: usize,
        rule: impl Into<String>,
        severity: Severity,
        message: impl Into<String>,
    ) -> Self {
        Self {
            start,
            length,
            rule: rule.into(),
            severity,
            message: message.into(),
            suggestions: Vec::new(),
        }
    }

    /// Create a warning span
    #[must_use]
    pub fn warning(
        start: usize,
        length: usize,
        rule: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(start, length, rule, Severity::Warning, message)
    }

    /// Create an error span
    #[must_use]
    pub fn error(
        start: usize,
        length: usize,
        rule: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(start, length, rule, Severity::Error, message)
    }

    /// Create a hint span
    #[must_use]
    pub fn hint(
        start: usize,
        length: usize,
        rule: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(start, length, rule, Severity::Hint, message)
    }

    /// Attach suggested replacements to this span
    #[must_use]
    pub fn with_suggestions(mut self, suggestions: Vec<String>) -> Self {
        self.suggestions = suggestions;
        self
    }

    /// Exclusive end offset of the span
    #[must_use]
    pub const fn end(&self) -> usize {
        self.start + self.length
    }

    /// Returns true if this span is a pure insertion point (length 0)
    #[must_use]
    pub const fn is_insertion_point(&self) -> bool {
        self.length == 0
    }

    /// Returns true if one span's start falls strictly inside the other's
    /// `[start, end)` range.
    #[must_use]
    pub const fn overlaps(&self, other: &Self) -> bool {
        (other.start > self.start && other.start < self.end())
            || (self.start > other.start && self.start < other.end())
    }
}
