use crate::context::CheckContext;
use crate::rules::WORD_RE;
use crate::traits::TextRule;
use prose_types::{CheckSpan, Severity, WHOLE_DOCUMENT};
use serde::Deserialize;
use std::collections::HashMap;

/// Options for the `overused_word` rule
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OverusedWordOptions {
    /// Occurrences allowed before a word counts as overused. Defaults to 10.
    pub max_occurrences: usize,
    /// Words shorter than this are never counted. Defaults to 4.
    pub min_word_len: usize,
}

impl Default for OverusedWordOptions {
    fn default() -> Self {
        Self {
            max_occurrences: 10,
            min_word_len: 4,
        }
    }
}

impl OverusedWordOptions {
    fn from_json(value: Option<&serde_json::Value>) -> Self {
        value
            .and_then(|v| serde_json::from_value(v.clone()).ok())
            .unwrap_or_default()
    }
}

/// Rule that flags words used more often than a document-wide threshold
///
/// Frequency is counted over the entire document, so the rule demands
/// whole-document context; each occurrence past the threshold is flagged
/// where it appears.
pub struct OverusedWordRuleImpl;

impl TextRule for OverusedWordRuleImpl {
    fn id(&self) -> &'static str {
        "overused_word"
    }

    fn description(&self) -> &'static str {
        "Flags words whose document-wide frequency exceeds a threshold"
    }

    fn default_severity(&self) -> Severity {
        Severity::Info
    }

    fn min_to_check_paragraphs(&self) -> i32 {
        WHOLE_DOCUMENT
    }

    fn check(&self, ctx: &CheckContext<'_>, options: Option<&serde_json::Value>) -> Vec<CheckSpan> {
        let opts = OverusedWordOptions::from_json(options);

        let mut totals: HashMap<String, usize> = HashMap::new();
        for para in ctx.paragraphs() {
            for word in WORD_RE.find_iter(&para.text) {
                if word.len() >= opts.min_word_len {
                    *totals.entry(word.as_str().to_ascii_lowercase()).or_insert(0) += 1;
                }
            }
        }

        tracing::trace!(distinct = totals.len(), "Counted word frequencies");

        let mut seen: HashMap<String, usize> = HashMap::new();
        let mut spans = Vec::new();

        for para in ctx.paragraphs() {
            for word in WORD_RE.find_iter(&para.text) {
                if word.len() < opts.min_word_len {
                    continue;
                }
                let key = word.as_str().to_ascii_lowercase();
                let total = totals.get(&key).copied().unwrap_or(0);
                if total <= opts.max_occurrences {
                    continue;
                }

                let count = seen.entry(key).or_insert(0);
                *count += 1;
                if *count > opts.max_occurrences {
                    spans.push(CheckSpan::new(
                        para.offset + word.start(),
                        word.len(),
                        self.id(),
                        self.default_severity(),
                        format!("The word '{}' is used {total} times", word.as_str()),
                    ));
                }
            }
        }

        spans
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prose_types::Paragraph;

    fn check(texts: &[&str], max_occurrences: usize) -> Vec<CheckSpan> {
        let mut offset = 0;
        let mut paragraphs = Vec::new();
        for text in texts {
            paragraphs.push(Paragraph::new(*text, offset));
            offset += text.len() + 2;
        }
        let options = serde_json::json!({ "max_occurrences": max_occurrences });
        OverusedWordRuleImpl.check(&CheckContext::new(&paragraphs), Some(&options))
    }

    #[test]
    fn test_under_threshold_is_quiet() {
        assert!(check(&["nice house, nice view"], 2).is_empty());
    }

    #[test]
    fn test_occurrences_past_threshold_are_flagged() {
        let spans = check(&["nice house, nice view, nice day"], 2);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].severity, Severity::Info);
        assert!(spans[0].message.contains("'nice' is used 3 times"));
    }

    #[test]
    fn test_counting_spans_paragraphs() {
        // Two occurrences per paragraph; only the whole document crosses
        // the threshold
        let spans = check(&["word and word", "word and word"], 3);
        assert_eq!(spans.len(), 1);
        // the flagged occurrence is the fourth one, in the second paragraph
        assert_eq!(spans[0].start, 15 + 9);
    }

    #[test]
    fn test_short_words_are_ignored() {
        assert!(check(&["it it it it it it it it"], 2).is_empty());
    }

    #[test]
    fn test_default_options_on_malformed_json() {
        let paragraphs = vec![Paragraph::new("some text", 0)];
        let options = serde_json::json!("not an object");
        let spans = OverusedWordRuleImpl.check(&CheckContext::new(&paragraphs), Some(&options));
        assert!(spans.is_empty());
    }
}
