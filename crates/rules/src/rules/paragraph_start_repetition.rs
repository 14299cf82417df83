use crate::context::CheckContext;
use crate::rules::WORD_RE;
use crate::traits::TextRule;
use prose_types::{CheckSpan, Severity};

/// Rule that flags consecutive paragraphs opening with the same word
///
/// Needs two surrounding paragraphs of context: editing one paragraph can
/// change the verdict for its neighbors.
pub struct ParagraphStartRepetitionRuleImpl;

impl TextRule for ParagraphStartRepetitionRuleImpl {
    fn id(&self) -> &'static str {
        "paragraph_start_repetition"
    }

    fn description(&self) -> &'static str {
        "Flags consecutive paragraphs that open with the same word"
    }

    fn default_severity(&self) -> Severity {
        Severity::Hint
    }

    fn min_to_check_paragraphs(&self) -> i32 {
        2
    }

    fn check(&self, ctx: &CheckContext<'_>, _options: Option<&serde_json::Value>) -> Vec<CheckSpan> {
        let mut spans = Vec::new();

        for pair in ctx.paragraphs().windows(2) {
            let Some(first) = WORD_RE.find(&pair[0].text) else {
                continue;
            };
            let Some(second) = WORD_RE.find(&pair[1].text) else {
                continue;
            };

            if first.as_str().eq_ignore_ascii_case(second.as_str()) {
                spans.push(CheckSpan::new(
                    pair[1].offset + second.start(),
                    second.len(),
                    self.id(),
                    self.default_severity(),
                    format!(
                        "Consecutive paragraphs both start with '{}'",
                        second.as_str()
                    ),
                ));
            }
        }

        spans
    }
}
