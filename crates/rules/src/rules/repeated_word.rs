use crate::context::CheckContext;
use crate::rules::WORD_RE;
use crate::traits::TextRule;
use prose_types::CheckSpan;

/// Rule that flags a word immediately repeated within a paragraph
///
/// "The the cat sat" flags "the the" and suggests collapsing the pair to a
/// single word. Comparison is case-insensitive, so sentence-initial repeats
/// are caught too. Only whitespace may separate the pair; "the, the" is not
/// a doubled word.
pub struct RepeatedWordRuleImpl;

impl TextRule for RepeatedWordRuleImpl {
    fn id(&self) -> &'static str {
        "repeated_word"
    }

    fn description(&self) -> &'static str {
        "Flags a word typed twice in a row within a paragraph"
    }

    fn check(&self, ctx: &CheckContext<'_>, _options: Option<&serde_json::Value>) -> Vec<CheckSpan> {
        let mut spans = Vec::new();

        for para in ctx.paragraphs() {
            let mut prev: Option<(usize, usize, &str)> = None;

            for word in WORD_RE.find_iter(&para.text) {
                if let Some((prev_start, prev_end, prev_word)) = prev {
                    let gap = &para.text[prev_end..word.start()];
                    if !gap.is_empty()
                        && gap.chars().all(char::is_whitespace)
                        && prev_word.eq_ignore_ascii_case(word.as_str())
                    {
                        spans.push(
                            CheckSpan::new(
                                para.offset + prev_start,
                                word.end() - prev_start,
                                self.id(),
                                self.default_severity(),
                                format!("The word '{}' is repeated", word.as_str()),
                            )
                            .with_suggestions(vec![prev_word.to_string()]),
                        );
                    }
                }
                prev = Some((word.start(), word.end(), word.as_str()));
            }
        }

        spans
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prose_types::{Paragraph, Severity};

    fn check(text: &str) -> Vec<CheckSpan> {
        check_at(text, 0)
    }

    fn check_at(text: &str, offset: usize) -> Vec<CheckSpan> {
        let paragraphs = vec![Paragraph::new(text, offset)];
        RepeatedWordRuleImpl.check(&CheckContext::new(&paragraphs), None)
    }

    #[test]
    fn test_flags_doubled_word() {
        let spans = check("The the cat sat.");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].start, 0);
        assert_eq!(spans[0].length, 7);
        assert_eq!(spans[0].severity, Severity::Warning);
        assert_eq!(spans[0].suggestions, vec!["The".to_string()]);
    }

    #[test]
    fn test_case_insensitive() {
        let spans = check("It was WAS fine.");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].start, 3);
        assert_eq!(spans[0].length, 7);
    }

    #[test]
    fn test_no_flag_on_prefix_words() {
        assert!(check("the theme of the play").is_empty());
    }

    #[test]
    fn test_no_flag_across_punctuation() {
        assert!(check("He said that, that day, it rained.").is_empty());
    }

    #[test]
    fn test_offsets_are_document_relative() {
        let spans = check_at("so so it goes", 100);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].start, 100);
        assert_eq!(spans[0].length, 5);
    }

    #[test]
    fn test_multiple_repeats_in_one_paragraph() {
        let spans = check("it it happened and then then some");
        assert_eq!(spans.len(), 2);
    }
}
