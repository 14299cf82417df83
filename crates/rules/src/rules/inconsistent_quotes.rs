use crate::context::CheckContext;
use crate::traits::TextRule;
use prose_types::{CheckSpan, Severity, CONFIGURED_CONTEXT};

const STRAIGHT: char = '"';
const CURLY_OPEN: char = '\u{201C}';
const CURLY_CLOSE: char = '\u{201D}';

/// Rule that flags mixed double-quote styles within the checked window
///
/// When straight (`"`) and typographic (`\u{201C}` `\u{201D}`) double quotes
/// both appear, occurrences of the minority style are flagged with the
/// dominant style suggested. Ties prefer typographic quotes. The verdict
/// depends on every paragraph in the window, so the rule asks for the
/// configuration-sized context.
pub struct InconsistentQuotesRuleImpl;

impl TextRule for InconsistentQuotesRuleImpl {
    fn id(&self) -> &'static str {
        "inconsistent_quotes"
    }

    fn description(&self) -> &'static str {
        "Flags mixed straight and typographic double quotes"
    }

    fn default_severity(&self) -> Severity {
        Severity::Info
    }

    fn min_to_check_paragraphs(&self) -> i32 {
        CONFIGURED_CONTEXT
    }

    fn check(&self, ctx: &CheckContext<'_>, _options: Option<&serde_json::Value>) -> Vec<CheckSpan> {
        let mut straight = 0usize;
        let mut curly = 0usize;

        for para in ctx.paragraphs() {
            for ch in para.text.chars() {
                match ch {
                    STRAIGHT => straight += 1,
                    CURLY_OPEN | CURLY_CLOSE => curly += 1,
                    _ => {}
                }
            }
        }

        if straight == 0 || curly == 0 {
            return Vec::new();
        }

        let flag_straight = straight <= curly;
        let mut spans = Vec::new();

        for para in ctx.paragraphs() {
            for (idx, ch) in para.text.char_indices() {
                let (flagged, suggestions) = match ch {
                    STRAIGHT if flag_straight => (
                        true,
                        vec![CURLY_OPEN.to_string(), CURLY_CLOSE.to_string()],
                    ),
                    CURLY_OPEN | CURLY_CLOSE if !flag_straight => {
                        (true, vec![STRAIGHT.to_string()])
                    }
                    _ => (false, Vec::new()),
                };

                if flagged {
                    spans.push(
                        CheckSpan::new(
                            para.offset + idx,
                            ch.len_utf8(),
                            self.id(),
                            self.default_severity(),
                            "Double-quote style is inconsistent with the surrounding text",
                        )
                        .with_suggestions(suggestions),
                    );
                }
            }
        }

        spans
    }
}
