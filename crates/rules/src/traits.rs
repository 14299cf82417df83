use crate::context::CheckContext;
use prose_types::{CheckSpan, Severity, SINGLE_PARAGRAPH};

/// A text-level analysis rule.
///
/// Implementations are stateless; all inputs arrive through the check
/// context and the optional per-rule options value, and all output is the
/// returned span list.
pub trait TextRule: Send + Sync {
    /// Unique rule identifier, e.g. `"repeated_word"`
    fn id(&self) -> &'static str;

    /// Human-readable description of what the rule flags
    fn description(&self) -> &'static str;

    /// Severity the rule reports with by default
    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    /// Minimum paragraphs the rule needs to produce a valid result.
    ///
    /// Follows the [`prose_types`] demand contract: `0` = current paragraph
    /// only (the default), positive `n` = `n` surrounding paragraphs, `-1` =
    /// configuration-sized context, `-2` = entire document.
    fn min_to_check_paragraphs(&self) -> i32 {
        SINGLE_PARAGRAPH
    }

    /// Run the rule over a paragraph window.
    ///
    /// `options` is the user's per-rule options table as JSON; rules
    /// deserialize what they understand and fall back to defaults.
    fn check(&self, ctx: &CheckContext<'_>, options: Option<&serde_json::Value>) -> Vec<CheckSpan>;
}
