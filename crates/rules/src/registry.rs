/// Registry of all available text-level rules
use crate::rules::{
    InconsistentQuotesRuleImpl, OverusedWordRuleImpl, ParagraphStartRepetitionRuleImpl,
    RepeatedWordRuleImpl,
};
use crate::traits::TextRule;
use std::sync::{Arc, LazyLock};

/// Lazily initialized text-level rules.
/// Rules are created once and reused across all calls.
static TEXT_RULES: LazyLock<Vec<Arc<dyn TextRule>>> = LazyLock::new(|| {
    vec![
        Arc::new(RepeatedWordRuleImpl),
        Arc::new(ParagraphStartRepetitionRuleImpl),
        Arc::new(InconsistentQuotesRuleImpl),
        Arc::new(OverusedWordRuleImpl),
    ]
});

#[must_use]
pub fn text_rules() -> &'static [Arc<dyn TextRule>] {
    &TEXT_RULES
}

#[must_use]
pub fn all_rule_ids() -> Vec<&'static str> {
    let mut ids: Vec<&'static str> = text_rules().iter().map(|rule| rule.id()).collect();
    ids.sort_unstable();
    ids
}
