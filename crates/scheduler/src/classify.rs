//! Rule-to-cache-tier classification.

use crate::tier::{CacheTier, TierTable};
use prose_types::{SINGLE_PARAGRAPH, WHOLE_DOCUMENT};

/// A rule's identity and paragraph demand, as seen by the classifier.
///
/// The demand follows the [`prose_types`] contract: `0` = current paragraph
/// only, positive `n` = `n` surrounding paragraphs, `-1` = configuration-
/// sized context, `-2` = entire document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleDemand {
    /// Unique rule identifier
    pub id: String,
    /// Minimum paragraphs the rule needs to produce a valid result
    pub min_paragraphs: i32,
}

impl RuleDemand {
    /// Create a rule demand
    #[must_use]
    pub fn new(id: impl Into<String>, min_paragraphs: i32) -> Self {
        Self {
            id: id.into(),
            min_paragraphs,
        }
    }
}

/// Partition the active rule set into the four cache tiers.
///
/// `configured_lookaround` is the configured number of paragraphs to check
/// around an edit (`num_paras_to_check`); it may be negative, with `-2`
/// requesting whole-document-only checking. Rules listed in
/// `disabled_rule_ids` are excluded from the table entirely.
///
/// Per rule, with `min_para` its paragraph demand:
///
/// 1. `min_para == 0` → tier 0.
/// 2. else if `configured_lookaround >= 0` → tier 1; a negative demand or a
///    demand within the window is folded into the shared window, a larger
///    demand grows the window to the demand.
/// 3. else if `min_para > 0` → tier 1; the window grows to the demand.
/// 4. else if `min_para == -2 && configured_lookaround == -2` → tier 3.
/// 5. else → tier 2.
///
/// The branch order and thresholds are deliberate: downstream behavior
/// (which rules share a cache invalidation granularity) depends on this
/// exact policy. Demands outside the documented value set are absorbed by
/// the closest matching branch rather than rejected.
///
/// This is a pure function: no engine state is touched. Every input rule id
/// that is not disabled lands in exactly one tier's set.
#[must_use]
pub fn classify(
    rules: &[RuleDemand],
    disabled_rule_ids: &[String],
    configured_lookaround: i32,
) -> TierTable {
    let mut table = TierTable::empty();

    for rule in rules {
        if disabled_rule_ids.iter().any(|id| id == &rule.id) {
            continue;
        }

        let min_para = rule.min_paragraphs;
        let tier = if min_para == SINGLE_PARAGRAPH {
            CacheTier::SingleParagraph
        } else if configured_lookaround >= 0 {
            // Demands at or below the window share the configured window;
            // only a larger explicit demand grows it.
            let slot = table.slot_mut(CacheTier::ContextWindow);
            slot.context_size = slot.context_size.max(min_para.max(configured_lookaround));
            CacheTier::ContextWindow
        } else if min_para > 0 {
            let slot = table.slot_mut(CacheTier::ContextWindow);
            slot.context_size = slot.context_size.max(min_para);
            CacheTier::ContextWindow
        } else if min_para == WHOLE_DOCUMENT && configured_lookaround == WHOLE_DOCUMENT {
            CacheTier::FullTextOnly
        } else {
            CacheTier::FullText
        };

        table.slot_mut(tier).rule_ids.insert(rule.id.clone());
    }

    tracing::debug!(
        configured_lookaround,
        single_paragraph = table.rule_ids(CacheTier::SingleParagraph).len(),
        context_window = table.rule_ids(CacheTier::ContextWindow).len(),
        window_size = table.context_size(CacheTier::ContextWindow),
        full_text = table.rule_ids(CacheTier::FullText).len(),
        full_text_only = table.rule_ids(CacheTier::FullTextOnly).len(),
        "Classified rules into cache tiers"
    );

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use prose_types::CONFIGURED_CONTEXT;

    fn demands(specs: &[(&str, i32)]) -> Vec<RuleDemand> {
        specs
            .iter()
            .map(|(id, min)| RuleDemand::new(*id, *min))
            .collect()
    }

    #[test]
    fn test_zero_demand_always_tier_0() {
        for lookaround in [-2, -1, 0, 3, 100] {
            let table = classify(&demands(&[("r", 0)]), &[], lookaround);
            assert_eq!(table.tier_of("r"), Some(CacheTier::SingleParagraph));
            assert_eq!(table.context_size(CacheTier::SingleParagraph), 0);
        }
    }

    #[test]
    fn test_window_covers_small_positive_demand() {
        // 0 < min <= lookaround: tier 1, context at least the window
        let table = classify(&demands(&[("r", 2)]), &[], 5);
        assert_eq!(table.tier_of("r"), Some(CacheTier::ContextWindow));
        assert!(table.context_size(CacheTier::ContextWindow) >= 5);
    }

    #[test]
    fn test_large_demand_grows_window() {
        let table = classify(&demands(&[("r", 7)]), &[], 2);
        assert_eq!(table.tier_of("r"), Some(CacheTier::ContextWindow));
        assert_eq!(table.context_size(CacheTier::ContextWindow), 7);
    }

    #[test]
    fn test_negative_demand_under_bounded_config() {
        let table = classify(&demands(&[("r", CONFIGURED_CONTEXT)]), &[], 4);
        assert_eq!(table.tier_of("r"), Some(CacheTier::ContextWindow));
        assert_eq!(table.context_size(CacheTier::ContextWindow), 4);
    }

    #[test]
    fn test_positive_demand_under_negative_config() {
        let table = classify(&demands(&[("r", 3)]), &[], -1);
        assert_eq!(table.tier_of("r"), Some(CacheTier::ContextWindow));
        assert_eq!(table.context_size(CacheTier::ContextWindow), 3);
    }

    #[test]
    fn test_whole_document_under_whole_document_config_is_tier_3() {
        let table = classify(&demands(&[("r", -2)]), &[], -2);
        assert_eq!(table.tier_of("r"), Some(CacheTier::FullTextOnly));
        assert!(table.rule_ids(CacheTier::FullText).is_empty());
        assert_eq!(table.context_size(CacheTier::FullTextOnly), -2);
    }

    #[test]
    fn test_unbounded_rule_under_mixed_config_is_tier_2() {
        // -1 rule under -2 config and -2 rule under -1 config both fall
        // through to tier 2
        let table = classify(&demands(&[("a", -1)]), &[], -2);
        assert_eq!(table.tier_of("a"), Some(CacheTier::FullText));

        let table = classify(&demands(&[("b", -2)]), &[], -1);
        assert_eq!(table.tier_of("b"), Some(CacheTier::FullText));
        assert_eq!(table.context_size(CacheTier::FullText), -1);
    }

    #[test]
    fn test_mixed_rule_set_partition() {
        // {R1: min=0, R2: min=-1, R3: min=3}, lookaround = 2
        let table = classify(&demands(&[("R1", 0), ("R2", -1), ("R3", 3)]), &[], 2);

        assert_eq!(table.tier_of("R1"), Some(CacheTier::SingleParagraph));
        assert_eq!(table.tier_of("R2"), Some(CacheTier::ContextWindow));
        assert_eq!(table.tier_of("R3"), Some(CacheTier::ContextWindow));
        assert_eq!(table.context_size(CacheTier::ContextWindow), 3);
        assert!(table.rule_ids(CacheTier::FullText).is_empty());
        assert!(table.rule_ids(CacheTier::FullTextOnly).is_empty());
    }

    #[test]
    fn test_every_rule_lands_in_exactly_one_tier() {
        let rules = demands(&[("a", 0), ("b", 2), ("c", -1), ("d", -2), ("e", 9)]);
        let table = classify(&rules, &[], 3);

        assert_eq!(table.rule_count(), rules.len());
        for rule in &rules {
            let mut homes = 0;
            for tier in CacheTier::ALL {
                if table.slot(tier).contains(&rule.id) {
                    homes += 1;
                }
            }
            assert_eq!(homes, 1, "rule {} must live in exactly one tier", rule.id);
        }
    }

    #[test]
    fn test_disabled_rules_are_excluded() {
        let rules = demands(&[("keep", 0), ("drop", 0)]);
        let table = classify(&rules, &["drop".to_string()], 2);

        assert_eq!(table.tier_of("keep"), Some(CacheTier::SingleParagraph));
        assert_eq!(table.tier_of("drop"), None);
        assert_eq!(table.rule_count(), 1);
    }

    #[test]
    fn test_malformed_demand_takes_closest_branch() {
        // -5 is outside the documented set; under a bounded window it folds
        // into tier 1, under a negative window it falls through to tier 2
        let table = classify(&demands(&[("weird", -5)]), &[], 3);
        assert_eq!(table.tier_of("weird"), Some(CacheTier::ContextWindow));
        assert_eq!(table.context_size(CacheTier::ContextWindow), 3);

        let table = classify(&demands(&[("weird", -5)]), &[], -1);
        assert_eq!(table.tier_of("weird"), Some(CacheTier::FullText));
    }

    #[test]
    fn test_window_grows_monotonically() {
        let table = classify(&demands(&[("a", 2), ("b", 6), ("c", 4)]), &[], 3);
        assert_eq!(table.context_size(CacheTier::ContextWindow), 6);
    }
}
