//! Tier activation protocol.

use crate::tier::{CacheTier, TierError, TierTable};

/// Capability object over the shared rule engine's enable/disable state.
///
/// Passing the capability in explicitly (rather than reaching for a global
/// engine handle) keeps activation deterministic to test with a fake engine
/// that records enable/disable calls.
pub trait RuleEngine {
    /// Enable a rule by id
    fn enable_rule(&mut self, rule_id: &str);
    /// Disable a rule by id
    fn disable_rule(&mut self, rule_id: &str);
}

/// Enable exactly the rules belonging to `tier` and disable every rule
/// belonging to any other tier.
///
/// Idempotent: repeated calls with the same arguments converge to the same
/// enabled-set state. The caller owns the single-writer discipline on the
/// engine for the duration of the check pass.
pub fn activate(tier: CacheTier, table: &TierTable, engine: &mut dyn RuleEngine) {
    for candidate in CacheTier::ALL {
        for rule_id in table.rule_ids(candidate) {
            if candidate == tier {
                engine.enable_rule(rule_id);
            } else {
                engine.disable_rule(rule_id);
            }
        }
    }

    tracing::debug!(
        tier = %tier,
        enabled = table.rule_ids(tier).len(),
        disabled = table.rule_count() - table.rule_ids(tier).len(),
        "Activated cache tier"
    );
}

/// [`activate`] addressed by raw tier index.
///
/// An index outside `0..=3` is a contract violation and aborts the
/// operation before any engine state is touched.
pub fn activate_index(
    index: usize,
    table: &TierTable,
    engine: &mut dyn RuleEngine,
) -> Result<(), TierError> {
    let tier = CacheTier::from_index(index)?;
    activate(tier, table, engine);
    Ok(())
}

/// Enable every rule id across all tiers.
///
/// Used when leaving a restricted check pass (e.g. after a whole-document
/// pass) to restore the rule engine to its default fully-enabled state.
/// Idempotent.
pub fn reactivate_all(table: &TierTable, engine: &mut dyn RuleEngine) {
    for tier in CacheTier::ALL {
        for rule_id in table.rule_ids(tier) {
            engine.enable_rule(rule_id);
        }
    }

    tracing::debug!(enabled = table.rule_count(), "Reactivated all rules");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{classify, RuleDemand};
    use std::collections::BTreeSet;

    /// Fake engine that tracks the enabled set and records every call.
    #[derive(Default)]
    struct FakeEngine {
        enabled: BTreeSet<String>,
        calls: Vec<String>,
    }

    impl RuleEngine for FakeEngine {
        fn enable_rule(&mut self, rule_id: &str) {
            self.enabled.insert(rule_id.to_string());
            self.calls.push(format!("enable {rule_id}"));
        }

        fn disable_rule(&mut self, rule_id: &str) {
            self.enabled.remove(rule_id);
            self.calls.push(format!("disable {rule_id}"));
        }
    }

    fn sample_table() -> TierTable {
        classify(
            &[
                RuleDemand::new("para", 0),
                RuleDemand::new("window", 3),
                RuleDemand::new("doc", -2),
            ],
            &[],
            2,
        )
    }

    #[test]
    fn test_activate_enables_only_requested_tier() {
        let table = sample_table();
        let mut engine = FakeEngine::default();

        activate(CacheTier::ContextWindow, &table, &mut engine);

        assert!(engine.enabled.contains("window"));
        assert!(!engine.enabled.contains("para"));
        assert!(!engine.enabled.contains("doc"));
    }

    #[test]
    fn test_activate_is_idempotent() {
        let table = sample_table();
        let mut engine = FakeEngine::default();

        activate(CacheTier::ContextWindow, &table, &mut engine);
        let after_first = engine.enabled.clone();

        activate(CacheTier::ContextWindow, &table, &mut engine);
        assert_eq!(engine.enabled, after_first);
    }

    #[test]
    fn test_activate_switches_tiers() {
        let table = sample_table();
        let mut engine = FakeEngine::default();

        activate(CacheTier::SingleParagraph, &table, &mut engine);
        assert_eq!(engine.enabled, BTreeSet::from(["para".to_string()]));

        activate(CacheTier::FullText, &table, &mut engine);
        assert_eq!(engine.enabled, BTreeSet::from(["doc".to_string()]));
    }

    #[test]
    fn test_reactivate_all_enables_everything() {
        let table = sample_table();
        let mut engine = FakeEngine::default();

        activate(CacheTier::FullText, &table, &mut engine);
        reactivate_all(&table, &mut engine);

        let expected: BTreeSet<String> = table.all_rule_ids().map(str::to_string).collect();
        assert_eq!(engine.enabled, expected);
        assert_eq!(engine.enabled.len(), 3);
    }

    #[test]
    fn test_activate_index_valid() {
        let table = sample_table();
        let mut engine = FakeEngine::default();

        activate_index(1, &table, &mut engine).unwrap();
        assert!(engine.enabled.contains("window"));
    }

    #[test]
    fn test_activate_index_out_of_range_fails_without_touching_engine() {
        let table = sample_table();
        let mut engine = FakeEngine::default();

        let err = activate_index(4, &table, &mut engine).unwrap_err();
        assert_eq!(err, TierError::InvalidIndex(4));
        assert!(engine.calls.is_empty());
    }
}
