use prose_rules::TextRule;
use prose_scheduler::RuleEngine;
use std::collections::BTreeSet;
use std::sync::Arc;

/// The rule set together with the shared enable/disable state.
///
/// This is the concrete [`RuleEngine`] the tier activator drives. A fresh
/// state starts fully enabled, which is also the state
/// [`reactivate_all`](prose_scheduler::reactivate_all) restores after a
/// restricted pass.
pub struct RuleState {
    rules: Vec<Arc<dyn TextRule>>,
    enabled: BTreeSet<String>,
}

impl RuleState {
    /// Create a fully-enabled state over a rule set
    #[must_use]
    pub fn new(rules: Vec<Arc<dyn TextRule>>) -> Self {
        let enabled = rules.iter().map(|rule| rule.id().to_string()).collect();
        Self { rules, enabled }
    }

    /// All rules, enabled or not
    #[must_use]
    pub fn rules(&self) -> &[Arc<dyn TextRule>] {
        &self.rules
    }

    /// Look up a rule by id
    #[must_use]
    pub fn rule_by_id(&self, rule_id: &str) -> Option<&Arc<dyn TextRule>> {
        self.rules.iter().find(|rule| rule.id() == rule_id)
    }

    /// Returns true if the rule is currently enabled
    #[must_use]
    pub fn is_enabled(&self, rule_id: &str) -> bool {
        self.enabled.contains(rule_id)
    }

    /// Ids of the currently enabled rules, in sorted order
    #[must_use]
    pub fn enabled_rule_ids(&self) -> Vec<&str> {
        self.enabled.iter().map(String::as_str).collect()
    }
}

impl RuleEngine for RuleState {
    fn enable_rule(&mut self, rule_id: &str) {
        self.enabled.insert(rule_id.to_string());
    }

    fn disable_rule(&mut self, rule_id: &str) {
        self.enabled.remove(rule_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prose_rules::text_rules;

    #[test]
    fn test_fresh_state_is_fully_enabled() {
        let state = RuleState::new(text_rules().to_vec());
        for rule in state.rules() {
            assert!(state.is_enabled(rule.id()));
        }
    }

    #[test]
    fn test_enable_disable_round_trip() {
        let mut state = RuleState::new(text_rules().to_vec());
        state.disable_rule("repeated_word");
        assert!(!state.is_enabled("repeated_word"));

        state.enable_rule("repeated_word");
        assert!(state.is_enabled("repeated_word"));
    }

    #[test]
    fn test_rule_by_id() {
        let state = RuleState::new(text_rules().to_vec());
        assert!(state.rule_by_id("repeated_word").is_some());
        assert!(state.rule_by_id("no_such_rule").is_none());
    }
}
