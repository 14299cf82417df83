use crate::{ConfigError, Result};
use prose_types::WHOLE_DOCUMENT;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Checker configuration.
///
/// `num_paras_to_check` follows the same signed contract as rule paragraph
/// demands: a non-negative value is the look-around window in paragraphs,
/// `-1` means variable whole-document checking, `-2` means
/// whole-document-only checking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckerConfig {
    /// Number of paragraphs to re-check around an edit
    pub num_paras_to_check: i32,
    /// Rule ids disabled by the user
    pub disabled_rules: Vec<String>,
    /// Per-rule option tables, keyed by rule id
    pub rule_options: HashMap<String, toml::Value>,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            num_paras_to_check: Self::DEFAULT_LOOKAROUND,
            disabled_rules: Vec::new(),
            rule_options: HashMap::new(),
        }
    }
}

impl CheckerConfig {
    /// Default look-around window, in paragraphs
    pub const DEFAULT_LOOKAROUND: i32 = 5;

    /// Returns true if configuration requests whole-document-only checking
    #[must_use]
    pub const fn is_whole_document_only(&self) -> bool {
        self.num_paras_to_check == WHOLE_DOCUMENT
    }

    /// Returns true if the user disabled the given rule
    #[must_use]
    pub fn is_rule_disabled(&self, rule_id: &str) -> bool {
        self.disabled_rules.iter().any(|id| id == rule_id)
    }

    /// Options for a rule, converted to the JSON value rules consume.
    ///
    /// Returns `None` when the rule has no options table or the table does
    /// not convert (rules then fall back to their defaults).
    #[must_use]
    pub fn options_for(&self, rule_id: &str) -> Option<serde_json::Value> {
        self.rule_options
            .get(rule_id)
            .and_then(|value| serde_json::to_value(value).ok())
    }

    /// Validate the model's contract.
    ///
    /// The only malformed value is a look-around below the `-2` sentinel;
    /// everything else is absorbed by classification policy downstream.
    pub fn validate(&self) -> Result<()> {
        if self.num_paras_to_check < WHOLE_DOCUMENT {
            return Err(ConfigError::Invalid {
                message: format!(
                    "num_paras_to_check must be >= -2, got {}",
                    self.num_paras_to_check
                ),
            });
        }
        Ok(())
    }
}
