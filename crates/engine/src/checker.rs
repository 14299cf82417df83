use crate::cache::TierCache;
use crate::document::Document;
use crate::state::RuleState;
use prose_config::CheckerConfig;
use prose_rules::{text_rules, CheckContext, TextRule};
use prose_scheduler::{
    activate, classify, merge_spans, reactivate_all, CacheTier, RuleDemand, TierTable,
};
use prose_types::{CheckSpan, Paragraph};
use std::sync::Arc;

/// The check-pass driver.
///
/// Owns the rule state, the tier table built from the current
/// configuration/rule-set combination, and the per-tier result cache. A
/// check runs the four tiers as consecutive passes: each pass activates one
/// tier on the rule state, runs exactly that tier's rules over the tier's
/// context window, and caches the result; when all passes are done the rule
/// state is restored to fully enabled and the collected spans are merged
/// into one ordered sequence.
///
/// The driver owns activation for the duration of a check (`&mut self`),
/// which is the single-writer discipline the activator requires.
pub struct Checker {
    config: CheckerConfig,
    state: RuleState,
    table: TierTable,
    cache: TierCache,
}

impl Checker {
    /// Checker over the registry's rules
    #[must_use]
    pub fn new(config: CheckerConfig) -> Self {
        Self::with_rules(text_rules().to_vec(), config)
    }

    /// Checker over an explicit rule set
    #[must_use]
    pub fn with_rules(rules: Vec<Arc<dyn TextRule>>, config: CheckerConfig) -> Self {
        let state = RuleState::new(rules);
        let table = build_table(&state, &config);
        Self {
            config,
            state,
            table,
            cache: TierCache::default(),
        }
    }

    /// The active configuration
    #[must_use]
    pub const fn config(&self) -> &CheckerConfig {
        &self.config
    }

    /// The tier table for the current configuration/rule-set combination
    #[must_use]
    pub const fn table(&self) -> &TierTable {
        &self.table
    }

    /// The rule state (enabled/disabled ids)
    #[must_use]
    pub const fn state(&self) -> &RuleState {
        &self.state
    }

    /// Replace the configuration.
    ///
    /// The tier table is rebuilt from scratch and every cached result is
    /// dropped.
    pub fn set_config(&mut self, config: CheckerConfig) {
        self.config = config;
        self.table = build_table(&self.state, &self.config);
        self.cache.clear();
    }

    /// Tell the checker one paragraph was edited, invalidating the cached
    /// results its context covers.
    pub fn notify_edit(&mut self, paragraph: usize) {
        self.cache.invalidate_edit(paragraph);
    }

    /// Check the whole document: all four tiers, merged.
    pub fn check_document(&mut self, doc: &Document) -> Vec<CheckSpan> {
        self.check_at(doc, None)
    }

    /// Re-check after an edit to one paragraph.
    ///
    /// Cached results that the edit cannot affect are served as-is; the
    /// bounded tier re-runs over the configured window around the edit.
    pub fn check_edited(&mut self, doc: &Document, edited: usize) -> Vec<CheckSpan> {
        self.notify_edit(edited);
        self.check_at(doc, Some(edited))
    }

    fn check_at(&mut self, doc: &Document, focus: Option<usize>) -> Vec<CheckSpan> {
        let mut batches = Vec::with_capacity(CacheTier::COUNT);
        for tier in CacheTier::ALL {
            batches.push(self.run_pass(doc, tier, focus));
        }

        // Leaving the restricted passes: restore the default fully-enabled
        // engine state.
        reactivate_all(&self.table, &mut self.state);

        merge_spans(batches)
    }

    /// One check pass: select one tier, run its rules over its context.
    fn run_pass(&mut self, doc: &Document, tier: CacheTier, focus: Option<usize>) -> Vec<CheckSpan> {
        if self.table.slot(tier).is_empty() {
            return Vec::new();
        }

        if tier == CacheTier::SingleParagraph {
            return self.run_paragraph_pass(doc);
        }

        if let Some(cached) = self.cache.pass_result(tier) {
            tracing::debug!(%tier, "Serving cached pass result");
            return cached.to_vec();
        }

        activate(tier, &self.table, &mut self.state);

        let window: &[Paragraph] = match (tier, focus) {
            (CacheTier::ContextWindow, Some(edited)) => {
                let radius = usize::try_from(self.table.context_size(tier)).unwrap_or(0);
                doc.window(edited, radius)
            }
            _ => doc.paragraphs(),
        };

        let spans = self.run_rules_for_tier(tier, window);
        self.cache.store_pass_result(tier, spans.clone());
        spans
    }

    /// The single-paragraph pass, cached per paragraph.
    fn run_paragraph_pass(&mut self, doc: &Document) -> Vec<CheckSpan> {
        activate(CacheTier::SingleParagraph, &self.table, &mut self.state);

        let mut spans = Vec::new();
        for (index, para) in doc.paragraphs().iter().enumerate() {
            if let Some(cached) = self.cache.paragraph_result(index) {
                spans.extend(cached.iter().cloned());
                continue;
            }

            let result =
                self.run_rules_for_tier(CacheTier::SingleParagraph, std::slice::from_ref(para));
            self.cache.store_paragraph_result(index, result.clone());
            spans.extend(result);
        }
        spans
    }

    fn run_rules_for_tier(&self, tier: CacheTier, window: &[Paragraph]) -> Vec<CheckSpan> {
        let ctx = CheckContext::new(window);
        let mut spans = Vec::new();

        for rule_id in self.table.rule_ids(tier) {
            if !self.state.is_enabled(rule_id) {
                continue;
            }
            let Some(rule) = self.state.rule_by_id(rule_id) else {
                continue;
            };
            let options = self.config.options_for(rule_id);
            spans.extend(rule.check(&ctx, options.as_ref()));
        }

        tracing::debug!(
            %tier,
            paragraphs = window.len(),
            spans = spans.len(),
            "Completed check pass"
        );
        spans
    }
}

fn build_table(state: &RuleState, config: &CheckerConfig) -> TierTable {
    let demands: Vec<RuleDemand> = state
        .rules()
        .iter()
        .map(|rule| RuleDemand::new(rule.id(), rule.min_to_check_paragraphs()))
        .collect();
    classify(&demands, &config.disabled_rules, config.num_paras_to_check)
}
