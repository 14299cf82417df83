use prose_scheduler::CacheTier;
use prose_types::CheckSpan;
use std::collections::HashMap;

/// Per-tier cached check results.
///
/// Single-paragraph results are cached per paragraph, so an edit leaves the
/// other paragraphs' results valid. The coarser tiers are cached per pass
/// and any covered edit drops them. Configuration or rule-set changes clear
/// everything.
#[derive(Debug, Default)]
pub struct TierCache {
    paragraph: HashMap<usize, Vec<CheckSpan>>,
    window: Option<Vec<CheckSpan>>,
    full_text: Option<Vec<CheckSpan>>,
    full_text_only: Option<Vec<CheckSpan>>,
}

impl TierCache {
    /// Cached single-paragraph result for one paragraph
    #[must_use]
    pub fn paragraph_result(&self, index: usize) -> Option<&[CheckSpan]> {
        self.paragraph.get(&index).map(Vec::as_slice)
    }

    /// Store the single-paragraph result for one paragraph
    pub fn store_paragraph_result(&mut self, index: usize, spans: Vec<CheckSpan>) {
        self.paragraph.insert(index, spans);
    }

    /// Cached pass result for a coarse tier.
    ///
    /// Always `None` for the single-paragraph tier; its results live per
    /// paragraph.
    #[must_use]
    pub fn pass_result(&self, tier: CacheTier) -> Option<&[CheckSpan]> {
        self.pass_slot(tier).map(Vec::as_slice)
    }

    /// Store the pass result for a coarse tier.
    ///
    /// Ignored for the single-paragraph tier.
    pub fn store_pass_result(&mut self, tier: CacheTier, spans: Vec<CheckSpan>) {
        match tier {
            CacheTier::SingleParagraph => {}
            CacheTier::ContextWindow => self.window = Some(spans),
            CacheTier::FullText => self.full_text = Some(spans),
            CacheTier::FullTextOnly => self.full_text_only = Some(spans),
        }
    }

    fn pass_slot(&self, tier: CacheTier) -> Option<&Vec<CheckSpan>> {
        match tier {
            CacheTier::SingleParagraph => None,
            CacheTier::ContextWindow => self.window.as_ref(),
            CacheTier::FullText => self.full_text.as_ref(),
            CacheTier::FullTextOnly => self.full_text_only.as_ref(),
        }
    }

    /// Invalidate everything an edit to the given paragraph can affect:
    /// that paragraph's single-paragraph result and every coarser tier.
    pub fn invalidate_edit(&mut self, paragraph: usize) {
        self.paragraph.remove(&paragraph);
        self.window = None;
        self.full_text = None;
        self.full_text_only = None;

        tracing::debug!(paragraph, "Invalidated cached results for edit");
    }

    /// Drop every cached result
    pub fn clear(&mut self) {
        self.paragraph.clear();
        self.window = None;
        self.full_text = None;
        self.full_text_only = None;
    }
}
