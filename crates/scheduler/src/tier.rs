//! Cache tiers and the tier table.

use std::collections::BTreeSet;
use thiserror::Error;

/// Error raised for tier-index contract violations.
///
/// An out-of-range tier index indicates a caller bug that would otherwise
/// silently disable the wrong rules, so it surfaces as an error instead of
/// being clamped.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TierError {
    /// The requested tier index is not one of the four fixed tiers
    #[error("tier index {0} is out of range (valid tiers are 0..=3)")]
    InvalidIndex(usize),
}

/// A cache-invalidation granularity bucket.
///
/// Rules in the same tier are re-checked together under the same
/// context-size policy. The four tiers are fixed:
///
/// - [`SingleParagraph`](Self::SingleParagraph) (0): rules that only ever
///   need the current paragraph; context size fixed at 0.
/// - [`ContextWindow`](Self::ContextWindow) (1): bounded-context rules; the
///   context size is the configured look-around window, grown to the largest
///   member demand.
/// - [`FullText`](Self::FullText) (2): whole-document rules with unbounded
///   or variable context; sentinel context size −1.
/// - [`FullTextOnly`](Self::FullTextOnly) (3): whole-document rules under a
///   whole-document-only configuration; sentinel context size −2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheTier {
    /// Tier 0 - single-paragraph-only rules
    SingleParagraph,
    /// Tier 1 - bounded-context rules sharing the look-around window
    ContextWindow,
    /// Tier 2 - full-document rules with unbounded/variable context
    FullText,
    /// Tier 3 - full-document rules under whole-document-only configuration
    FullTextOnly,
}

impl CacheTier {
    /// Number of tiers
    pub const COUNT: usize = 4;

    /// All tiers in index order
    pub const ALL: [Self; Self::COUNT] = [
        Self::SingleParagraph,
        Self::ContextWindow,
        Self::FullText,
        Self::FullTextOnly,
    ];

    /// Fixed index of this tier
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::SingleParagraph => 0,
            Self::ContextWindow => 1,
            Self::FullText => 2,
            Self::FullTextOnly => 3,
        }
    }

    /// Look up a tier by its index.
    ///
    /// Indices outside `0..=3` are a programming error on the caller's side
    /// and fail loudly rather than being clamped.
    pub fn from_index(index: usize) -> Result<Self, TierError> {
        match index {
            0 => Ok(Self::SingleParagraph),
            1 => Ok(Self::ContextWindow),
            2 => Ok(Self::FullText),
            3 => Ok(Self::FullTextOnly),
            _ => Err(TierError::InvalidIndex(index)),
        }
    }

    /// Get the tier name as a string
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SingleParagraph => "single-paragraph",
            Self::ContextWindow => "context-window",
            Self::FullText => "full-text",
            Self::FullTextOnly => "full-text-only",
        }
    }
}

impl std::fmt::Display for CacheTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One tier's entry in the [`TierTable`]: the context size to use and the
/// ids of the rules that belong to the tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierSlot {
    pub(crate) context_size: i32,
    pub(crate) rule_ids: BTreeSet<String>,
}

impl TierSlot {
    pub(crate) const fn new(context_size: i32) -> Self {
        Self {
            context_size,
            rule_ids: BTreeSet::new(),
        }
    }

    /// Context size for this tier: a paragraph count for tiers 0 and 1, the
    /// sentinels −1/−2 for the whole-document tiers.
    #[must_use]
    pub const fn context_size(&self) -> i32 {
        self.context_size
    }

    /// Ids of the rules assigned to this tier
    #[must_use]
    pub const fn rule_ids(&self) -> &BTreeSet<String> {
        &self.rule_ids
    }

    /// Returns true if the given rule belongs to this tier
    #[must_use]
    pub fn contains(&self, rule_id: &str) -> bool {
        self.rule_ids.contains(rule_id)
    }

    /// Number of rules in this tier
    #[must_use]
    pub fn len(&self) -> usize {
        self.rule_ids.len()
    }

    /// Returns true if no rules are assigned to this tier
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rule_ids.is_empty()
    }
}

/// The tier table: exactly four `(context size, rule-id set)` slots indexed
/// by [`CacheTier`].
///
/// Built once per configuration/rule-set combination by
/// [`classify`](crate::classify) and immutable thereafter; when rules or
/// configuration change it is rebuilt from scratch, never mutated
/// incrementally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierTable {
    slots: [TierSlot; CacheTier::COUNT],
}

impl TierTable {
    /// An empty table with the fixed per-tier context sizes: 0 for the
    /// paragraph tiers, the −1/−2 sentinels for the whole-document tiers.
    pub(crate) const fn empty() -> Self {
        Self {
            slots: [
                TierSlot::new(0),
                TierSlot::new(0),
                TierSlot::new(-1),
                TierSlot::new(-2),
            ],
        }
    }

    /// The slot for a tier
    #[must_use]
    pub const fn slot(&self, tier: CacheTier) -> &TierSlot {
        &self.slots[tier.index()]
    }

    pub(crate) fn slot_mut(&mut self, tier: CacheTier) -> &mut TierSlot {
        &mut self.slots[tier.index()]
    }

    /// Context size of a tier
    #[must_use]
    pub const fn context_size(&self, tier: CacheTier) -> i32 {
        self.slot(tier).context_size()
    }

    /// Rule ids assigned to a tier
    #[must_use]
    pub const fn rule_ids(&self, tier: CacheTier) -> &BTreeSet<String> {
        self.slot(tier).rule_ids()
    }

    /// The tier a rule was assigned to, if any
    #[must_use]
    pub fn tier_of(&self, rule_id: &str) -> Option<CacheTier> {
        CacheTier::ALL
            .into_iter()
            .find(|tier| self.slot(*tier).contains(rule_id))
    }

    /// Iterate over every rule id across all tiers
    pub fn all_rule_ids(&self) -> impl Iterator<Item = &str> {
        self.slots
            .iter()
            .flat_map(|slot| slot.rule_ids.iter().map(String::as_str))
    }

    /// Total number of classified rules
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.slots.iter().map(TierSlot::len).sum()
    }
}
