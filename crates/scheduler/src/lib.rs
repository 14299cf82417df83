//! Incremental re-check scheduling for the prose checker.
//!
//! When a document is edited, the engine must decide, for each registered
//! text-level rule, how much surrounding context it needs re-examined, and it
//! must cache per-rule results at the coarsest tier that remains valid. This
//! crate provides the three pieces of that core:
//!
//! - [`classify`] partitions the active rule set into four cache tiers based
//!   on each rule's paragraph demand and the configured look-around window,
//!   producing a [`TierTable`].
//! - [`activate`] / [`reactivate_all`] drive the enable/disable protocol on a
//!   [`RuleEngine`] so one check pass runs exactly one tier's rules.
//! - [`compare_spans`] / [`sort_spans`] / [`merge_spans`] impose one
//!   deterministic total order over the error spans produced by multiple
//!   rules, so overlapping results merge without ambiguity.
//!
//! Classification is a pure function and span ordering is a stateless
//! comparison; both are safe to call from any thread. Activation mutates
//! shared enable/disable state on the engine, so only one check pass may own
//! it at a time - a caller obligation, enforced structurally here by the
//! `&mut` receiver.

mod activate;
mod classify;
mod order;
mod tier;

pub use activate::{activate, activate_index, reactivate_all, RuleEngine};
pub use classify::{classify, RuleDemand};
pub use order::{compare_spans, merge_spans, sort_spans};
pub use tier::{CacheTier, TierError, TierSlot, TierTable};
