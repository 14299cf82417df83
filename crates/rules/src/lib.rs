//! Text-level rules for the prose checker.
//!
//! A text-level rule is an analysis rule whose match decision may depend on
//! paragraphs beyond the one currently edited. Each rule declares its
//! paragraph demand through
//! [`TextRule::min_to_check_paragraphs`] and produces
//! [`CheckSpan`](prose_types::CheckSpan)s over the window a check pass hands
//! it.

mod context;
mod registry;
mod rules;
mod traits;

pub use context::CheckContext;
pub use registry::{all_rule_ids, text_rules};
pub use rules::{
    InconsistentQuotesRuleImpl, OverusedWordRuleImpl, ParagraphStartRepetitionRuleImpl,
    RepeatedWordRuleImpl,
};
pub use traits::TextRule;

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use prose_rules::prelude::*;
/// ```
pub mod prelude {
    pub use crate::context::CheckContext;
    pub use crate::registry::text_rules;
    pub use crate::traits::TextRule;
}
