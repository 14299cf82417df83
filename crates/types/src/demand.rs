//! Paragraph-demand contract for text-level rules.
//!
//! A rule declares how much surrounding context it needs to produce a valid
//! result. The contract is a signed integer: `0` means the current paragraph
//! alone, a positive `n` means `n` surrounding paragraphs, and two negative
//! sentinels request configuration-sized or whole-document context.

/// The rule only ever needs the single current paragraph.
pub const SINGLE_PARAGRAPH: i32 = 0;

/// The rule needs a bounded context whose size comes from configuration.
pub const CONFIGURED_CONTEXT: i32 = -1;

/// The rule needs the entire document.
pub const WHOLE_DOCUMENT: i32 = -2;

/// Returns true if the demand asks for a configuration-sized context.
#[must_use]
pub const fn needs_configured_context(min_paragraphs: i32) -> bool {
    min_paragraphs == CONFIGURED_CONTEXT
}

/// Returns true if the demand asks for the entire document.
#[must_use]
pub const fn needs_whole_document(min_paragraphs: i32) -> bool {
    min_paragraphs == WHOLE_DOCUMENT
}
