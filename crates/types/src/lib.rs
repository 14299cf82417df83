//! Foundation types for the prose checker.
//!
//! This crate provides shared types used across the prose checking stack.
//! It has zero external dependencies, making it suitable as a foundation layer.
//!
//! # Type Categories
//!
//! - **Span types**: [`CheckSpan`] - a flagged run of text with suggestions
//! - **Severity types**: [`Severity`]
//! - **Document types**: [`Paragraph`]
//! - **Demand constants**: [`SINGLE_PARAGRAPH`], [`CONFIGURED_CONTEXT`],
//!   [`WHOLE_DOCUMENT`]

mod demand;
mod paragraph;
mod severity;
mod span;

pub use demand::{
    needs_configured_context, needs_whole_document, CONFIGURED_CONTEXT, SINGLE_PARAGRAPH,
    WHOLE_DOCUMENT,
};
pub use paragraph::Paragraph;
pub use severity::Severity;
pub use span::CheckSpan;
