//! Total order over error spans.

use prose_types::CheckSpan;
use std::cmp::Ordering;

/// Strict weak ordering over spans, used to sort and merge the results of
/// multiple rules into one display-ready sequence.
///
/// Keys, in order:
///
/// 1. ascending start offset - this also settles overlapping spans: the
///    earlier-starting span precedes regardless of length;
/// 2. at equal start, the shorter span precedes the longer;
/// 3. at equal start and length, the span with strictly more suggestions
///    precedes the one with fewer - an actionable finding surfaces before a
///    bare detection.
///
/// Remaining ties (same start, length, and suggestion count, from different
/// rules) compare equal; a stable sort preserves their input order.
/// Zero-length spans compare purely by start offset. Duplicates are not
/// collapsed here - deduplication, if wanted, is the caller's concern.
#[must_use]
pub fn compare_spans(a: &CheckSpan, b: &CheckSpan) -> Ordering {
    a.start
        .cmp(&b.start)
        .then_with(|| a.length.cmp(&b.length))
        .then_with(|| b.suggestions.len().cmp(&a.suggestions.len()))
}

/// Sort a span sequence in place with [`compare_spans`].
///
/// The sort is stable, so exact ties keep their input order and re-sorting
/// an already-sorted sequence is a no-op.
pub fn sort_spans(spans: &mut [CheckSpan]) {
    spans.sort_by(compare_spans);
}

/// Merge per-rule partial results into one ordered sequence.
///
/// Concatenates the batches and stably sorts the whole, so at every leading
/// offset the more specific/more helpful of two overlapping spans comes
/// first.
#[must_use]
pub fn merge_spans(batches: Vec<Vec<CheckSpan>>) -> Vec<CheckSpan> {
    let mut merged: Vec<CheckSpan> = batches.into_iter().flatten().collect();
    sort_spans(&mut merged);
    merged
}
