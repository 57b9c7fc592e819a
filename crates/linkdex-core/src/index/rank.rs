use std::cmp::Ordering;

use crate::catalog::natural_cmp;
use crate::models::SearchHit;

/// Always positive, and larger for rarer tokens.
pub(super) fn idf(indexed_docs: usize, doc_freq: usize) -> f32 {
    let n = usize_to_f32(indexed_docs);
    let df = usize_to_f32(doc_freq);
    ((n - df + 0.5) / (df + 0.5)).max(0.0).ln_1p()
}

/// Weight applied when a query token only prefixes the indexed token.
pub(super) fn expansion_factor(query_token: &str, indexed_token: &str) -> f32 {
    let query_len = query_token.chars().count();
    let indexed_len = indexed_token.chars().count().max(1);
    usize_to_f32(query_len) / usize_to_f32(indexed_len)
}

/// Document frequency used for a completion of a query token. A completion
/// never counts as rarer than the exact token it extends.
pub(super) fn completion_doc_freq(exact_df: usize, completion_df: usize) -> usize {
    exact_df.max(completion_df)
}

pub(super) fn hit_ordering(a: &SearchHit, b: &SearchHit) -> Ordering {
    b.score
        .partial_cmp(&a.score)
        .unwrap_or(Ordering::Equal)
        .then_with(|| natural_cmp(&a.key, &b.key))
        .then_with(|| a.position.cmp(&b.position))
}

#[allow(
    clippy::cast_precision_loss,
    reason = "collection sizes are far below f32 integer precision"
)]
const fn usize_to_f32(value: usize) -> f32 {
    value as f32
}
