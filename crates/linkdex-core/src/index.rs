use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::marker::PhantomData;
use std::ops::Bound;

use crate::error::{LinkdexError, QueryError, Result};
use crate::models::{CollectionKind, SearchHit, SkipReason, SkippedDocument};
use crate::text::Analyzer;

mod field;
mod rank;

pub use field::{
    DETAIL_WEIGHT, FieldSpec, IndexSpec, NAME_WEIGHT, keywords_spec, links_spec, people_spec,
};

use self::rank::{completion_doc_freq, expansion_factor, hit_ordering, idf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOptions {
    /// Let a query token also match indexed tokens it is a prefix of.
    pub prefix_expansion: bool,
}

impl Default for IndexOptions {
    fn default() -> Self {
        Self {
            prefix_expansion: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Posting {
    doc: usize,
    weighted_tf: f32,
}

/// Weighted multi-field inverted index over one collection.
///
/// Built once from a document slice and never patched; a changed collection
/// needs a fresh build. Hits carry the document's position in that slice.
pub struct SearchIndex<D> {
    collection: CollectionKind,
    analyzer: Analyzer,
    options: IndexOptions,
    reference_key: fn(&D) -> &str,
    keys: Vec<String>,
    postings: BTreeMap<String, Vec<Posting>>,
    indexed_docs: usize,
    skipped: Vec<SkippedDocument>,
    _docs: PhantomData<fn(&D)>,
}

impl<D> fmt::Debug for SearchIndex<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchIndex")
            .field("collection", &self.collection)
            .field("options", &self.options)
            .field("documents", &self.keys.len())
            .field("indexed_docs", &self.indexed_docs)
            .field("tokens", &self.postings.len())
            .field("skipped", &self.skipped)
            .finish_non_exhaustive()
    }
}

impl<D> SearchIndex<D> {
    pub fn build(
        spec: &IndexSpec<D>,
        docs: &[D],
        analyzer: Analyzer,
        options: IndexOptions,
    ) -> Result<Self> {
        validate_spec(spec)?;

        let mut seen_keys = HashMap::<&str, usize>::with_capacity(docs.len());
        let mut keys = Vec::with_capacity(docs.len());
        let mut postings = BTreeMap::<String, Vec<Posting>>::new();
        let mut skipped = Vec::new();
        let mut indexed_docs = 0usize;

        for (position, doc) in docs.iter().enumerate() {
            let key = (spec.reference_key)(doc);
            if seen_keys.insert(key, position).is_some() {
                return Err(LinkdexError::IndexKeyCollision {
                    collection: spec.collection.to_string(),
                    key: key.to_string(),
                });
            }
            keys.push(key.to_string());

            let mut has_text = false;
            let mut term_weights = BTreeMap::<String, f32>::new();
            for field in &spec.fields {
                let text = (field.extract)(doc);
                if text.trim().is_empty() {
                    continue;
                }
                has_text = true;
                for token in analyzer.analyze(text) {
                    *term_weights.entry(token).or_insert(0.0) += field.weight;
                }
            }

            if term_weights.is_empty() {
                skipped.push(SkippedDocument {
                    key: key.to_string(),
                    position,
                    reason: if has_text {
                        SkipReason::NoIndexableTokens
                    } else {
                        SkipReason::EmptyText
                    },
                });
                continue;
            }

            indexed_docs += 1;
            for (token, weighted_tf) in term_weights {
                postings.entry(token).or_default().push(Posting {
                    doc: position,
                    weighted_tf,
                });
            }
        }

        Ok(Self {
            collection: spec.collection,
            analyzer,
            options,
            reference_key: spec.reference_key,
            keys,
            postings,
            indexed_docs,
            skipped,
            _docs: PhantomData,
        })
    }

    pub fn collection(&self) -> CollectionKind {
        self.collection
    }

    /// Documents the index was built from, skipped ones included.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn indexed_len(&self) -> usize {
        self.indexed_docs
    }

    pub fn skipped(&self) -> &[SkippedDocument] {
        &self.skipped
    }

    pub fn token_count(&self) -> usize {
        self.postings.len()
    }

    /// Ranked hits for `query`, best first.
    ///
    /// A query with no searchable token left after stop-word removal is
    /// `QueryError::EmptyQuery`; it never matches everything.
    pub fn search(&self, query: &str) -> std::result::Result<Vec<SearchHit>, QueryError> {
        let terms = self.query_terms(query)?;

        let mut scores = BTreeMap::<usize, f32>::new();
        for term in &terms {
            let exact_df = self.postings.get(term.as_str()).map_or(0, Vec::len);
            for (token, factor) in self.expansions(term) {
                let Some(postings) = self.postings.get(token) else {
                    continue;
                };
                let doc_freq = completion_doc_freq(exact_df, postings.len());
                let token_idf = idf(self.indexed_docs, doc_freq);
                for posting in postings {
                    *scores.entry(posting.doc).or_insert(0.0) +=
                        posting.weighted_tf * token_idf * factor;
                }
            }
        }

        let mut hits = scores
            .into_iter()
            .filter(|(_, score)| *score > 0.0)
            .map(|(position, score)| SearchHit {
                key: self.keys[position].clone(),
                position,
                score,
            })
            .collect::<Vec<_>>();
        hits.sort_by(hit_ordering);
        Ok(hits)
    }

    /// Joins hits back onto the documents the index was built from, in hit
    /// order. Hits whose key does not match the document at their position
    /// are dropped.
    pub fn resolve<'a>(&self, hits: &[SearchHit], docs: &'a [D]) -> Vec<&'a D> {
        hits.iter()
            .filter_map(|hit| {
                docs.get(hit.position)
                    .filter(|doc| (self.reference_key)(doc) == hit.key)
            })
            .collect()
    }

    pub fn search_docs<'a>(
        &self,
        docs: &'a [D],
        query: &str,
    ) -> std::result::Result<Vec<&'a D>, QueryError> {
        let hits = self.search(query)?;
        Ok(self.resolve(&hits, docs))
    }

    fn query_terms(&self, query: &str) -> std::result::Result<Vec<String>, QueryError> {
        let mut terms = Vec::<String>::new();
        for token in self.analyzer.analyze(query) {
            if !terms.contains(&token) {
                terms.push(token);
            }
        }
        if terms.is_empty() {
            return Err(QueryError::EmptyQuery);
        }
        Ok(terms)
    }

    fn expansions<'a>(&'a self, term: &'a str) -> Vec<(&'a str, f32)> {
        let mut out = vec![(term, 1.0)];
        if !self.options.prefix_expansion {
            return out;
        }
        let longer = self
            .postings
            .range::<str, _>((Bound::Excluded(term), Bound::Unbounded))
            .take_while(|(token, _)| token.starts_with(term))
            .map(|(token, _)| (token.as_str(), expansion_factor(term, token)));
        out.extend(longer);
        out
    }
}

fn validate_spec<D>(spec: &IndexSpec<D>) -> Result<()> {
    if spec.fields.is_empty() {
        return Err(LinkdexError::Validation(format!(
            "{} index needs at least one field",
            spec.collection
        )));
    }
    for field in &spec.fields {
        if !field.weight.is_finite() || field.weight <= 0.0 {
            return Err(LinkdexError::Validation(format!(
                "{} index field {} has invalid weight {}",
                spec.collection, field.name, field.weight
            )));
        }
    }
    Ok(())
}
