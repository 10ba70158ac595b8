//! ExemplarRetriever trait — the abstraction over the exemplar recall engine.
//!
//! The retrieval engine ranks prior question/query pairs by its own
//! relevance criterion; that criterion is opaque here. This crate only
//! reorders and truncates the collections it returns.

use std::collections::HashMap;

use crate::error::RetrievalError;

/// A few-shot exemplar: an opaque mapping from string keys to string values
/// (typically a prior question and its resolved query). Supplied in full by
/// the retrieval collaborator; never inspected key-by-key in this library.
pub type Exemplar = HashMap<String, String>;

/// The exemplar recall engine consumed by the sampler.
///
/// `Send + Sync` is required so a single collaborator instance can sit
/// behind an `Arc` and serve concurrent requests; implementations without
/// their own thread-safety guarantee must not be shared that way.
pub trait ExemplarRetriever: Send + Sync {
    /// Return up to `count` exemplars relevant to `query_text`, in the
    /// engine's ranking order. May return fewer than `count`.
    fn recall(&self, query_text: &str, count: usize) -> Result<Vec<Exemplar>, RetrievalError>;
}
