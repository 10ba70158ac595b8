//! Exemplar sampling for self-consistency inference.
//!
//! One parsing request fans out into several independent LLM inference
//! attempts ("rounds"). Each round sees its own randomized few-shot
//! exemplar set, so the downstream voting step reconciles answers produced
//! under genuinely different orderings.
//!
//! # Flow
//!
//! 1. Read the three tuning parameters fresh from the injected
//!    `ParameterSource` (never cached across calls)
//! 2. Recall one candidate pool of up to *recall width* exemplars
//! 3. Per round: shuffle a copy of the pool, keep the first
//!    *shown width* entries
//!
//! The pool is fetched exactly once per call and reused across rounds, so
//! every round samples from the same retrieval result. Rounds are not
//! de-duplicated against each other: the same exemplar may appear in
//! several rounds, at different positions.

use std::sync::Arc;

use rand::seq::SliceRandom;
use tracing::debug;

use nl2sql_core::error::ConfigError;
use nl2sql_core::params::ParameterSource;
use nl2sql_core::retrieve::{Exemplar, ExemplarRetriever};

/// Parameter name: how many candidates to recall from the retrieval engine.
pub const PARAM_EXEMPLAR_RECALL_WIDTH: &str = "exemplar-recall-width";

/// Parameter name: how many exemplars each rendered set shows.
pub const PARAM_FEW_SHOT_SHOWN_WIDTH: &str = "few-shot-shown-width";

/// Parameter name: how many independently-sampled sets to produce.
pub const PARAM_SELF_CONSISTENCY_ROUND_COUNT: &str = "self-consistency-round-count";

/// The three tuning parameters, parsed and cross-checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplerSettings {
    /// Maximum candidate pool size requested from the retriever.
    pub recall_width: usize,
    /// Exemplars shown per round (capped by actual pool size).
    pub shown_width: usize,
    /// Number of self-consistency rounds.
    pub round_count: usize,
}

impl SamplerSettings {
    /// Read and validate all three parameters from `source`.
    ///
    /// Absent or non-integer values fail fast; nothing is retrieved on a
    /// configuration error.
    pub fn load(source: &dyn ParameterSource) -> std::result::Result<Self, ConfigError> {
        let recall_width = non_negative(source, PARAM_EXEMPLAR_RECALL_WIDTH)?;
        let shown_width = non_negative(source, PARAM_FEW_SHOT_SHOWN_WIDTH)?;
        let round_count = non_negative(source, PARAM_SELF_CONSISTENCY_ROUND_COUNT)?;

        if shown_width > recall_width {
            return Err(ConfigError::ShownWidthExceedsRecall {
                shown: shown_width,
                recall: recall_width,
            });
        }

        Ok(Self {
            recall_width,
            shown_width,
            round_count,
        })
    }
}

fn non_negative(
    source: &dyn ParameterSource,
    name: &str,
) -> std::result::Result<usize, ConfigError> {
    let raw = source
        .parameter(name)?
        .ok_or_else(|| ConfigError::MissingParameter(name.into()))?;
    raw.trim()
        .parse::<usize>()
        .map_err(|_| ConfigError::InvalidParameter {
            name: name.into(),
            value: raw,
        })
}

/// A source of uniformly-random permutations.
///
/// The production implementation draws from the process RNG; tests inject
/// a deterministic one so sampled sets are reproducible.
pub trait Shuffle: Send + Sync {
    /// Return a fresh permutation of `pool`. The pool itself is untouched.
    fn permuted(&self, pool: &[Exemplar]) -> Vec<Exemplar>;
}

/// `Shuffle` backed by the process-level RNG. Deliberately unseedable.
#[derive(Debug, Default)]
pub struct ThreadRngShuffle;

impl Shuffle for ThreadRngShuffle {
    fn permuted(&self, pool: &[Exemplar]) -> Vec<Exemplar> {
        let mut out = pool.to_vec();
        out.shuffle(&mut rand::rng());
        out
    }
}

/// Draws randomized few-shot exemplar sets for self-consistency rounds.
pub struct ExemplarSampler {
    retriever: Arc<dyn ExemplarRetriever>,
    parameters: Arc<dyn ParameterSource>,
    shuffle: Box<dyn Shuffle>,
}

impl ExemplarSampler {
    /// Create a sampler over the given collaborators, shuffling with the
    /// process RNG.
    pub fn new(retriever: Arc<dyn ExemplarRetriever>, parameters: Arc<dyn ParameterSource>) -> Self {
        Self {
            retriever,
            parameters,
            shuffle: Box::new(ThreadRngShuffle),
        }
    }

    /// Replace the shuffle source (tests use a deterministic one).
    pub fn with_shuffle(mut self, shuffle: Box<dyn Shuffle>) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Produce one randomized exemplar set per self-consistency round.
    ///
    /// Returns *round count* sets, each of size
    /// `min(shown width, pool size)`. Round order is significant — the
    /// caller maps round *i* to inference attempt *i* — while the order
    /// inside a round is just the shuffled order. A pool smaller than the
    /// shown width is not an error: each round then carries the whole
    /// shuffled pool.
    pub fn sample(&self, query_text: &str) -> nl2sql_core::Result<Vec<Vec<Exemplar>>> {
        let settings = SamplerSettings::load(self.parameters.as_ref())?;

        let pool = self
            .retriever
            .recall(query_text, settings.recall_width)?;

        debug!(
            pool = pool.len(),
            shown = settings.shown_width,
            rounds = settings.round_count,
            "sampling few-shot exemplars"
        );

        let shown = settings.shown_width.min(pool.len());
        let mut rounds = Vec::with_capacity(settings.round_count);
        for _ in 0..settings.round_count {
            let mut permuted = self.shuffle.permuted(&pool);
            permuted.truncate(shown);
            rounds.push(permuted);
        }

        Ok(rounds)
    }
}
