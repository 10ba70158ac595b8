//! Few-shot exemplar sampling and prompt assembly for nl2sql parsing.
//!
//! This crate builds the textual prompt handed to the LLM that translates a
//! natural-language question into a structured query. Two independent
//! procedures cooperate per parsing request:
//!
//! 1. **Exemplar Sampler** — recalls a ranked pool of prior
//!    question/query exemplars, then draws one independently shuffled
//!    subset per self-consistency inference round.
//! 2. **Prompt Assembler** — deterministically renders the schema
//!    descriptor and the augmented question (entity links, current date,
//!    business-term glossary, prior context).
//!
//! Data flows one way: request → sampled exemplar sets, and request fields
//! → rendered prompt parts. The two procedures share no mutable state and
//! may run independently on separate tasks.
//!
//! LLM invocation, exemplar retrieval/ranking, and token budgeting are the
//! caller's concern.

pub mod assembler;
pub mod phrases;
pub mod sampler;

pub use assembler::{PromptAssembler, PromptParts};
pub use phrases::PhrasePack;
pub use sampler::{
    ExemplarSampler, SamplerSettings, Shuffle, ThreadRngShuffle, PARAM_EXEMPLAR_RECALL_WIDTH,
    PARAM_FEW_SHOT_SHOWN_WIDTH, PARAM_SELF_CONSISTENCY_ROUND_COUNT,
};
