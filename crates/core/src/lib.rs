//! # NL2SQL Core
//!
//! Domain types, collaborator traits, and error definitions for the nl2sql
//! prompt-construction pipeline. This crate has **zero framework
//! dependencies** — it defines the model that the other crates implement
//! against.
//!
//! ## Design Philosophy
//!
//! The two external collaborators — the exemplar retrieval engine and the
//! parameter store — are defined as traits here. Implementations live in
//! their respective crates (or in the host application). This enables:
//! - Swapping implementations via configuration
//! - Easy testing with mock/stub implementations
//! - Clean dependency graph (all crates depend inward on core)

pub mod error;
pub mod params;
pub mod request;
pub mod retrieve;

// Re-export key types at crate root for ergonomics
pub use error::{ConfigError, Error, RequestError, Result, RetrievalError};
pub use params::ParameterSource;
pub use request::{LinkedValue, ParseRequest, ParseSchema, Term};
pub use retrieve::{Exemplar, ExemplarRetriever};
