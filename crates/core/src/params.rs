//! ParameterSource trait — the abstraction over the tuning-parameter store.
//!
//! Tuning parameters are read fresh on every sampler call (never cached),
//! so operators can adjust widths and round counts without restarting the
//! host process. The source is injected explicitly rather than read from
//! ambient global state, keeping callers testable.

use crate::error::ConfigError;

/// A named-parameter store consumed by the sampler.
pub trait ParameterSource: Send + Sync {
    /// Look up a raw parameter value by name. `Ok(None)` means the
    /// parameter is absent; store failures surface as `ConfigError::Source`.
    fn parameter(&self, name: &str) -> Result<Option<String>, ConfigError>;
}
