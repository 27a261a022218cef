//! Tuning options for bulk removal.

use serde::Deserialize;
use tracing::warn;

use crate::error::{ExtensionError, ExtensionResult};

/// Removal sets at or below this size are removed value by value without
/// building a lookup set.
pub const DEFAULT_SMALL_SET_THRESHOLD: usize = 32;

/// Upper bound accepted for the small-set threshold.
pub const MAX_SMALL_SET_THRESHOLD: usize = 1024;

/// Options controlling how [`BulkRemover`](crate::collections::BulkRemover)
/// picks its strategy. None of them change the result of a removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RemovalOptions {
    /// Largest sized removal sequence that is iterated directly.
    pub small_set_threshold: usize,
}

impl Default for RemovalOptions {
    fn default() -> Self {
        Self {
            small_set_threshold: DEFAULT_SMALL_SET_THRESHOLD,
        }
    }
}

impl RemovalOptions {
    /// Creates options with the given small-set threshold.
    pub fn with_small_set_threshold(small_set_threshold: usize) -> ExtensionResult<Self> {
        let options = Self { small_set_threshold };
        options.validate()?;
        Ok(options)
    }

    /// Parses and validates options from a TOML document.
    ///
    /// Missing keys take their defaults; unknown keys are rejected.
    pub fn from_toml_str(input: &str) -> ExtensionResult<Self> {
        let options: Self = toml::from_str(input)?;
        options.validate()?;
        Ok(options)
    }

    /// Checks that every option is within range.
    pub fn validate(&self) -> ExtensionResult<()> {
        if self.small_set_threshold > MAX_SMALL_SET_THRESHOLD {
            warn!(
                target: "collections",
                small_set_threshold = self.small_set_threshold,
                "rejecting removal options"
            );
            return Err(ExtensionError::invalid_config(format!(
                "small_set_threshold {} exceeds maximum {}",
                self.small_set_threshold, MAX_SMALL_SET_THRESHOLD
            )));
        }
        Ok(())
    }
}
