//! Evaluator Configuration
//!
//! All sizes are in bytes. A `Params` value is validated once at setup and
//! immutable afterwards; every derived count divides exactly once validation
//! has passed, so the hot loops index without further checks.

use crate::constants::{NODE_BYTES, NODE_WORDS, WORD_BYTES};
use crate::types::HashimotoError;

/// Geometry of one evaluator instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Params {
    /// Total cache footprint in bytes; a multiple of 64.
    pub cache_size: usize,
    /// RandMemoHash passes over the cache; 0 keeps the raw sequential fill.
    pub cache_rounds: usize,
    /// Virtual DAG footprint in bytes; never allocated.
    pub dag_size: usize,
    /// FNV parent lookups per derived DAG node.
    pub dag_parents: usize,
    /// Working mix width in bytes; a multiple of 64.
    pub mix_size: usize,
    /// Outer mix rounds per evaluation.
    pub mix_parents: usize,
}

impl Params {
    /// Tiny geometry for conformance tests and examples; a full evaluation
    /// completes in microseconds.
    #[must_use]
    pub const fn for_testing() -> Self {
        Self {
            cache_size: 1024,
            cache_rounds: 2,
            dag_size: 2048,
            dag_parents: 4,
            mix_size: 128,
            mix_parents: 3,
        }
    }

    /// Check the geometry constraints.
    ///
    /// # Errors
    /// Returns `InvalidParams` naming the violated constraint.
    pub fn validate(&self) -> Result<(), HashimotoError> {
        if self.cache_size == 0 || self.cache_size % NODE_BYTES != 0 {
            return Err(HashimotoError::InvalidParams {
                reason: "cache_size must be a positive multiple of 64",
            });
        }
        if self.mix_size == 0 || self.mix_size % NODE_BYTES != 0 {
            return Err(HashimotoError::InvalidParams {
                reason: "mix_size must be a positive multiple of 64",
            });
        }
        if self.dag_size == 0 || self.dag_size % self.mix_size != 0 {
            return Err(HashimotoError::InvalidParams {
                reason: "dag_size must be a positive multiple of mix_size",
            });
        }
        // Page selection is an AND mask, so the page count must be 2^k.
        if !self.dag_page_count().is_power_of_two() {
            return Err(HashimotoError::InvalidParams {
                reason: "dag_size / mix_size must be a power of two",
            });
        }
        Ok(())
    }

    /// Number of 64-byte nodes in the cache.
    #[inline]
    #[must_use]
    pub const fn cache_node_count(&self) -> usize {
        self.cache_size / NODE_BYTES
    }

    /// Number of 32-bit words in the cache.
    #[inline]
    #[must_use]
    pub const fn cache_word_count(&self) -> usize {
        self.cache_size / WORD_BYTES
    }

    /// Words in the working mix region.
    #[inline]
    #[must_use]
    pub const fn mix_word_count(&self) -> usize {
        self.mix_size / WORD_BYTES
    }

    /// Nodes in the working mix region.
    #[inline]
    #[must_use]
    pub const fn mix_node_count(&self) -> usize {
        self.mix_word_count() / NODE_WORDS
    }

    /// `mix_size`-wide pages in the virtual DAG; always a power of two.
    #[inline]
    #[must_use]
    pub const fn dag_page_count(&self) -> usize {
        self.dag_size / self.mix_size
    }

    /// Nodes in the virtual DAG.
    #[inline]
    #[must_use]
    pub const fn dag_node_count(&self) -> usize {
        self.dag_size / NODE_BYTES
    }
}
