//! CLI Commands
//!
//! All hashimoto CLI commands organized as separate modules.

mod digest;
mod hash;
mod scan;

use anyhow::{Context, Result};
use clap::Args;
use hashimoto::{Evaluator, Params};

pub use digest::cache_digest;
pub use hash::hash_once;
pub use scan::scan_nonces;

// =============================================================================
// SHARED GEOMETRY FLAGS
// =============================================================================

/// Evaluator geometry, shared by every subcommand. The defaults give a
/// demo-sized instance that sets up in well under a second.
#[derive(Args)]
pub struct GeometryArgs {
    /// Cache seed as hex (any word-aligned length)
    #[arg(long, default_value = "00000000000000000000000000000000")]
    pub seed: String,

    /// Cache footprint in bytes (multiple of 64)
    #[arg(long, default_value_t = 1 << 20)]
    pub cache_size: usize,

    /// RandMemoHash passes over the cache
    #[arg(long, default_value_t = 3)]
    pub cache_rounds: usize,

    /// Virtual DAG footprint in bytes (multiple of mix-size, power-of-two pages)
    #[arg(long, default_value_t = 1 << 24)]
    pub dag_size: usize,

    /// Parent lookups per derived DAG node
    #[arg(long, default_value_t = 64)]
    pub dag_parents: usize,

    /// Working mix width in bytes (multiple of 64)
    #[arg(long, default_value_t = 128)]
    pub mix_size: usize,

    /// Outer mix rounds per evaluation
    #[arg(long, default_value_t = 64)]
    pub mix_parents: usize,
}

impl GeometryArgs {
    fn params(&self) -> Params {
        Params {
            cache_size: self.cache_size,
            cache_rounds: self.cache_rounds,
            dag_size: self.dag_size,
            dag_parents: self.dag_parents,
            mix_size: self.mix_size,
            mix_parents: self.mix_parents,
        }
    }

    /// Build the evaluator these flags describe.
    pub fn evaluator(&self) -> Result<Evaluator> {
        let seed = decode_hex(&self.seed).context("invalid --seed")?;
        Evaluator::new(self.params(), &seed).context("evaluator setup failed")
    }
}

// =============================================================================
// HEX HELPERS
// =============================================================================

pub(crate) fn decode_hex(s: &str) -> Result<Vec<u8>> {
    Ok(hex::decode(s.trim_start_matches("0x"))?)
}

pub(crate) fn parse_header(s: &str) -> Result<[u8; 32]> {
    let bytes = decode_hex(s)?;
    bytes
        .as_slice()
        .try_into()
        .context("header must be exactly 32 bytes of hex")
}

pub(crate) fn parse_nonce(s: &str) -> Result<[u8; 8]> {
    let bytes = decode_hex(s)?;
    bytes
        .as_slice()
        .try_into()
        .context("nonce must be exactly 8 bytes of hex")
}
