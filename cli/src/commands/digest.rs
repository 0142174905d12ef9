//! Cache-Digest Command
//!
//! Prints the Keccak-256 digest of the cache byte image plus the setup
//! residue, which is enough to compare independently built caches.

use super::GeometryArgs;
use anyhow::Result;

pub fn cache_digest(geometry: &GeometryArgs) -> Result<()> {
    let evaluator = geometry.evaluator()?;

    println!("cache digest: {}", hex::encode(evaluator.cache_digest()));
    println!("seed residue: {}", evaluator.seed_residue());
    Ok(())
}
