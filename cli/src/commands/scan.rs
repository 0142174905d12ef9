//! Scan Command
//!
//! Hashes a contiguous nonce range against one shared cache, parallelized
//! over nonces with Rayon, and reports the smallest digest seen. The core
//! stays single-threaded per call; parallelism lives entirely up here.

use super::{parse_header, GeometryArgs};
use anyhow::{bail, Result};
use rayon::prelude::*;

pub fn scan_nonces(header_hex: &str, start: u64, count: u64, geometry: &GeometryArgs) -> Result<()> {
    if count == 0 {
        bail!("scan range is empty");
    }
    let header = parse_header(header_hex)?;
    let evaluator = geometry.evaluator()?;

    // Nonces are the little-endian byte image of the counter, matching the
    // word convention of the evaluator itself.
    let (digest, nonce) = (start..start.saturating_add(count))
        .into_par_iter()
        .map(|nonce| (evaluator.hash(&header, &nonce.to_le_bytes()), nonce))
        .min()
        .expect("range is non-empty");

    println!("scanned:     {count} nonces from {start}");
    println!("best nonce:  {nonce} ({})", hex::encode(nonce.to_le_bytes()));
    println!("best digest: {}", hex::encode(digest));
    Ok(())
}
