//! Hash Command
//!
//! One-shot evaluation of a single (header, nonce) pair.

use super::{parse_header, parse_nonce, GeometryArgs};
use anyhow::Result;

pub fn hash_once(header_hex: &str, nonce_hex: &str, geometry: &GeometryArgs) -> Result<()> {
    let header = parse_header(header_hex)?;
    let nonce = parse_nonce(nonce_hex)?;

    let evaluator = geometry.evaluator()?;
    let out = evaluator.hash_full(&header, &nonce);

    println!("mix digest: {}", hex::encode(out.mix_digest));
    println!("digest:     {}", hex::encode(out.digest));
    Ok(())
}
