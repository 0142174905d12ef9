//! # Hashimoto
//!
//! Deterministic, memory-hard Ethash-style proof-of-work evaluation. Given a
//! seed, a 32-byte header hash, and an 8-byte nonce, the evaluator produces
//! a 32-byte mix digest and a 32-byte final digest by threading a
//! Keccak-derived cache and an implicit, on-the-fly DAG of 64-byte nodes
//! through a mixing loop keyed by a seekable Blum–Blum–Shub stream.

//! # Usage
//! ```rust
//! use hashimoto::{Evaluator, Params};
//!
//! // 1. One-time setup: expand the seed into the cache.
//! let evaluator = Evaluator::new(Params::for_testing(), &[0u8; 32])?;
//!
//! // 2. Evaluate (header, nonce) pairs against the shared cache.
//! let out = evaluator.hash_full(&[0u8; 32], &[0u8; 8]);
//! println!("{:x?}", out.digest);
//!
//! // 3. Constant-time verification of a claimed digest.
//! assert!(evaluator.verify(&[0u8; 32], &[0u8; 8], &out.digest));
//! # Ok::<(), hashimoto::HashimotoError>(())
//! ```

// =============================================================================
// MODULES
// =============================================================================

mod arith;
mod bbs;
mod cache;
mod constants;
mod dag;
mod evaluator;
mod keccak;
mod params;
mod types;

// =============================================================================
// EXPORTS
// =============================================================================

pub use constants::{P1, P2};
pub use evaluator::{Evaluator, HashOutput};
pub use params::Params;
pub use types::HashimotoError;
