//! The Memory-Hard Evaluation Pipeline
//!
//! One `Evaluator` owns an immutable cache built from `(params, seed)`.
//! Each call seeds a mix buffer from `(header, nonce)` with Keccak-512,
//! tiles that seed across the working region, folds in DAG pages selected
//! by the mixing stream, and closes with a double Keccak-256 envelope.

use crate::arith::fnv;
use crate::bbs::{clamp, step};
use crate::cache::Cache;
use crate::constants::{NODE_WORDS, P1, P2};
use crate::dag;
use crate::keccak::{keccak_256_words, keccak_512_words, pack_words_le, unpack_words_le};
use crate::params::Params;
use crate::types::HashimotoError;
use subtle::ConstantTimeEq;

/// Digest pair produced by one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashOutput {
    /// Keccak-256 of the full mix state (seed ∥ working mix).
    pub mix_digest: [u8; 32],
    /// Keccak-256 of the seed and the mix digest; the value drivers compare.
    pub digest: [u8; 32],
}

// =============================================================================
// EVALUATOR
// =============================================================================

/// Proof-of-work evaluator for one `(params, seed)` pair.
///
/// Construction is the expensive part: the cache is expanded from the seed
/// once and never mutated again, so a single instance can serve concurrent
/// `hash` calls from many threads.
///
/// # Example
/// ```rust
/// use hashimoto::{Evaluator, Params};
///
/// let evaluator = Evaluator::new(Params::for_testing(), &[0u8; 32])?;
/// let digest = evaluator.hash(&[0u8; 32], &[0u8; 8]);
/// assert!(evaluator.verify(&[0u8; 32], &[0u8; 8], &digest));
/// # Ok::<(), hashimoto::HashimotoError>(())
/// ```
pub struct Evaluator {
    params: Params,
    cache: Cache,
    rand1: u32,
}

impl Evaluator {
    // =========================================================================
    // SETUP
    // =========================================================================

    /// Validate `params`, expand `seed` into the cache, and fix the stream
    /// residue `rand1` from the cache's first word.
    ///
    /// # Errors
    /// `InvalidParams` if the geometry constraints fail; `InvalidSeed` if the
    /// seed byte length is not a multiple of 4. No partial state survives a
    /// failure.
    pub fn new(params: Params, seed: &[u8]) -> Result<Self, HashimotoError> {
        params.validate()?;
        if seed.len() % 4 != 0 {
            return Err(HashimotoError::InvalidSeed { len: seed.len() });
        }

        let mut seed_words = vec![0u32; seed.len() / 4];
        pack_words_le(seed, &mut seed_words);

        let cache = Cache::build(&params, &seed_words);
        let rand1 = clamp(cache.words()[0], P1);
        Ok(Self {
            params,
            cache,
            rand1,
        })
    }

    /// The validated geometry this instance was built with.
    #[inline]
    #[must_use]
    pub const fn params(&self) -> &Params {
        &self.params
    }

    /// The setup-time stream residue `rand1`; always in `[2, P1 − 2]`.
    #[inline]
    #[must_use]
    pub const fn seed_residue(&self) -> u32 {
        self.rand1
    }

    // =========================================================================
    // EVALUATION
    // =========================================================================

    /// Final digest for `(header, nonce)`. Total: cannot fail.
    #[must_use]
    pub fn hash(&self, header: &[u8; 32], nonce: &[u8; 8]) -> [u8; 32] {
        self.hash_full(header, nonce).digest
    }

    /// Mix digest and final digest for `(header, nonce)`.
    #[must_use]
    pub fn hash_full(&self, header: &[u8; 32], nonce: &[u8; 8]) -> HashOutput {
        let mix_words = self.params.mix_word_count();
        let mix_nodes = self.params.mix_node_count();
        let page_mask = self.params.dag_page_count() - 1;

        // Seed block: header ∥ nonce ∥ zero pad, then Keccak-512 in place.
        let mut mix = vec![0u32; mix_words + NODE_WORDS];
        pack_words_le(header, &mut mix[..8]);
        pack_words_le(nonce, &mut mix[8..10]);
        let seed = keccak_512_words(&mix[..NODE_WORDS]);
        mix[..NODE_WORDS].copy_from_slice(&seed);

        // Tile the 16-word seed across the working region.
        for w in NODE_WORDS..mix_words + NODE_WORDS {
            mix[w] = mix[w % NODE_WORDS];
        }

        // Fold one DAG page per round into the working region.
        let mut rand2 = clamp(mix[0], P2);
        let mut node = [0u32; NODE_WORDS];
        for round in 0..self.params.mix_parents {
            let page = (mix[round % mix_words] ^ rand2) as usize & page_mask;
            let first = page * mix_nodes;
            for n in 0..mix_nodes {
                dag::fill_node(&self.params, &self.cache, self.rand1, first + n, &mut node);
                let slab = &mut mix[NODE_WORDS + n * NODE_WORDS..NODE_WORDS + (n + 1) * NODE_WORDS];
                for (word, feed) in slab.iter_mut().zip(&node) {
                    *word = fnv(*word, *feed);
                }
            }
            rand2 = step(rand2, P2);
        }

        // Compress, then close the envelope over seed ∥ compressed mix.
        let mix_digest = keccak_256_words(&mix);
        mix[NODE_WORDS..NODE_WORDS + 8].copy_from_slice(&mix_digest);
        let digest = keccak_256_words(&mix[..NODE_WORDS + 8]);

        HashOutput {
            mix_digest: unpack_words_le(&mix_digest),
            digest: unpack_words_le(&digest),
        }
    }

    /// Compare a claimed digest in constant time (timing attack resistant).
    #[must_use]
    pub fn verify(&self, header: &[u8; 32], nonce: &[u8; 8], expected: &[u8; 32]) -> bool {
        let computed = self.hash(header, nonce);
        computed.ct_eq(expected).into()
    }

    // =========================================================================
    // DIAGNOSTICS
    // =========================================================================

    /// Keccak-256 over the cache's little-endian byte image.
    ///
    /// Two evaluators agree on every digest iff they agree here, which makes
    /// this the cheap equivalence check between independently built caches.
    #[must_use]
    pub fn cache_digest(&self) -> [u8; 32] {
        unpack_words_le(&keccak_256_words(self.cache.words()))
    }
}
