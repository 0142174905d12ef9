//! Cache Construction (RandMemoHash)
//!
//! Phase A chains Keccak-512 sequentially from the seed: node 0 hashes the
//! seed words, node `n` hashes node `n − 1`. Phase B then rewrites every
//! node `cache_rounds` times from its circular predecessor and a
//! data-dependent partner node. The two parents are concatenated into a
//! 32-word block before rehashing; the canonical Ethash spec XORs them into
//! 16 words instead, and this lineage's digests are pinned to the
//! concatenating behavior.
//!
//! The rewrite is strictly sequential and in place, so within one round a
//! node may read both already-rewritten and not-yet-rewritten parents. That
//! ordering is part of the function being computed.

use crate::arith::mod64;
use crate::constants::NODE_WORDS;
use crate::keccak::keccak_512_words;
use crate::params::Params;

/// Immutable Keccak-derived node array; 16 little-endian words per node.
///
/// Built once at setup and read-only for the evaluator's lifetime, so it is
/// safe to share across threads behind a reference.
pub(crate) struct Cache {
    words: Vec<u32>,
}

impl Cache {
    /// Expand `seed_words` into the full cache.
    pub(crate) fn build(params: &Params, seed_words: &[u32]) -> Self {
        let n = params.cache_node_count();
        let mut words = vec![0u32; params.cache_word_count()];

        // Phase A: sequential Keccak-512 chain.
        let first = keccak_512_words(seed_words);
        words[..NODE_WORDS].copy_from_slice(&first);
        for i in 1..n {
            let node = keccak_512_words(&words[(i - 1) * NODE_WORDS..i * NODE_WORDS]);
            words[i * NODE_WORDS..(i + 1) * NODE_WORDS].copy_from_slice(&node);
        }

        // Phase B: RandMemoHash rounds.
        let mut join = [0u32; 2 * NODE_WORDS];
        for _ in 0..params.cache_rounds {
            for i in 0..n {
                let p0 = ((i + n - 1) % n) * NODE_WORDS;
                let p1 = mod64(words[i * NODE_WORDS], words[i * NODE_WORDS + 1], n) * NODE_WORDS;
                join[..NODE_WORDS].copy_from_slice(&words[p0..p0 + NODE_WORDS]);
                join[NODE_WORDS..].copy_from_slice(&words[p1..p1 + NODE_WORDS]);
                let node = keccak_512_words(&join);
                words[i * NODE_WORDS..(i + 1) * NODE_WORDS].copy_from_slice(&node);
            }
        }

        Self { words }
    }

    /// The full cache as words.
    #[inline]
    pub(crate) fn words(&self) -> &[u32] {
        &self.words
    }

    /// Node `i` as a 16-word slice.
    #[inline]
    pub(crate) fn node(&self, i: usize) -> &[u32] {
        &self.words[i * NODE_WORDS..(i + 1) * NODE_WORDS]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_rounds_is_the_raw_chain() {
        // With no memo rounds the cache is exactly the Phase A chain:
        // node 0 = K512(seed), node i = K512(node i-1).
        let mut params = Params::for_testing();
        params.cache_rounds = 0;

        let seed_words = [0u32; 8];
        let cache = Cache::build(&params, &seed_words);

        let mut expect = keccak_512_words(&seed_words);
        for i in 0..params.cache_node_count() {
            assert_eq!(cache.node(i), &expect[..], "phase A node {i} mismatch");
            expect = keccak_512_words(&expect);
        }
    }

    #[test]
    fn memo_rounds_rewrite_every_node() {
        let mut plain = Params::for_testing();
        plain.cache_rounds = 0;
        let mixed = Params::for_testing();

        let seed_words = [0u32; 8];
        let a = Cache::build(&plain, &seed_words);
        let b = Cache::build(&mixed, &seed_words);

        for i in 0..plain.cache_node_count() {
            assert_ne!(a.node(i), b.node(i), "round pass left node {i} untouched");
        }
    }
}
