//! Word-Oriented Keccak Facade
//!
//! The evaluator works in little-endian 32-bit words end to end; this module
//! adapts the byte-oriented `sha3` sponge to that view. The output width
//! selects the variant: 8 words is Keccak-256, 16 words is Keccak-512.
//!
//! Every function returns a fresh output array, so a caller may hash a
//! region of a buffer and write the digest back over that same region.

use crate::constants::NODE_WORDS;
use sha3::{Digest, Keccak256, Keccak512};

// =============================================================================
// WORD / BYTE PACKING
// =============================================================================

/// Pack little-endian bytes into `out`; lengths must already agree.
pub(crate) fn pack_words_le(bytes: &[u8], out: &mut [u32]) {
    debug_assert_eq!(bytes.len(), out.len() * 4);
    for (word, chunk) in out.iter_mut().zip(bytes.chunks_exact(4)) {
        *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
}

/// Little-endian byte image of a 8-word digest.
#[must_use]
pub(crate) fn unpack_words_le(words: &[u32; 8]) -> [u8; 32] {
    let mut out = [0u8; 32];
    for (chunk, word) in out.chunks_exact_mut(4).zip(words) {
        chunk.copy_from_slice(&word.to_le_bytes());
    }
    out
}

// =============================================================================
// DIGESTS
// =============================================================================

/// Keccak-512 over the little-endian byte image of `input`, as 16 words.
#[must_use]
pub(crate) fn keccak_512_words(input: &[u32]) -> [u32; NODE_WORDS] {
    let mut hasher = Keccak512::new();
    absorb_words(&mut hasher, input);
    let digest: [u8; 64] = hasher.finalize().into();
    let mut out = [0u32; NODE_WORDS];
    pack_words_le(&digest, &mut out);
    out
}

/// Keccak-256 over the little-endian byte image of `input`, as 8 words.
#[must_use]
pub(crate) fn keccak_256_words(input: &[u32]) -> [u32; 8] {
    let mut hasher = Keccak256::new();
    absorb_words(&mut hasher, input);
    let digest: [u8; 32] = hasher.finalize().into();
    let mut out = [0u32; 8];
    pack_words_le(&digest, &mut out);
    out
}

/// Feed the byte image of `words` through a staging buffer, so hashing the
/// whole cache does not allocate.
fn absorb_words<D: Digest>(hasher: &mut D, words: &[u32]) {
    let mut staging = [0u8; 256];
    for chunk in words.chunks(64) {
        for (bytes, word) in staging.chunks_exact_mut(4).zip(chunk) {
            bytes.copy_from_slice(&word.to_le_bytes());
        }
        hasher.update(&staging[..chunk.len() * 4]);
    }
}
