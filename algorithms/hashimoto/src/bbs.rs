//! Blum–Blum–Shub residue stream.
//!
//! `step` advances the stream by cubing modulo a prime. `advance` jumps `i`
//! steps in one go via `n^(3^i mod (P−1)) mod P`, which makes the stream
//! randomly seekable in O(log² i) work; the DAG oracle relies on this to
//! reach the residue for an arbitrary node index without replaying the
//! stream from the start.

use crate::arith::{mod_mul32, mod_pow32};

/// One stream step: `n³ mod p`.
#[inline]
#[must_use]
pub const fn step(n: u32, p: u32) -> u32 {
    mod_mul32(mod_mul32(n, n, p), n, p)
}

/// Jump `i` steps at once: `n^(3^i mod (p−1)) mod p`.
///
/// Yields the same residue as applying [`step`] exactly `i` times.
#[must_use]
pub const fn advance(n: u32, i: u32, p: u32) -> u32 {
    let e = mod_pow32(3, i, p - 1);
    mod_pow32(n, e, p)
}

/// Coerce an arbitrary 32-bit value into the safe range `[2, p − 2]`.
#[inline]
#[must_use]
pub const fn clamp(n: u32, p: u32) -> u32 {
    if n < 2 {
        2
    } else if n > p - 2 {
        p - 2
    } else {
        n
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{P1, P2};

    #[test]
    fn clamp_boundaries() {
        for p in [P1, P2] {
            assert_eq!(clamp(0, p), 2);
            assert_eq!(clamp(1, p), 2);
            assert_eq!(clamp(2, p), 2);
            assert_eq!(clamp(p - 1, p), p - 2);
            assert_eq!(clamp(p, p), p - 2);
            assert_eq!(clamp(p - 2, p), p - 2);
            assert_eq!(clamp(12345, p), 12345);
        }
    }

    #[test]
    fn advance_matches_iterated_step() {
        for p in [P1, P2] {
            for start in [2u32, 7, 0x1234_5678, p - 2] {
                let mut n = start;
                for i in 0..64 {
                    assert_eq!(
                        advance(start, i, p),
                        n,
                        "advance({start}, {i}) diverged from {i} iterated steps"
                    );
                    n = step(n, p);
                }
            }
        }
    }

    #[test]
    fn advance_zero_is_identity_on_residues() {
        assert_eq!(advance(2, 0, P1), 2);
        assert_eq!(advance(P2 - 2, 0, P2), P2 - 2);
    }

    #[test]
    fn step_stays_in_range() {
        let mut n = clamp(0xDEAD_BEEF, P2);
        for _ in 0..1000 {
            n = step(n, P2);
            assert!(n < P2, "stream residue escaped the modulus");
        }
    }
}
