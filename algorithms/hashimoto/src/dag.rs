//! On-Demand DAG-Node Derivation
//!
//! The DAG is never materialized. Node `i` is a pure function of the cache
//! and the setup residue `rand1`: the seekable stream jump puts the mixing
//! residue at position `i` without replaying the stream, then `dag_parents`
//! FNV rounds fold data-dependent cache nodes into the result. No trailing
//! Keccak-512 is applied; the canonical Ethash spec has one, this lineage
//! does not, and its digests are pinned to the shorter form.

use crate::arith::fnv;
use crate::bbs::{advance, clamp, step};
use crate::cache::Cache;
use crate::constants::{NODE_WORDS, P1, P2};
use crate::params::Params;

/// Materialize DAG node `index` into `out`.
pub(crate) fn fill_node(
    params: &Params,
    cache: &Cache,
    rand1: u32,
    index: usize,
    out: &mut [u32; NODE_WORDS],
) {
    let n = params.cache_node_count();
    let mut rand2 = clamp(advance(rand1, index as u32, P1), P2);

    out.copy_from_slice(cache.node(index % n));

    for p in 0..params.dag_parents {
        let parent = cache.node((out[p % NODE_WORDS] ^ rand2) as usize % n);
        for (word, feed) in out.iter_mut().zip(parent) {
            *word = fnv(*word, *feed);
        }
        rand2 = step(rand2, P2);
    }
}
