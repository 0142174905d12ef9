//! Benchmark-only crate; see `benches/throughput.rs`.
