//! Hashimoto CLI
//!
//! Drives the proof-of-work evaluator from the command line: one-shot
//! digests, parallel nonce scans, and cache equivalence checks.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{cache_digest, hash_once, scan_nonces, GeometryArgs};

// =============================================================================
// CLI DEFINITION
// =============================================================================

#[derive(Parser)]
#[command(name = "hashimoto")]
#[command(about = "Memory-hard Ethash-style proof-of-work evaluator", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Digest a single (header, nonce) pair
    Hash {
        /// Header hash, 32 bytes of hex
        header: String,
        /// Nonce, 8 bytes of hex
        nonce: String,
        #[command(flatten)]
        geometry: GeometryArgs,
    },
    /// Scan a nonce range in parallel and report the smallest digest
    Scan {
        /// Header hash, 32 bytes of hex
        header: String,
        /// First nonce of the range
        #[arg(long, default_value_t = 0)]
        start: u64,
        /// Number of nonces to try
        #[arg(long, default_value_t = 1024)]
        count: u64,
        #[command(flatten)]
        geometry: GeometryArgs,
    },
    /// Print the diagnostic cache digest for a seed
    CacheDigest {
        #[command(flatten)]
        geometry: GeometryArgs,
    },
}

// =============================================================================
// ENTRY POINT
// =============================================================================

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Hash {
            header,
            nonce,
            geometry,
        } => hash_once(&header, &nonce, &geometry),
        Commands::Scan {
            header,
            start,
            count,
            geometry,
        } => scan_nonces(&header, start, count, &geometry),
        Commands::CacheDigest { geometry } => cache_digest(&geometry),
    }
}
