// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands: `prepare` and `inspect`
// and all their configurable flags.
//
// clap's derive macros automatically generate:
//   - help text (--help)
//   - error messages for missing args
//   - type conversion (string → f64, u64, etc.)
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};
use crate::application::prepare_use_case::PrepareConfig;

/// The two top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encode, split, and persist a sequence dataset
    Prepare(PrepareArgs),

    /// Reload a prepared dataset and report its shape
    Inspect(InspectArgs),
}

/// All arguments for the `prepare` command.
/// Each field becomes a --flag on the command line.
#[derive(Args, Debug)]
pub struct PrepareArgs {
    /// CSV input file with `sequence` and `label` columns
    #[arg(long, default_value = "data/sequences.csv")]
    pub input: String,

    /// Directory to write the .npy artifacts and vocabulary into
    #[arg(long, default_value = "artifacts")]
    pub out_dir: String,

    /// Fraction of rows routed to the test partition,
    /// strictly between 0 and 1
    #[arg(long, default_value_t = 0.25)]
    pub test_size: f64,

    /// Seed of the split permutation — same seed, same split
    #[arg(long, default_value_t = 42)]
    pub seed: u64,
}

/// Convert CLI PrepareArgs into the application-layer config.
/// This is the boundary between Layer 1 and Layer 2 —
/// the application layer never sees clap types.
impl From<PrepareArgs> for PrepareConfig {
    fn from(a: PrepareArgs) -> Self {
        PrepareConfig {
            input:       a.input,
            out_dir:     a.out_dir,
            test_size:   a.test_size,
            random_seed: a.seed,
        }
    }
}

/// All arguments for the `inspect` command
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Directory a previous `prepare` run wrote its artifacts into
    #[arg(long, default_value = "artifacts")]
    pub out_dir: String,
}
