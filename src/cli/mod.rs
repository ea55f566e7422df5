// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// This is the entry point for all user interaction.
// It uses the `clap` crate to parse command line arguments.
// All business logic is delegated to Layer 2 (application).
//
// Two commands are supported:
//   1. `prepare` — runs the full pipeline on a CSV input
//   2. `inspect` — reloads artifacts and prints a summary
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

// Declare the commands submodule
pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, InspectArgs, PrepareArgs};

/// The main CLI struct — clap reads the fields and generates
/// argument parsing code automatically via the Parser derive macro.
#[derive(Parser, Debug)]
#[command(
    name = "dna-prep",
    version = "0.1.0",
    about = "One-hot encode DNA sequence records, split train/test, persist as .npy."
)]
pub struct Cli {
    /// The subcommand to run (prepare or inspect)
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    /// This keeps the CLI layer thin — it only routes, never computes.
    /// The handlers take the args by value, so the match can move
    /// them out of `self` without holding a borrow alongside.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Prepare(args) => Self::run_prepare(args),
            Commands::Inspect(args) => Self::run_inspect(args),
        }
    }

    /// Handles the `prepare` subcommand.
    /// Converts CLI args into a PrepareConfig and hands off to Layer 2.
    fn run_prepare(args: PrepareArgs) -> Result<()> {
        use crate::application::prepare_use_case::PrepareUseCase;

        tracing::info!("Preparing dataset from: {}", args.input);

        // Convert CLI args → application config (separates presentation from domain)
        let use_case = PrepareUseCase::new(args.into());
        use_case.execute()?;

        println!("Preparation complete. Artifacts saved.");
        Ok(())
    }

    /// Handles the `inspect` subcommand.
    /// Reloads the artifacts and prints the dataset report.
    fn run_inspect(args: InspectArgs) -> Result<()> {
        use crate::application::inspect_use_case::InspectUseCase;

        let report = InspectUseCase::new(args.out_dir.clone()).report()?;

        println!("Dataset in '{}':", args.out_dir);
        println!("  train rows:    {}", report.train_rows);
        println!("  test rows:     {}", report.test_rows);
        println!("  total rows:    {}", report.total_rows());
        println!("  feature width: {}", report.feature_width);
        println!("  label classes: {:?}", report.label_classes);
        Ok(())
    }
}
