// ============================================================
// Layer 2 — PrepareUseCase
// ============================================================
// Orchestrates the full preparation pipeline in order:
//
//   Step 1: Load input records        (Layer 4 - data)
//   Step 2: Fit vocabularies          (Layer 4 - data)
//   Step 3: Encode features + labels  (Layer 4 - data)
//   Step 4: Train/test split          (Layer 4 - data)
//   Step 5: Persist artifacts         (Layer 5 - infra)
//
// Each step consumes the whole output of its predecessor;
// there is no streaming, branching, or retrying. One run is
// one bounded batch job.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::data::{
    encoder::{LabelVocabulary, SequenceVocabulary},
    loader::CsvLoader,
    partitioner::train_test_split,
};
use crate::domain::traits::RecordSource;
use crate::infra::{
    array_store::ArrayStore,
    vocab_store::{FittedVocabulary, VocabStore},
};

// ─── Preparation Configuration ────────────────────────────────────────────────
// Everything a run needs, as one serialisable value. Saved to
// prepare_config.json in the output directory so a run's
// parameters are recorded alongside its artifacts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrepareConfig {
    pub input:       String,
    pub out_dir:     String,
    pub test_size:   f64,
    pub random_seed: u64,
}

impl Default for PrepareConfig {
    fn default() -> Self {
        Self {
            input:       "data/sequences.csv".to_string(),
            out_dir:     "artifacts".to_string(),
            test_size:   0.25,
            random_seed: 42,
        }
    }
}

// ─── PrepareUseCase ───────────────────────────────────────────────────────────
// Owns the config and runs the full pipeline.
pub struct PrepareUseCase {
    config: PrepareConfig,
}

impl PrepareUseCase {
    /// Create a new PrepareUseCase with the given configuration
    pub fn new(config: PrepareConfig) -> Self {
        Self { config }
    }

    /// Execute the full pipeline end to end
    pub fn execute(&self) -> Result<()> {
        let cfg = &self.config;

        // ── Step 1: Load input records ────────────────────────────────────────
        // Fails fast on schema violations; nothing downstream
        // ever sees a partial table.
        tracing::info!("Loading records from '{}'", cfg.input);
        let loader  = CsvLoader::new(&cfg.input);
        let records = loader.load_all()?;

        // ── Step 2: Fit vocabularies ──────────────────────────────────────────
        // Fit exactly once per run; both values are immutable
        // from here on.
        let sequence_vocab = SequenceVocabulary::fit(&records)?;
        let label_vocab    = LabelVocabulary::fit(&records)?;
        tracing::info!(
            "Fitted vocabulary: {} positions, {} one-hot columns, {} label classes",
            sequence_vocab.seq_len(),
            sequence_vocab.width(),
            label_vocab.classes().len(),
        );

        // ── Step 3: Encode features and labels ────────────────────────────────
        // Row i of the matrix and entry i of the label vector
        // describe the same input record.
        let features = sequence_vocab.transform(&records)?;
        let labels   = label_vocab.encode(&records)?;
        tracing::info!(
            "Encoded feature matrix: {} rows x {} columns",
            features.nrows(),
            features.ncols(),
        );

        // ── Step 4: Train/test split ──────────────────────────────────────────
        // Seeded ChaCha8 permutation — same seed, same split.
        let split = train_test_split(&features, &labels, cfg.test_size, cfg.random_seed)?;
        tracing::info!(
            "Split: {} train rows, {} test rows (test_size {}, seed {})",
            split.x_train.nrows(),
            split.x_test.nrows(),
            cfg.test_size,
            cfg.random_seed,
        );

        // ── Step 5: Persist artifacts ─────────────────────────────────────────
        // Four arrays, the fitted vocabulary, and the run config
        // all land in the output directory.
        let arrays = ArrayStore::new(&cfg.out_dir);
        arrays.save_matrix("x_train", &split.x_train)?;
        arrays.save_matrix("x_test",  &split.x_test)?;
        arrays.save_vector("y_train", &split.y_train)?;
        arrays.save_vector("y_test",  &split.y_test)?;

        let vocab_store = VocabStore::new(&cfg.out_dir);
        vocab_store.save(&FittedVocabulary {
            sequence: sequence_vocab,
            labels:   label_vocab,
        })?;

        self.save_config()?;

        tracing::info!("Artifacts written to '{}'", cfg.out_dir);
        Ok(())
    }

    /// Record the run configuration next to its artifacts.
    fn save_config(&self) -> Result<()> {
        let path = Path::new(&self.config.out_dir).join("prepare_config.json");
        fs::write(&path, serde_json::to_string_pretty(&self.config)?)
            .with_context(|| format!("Failed to write '{}'", path.display()))?;
        Ok(())
    }
}
