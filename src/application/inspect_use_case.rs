// ============================================================
// Layer 2 — InspectUseCase
// ============================================================
// Reloads the artifacts a prepare run wrote and summarises
// them: shapes, partition sizes, label classes. Because it
// goes through the same ArrayStore load path, a successful
// inspect doubles as an on-disk round-trip check of the
// persisted arrays.
//
// Consistency checks performed:
//   - x_train/y_train and x_test/y_test row counts agree
//   - both matrices carry the vocabulary's column width

use anyhow::{bail, Result};

use crate::infra::{array_store::ArrayStore, vocab_store::VocabStore};

/// Summary of one output directory's artifacts.
#[derive(Debug)]
pub struct DatasetReport {
    pub train_rows:    usize,
    pub test_rows:     usize,
    pub feature_width: usize,
    pub label_classes: Vec<String>,
}

impl DatasetReport {
    /// Total number of rows across both partitions
    pub fn total_rows(&self) -> usize {
        self.train_rows + self.test_rows
    }
}

/// Loads and validates the artifacts of a prepare run.
pub struct InspectUseCase {
    out_dir: String,
}

impl InspectUseCase {
    /// Create a new InspectUseCase for an output directory
    pub fn new(out_dir: impl Into<String>) -> Self {
        Self { out_dir: out_dir.into() }
    }

    /// Reload every artifact and build the report.
    pub fn report(&self) -> Result<DatasetReport> {
        let store = ArrayStore::new(&self.out_dir);

        let x_train = store.load_matrix("x_train")?;
        let x_test  = store.load_matrix("x_test")?;
        let y_train = store.load_vector("y_train")?;
        let y_test  = store.load_vector("y_test")?;

        if x_train.nrows() != y_train.len() {
            bail!(
                "train partition misaligned: {} feature rows vs {} labels",
                x_train.nrows(),
                y_train.len(),
            );
        }
        if x_test.nrows() != y_test.len() {
            bail!(
                "test partition misaligned: {} feature rows vs {} labels",
                x_test.nrows(),
                y_test.len(),
            );
        }

        let vocabulary = VocabStore::new(&self.out_dir).load()?;
        if x_train.ncols() != vocabulary.sequence.width()
            || x_test.ncols() != vocabulary.sequence.width()
        {
            bail!(
                "feature width {} does not match fitted vocabulary width {}",
                x_train.ncols(),
                vocabulary.sequence.width(),
            );
        }

        tracing::info!(
            "Inspected '{}': {} train, {} test, {} columns",
            self.out_dir,
            x_train.nrows(),
            x_test.nrows(),
            x_train.ncols(),
        );

        Ok(DatasetReport {
            train_rows:    x_train.nrows(),
            test_rows:     x_test.nrows(),
            feature_width: x_train.ncols(),
            label_classes: vocabulary.labels.classes().to_vec(),
        })
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::prepare_use_case::{PrepareConfig, PrepareUseCase};
    use std::fs;

    #[test]
    fn test_report_after_prepare_run() {
        let dir = std::env::temp_dir()
            .join(format!("dna-prep-inspect-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();

        let input = dir.join("sequences.csv");
        fs::write(&input, "sequence,label\nACGT,0\nACGA,1\nTCGA,0\n").unwrap();

        let out_dir = dir.join("artifacts");
        PrepareUseCase::new(PrepareConfig {
            input:       input.display().to_string(),
            out_dir:     out_dir.display().to_string(),
            test_size:   0.33,
            random_seed: 42,
        })
        .execute()
        .unwrap();

        let report = InspectUseCase::new(out_dir.display().to_string())
            .report()
            .unwrap();

        assert_eq!(report.train_rows,    2);
        assert_eq!(report.test_rows,     1);
        assert_eq!(report.total_rows(),  3);
        assert_eq!(report.feature_width, 6);
        assert_eq!(report.label_classes, vec!["0".to_string(), "1".to_string()]);

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_missing_artifacts_fail() {
        let dir = std::env::temp_dir()
            .join(format!("dna-prep-inspect-empty-{}", std::process::id()));

        assert!(InspectUseCase::new(dir.display().to_string()).report().is_err());

        // Inspect is read-only: it must not have created the directory.
        assert!(!dir.exists());
    }
}
