// ============================================================
// Layer 5 — Vocabulary Store
// ============================================================
// Persists the fitted vocabularies next to the array
// artifacts as vocabulary.json.
//
// Why persist the vocabulary?
//   The split arrays alone don't say which column means which
//   symbol. Saving the fitted vocabulary keeps the encoding
//   reusable: a later run (or the consumer of the arrays) can
//   transform new sequences with exactly the same column
//   layout instead of re-fitting and drifting.
//
// Output file: <dir>/vocabulary.json
//
// Reference: serde_json crate documentation

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::data::encoder::{LabelVocabulary, SequenceVocabulary};

/// Everything the fit phase learned, as one persistable value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FittedVocabulary {
    /// Per-position symbol vocabularies and column layout
    pub sequence: SequenceVocabulary,

    /// Sorted label classes and their codes
    pub labels: LabelVocabulary,
}

/// Saves and loads the fitted vocabulary for a run directory.
pub struct VocabStore {
    dir: PathBuf,
}

impl VocabStore {
    /// Create a new VocabStore for a directory.
    /// The directory is only created on save, so loading never
    /// leaves an empty directory behind.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self) -> PathBuf {
        self.dir.join("vocabulary.json")
    }

    /// Write the fitted vocabulary as pretty-printed JSON.
    pub fn save(&self, vocabulary: &FittedVocabulary) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create '{}'", self.dir.display()))?;

        let json = serde_json::to_string_pretty(vocabulary)?;
        fs::write(self.path(), json)
            .with_context(|| format!("Failed to write '{}'", self.path().display()))?;

        tracing::debug!("Saved vocabulary to '{}'", self.path().display());
        Ok(())
    }

    /// Load a previously saved vocabulary.
    pub fn load(&self) -> Result<FittedVocabulary> {
        let json = fs::read_to_string(self.path())
            .with_context(|| format!("Failed to read '{}'", self.path().display()))?;

        serde_json::from_str(&json)
            .with_context(|| format!("Malformed vocabulary in '{}'", self.path().display()))
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::SequenceRecord;

    #[test]
    fn test_vocabulary_round_trip() {
        let dir = std::env::temp_dir()
            .join(format!("dna-prep-vocab-{}", std::process::id()));
        let store = VocabStore::new(&dir);

        let records = vec![
            SequenceRecord::new("ACGT", "0"),
            SequenceRecord::new("TCGA", "1"),
        ];
        let fitted = FittedVocabulary {
            sequence: SequenceVocabulary::fit(&records).unwrap(),
            labels:   LabelVocabulary::fit(&records).unwrap(),
        };

        store.save(&fitted).unwrap();
        let loaded = store.load().unwrap();

        assert_eq!(loaded, fitted);

        fs::remove_dir_all(&dir).ok();
    }
}
