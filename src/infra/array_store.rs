// ============================================================
// Layer 5 — Array Store
// ============================================================
// Persists the split arrays as NumPy .npy files.
//
// Why .npy?
//   The format is self-describing — every file carries its
//   own shape and element-type header — so any generic .npy
//   loader can read the artifacts back without an external
//   schema, and a reload reproduces the array bit for bit.
//
// Commit discipline:
//   Each array is first written to a temporary sibling file
//   (<name>.npy.tmp) and then renamed over the destination.
//   A failed write therefore never clobbers a previous
//   artifact: either the full array lands, or the prior state
//   of that path is untouched.
//
// File naming convention:
//   <dir>/
//     x_train.npy   ← train feature matrix (f32, N_train×M)
//     x_test.npy    ← test feature matrix  (f32, N_test×M)
//     y_train.npy   ← train label vector   (i64, N_train)
//     y_test.npy    ← test label vector    (i64, N_test)
//
// Reference: ndarray-npy crate documentation
//            Rust Book §9 (Error Handling)

use std::fs;
use std::path::{Path, PathBuf};

use ndarray::{Array1, Array2};
use ndarray_npy::{read_npy, write_npy, ReadNpyExt, WriteNpyExt};

use crate::domain::error::PipelineError;

/// Saves and reloads array artifacts in one directory.
pub struct ArrayStore {
    /// Directory that owns all artifacts of a run
    dir: PathBuf,
}

impl ArrayStore {
    /// Create a new ArrayStore for a directory.
    /// The directory is only created on the first save, so
    /// read-only callers (inspect) never touch the filesystem.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Full path of a named artifact inside the store
    pub fn artifact_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.npy"))
    }

    /// Persist a feature matrix under `name`.
    pub fn save_matrix(
        &self,
        name:  &str,
        array: &Array2<f32>,
    ) -> Result<PathBuf, PipelineError> {
        self.save_npy(name, array)
    }

    /// Persist a label vector under `name`.
    pub fn save_vector(
        &self,
        name:  &str,
        array: &Array1<i64>,
    ) -> Result<PathBuf, PipelineError> {
        self.save_npy(name, array)
    }

    /// Reload a previously saved feature matrix.
    pub fn load_matrix(&self, name: &str) -> Result<Array2<f32>, PipelineError> {
        self.load_npy(name)
    }

    /// Reload a previously saved label vector.
    pub fn load_vector(&self, name: &str) -> Result<Array1<i64>, PipelineError> {
        self.load_npy(name)
    }

    /// Write any serialisable array: tmp file first, then an
    /// atomic rename onto the final path.
    fn save_npy<A: WriteNpyExt>(&self, name: &str, array: &A) -> Result<PathBuf, PipelineError> {
        let path = self.artifact_path(name);
        let tmp  = self.dir.join(format!("{name}.npy.tmp"));

        // create_dir_all creates parent directories too, like `mkdir -p`
        fs::create_dir_all(&self.dir).map_err(|e| write_error(&path, e.to_string()))?;

        write_npy(&tmp, array).map_err(|e| {
            let _ = fs::remove_file(&tmp);
            write_error(&path, e.to_string())
        })?;

        fs::rename(&tmp, &path).map_err(|e| {
            let _ = fs::remove_file(&tmp);
            write_error(&path, e.to_string())
        })?;

        tracing::debug!("Wrote artifact '{}'", path.display());
        Ok(path)
    }

    fn load_npy<A: ReadNpyExt>(&self, name: &str) -> Result<A, PipelineError> {
        let path = self.artifact_path(name);
        read_npy(&path).map_err(|e| PipelineError::InputUnreadable {
            path:   path.display().to_string(),
            reason: e.to_string(),
        })
    }
}

fn write_error(path: &Path, reason: String) -> PipelineError {
    PipelineError::Write {
        path: path.display().to_string(),
        reason,
    }
}
