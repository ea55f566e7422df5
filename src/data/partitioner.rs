// ============================================================
// Layer 4 — Train/Test Partitioner
// ============================================================
// Splits the feature matrix and label vector into disjoint
// train and test partitions.
//
// Determinism contract:
//   The row permutation comes from ChaCha8 seeded directly
//   with the configured u64 seed — a named, versioned
//   generator, so the same seed reproduces the same split
//   byte for byte, across runs and across reimplementations
//   in other languages. The platform default generator gives
//   no such guarantee.
//
// Split rule:
//   round(N * (1 - test_size)) permuted indices → train,
//   the remainder → test. Rows inside each partition keep the
//   permutation order, not the original file order.
//
// Features and labels are selected by the same index sets, so
// X/y alignment survives the split in both partitions.
//
// Uses Fisher-Yates shuffle via rand::seq::SliceRandom,
// the standard unbiased shuffle algorithm.
//
// Reference: rand / rand_chacha crate documentation

use ndarray::{Array1, Array2, Axis};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::error::PipelineError;

/// The four terminal arrays of the pipeline.
///
/// x_train/y_train and x_test/y_test stay mutually
/// index-aligned; together the partitions cover every input
/// row exactly once.
#[derive(Debug, Clone)]
pub struct SplitArrays {
    pub x_train: Array2<f32>,
    pub x_test:  Array2<f32>,
    pub y_train: Array1<i64>,
    pub y_test:  Array1<i64>,
}

/// Partition `features` and `labels` into train and test sets.
///
/// # Arguments
/// * `features`  - N×M encoded feature matrix
/// * `labels`    - length-N label vector, row-aligned with `features`
/// * `test_size` - fraction of rows routed to the test partition,
///                 strictly between 0 and 1
/// * `seed`      - seed of the ChaCha8 permutation generator
///
/// Fails with RowMisalignment if `features` and `labels`
/// disagree on N, and with InvalidSplitRatio if `test_size` is
/// out of range or N is too small for both partitions to be
/// non-empty.
pub fn train_test_split(
    features:  &Array2<f32>,
    labels:    &Array1<i64>,
    test_size: f64,
    seed:      u64,
) -> Result<SplitArrays, PipelineError> {
    let rows = features.nrows();
    if labels.len() != rows {
        return Err(PipelineError::RowMisalignment {
            feature_rows: rows,
            label_rows:   labels.len(),
        });
    }

    // Validated before any split computation runs. NaN fails
    // both comparisons, so it lands here too.
    if !(test_size > 0.0 && test_size < 1.0) {
        return Err(PipelineError::InvalidSplitRatio {
            test_size,
            rows,
            reason: "test_size must lie strictly between 0 and 1",
        });
    }

    let train_len = ((rows as f64) * (1.0 - test_size)).round() as usize;
    if train_len == 0 || train_len == rows {
        return Err(PipelineError::InvalidSplitRatio {
            test_size,
            rows,
            reason: "split would leave one partition empty",
        });
    }

    // Fisher-Yates over the index vector; same seed, same order.
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut indices: Vec<usize> = (0..rows).collect();
    indices.shuffle(&mut rng);

    let (train_idx, test_idx) = indices.split_at(train_len);

    tracing::debug!(
        "Partitioned {} rows: {} train, {} test (seed {})",
        rows,
        train_idx.len(),
        test_idx.len(),
        seed,
    );

    Ok(SplitArrays {
        x_train: features.select(Axis(0), train_idx),
        x_test:  features.select(Axis(0), test_idx),
        y_train: labels.select(Axis(0), train_idx),
        y_test:  labels.select(Axis(0), test_idx),
    })
}
