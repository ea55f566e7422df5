// ============================================================
// Layer 3 — Pipeline Error Taxonomy
// ============================================================
// Every way the pipeline can fail, as one typed enum.
//
// All variants are fatal: no error is silently recovered,
// and each carries enough context (row index, position,
// symbol, path) to diagnose the failure without re-running.
//
// Row indices count data rows only — the header row is row
// zero of the file but is not a record, so `row: 0` always
// means the first record after the header.
//
// The CLI and application layers wrap this in anyhow for
// reporting; the data and infra layers return it directly.
//
// Reference: thiserror crate documentation
//            Rust Book §9 (Error Handling)

use thiserror::Error;

/// All fatal failure modes of the preparation pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The input header row lacks a required column.
    #[error("input is missing required column '{column}'")]
    MissingColumn { column: &'static str },

    /// A data row's field count disagrees with the header.
    #[error("record {row}: expected {expected} fields, found {found}")]
    MalformedRecord {
        row:      usize,
        expected: usize,
        found:    usize,
    },

    /// The source file could not be opened or parsed at all.
    #[error("cannot read input '{path}': {reason}")]
    InputUnreadable { path: String, reason: String },

    /// The source parsed cleanly but contained zero data rows,
    /// so no sequence length can be inferred.
    #[error("input contains no records")]
    EmptyInput,

    /// A sequence's length differs from the length inferred
    /// from the first record.
    #[error(
        "record {row}: sequence length {found} does not match \
         expected length {expected}"
    )]
    InconsistentLength {
        row:      usize,
        expected: usize,
        found:    usize,
    },

    /// A transform-time symbol was never seen during fit.
    /// The encoder refuses to emit an all-zero block for it.
    #[error(
        "record {row}, position {position}: symbol '{symbol}' \
         was not present in the fitted vocabulary"
    )]
    UnknownSymbol {
        row:      usize,
        position: usize,
        symbol:   char,
    },

    /// A label value was never seen during fit.
    #[error("record {row}: label '{label}' was not present in the fitted vocabulary")]
    UnknownLabel { row: usize, label: String },

    /// The feature matrix and label vector disagree on row
    /// count. The encoder always emits them aligned, so this
    /// means the caller recombined arrays from different runs.
    #[error("features have {feature_rows} rows but labels have {label_rows}")]
    RowMisalignment {
        feature_rows: usize,
        label_rows:   usize,
    },

    /// The requested split cannot be honoured for this input.
    #[error("test_size {test_size} is invalid for {rows} rows: {reason}")]
    InvalidSplitRatio {
        test_size: f64,
        rows:      usize,
        reason:    &'static str,
    },

    /// An artifact could not be committed to disk. The prior
    /// state at the destination is left untouched.
    #[error("cannot write artifact '{path}': {reason}")]
    Write { path: String, reason: String },
}
