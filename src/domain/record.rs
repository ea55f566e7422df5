// ============================================================
// Layer 3 — SequenceRecord Domain Type
// ============================================================
// Represents a single row of the input table.
// This is a plain data struct with no behaviour —
// just the raw sequence string and its label.
//
// By the time a SequenceRecord exists, the tabular format
// (CSV, delimiters, header row) has already been dealt with
// by the loader. Nothing downstream knows about files.
//
// Reference: Rust Book §5 (Structs and Methods)

/// One raw record from the input table.
///
/// The sequence is kept as a `String` rather than a symbol
/// vector so the loader stays format-only; decomposition into
/// per-position symbols is the encoder's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceRecord {
    /// The raw sequence, e.g. "ACGTTGCA".
    /// Fixed length across all records — the encoder enforces this.
    pub sequence: String,

    /// The raw label as it appeared in the file.
    /// May be numeric ("0", "1") or categorical ("promoter").
    pub label: String,
}

impl SequenceRecord {
    /// Create a new SequenceRecord.
    /// Uses impl Into<String> so callers can pass &str or String.
    pub fn new(sequence: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            sequence: sequence.into(),
            label:    label.into(),
        }
    }
}
