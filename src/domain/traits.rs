// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// By programming against traits instead of concrete types,
// the application layer can swap record sources without
// changing the orchestration code:
//   - CsvLoader implements RecordSource
//   - a future ParquetLoader could implement it too
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use crate::domain::error::PipelineError;
use crate::domain::record::SequenceRecord;

// ─── RecordSource ─────────────────────────────────────────────────────────────
/// Any component that can produce the full set of input records.
///
/// Implementations:
///   - CsvLoader → reads a delimited file with a header row
pub trait RecordSource {
    /// Load every record from this source, in file order.
    /// Fails fast on schema violations — no partial tables.
    fn load_all(&self) -> Result<Vec<SequenceRecord>, PipelineError>;
}
