// ============================================================
// Layer 4 — Record Loader
// ============================================================
// Reads a delimited tabular file (CSV with a header row) into
// a Vec<SequenceRecord> using the csv crate.
//
// Schema requirements:
//   - the header must contain a `sequence` and a `label`
//     column (any extra columns are ignored)
//   - every data row must have the same field count as the
//     header
//
// Both violations abort the load before any processing:
// MissingColumn for the former, MalformedRecord (with the
// offending row index) for the latter. The csv crate already
// detects unequal row widths, so we translate its
// UnequalLengths error kind instead of re-counting fields.
//
// Reference: csv crate documentation
//            Rust Book §9 (Error Handling)

use std::io;

use crate::domain::error::PipelineError;
use crate::domain::record::SequenceRecord;
use crate::domain::traits::RecordSource;

/// Column names the input table must provide.
const SEQUENCE_COLUMN: &str = "sequence";
const LABEL_COLUMN: &str = "label";

/// Loads sequence records from a CSV file on disk.
/// Implements the RecordSource trait from Layer 3.
pub struct CsvLoader {
    /// Path to the delimited input file
    path: String,
}

impl CsvLoader {
    /// Create a new CsvLoader pointed at a file path
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordSource for CsvLoader {
    fn load_all(&self) -> Result<Vec<SequenceRecord>, PipelineError> {
        let reader = csv::Reader::from_path(&self.path).map_err(|e| {
            PipelineError::InputUnreadable {
                path:   self.path.clone(),
                reason: e.to_string(),
            }
        })?;

        let records = read_records(reader, &self.path)?;
        tracing::info!("Loaded {} records from '{}'", records.len(), self.path);
        Ok(records)
    }
}

/// Read all records from an already-open CSV reader.
///
/// Generic over io::Read so unit tests can feed byte slices
/// instead of touching the filesystem. `origin` only labels
/// error messages.
pub fn read_records<R: io::Read>(
    mut reader: csv::Reader<R>,
    origin:     &str,
) -> Result<Vec<SequenceRecord>, PipelineError> {
    // The header row decides which fields we pull from each record.
    let headers = reader
        .headers()
        .map_err(|e| PipelineError::InputUnreadable {
            path:   origin.to_string(),
            reason: e.to_string(),
        })?
        .clone();

    let sequence_col = headers
        .iter()
        .position(|h| h == SEQUENCE_COLUMN)
        .ok_or(PipelineError::MissingColumn { column: SEQUENCE_COLUMN })?;

    let label_col = headers
        .iter()
        .position(|h| h == LABEL_COLUMN)
        .ok_or(PipelineError::MissingColumn { column: LABEL_COLUMN })?;

    let mut records = Vec::new();

    // `row` counts data rows only; the header is not a record.
    for (row, result) in reader.records().enumerate() {
        let record = result.map_err(|e| match e.kind() {
            csv::ErrorKind::UnequalLengths { expected_len, len, .. } => {
                PipelineError::MalformedRecord {
                    row,
                    expected: *expected_len as usize,
                    found:    *len as usize,
                }
            }
            _ => PipelineError::InputUnreadable {
                path:   origin.to_string(),
                reason: e.to_string(),
            },
        })?;

        // With equal lengths already enforced these gets cannot
        // fail, but we keep the row context rather than indexing.
        let sequence = record.get(sequence_col).ok_or(PipelineError::MalformedRecord {
            row,
            expected: headers.len(),
            found:    record.len(),
        })?;
        let label = record.get(label_col).ok_or(PipelineError::MalformedRecord {
            row,
            expected: headers.len(),
            found:    record.len(),
        })?;

        records.push(SequenceRecord::new(sequence, label));
    }

    Ok(records)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn reader_from(data: &str) -> csv::Reader<&[u8]> {
        csv::Reader::from_reader(data.as_bytes())
    }

    #[test]
    fn test_loads_well_formed_table() {
        let data = "sequence,label\nACGT,0\nACGA,1\nTCGA,0\n";
        let records = read_records(reader_from(data), "<test>").unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0], SequenceRecord::new("ACGT", "0"));
        assert_eq!(records[2], SequenceRecord::new("TCGA", "0"));
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let data = "id,sequence,label\n7,ACGT,promoter\n8,TGCA,other\n";
        let records = read_records(reader_from(data), "<test>").unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[1], SequenceRecord::new("TGCA", "other"));
    }

    #[test]
    fn test_missing_sequence_column() {
        let data = "seq,label\nACGT,0\n";
        let err  = read_records(reader_from(data), "<test>").unwrap_err();

        match err {
            PipelineError::MissingColumn { column } => assert_eq!(column, "sequence"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_label_column() {
        let data = "sequence,target\nACGT,0\n";
        let err  = read_records(reader_from(data), "<test>").unwrap_err();

        match err {
            PipelineError::MissingColumn { column } => assert_eq!(column, "label"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_row_reports_index_and_counts() {
        // Second data row has one field instead of two.
        let data = "sequence,label\nACGT,0\nACGA\n";
        let err  = read_records(reader_from(data), "<test>").unwrap_err();

        match err {
            PipelineError::MalformedRecord { row, expected, found } => {
                assert_eq!(row,      1);
                assert_eq!(expected, 2);
                assert_eq!(found,    1);
            }
            other => panic!("expected MalformedRecord, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_table_yields_no_records() {
        let data = "sequence,label\n";
        let records = read_records(reader_from(data), "<test>").unwrap();
        assert!(records.is_empty());
    }
}
