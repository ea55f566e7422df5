// ============================================================
// Layer 4 — Sequence Encoder
// ============================================================
// Converts fixed-length symbol sequences into one-hot numeric
// rows, in two phases:
//
//   fit       → learn the vocabulary from the data
//   transform → apply the fitted vocabulary to produce the
//               feature matrix
//
// The vocabulary is fit PER POSITION: position 0 gets its own
// set of observed symbols, position 1 its own, and so on, so
// block widths may differ between positions. Within each
// position the distinct symbols are sorted lexicographically
// before index assignment, which makes re-fitting the same
// data produce the identical column layout every time.
//
// Column layout for a fitted vocabulary:
//
//   pos 0 block | pos 1 block | ... | pos L-1 block
//   offsets[0]    offsets[1]          offsets[L-1]
//
// A row's value at position p with symbol s occupies column
// offsets[p] + rank of s in the sorted vocabulary of p, and
// every other column of that block is zero.
//
// The fitted vocabulary is an explicit immutable value: fit
// returns it, transform borrows it. There is no hidden state,
// so fit-once-transform-many is enforced by ownership rather
// than by discipline.
//
// Transform rejects anything fit never saw: an unknown symbol
// raises UnknownSymbolError instead of emitting an ambiguous
// all-zero block.
//
// Labels go through the same fit/transform treatment in
// miniature: distinct label strings, sorted, become i64 codes
// so both numeric ("0", "1") and categorical ("promoter")
// labels flow through one path.

use std::collections::BTreeSet;

use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

use crate::domain::error::PipelineError;
use crate::domain::record::SequenceRecord;

// ─── SequenceVocabulary ───────────────────────────────────────────────────────

/// The fitted per-position vocabulary of a record set.
///
/// Immutable after fit; serialisable so a run's encoding can
/// be persisted and reused on new data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceVocabulary {
    /// Distinct symbols observed at each position, sorted
    /// lexicographically. positions.len() == L.
    positions: Vec<Vec<char>>,

    /// First feature-matrix column of each position's block
    offsets: Vec<usize>,

    /// Total feature-matrix width: sum of all block widths
    width: usize,
}

impl SequenceVocabulary {
    /// Learn the vocabulary from every record's sequence.
    ///
    /// The sequence length L is inferred from the first record;
    /// any record with a different length is a precondition
    /// violation and aborts the fit with its row index.
    pub fn fit(records: &[SequenceRecord]) -> Result<Self, PipelineError> {
        let first = records.first().ok_or(PipelineError::EmptyInput)?;
        let seq_len = first.sequence.chars().count();

        // BTreeSet keeps each position's symbols sorted as we
        // insert, which fixes the column order deterministically.
        let mut seen: Vec<BTreeSet<char>> = vec![BTreeSet::new(); seq_len];

        for (row, record) in records.iter().enumerate() {
            let mut count = 0;
            for (position, symbol) in record.sequence.chars().enumerate() {
                if position < seq_len {
                    seen[position].insert(symbol);
                }
                count += 1;
            }
            if count != seq_len {
                return Err(PipelineError::InconsistentLength {
                    row,
                    expected: seq_len,
                    found:    count,
                });
            }
        }

        let positions: Vec<Vec<char>> =
            seen.into_iter().map(|set| set.into_iter().collect()).collect();

        // Prefix-sum the block widths into column offsets.
        let mut offsets = Vec::with_capacity(seq_len);
        let mut width   = 0usize;
        for vocab in &positions {
            offsets.push(width);
            width += vocab.len();
        }

        Ok(Self { positions, offsets, width })
    }

    /// Sequence length L this vocabulary was fitted for
    pub fn seq_len(&self) -> usize {
        self.positions.len()
    }

    /// Total number of one-hot columns across all positions
    pub fn width(&self) -> usize {
        self.width
    }

    /// The sorted symbol vocabulary of one position
    pub fn symbols_at(&self, position: usize) -> &[char] {
        &self.positions[position]
    }

    /// First feature-matrix column of a position's block
    pub fn offset(&self, position: usize) -> usize {
        self.offsets[position]
    }

    /// Encode every record's sequence as a one-hot row.
    ///
    /// Returns an N×M matrix, M == self.width(). Exactly one
    /// entry per position block is 1.0; everything else is 0.0.
    pub fn transform(
        &self,
        records: &[SequenceRecord],
    ) -> Result<Array2<f32>, PipelineError> {
        let mut matrix = Array2::<f32>::zeros((records.len(), self.width));

        for (row, record) in records.iter().enumerate() {
            let symbols: Vec<char> = record.sequence.chars().collect();
            if symbols.len() != self.seq_len() {
                return Err(PipelineError::InconsistentLength {
                    row,
                    expected: self.seq_len(),
                    found:    symbols.len(),
                });
            }

            for (position, &symbol) in symbols.iter().enumerate() {
                // The vocabulary is sorted, so binary search gives
                // the symbol's column rank within its block.
                let rank = self.positions[position]
                    .binary_search(&symbol)
                    .map_err(|_| PipelineError::UnknownSymbol {
                        row,
                        position,
                        symbol,
                    })?;

                matrix[[row, self.offsets[position] + rank]] = 1.0;
            }
        }

        Ok(matrix)
    }

    /// Fit on `records` and immediately transform them.
    pub fn fit_transform(
        records: &[SequenceRecord],
    ) -> Result<(Self, Array2<f32>), PipelineError> {
        let vocabulary = Self::fit(records)?;
        let matrix     = vocabulary.transform(records)?;
        Ok((vocabulary, matrix))
    }
}

// ─── LabelVocabulary ──────────────────────────────────────────────────────────

/// Deterministic mapping from raw label strings to i64 codes.
///
/// Distinct labels are sorted lexicographically and assigned
/// codes 0..K in that order, so re-fitting the same data always
/// yields the same mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelVocabulary {
    /// Sorted distinct labels; index == code
    classes: Vec<String>,
}

impl LabelVocabulary {
    /// Learn the label classes from every record's label.
    pub fn fit(records: &[SequenceRecord]) -> Result<Self, PipelineError> {
        if records.is_empty() {
            return Err(PipelineError::EmptyInput);
        }

        let classes: Vec<String> = records
            .iter()
            .map(|r| r.label.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        Ok(Self { classes })
    }

    /// The sorted label classes; a label's code is its index here
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Encode every record's label as its class code,
    /// index-aligned with the feature matrix rows.
    pub fn encode(
        &self,
        records: &[SequenceRecord],
    ) -> Result<Array1<i64>, PipelineError> {
        let mut codes = Vec::with_capacity(records.len());

        for (row, record) in records.iter().enumerate() {
            let code = self
                .classes
                .binary_search(&record.label)
                .map_err(|_| PipelineError::UnknownLabel {
                    row,
                    label: record.label.clone(),
                })?;
            codes.push(code as i64);
        }

        Ok(Array1::from_vec(codes))
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    /// The three-record table used throughout the spec of this
    /// pipeline's behaviour.
    fn sample_records() -> Vec<SequenceRecord> {
        vec![
            SequenceRecord::new("ACGT", "0"),
            SequenceRecord::new("ACGA", "1"),
            SequenceRecord::new("TCGA", "0"),
        ]
    }

    #[test]
    fn test_per_position_vocabulary_widths() {
        let vocab = SequenceVocabulary::fit(&sample_records()).unwrap();

        // {A,T} at 0, {C} at 1, {G} at 2, {A,T} at 3 → 6 columns
        assert_eq!(vocab.seq_len(), 4);
        assert_eq!(vocab.width(),   6);
        assert_eq!(vocab.symbols_at(0), &['A', 'T']);
        assert_eq!(vocab.symbols_at(1), &['C']);
        assert_eq!(vocab.symbols_at(2), &['G']);
        assert_eq!(vocab.symbols_at(3), &['A', 'T']);
        assert_eq!(vocab.offset(3), 4);
    }

    #[test]
    fn test_transform_produces_expected_rows() {
        let (_, matrix) = SequenceVocabulary::fit_transform(&sample_records()).unwrap();

        assert_eq!(matrix.dim(), (3, 6));
        // ACGT: A@0→col0, C@1→col2, G@2→col3, T@3→col5
        assert_eq!(matrix.row(0).to_vec(), vec![1., 0., 1., 1., 0., 1.]);
        // ACGA: A@3→col4
        assert_eq!(matrix.row(1).to_vec(), vec![1., 0., 1., 1., 1., 0.]);
        // TCGA: T@0→col1
        assert_eq!(matrix.row(2).to_vec(), vec![0., 1., 1., 1., 1., 0.]);
    }

    #[test]
    fn test_exactly_one_hot_per_position_block() {
        let (vocab, matrix) = SequenceVocabulary::fit_transform(&sample_records()).unwrap();
        let records = sample_records();

        for (row_idx, record) in records.iter().enumerate() {
            let row: Vec<f32> = matrix.row(row_idx).to_vec();
            for position in 0..vocab.seq_len() {
                let start = vocab.offset(position);
                let block = &row[start..start + vocab.symbols_at(position).len()];

                let hot: Vec<usize> = block
                    .iter()
                    .enumerate()
                    .filter(|(_, &v)| v != 0.0)
                    .map(|(i, _)| i)
                    .collect();

                // Exactly one nonzero entry, and it maps back to
                // the original symbol at that position.
                assert_eq!(hot.len(), 1);
                let symbol = vocab.symbols_at(position)[hot[0]];
                assert_eq!(symbol, record.sequence.chars().nth(position).unwrap());
            }
        }
    }

    #[test]
    fn test_unknown_symbol_is_rejected_not_zeroed() {
        let vocab = SequenceVocabulary::fit(&sample_records()).unwrap();
        let unseen = vec![SequenceRecord::new("ANGT", "0")];
        let err = vocab.transform(&unseen).unwrap_err();

        match err {
            PipelineError::UnknownSymbol { row, position, symbol } => {
                assert_eq!(row,      0);
                assert_eq!(position, 1);
                assert_eq!(symbol,   'N');
            }
            other => panic!("expected UnknownSymbol, got {other:?}"),
        }
    }

    #[test]
    fn test_inconsistent_length_at_fit() {
        let records = vec![
            SequenceRecord::new("ACGT", "0"),
            SequenceRecord::new("ACG",  "1"),
        ];
        let err = SequenceVocabulary::fit(&records).unwrap_err();

        match err {
            PipelineError::InconsistentLength { row, expected, found } => {
                assert_eq!(row,      1);
                assert_eq!(expected, 4);
                assert_eq!(found,    3);
            }
            other => panic!("expected InconsistentLength, got {other:?}"),
        }
    }

    #[test]
    fn test_inconsistent_length_at_transform() {
        let vocab = SequenceVocabulary::fit(&sample_records()).unwrap();
        let short = vec![SequenceRecord::new("ACGTA", "0")];
        let err   = vocab.transform(&short).unwrap_err();

        assert!(matches!(
            err,
            PipelineError::InconsistentLength { row: 0, expected: 4, found: 5 }
        ));
    }

    #[test]
    fn test_empty_input_cannot_be_fitted() {
        let err = SequenceVocabulary::fit(&[]).unwrap_err();
        assert!(matches!(err, PipelineError::EmptyInput));
    }

    #[test]
    fn test_refit_is_byte_identical() {
        let records = sample_records();
        let first   = SequenceVocabulary::fit(&records).unwrap();
        let second  = SequenceVocabulary::fit(&records).unwrap();

        // Same data, same vocabulary, same column layout.
        assert_eq!(first, second);
        assert_eq!(
            first.transform(&records).unwrap(),
            second.transform(&records).unwrap()
        );
    }

    #[test]
    fn test_label_codes_are_sorted_and_aligned() {
        let records = sample_records();
        let labels  = LabelVocabulary::fit(&records).unwrap();

        assert_eq!(labels.classes(), &["0".to_string(), "1".to_string()]);
        assert_eq!(labels.encode(&records).unwrap().to_vec(), vec![0, 1, 0]);
    }

    #[test]
    fn test_categorical_labels_get_deterministic_codes() {
        let records = vec![
            SequenceRecord::new("AC", "promoter"),
            SequenceRecord::new("GT", "enhancer"),
            SequenceRecord::new("CC", "promoter"),
        ];
        let labels = LabelVocabulary::fit(&records).unwrap();

        // "enhancer" < "promoter" lexicographically
        assert_eq!(labels.classes(), &["enhancer".to_string(), "promoter".to_string()]);
        assert_eq!(labels.encode(&records).unwrap().to_vec(), vec![1, 0, 1]);
    }

    #[test]
    fn test_unknown_label_is_rejected() {
        let labels = LabelVocabulary::fit(&sample_records()).unwrap();
        let unseen = vec![SequenceRecord::new("ACGT", "2")];
        let err    = labels.encode(&unseen).unwrap_err();

        assert!(matches!(err, PipelineError::UnknownLabel { row: 0, .. }));
    }
}
