// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// This layer takes the input table all the way to the four
// split arrays, strictly in order:
//
//   sequences.csv
//       │
//       ▼
//   CsvLoader             → reads rows into SequenceRecords
//       │
//       ▼
//   SequenceVocabulary    → fit per-position vocabularies,
//   LabelVocabulary         then one-hot transform
//       │
//       ▼
//   train_test_split      → seeded permutation, disjoint
//       │                    train/test partitions
//       ▼
//   ArrayStore (Layer 5)  → .npy artifacts on disk
//
// Each module is responsible for exactly one step, and no
// step starts before its predecessor's whole output exists.
//
// Reference: Rust Book §13 (Iterators and Closures)

/// Reads the delimited input table into records
pub mod loader;

/// Fit/transform one-hot encoding of sequences and labels
pub mod encoder;

/// Deterministic, seeded train/test partitioning
pub mod partitioner;
