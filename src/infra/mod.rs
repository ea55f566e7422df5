// ============================================================
// Layer 5 — Infrastructure Layer
// ============================================================
// Cross-cutting persistence concerns that don't belong in any
// pipeline stage:
//
//   array_store.rs — Saving and loading the split arrays as
//                    self-describing .npy files, committed
//                    atomically via a tmp-file-then-rename.
//
//   vocab_store.rs — Persisting the fitted vocabularies as
//                    JSON so the same encoding can be applied
//                    to new data later.
//
// Keeping these here means the data layer never touches the
// filesystem and stays testable with in-memory values alone.
//
// Reference: Rust Book §7 (Modules)

/// .npy artifact saving and loading
pub mod array_store;

/// Fitted vocabulary persistence
pub mod vocab_store;
