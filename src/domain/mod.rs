// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Pure Rust structs, the error taxonomy, and the trait seams
// that define the core concepts of the pipeline.
//
// Rules for this layer:
//   - NO file I/O
//   - NO array math (ndarray lives in the data layer)
//   - Only plain structs, enums, and traits
//
// Keeping this layer pure makes every other layer testable
// against it in isolation.
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// A single raw row of the input table
pub mod record;

// Every fatal failure mode of the pipeline
pub mod error;

// Core abstractions (traits) that other layers implement
pub mod traits;
