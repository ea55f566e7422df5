// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates the other layers to accomplish a
// specific goal (preparing a dataset or inspecting one).
//
// Rules for this layer:
//   - No encoding math here (that's Layer 4)
//   - No UI or printing here (that's Layer 1)
//   - No direct file format knowledge (Layers 4 and 5)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// The full preparation pipeline (load → encode → split → persist)
pub mod prepare_use_case;

// Reloading and validating a run's artifacts
pub mod inspect_use_case;
