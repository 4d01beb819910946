//! Integration test crate for the aruuz workspace.
//!
//! Holds no library code; the end-to-end scenarios and engine properties
//! live under `tests/`.
