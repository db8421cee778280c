//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via outline assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Renders a tree as a stable, indented text outline that ignores ids,
//!   so expected trees can be written by hand next to fixture documents
//! - **`invariants`**: Runtime checks for tree correctness (list container shape,
//!   sections led by their heading, no script URLs)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::normalize;
