//! # Block Parsing
//!
//! Two-phase, line-oriented block scanning.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each trimmed line becomes a `LineClass` holding
//!    local facts only (fence signature and what block the line would open)
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` tracks the open fence, the open
//!    table and the component stack, and emits `Node`s as blocks complete
//!
//! ## Modules
//!
//! - **`kinds`**: block-specific types with owned delimiters (CodeFence, Table, Component, ...)
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`containers`**: `ComponentStack` of open `::name` components
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Fenced code blocks are raw zones: no block/inline parsing inside
//! - A fence closes only on a fence of the same backtick count
//! - Nothing here fails: malformed input degrades to text with a warning

pub mod builder;
pub mod classify;
pub mod containers;
pub mod kinds;

pub use builder::BlockBuilder;
pub use classify::{BlockClass, LineClass, MarkdownLineClassifier};
pub use containers::ComponentStack;
