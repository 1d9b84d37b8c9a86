//! # Line Parsing
//!
//! Two-phase parsing of the notation, one record per line.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified into a
//!    `LineClass` (blank, reading header, example, or invalid) on its own,
//!    without reference to surrounding lines
//!
//! 2. **Document Construction** (`builder`): a `DocumentBuilder` keeps the
//!    currently open reading group and emits finished groups into the document
//!
//! ## Modules
//!
//! - **`split`**: `split_lines` yields numbered `LineRef`s
//! - **`kinds`**: line kinds with owned patterns (ReadingHeader, ExampleLine)
//! - **`classify`**: `NotationLineClassifier` produces a `LineClass` per line
//! - **`builder`**: `DocumentBuilder` state machine
//!
//! ## Key Invariants
//!
//! - Header and example patterns are mutually exclusive
//! - The last open group is always emitted
//! - Every emitted group has at least one example

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod split;

pub use builder::DocumentBuilder;
pub use classify::{LineClass, NotationLineClassifier};
pub use split::{LineRef, number_lines, split_lines};
