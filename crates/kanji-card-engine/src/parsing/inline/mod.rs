//! # Inline Parsing
//!
//! Cursor-based parsing of `base[text|reading]tail` annotations inside a
//! single word or translation string.
//!
//! ## Modules
//!
//! - **`kinds`**: `Annotation`, owner of the `[`, `|` and `]` delimiters
//! - **`cursor`**: `Cursor` for byte-wise scanning with position tracking
//! - **`parser`**: `parse_annotated()` main entry point
//!
//! ## Strictness
//!
//! There is no escaping and no nesting. An opening `[` that is not completed
//! by `|` and `]` is an error rather than plain text.

pub mod cursor;
pub mod kinds;
pub mod parser;

pub use parser::parse_annotated;
