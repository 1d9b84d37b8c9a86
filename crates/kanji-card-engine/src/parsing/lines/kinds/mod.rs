//! # Line Kinds
//!
//! Each recognised line kind owns its pattern. The classifier asks these
//! types; it never holds a regex of its own.

pub mod example;
pub mod header;

pub use example::ExampleLine;
pub use header::ReadingHeader;
