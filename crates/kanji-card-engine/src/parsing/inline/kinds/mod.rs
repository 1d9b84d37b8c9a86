//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters. The parser refers
//! to these constants and never hardcodes `[`, `|` or `]`.

pub mod annotation;

pub use annotation::Annotation;
