pub mod error;
pub mod normalize;
pub mod parsing;
pub mod pipeline;
pub mod render;
pub mod text;

// Re-export key types for easier usage
pub use error::{ConvertError, MalformedAnnotation};
pub use normalize::normalize_rich_text;
pub use parsing::{build_document, build_from_lines, inline::parse_annotated};
pub use pipeline::convert;
pub use render::render_document;
pub use text::{Document, Example, ParsedText, ReadingGroup, Segment};
