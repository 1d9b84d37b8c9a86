use crate::{
    error::ConvertError, normalize::normalize_rich_text, parsing::build_document,
    render::render_document,
};

/// Converts raw field content into the readings table.
///
/// Runs normalize → build → render. Nothing is produced unless every step
/// succeeds.
pub fn convert(raw: &str) -> Result<String, ConvertError> {
    let plain = normalize_rich_text(raw);
    let doc = build_document(&plain)?;
    let html = render_document(&doc);
    log::debug!(
        "converted {} input byte(s) into {} output byte(s)",
        raw.len(),
        html.len()
    );
    Ok(html)
}
