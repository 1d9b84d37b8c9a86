use kanji_card_engine::{ConvertError, build_document, convert, normalize_rich_text};
use pretty_assertions::assert_eq;

#[test]
fn fixture_original_sample() {
    assert_fixture("original_sample");
}

#[test]
fn fixture_editor_markup() {
    assert_fixture("editor_markup");
}

#[test]
fn fixture_empty_groups() {
    assert_fixture("empty_groups");
}

fn assert_fixture(name: &str) {
    let dir = format!("{}/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let input = std::fs::read_to_string(format!("{dir}/{name}.txt")).unwrap();
    let expected = std::fs::read_to_string(format!("{dir}/{name}.html")).unwrap();

    assert_eq!(convert(&input).unwrap(), expected);
}

/// Editor markup and the equivalent hand-written notation build the same document.
#[test]
fn normalized_markup_builds_same_document() {
    let dir = format!("{}/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let markup = std::fs::read_to_string(format!("{dir}/editor_markup.txt")).unwrap();
    let plain = std::fs::read_to_string(format!("{dir}/original_sample.txt")).unwrap();

    let from_markup = build_document(&normalize_rich_text(&markup)).unwrap();
    let from_plain = build_document(&plain).unwrap();
    assert_eq!(from_markup, from_plain);
}

/// Converting the notation a second time gives the same table.
#[test]
fn conversion_is_repeatable() {
    let source = "ジョ :\n* [女|じょ] - женщина";
    assert_eq!(convert(source).unwrap(), convert(source).unwrap());
}

#[test]
fn one_ruby_per_annotation_in_order() {
    let html = convert("r:\n* [一|いち]と[二|に] - [三|さん]").unwrap();
    let first = html.find("<ruby>一<rt>いち</ruby>").unwrap();
    let second = html.find("と<ruby>二<rt>に</ruby>").unwrap();
    let third = html.find("<ruby>三<rt>さん</ruby>").unwrap();
    assert!(first < second && second < third);
    assert_eq!(html.matches("<ruby>").count(), 3);
}

#[test]
fn malformed_annotation_aborts_whole_conversion() {
    let err = convert("r:\n* ok - fine\n* [bad] - x").unwrap_err();
    assert!(matches!(err, ConvertError::MalformedAnnotation { line: 3, .. }));
    assert_eq!(err.to_string(), "line 3: bad annotation: [bad]");
}
