//! # HTML Rendering
//!
//! Renders a [`Document`] as one `<table>`: a row per example, the reading in
//! the first cell of a group's first row and empty first cells after that.
//!
//! Output layout is fixed (two-space indentation, `\n` between lines, no
//! trailing newline) so previously stored cards compare equal.

use crate::text::{Document, Example, ReadingGroup};

/// Separator between a word and its translation within one cell.
pub const PAIR_SEPARATOR: &str = "&emsp;";

/// Renders the whole document as an HTML table.
pub fn render_document(doc: &Document) -> String {
    let mut lines = vec!["<table>".to_string()];
    for group in doc.groups() {
        write_group(&mut lines, group);
    }
    lines.push("</table>".to_string());
    lines.join("\n")
}

/// Renders `word&emsp;translation`.
pub fn render_example(example: &Example) -> String {
    format!(
        "{}{PAIR_SEPARATOR}{}",
        example.word.render_html(),
        example.translation.render_html()
    )
}

fn write_group(lines: &mut Vec<String>, group: &ReadingGroup) {
    let Some((first, rest)) = group.examples().split_first() else {
        write_row(lines, &group.reading, &render_example(&Example::empty()));
        return;
    };

    write_row(lines, &group.reading, &render_example(first));
    for example in rest {
        write_row(lines, "", &render_example(example));
    }
}

fn write_row(lines: &mut Vec<String>, first: &str, second: &str) {
    lines.push("  <tr>".to_string());
    lines.push(format!("    <td>{first}</td>"));
    lines.push(format!("    <td>{second}</td>"));
    lines.push("  </tr>".to_string());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        parsing::build_document,
        text::{ParsedText, Segment},
    };

    fn example(word: &str, translation: &str) -> Example {
        Example::new(
            ParsedText::new(vec![Segment::plain(word)]),
            ParsedText::new(vec![Segment::plain(translation)]),
        )
    }

    #[test]
    fn empty_document_is_bare_table() {
        assert_eq!(render_document(&Document::default()), "<table>\n</table>");
    }

    #[test]
    fn example_pair_joined_with_em_space() {
        assert_eq!(render_example(&example("彼女", "она")), "彼女&emsp;она");
        assert_eq!(render_example(&Example::empty()), "&emsp;");
    }

    #[test]
    fn groups_render_one_row_per_example() {
        let doc = build_document(
            "ジョ :\n* 女[性|せい] - женщина\n* 彼女 - она\nおんな :\n* 女 - женщина",
        )
        .unwrap();

        insta::assert_snapshot!(render_document(&doc), @r"
        <table>
          <tr>
            <td>ジョ</td>
            <td>女<ruby>性<rt>せい</ruby>&emsp;женщина</td>
          </tr>
          <tr>
            <td></td>
            <td>彼女&emsp;она</td>
          </tr>
          <tr>
            <td>おんな</td>
            <td>女&emsp;женщина</td>
          </tr>
        </table>
        ");
    }

    #[test]
    fn hand_built_group_without_examples_still_gets_a_row() {
        let doc = Document::new(vec![ReadingGroup::with_examples("おんな", vec![])]);
        assert_eq!(
            render_document(&doc),
            "<table>\n  <tr>\n    <td>おんな</td>\n    <td>&emsp;</td>\n  </tr>\n</table>"
        );
    }

    #[test]
    fn trailing_header_renders_empty_pair() {
        let doc = build_document("a:\n* x - y\nb:").unwrap();
        let html = render_document(&doc);
        assert_eq!(html.matches("<tr>").count(), 2);
        assert!(html.ends_with("    <td>b</td>\n    <td>&emsp;</td>\n  </tr>\n</table>"));
    }
}
