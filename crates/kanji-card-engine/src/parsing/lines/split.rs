/// A single input line with its 1-based line number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRef<'a> {
    pub number: usize,
    pub text: &'a str,
}

/// Splits `source` into lines on `\n`, `\r\n` and lone `\r`.
///
/// Line numbers count `\n`-terminated lines; pieces split off by a lone `\r`
/// share the number of the line they came from.
pub fn split_lines(source: &str) -> impl Iterator<Item = LineRef<'_>> + '_ {
    source.split('\n').enumerate().flat_map(|(idx, line)| {
        let line = line.strip_suffix('\r').unwrap_or(line);
        line.split('\r').map(move |text| LineRef {
            number: idx + 1,
            text,
        })
    })
}

/// Numbers an already split sequence of lines.
pub fn number_lines<'a, I>(lines: I) -> impl Iterator<Item = LineRef<'a>>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .enumerate()
        .map(|(idx, text)| LineRef {
            number: idx + 1,
            text,
        })
}
