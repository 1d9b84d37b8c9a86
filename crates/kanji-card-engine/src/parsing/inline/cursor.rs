/// A cursor for byte-wise scanning of a string slice.
///
/// Every position handed back by [`Cursor::find`] points at an ASCII
/// delimiter, so slicing between such positions stays on char boundaries.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being parsed.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    pub fn pos(&self) -> usize {
        self.i
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// The unconsumed remainder.
    pub fn rest(&self) -> &'a str {
        self.s.get(self.i..).unwrap_or("")
    }

    /// Byte index of the next `b` at or after the current position.
    pub fn find(&self, b: u8) -> Option<usize> {
        self.rest()
            .as_bytes()
            .iter()
            .position(|&c| c == b)
            .map(|off| self.i + off)
    }

    /// Text between two byte indices previously returned by [`Cursor::pos`] or [`Cursor::find`].
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        self.s.get(start..end).unwrap_or("")
    }

    /// Moves to an absolute byte index.
    pub fn bump_to(&mut self, i: usize) {
        self.i = i;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_basics() {
        let mut cur = Cursor::new("hello");
        assert_eq!(cur.pos(), 0);
        assert!(!cur.eof());
        cur.bump_to(2);
        assert_eq!(cur.rest(), "llo");
    }

    #[test]
    fn find_is_relative_to_current_position() {
        let mut cur = Cursor::new("a|b|c");
        assert_eq!(cur.find(b'|'), Some(1));
        cur.bump_to(2);
        assert_eq!(cur.find(b'|'), Some(3));
        cur.bump_to(4);
        assert_eq!(cur.find(b'|'), None);
    }

    #[test]
    fn find_includes_current_byte() {
        let cur = Cursor::new("[x]");
        assert_eq!(cur.find(b'['), Some(0));
    }

    #[test]
    fn multibyte_text_slices_at_delimiters() {
        let cur = Cursor::new("見[る|みる]");
        let open = cur.find(b'[').unwrap();
        assert_eq!(cur.slice(0, open), "見");
        let sep = cur.find(b'|').unwrap();
        assert_eq!(cur.slice(open + 1, sep), "る");
    }

    #[test]
    fn empty_string_input() {
        let cur = Cursor::new("");
        assert!(cur.eof());
        assert_eq!(cur.rest(), "");
        assert_eq!(cur.find(b'['), None);
    }

    #[test]
    fn bump_past_end_is_eof() {
        let mut cur = Cursor::new("ab");
        cur.bump_to(2);
        assert!(cur.eof());
        assert_eq!(cur.rest(), "");
    }
}
