//! Byte-line iteration over buffered readers.

use std::io::{self, BufRead};

/// Reads `\n`-terminated lines into a reused buffer.
///
/// Lines are handed out as raw bytes including their line break, so callers
/// never pay for UTF-8 validation they do not need.
pub(crate) struct LineReader<R> {
    reader: R,
    buf: Vec<u8>,
    line_no: u64,
}

impl<R: BufRead> LineReader<R> {
    pub(crate) fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::with_capacity(1024),
            line_no: 0,
        }
    }

    /// Returns the next line and its 1-based number, or `None` at end of input.
    pub(crate) fn next_line(&mut self) -> io::Result<Option<(u64, &[u8])>> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }
        self.line_no += 1;
        Ok(Some((self.line_no, &self.buf)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_are_numbered_from_one() {
        let mut lines = LineReader::new(&b"a\nbb\nccc"[..]);
        assert_eq!(lines.next_line().unwrap(), Some((1, &b"a\n"[..])));
        assert_eq!(lines.next_line().unwrap(), Some((2, &b"bb\n"[..])));
        assert_eq!(lines.next_line().unwrap(), Some((3, &b"ccc"[..])));
        assert_eq!(lines.next_line().unwrap(), None);
    }
}
