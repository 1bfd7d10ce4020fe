//! Lazy line reader with text decoding.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use encoding_rs::Encoding;

use crate::error::{Error, Result};

const UTF8_BOM: &str = "\u{feff}";

/// Yields decoded lines from a byte stream, one at a time.
///
/// Lines end at `\n`, `\r\n` or a bare `\r`. A trailing line break does
/// not produce an extra empty line.
pub struct LineSource<R> {
    reader: R,
    encoding: &'static Encoding,
    buf: Vec<u8>,
    line_no: usize,
    // last line ended with '\r'; a leading '\n' belongs to that break
    after_cr: bool,
    done: bool,
}

impl LineSource<BufReader<File>> {
    pub fn open<P: AsRef<Path>>(path: P, encoding: &'static Encoding) -> Result<Self> {
        let file = File::open(path)?;
        Self::new(BufReader::new(file), encoding)
    }
}

impl<R: BufRead> LineSource<R> {
    /// Fails for encodings whose line breaks are not single `\n`/`\r` bytes.
    pub fn new(reader: R, encoding: &'static Encoding) -> Result<Self> {
        if !encoding.is_ascii_compatible() {
            return Err(Error::UnsupportedEncoding(encoding.name().to_string()));
        }
        Ok(Self {
            reader,
            encoding,
            buf: Vec::new(),
            line_no: 0,
            after_cr: false,
            done: false,
        })
    }

    /// 1-based number of the last line returned.
    pub fn line_number(&self) -> usize {
        self.line_no
    }

    /// Fills `buf` with the next raw line, without its terminator. Returns
    /// `false` at end of input.
    fn read_raw_line(&mut self) -> Result<bool> {
        self.buf.clear();
        if self.after_cr {
            self.after_cr = false;
            if self.reader.fill_buf()?.first() == Some(&b'\n') {
                self.reader.consume(1);
            }
        }
        let mut read_any = false;
        loop {
            let available = self.reader.fill_buf()?;
            if available.is_empty() {
                return Ok(read_any);
            }
            read_any = true;
            match available.iter().position(|&b| b == b'\n' || b == b'\r') {
                Some(pos) => {
                    self.after_cr = available[pos] == b'\r';
                    self.buf.extend_from_slice(&available[..pos]);
                    self.reader.consume(pos + 1);
                    return Ok(true);
                }
                None => {
                    let len = available.len();
                    self.buf.extend_from_slice(available);
                    self.reader.consume(len);
                }
            }
        }
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        if !self.read_raw_line()? {
            return Ok(None);
        }
        self.line_no += 1;

        let text = self
            .encoding
            .decode_without_bom_handling_and_without_replacement(&self.buf)
            .ok_or(Error::Decode {
                line: self.line_no,
                encoding: self.encoding.name(),
            })?;
        let text = if self.line_no == 1 {
            text.strip_prefix(UTF8_BOM).unwrap_or(&*text).to_string()
        } else {
            text.into_owned()
        };
        Ok(Some(text))
    }
}

/// Splits an in-memory document with the same line-break rules as
/// [`LineSource`].
pub fn str_lines(input: &str) -> StrLines<'_> {
    StrLines { rest: input }
}

pub struct StrLines<'a> {
    rest: &'a str,
}

impl<'a> Iterator for StrLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        match self.rest.find(['\n', '\r']) {
            Some(pos) => {
                let line = &self.rest[..pos];
                let skip = if self.rest[pos..].starts_with("\r\n") { 2 } else { 1 };
                self.rest = &self.rest[pos + skip..];
                Some(line)
            }
            None => {
                let line = self.rest;
                self.rest = "";
                Some(line)
            }
        }
    }
}

impl<R: BufRead> Iterator for LineSource<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.read_line() {
            Ok(Some(line)) => Some(Ok(line)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(bytes: &[u8], encoding: &'static Encoding) -> Result<Vec<String>> {
        LineSource::new(bytes, encoding)?.collect()
    }

    #[test]
    fn splits_lf_and_crlf() {
        let lines = collect(b"a,b\r\n1,2\n3,4", encoding_rs::UTF_8).unwrap();
        assert_eq!(lines, vec!["a,b", "1,2", "3,4"]);
    }

    #[test]
    fn bare_cr_ends_a_line() {
        let lines = collect(b"a,b\r1,2\r3,4\r", encoding_rs::UTF_8).unwrap();
        assert_eq!(lines, vec!["a,b", "1,2", "3,4"]);
        let lines = collect(b"a\r\rb\r\n\nc", encoding_rs::UTF_8).unwrap();
        assert_eq!(lines, vec!["a", "", "b", "", "c"]);
    }

    #[test]
    fn crlf_split_across_reads() {
        let reader = BufReader::with_capacity(2, &b"a\r\nbc\r\nd"[..]);
        let lines: Vec<String> = LineSource::new(reader, encoding_rs::UTF_8)
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(lines, vec!["a", "bc", "d"]);
    }

    #[test]
    fn str_lines_follows_the_same_rules() {
        let input = "a,b\r1,2\r\n3,4\n\r\n5";
        let from_str: Vec<&str> = str_lines(input).collect();
        let from_bytes = collect(input.as_bytes(), encoding_rs::UTF_8).unwrap();
        assert_eq!(from_str, vec!["a,b", "1,2", "3,4", "", "5"]);
        assert_eq!(from_bytes, from_str);
        assert_eq!(str_lines("x\r").collect::<Vec<_>>(), vec!["x"]);
        assert_eq!(str_lines("").count(), 0);
    }

    #[test]
    fn trailing_newline_adds_no_line() {
        let lines = collect(b"a\n\n", encoding_rs::UTF_8).unwrap();
        assert_eq!(lines, vec!["a", ""]);
        assert!(collect(b"", encoding_rs::UTF_8).unwrap().is_empty());
    }

    #[test]
    fn strips_bom_from_first_line_only() {
        let lines = collect("\u{feff}a\n\u{feff}b".as_bytes(), encoding_rs::UTF_8).unwrap();
        assert_eq!(lines, vec!["a".to_string(), "\u{feff}b".to_string()]);
    }

    #[test]
    fn decodes_windows_1252() {
        let lines = collect(b"caf\xe9\n", encoding_rs::WINDOWS_1252).unwrap();
        assert_eq!(lines, vec!["café"]);
    }

    #[test]
    fn malformed_utf8_reports_line() {
        let mut src = LineSource::new(&b"ok\nbad\xff\nnever"[..], encoding_rs::UTF_8).unwrap();
        assert_eq!(src.next().unwrap().unwrap(), "ok");
        match src.next() {
            Some(Err(Error::Decode { line, .. })) => assert_eq!(line, 2),
            other => panic!("expected decode error, got {:?}", other),
        }
        assert!(src.next().is_none());
    }

    #[test]
    fn rejects_utf16() {
        assert!(matches!(
            LineSource::new(&b""[..], encoding_rs::UTF_16LE),
            Err(Error::UnsupportedEncoding(_))
        ));
    }
}
