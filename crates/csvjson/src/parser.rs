//! Row parser: header detection, cell splitting and row construction.
//!
//! The parser is a pure fold over a sequence of lines. It never touches the
//! filesystem and never fails; ragged rows are padded or truncated to the
//! header width.

use indexmap::IndexMap;
use tracing::debug;

use crate::options::ParserConfig;
use crate::source::str_lines;

/// One data line keyed by header name, in header order.
pub type Row = IndexMap<String, String>;

/// Whitespace as ECMAScript `String.prototype.trim` sees it: Unicode
/// `White_Space` plus U+FEFF, minus U+0085.
pub fn is_trim_whitespace(c: char) -> bool {
    c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}')
}

pub fn trim(s: &str) -> &str {
    s.trim_matches(is_trim_whitespace)
}

/// Splits `line` on the configured delimiter.
///
/// This is a plain substring split: quotes carry no meaning. An empty line
/// yields a single empty cell, so blank lines must be filtered beforehand.
/// An empty delimiter splits between characters.
pub fn split_line(line: &str, config: &ParserConfig) -> Vec<String> {
    let delim = config.delimiter.as_str();
    let cell = |s: &str| {
        if config.trim_cells {
            trim(s).to_string()
        } else {
            s.to_string()
        }
    };
    if line.is_empty() {
        return vec![String::new()];
    }
    if delim.is_empty() {
        let mut buf = [0u8; 4];
        return line.chars().map(|c| cell(c.encode_utf8(&mut buf))).collect();
    }
    line.split(delim).map(cell).collect()
}

/// Zips `cells` against `header`. Missing cells become `""`, extra cells
/// are dropped.
pub fn build_row(header: &[String], cells: Vec<String>) -> Row {
    let mut cells = cells.into_iter();
    let mut row = Row::with_capacity(header.len());
    for name in header {
        row.insert(name.clone(), cells.next().unwrap_or_default());
    }
    row
}

/// Accumulated state of a single parse run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseState {
    header: Option<Vec<String>>,
    rows: Vec<Row>,
}

impl ParseState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(&self) -> Option<&[String]> {
        self.header.as_deref()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Applies one line. The first qualifying line becomes the header; every
    /// later one becomes a row built against that header.
    pub fn consume_line(mut self, line: &str, config: &ParserConfig) -> Self {
        let trimmed = trim(line);
        if trimmed.is_empty() && config.skip_empty_lines {
            return self;
        }
        let cells = split_line(trimmed, config);
        match &self.header {
            None => {
                debug!(columns = cells.len(), "header detected");
                self.header = Some(cells);
            }
            Some(header) => {
                let row = build_row(header, cells);
                self.rows.push(row);
            }
        }
        self
    }

    pub fn finish(self) -> ParseOutput {
        debug!(rows = self.rows.len(), "parse complete");
        ParseOutput {
            header: self.header,
            rows: self.rows,
        }
    }
}

/// Header and rows produced by a completed run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOutput {
    pub header: Option<Vec<String>>,
    pub rows: Vec<Row>,
}

/// Runs the parser over every line in order, starting from an empty state.
pub fn run<I, S>(lines: I, config: &ParserConfig) -> ParseOutput
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .fold(ParseState::new(), |state, line| {
            state.consume_line(line.as_ref(), config)
        })
        .finish()
}

/// Parses an in-memory document. Line breaks are `\n`, `\r\n` or `\r`.
pub fn parse_str(input: &str, config: &ParserConfig) -> ParseOutput {
    run(str_lines(input), config)
}
