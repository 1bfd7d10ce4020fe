//! File-level entry points.
//!
//! Three operations with different failure contracts:
//!
//! * [`CsvParser::parse`] captures every failure in [`ParseResult::error`].
//! * [`CsvParser::parse_to_json`] returns the captured failure as `Err`.
//! * [`CsvParser::convert`] logs the failure and returns `None`.

use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use tracing::{debug, error};

use crate::error::{Error, Result};
use crate::options::{Options, ParserConfig};
use crate::parser::{ParseOutput, ParseState, Row};
use crate::source::LineSource;

/// Outcome of [`CsvParser::parse`].
///
/// When `error` is set, `rows` is empty and `header` is `None`.
#[derive(Debug, Default)]
pub struct ParseResult {
    pub rows: Vec<Row>,
    pub header: Option<Vec<String>>,
    pub error: Option<Error>,
}

impl ParseResult {
    fn failed(error: Error) -> Self {
        Self {
            rows: Vec::new(),
            header: None,
            error: Some(error),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    pub fn into_result(self) -> Result<Vec<Row>> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.rows),
        }
    }
}

impl From<Result<ParseOutput>> for ParseResult {
    fn from(res: Result<ParseOutput>) -> Self {
        match res {
            Ok(out) => Self {
                rows: out.rows,
                header: out.header,
                error: None,
            },
            Err(e) => Self::failed(e),
        }
    }
}

/// Rejects empty paths and paths without a `.csv` extension (any case).
pub fn validate_path(path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(Error::MissingPath);
    }
    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    if !is_csv {
        return Err(Error::InvalidExtension {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

/// Parses CSV from any reader, decoding with `options.encoding`.
pub fn parse_reader<R: Read>(reader: R, options: &Options) -> Result<ParseOutput> {
    let source = LineSource::new(BufReader::new(reader), options.encoding)?;
    fold_lines(source, &options.config)
}

fn fold_lines<R: BufRead>(mut source: LineSource<R>, config: &ParserConfig) -> Result<ParseOutput> {
    let state = source.try_fold(ParseState::new(), |state, line| {
        Ok::<_, Error>(state.consume_line(&line?, config))
    })?;
    Ok(state.finish())
}

/// Reusable CSV-to-JSON converter holding immutable [`Options`].
#[derive(Debug, Clone, Default)]
pub struct CsvParser {
    options: Options,
}

impl CsvParser {
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    fn try_parse(&self, path: &Path) -> Result<ParseOutput> {
        validate_path(path)?;
        debug!(path = %path.display(), encoding = self.options.encoding.name(), "opening csv");
        let source = LineSource::open(path, self.options.encoding)?;
        fold_lines(source, &self.options.config)
    }

    /// Parses the file at `path`. Never fails; see [`ParseResult::error`].
    pub fn parse<P: AsRef<Path>>(&self, path: P) -> ParseResult {
        self.try_parse(path.as_ref()).into()
    }

    /// Parses the file and renders the rows as indented JSON.
    pub fn parse_to_json<P: AsRef<Path>>(&self, path: P) -> Result<String> {
        let rows = self.parse(path).into_result()?;
        crate::ser::to_json_string(&rows)
    }

    /// Like [`parse_to_json`](Self::parse_to_json), but logs any failure
    /// and returns `None`.
    pub fn convert<P: AsRef<Path>>(&self, path: P) -> Option<String> {
        let path = path.as_ref();
        match self.parse_to_json(path) {
            Ok(json) => Some(json),
            Err(e) => {
                error!(path = %path.display(), kind = ?e.kind(), "csv conversion failed: {e}");
                None
            }
        }
    }
}

/// Converts with the default settings: comma, blank lines skipped, cells
/// trimmed, UTF-8. Failures are logged and yield `None`.
pub fn convert<P: AsRef<Path>>(path: P) -> Option<String> {
    CsvParser::default().convert(path)
}
