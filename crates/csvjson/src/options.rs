use encoding_rs::Encoding;

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Delimiter {
    #[default]
    Comma,
    Tab,
    Semicolon,
    Pipe,
    /// Arbitrary separator string. An empty string disables splitting.
    Custom(String),
}

impl Delimiter {
    pub fn as_str(&self) -> &str {
        match self {
            Delimiter::Comma => ",",
            Delimiter::Tab => "\t",
            Delimiter::Semicolon => ";",
            Delimiter::Pipe => "|",
            Delimiter::Custom(s) => s,
        }
    }
}

impl From<&str> for Delimiter {
    fn from(s: &str) -> Self {
        match s {
            "," => Delimiter::Comma,
            "\t" => Delimiter::Tab,
            ";" => Delimiter::Semicolon,
            "|" => Delimiter::Pipe,
            other => Delimiter::Custom(other.to_string()),
        }
    }
}

impl From<char> for Delimiter {
    fn from(c: char) -> Self {
        let mut buf = [0u8; 4];
        Delimiter::from(&*c.encode_utf8(&mut buf))
    }
}

/// Settings of the row parser itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    pub delimiter: Delimiter,
    /// Ignore lines that are blank after trimming.
    pub skip_empty_lines: bool,
    /// Trim surrounding whitespace from every cell.
    pub trim_cells: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiter: Delimiter::default(),
            skip_empty_lines: true,
            trim_cells: true,
        }
    }
}

/// Parser settings plus the text encoding used to read files.
///
/// Every `with_*` call replaces the corresponding default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub config: ParserConfig,
    pub encoding: &'static Encoding,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            config: ParserConfig::default(),
            encoding: encoding_rs::UTF_8,
        }
    }
}

impl Options {
    pub fn with_delimiter(mut self, delimiter: impl Into<Delimiter>) -> Self {
        self.config.delimiter = delimiter.into();
        self
    }

    pub fn with_skip_empty_lines(mut self, skip: bool) -> Self {
        self.config.skip_empty_lines = skip;
        self
    }

    pub fn with_trim_cells(mut self, trim: bool) -> Self {
        self.config.trim_cells = trim;
        self
    }

    pub fn with_encoding(mut self, encoding: &'static Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Looks the encoding up by its WHATWG label, e.g. `"latin1"` or `"utf-8"`.
    pub fn with_encoding_label(self, label: &str) -> Result<Self> {
        let encoding = Encoding::for_label(label.trim().as_bytes())
            .ok_or_else(|| Error::UnsupportedEncoding(label.to_string()))?;
        Ok(self.with_encoding(encoding))
    }
}
