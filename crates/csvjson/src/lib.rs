#![doc = include_str!("../README.md")]

pub mod convert;
pub mod error;
pub mod options;
pub mod parser;
pub mod ser;
pub mod source;

pub use crate::convert::{CsvParser, ParseResult, convert, parse_reader, validate_path};
pub use crate::error::{Error, ErrorKind, Result};
pub use crate::options::{Delimiter, Options, ParserConfig};
pub use crate::parser::{ParseOutput, Row, parse_str, split_line};
pub use crate::ser::{to_json_string, to_json_writer};
