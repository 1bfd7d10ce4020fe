//! JSON rendering of parsed rows.

use std::io::Write;

use crate::Result;
use crate::parser::Row;

/// Renders rows as a JSON array of objects indented with two spaces.
pub fn to_json_string(rows: &[Row]) -> Result<String> {
    Ok(serde_json::to_string_pretty(rows)?)
}

pub fn to_json_writer<W: Write>(mut writer: W, rows: &[Row]) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, rows)?;
    writer.flush()?;
    Ok(())
}
