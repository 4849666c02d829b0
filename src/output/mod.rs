//! Serializes the enumeration result.
//!
//! The success path of the binary emits exactly one JSON document on
//! stdout: the `Enumeration` pretty-printed with two-space indentation and
//! a trailing newline. Everything else (warnings, debug logs) goes to the
//! logger on stderr.

use crate::core_types::Enumeration;
use crate::errors::{io_error_with_path, Result};
use std::io::Write;

/// Writes `result` to `writer` as pretty-printed JSON.
pub fn write_json(result: &Enumeration, writer: &mut dyn Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, result)?;
    writeln!(writer).map_err(|e| io_error_with_path(e, "<output>"))?;
    Ok(())
}
