//! JSON reports.
//!
//! Encodes the same five blocks as the text format, machine-readably. States
//! and labels keep their textual spelling (`Dead`, `e`), so the two formats
//! describe identical reports.

use super::{AutomatonSerializer, Report, ReportError};
use std::io::{Read, Write};

/// Serializer producing pretty-printed JSON reports.
pub struct JsonSerializer;

impl AutomatonSerializer for JsonSerializer {
    fn serialize<W: Write>(report: &Report, writer: W) -> Result<(), ReportError> {
        serde_json::to_writer_pretty(writer, report)?;
        Ok(())
    }

    fn deserialize<R: Read>(reader: R) -> Result<Report, ReportError> {
        Ok(serde_json::from_reader(reader)?)
    }
}
