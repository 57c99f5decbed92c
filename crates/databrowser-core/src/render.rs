//! Shell-facing rendering of metadata records.

use std::fmt::Write;

use databrowser_abi::MetadataRecord;

/// Render a record for the metadata pane: one `key = value` line per field,
/// in record order, `file name` first.
pub fn render_text(record: &MetadataRecord) -> String {
    let mut out = String::new();
    for (key, value) in record.iter() {
        // writing to a String cannot fail
        let _ = writeln!(out, "{key} = {value}");
    }
    out
}

/// Ordered JSON object for shells that render structured metadata.
pub fn to_json(record: &MetadataRecord) -> serde_json::Value {
    serde_json::to_value(record).unwrap_or(serde_json::Value::Null)
}
