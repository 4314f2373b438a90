use serde_json::{Map, Value};

/// A single table row keyed by column name. Values are not checked against the
/// table schema; BigQuery decides what is valid.
pub type Row = Map<String, Value>;

/// Convert raw JSON bytes into a row. Input that does not parse as a JSON object
/// yields an empty row.
pub fn row_from_bytes(data: &[u8]) -> Row {
    serde_json::from_slice(data).unwrap_or_default()
}
