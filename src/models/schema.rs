use gcp_bigquery_client::model::table_schema::TableSchema;

/// Parse a BigQuery table schema document, e.g.
/// `{"fields": [{"name": "user_id", "type": "INTEGER", "mode": "REQUIRED"}]}`.
/// A document that does not parse yields an empty schema; BigQuery decides
/// whether a table can be created from it.
pub fn parse_schema(schema: &[u8]) -> TableSchema {
    serde_json::from_slice(schema).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_schema() {
        let schema = parse_schema(
            br#"{"fields": [
                {"name": "user_id", "type": "INTEGER", "mode": "REQUIRED"},
                {"name": "event", "type": "STRING", "mode": "NULLABLE"}
            ]}"#,
        );

        let value = serde_json::to_value(&schema).unwrap();
        assert_eq!(value["fields"][0]["name"], json!("user_id"));
        assert_eq!(value["fields"][1]["name"], json!("event"));
    }

    #[test]
    fn test_parse_malformed_schema() {
        let schema = parse_schema(br#"{"fields": ["#);

        assert_eq!(
            serde_json::to_value(&schema).unwrap(),
            serde_json::to_value(TableSchema::default()).unwrap()
        );
    }
}
