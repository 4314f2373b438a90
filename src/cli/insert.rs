use crate::config::Config;
use crate::error::Result;
use crate::models::{Row, row_from_bytes};
use std::fs;
use std::path::Path;
use tracing::info;

pub async fn execute_batch(table_id: &str, rows_path: &Path) -> Result<()> {
    let config = Config::load()?;
    let rows: Vec<Row> = serde_json::from_slice(&fs::read(rows_path)?)?;
    let count = rows.len();

    let uploader = super::connect(&config).await?;
    uploader.insert_rows(table_id, rows).await?;

    info!(table = table_id, rows = count, "Rows inserted");

    Ok(())
}

pub async fn execute_single(table_id: &str, row_path: &Path) -> Result<()> {
    let config = Config::load()?;
    let row = row_from_bytes(&fs::read(row_path)?);

    let uploader = super::connect(&config).await?;
    uploader.insert_row(table_id, row).await?;

    info!(table = table_id, "Row inserted");

    Ok(())
}
