use crate::config::Config;
use crate::error::Result;
use std::fs;
use std::path::Path;
use tracing::info;

pub async fn execute(table_id: &str, schema_path: &Path) -> Result<()> {
    let config = Config::load()?;
    let schema = fs::read(schema_path)?;

    let uploader = super::connect(&config).await?;
    uploader.ensure_table(table_id, &schema).await?;

    info!(table = table_id, "Table ready");

    Ok(())
}
