mod insert;
mod show;
mod table;

use crate::bigquery::BigQueryClient;
use crate::config::Config;
use crate::error::Result;
use crate::uploader::Uploader;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use show::ShowResource;

#[derive(Parser, Debug)]
#[command(name = "bq-uploader")]
#[command(about = "Create BigQuery tables and stream rows into them", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub async fn run(&self) -> Result<()> {
        match &self.command {
            Commands::EnsureTable { table, schema } => table::execute(table, schema).await,
            Commands::Insert { table, rows } => insert::execute_batch(table, rows).await,
            Commands::InsertRow { table, row } => insert::execute_single(table, row).await,
            Commands::Show { resource } => resource.execute().await,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a table unless it already exists
    EnsureTable {
        /// Table ID within the configured dataset
        #[arg(long)]
        table: String,
        /// JSON file with the table schema
        #[arg(long)]
        schema: PathBuf,
    },
    /// Insert a JSON array of rows with one request
    Insert {
        #[arg(long)]
        table: String,
        #[arg(long)]
        rows: PathBuf,
    },
    /// Insert a single JSON row
    InsertRow {
        #[arg(long)]
        table: String,
        #[arg(long)]
        row: PathBuf,
    },
    Show {
        #[command(subcommand)]
        resource: ShowResource,
    },
}

async fn connect(config: &Config) -> Result<Uploader<BigQueryClient>> {
    let bigquery = &config.bigquery;

    Uploader::connect(
        &bigquery.private_key()?,
        bigquery.project_id.clone(),
        bigquery.dataset_id.clone(),
        &bigquery.service_email,
    )
    .await
}
