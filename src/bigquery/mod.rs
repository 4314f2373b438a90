mod auth;
mod client;

pub use client::BigQueryClient;

use crate::error::Result;
use async_trait::async_trait;
use gcp_bigquery_client::model::table::Table;
use gcp_bigquery_client::model::table_data_insert_all_request::TableDataInsertAllRequest;
use gcp_bigquery_client::model::table_data_insert_all_response::TableDataInsertAllResponse;

#[async_trait]
pub trait BigQueryOperations {
    async fn get_table(
        &self,
        project_id: &str,
        dataset_id: &str,
        table_id: &str,
    ) -> Result<Table>;

    async fn create_table(&self, table: Table) -> Result<Table>;

    async fn insert_all(
        &self,
        project_id: &str,
        dataset_id: &str,
        table_id: &str,
        request: TableDataInsertAllRequest,
    ) -> Result<TableDataInsertAllResponse>;
}
