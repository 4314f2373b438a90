use super::BigQueryOperations;
use crate::bigquery::auth::service_account_key;
use crate::error::Result;
use async_trait::async_trait;
use gcp_bigquery_client::Client;
use gcp_bigquery_client::model::table::Table;
use gcp_bigquery_client::model::table_data_insert_all_request::TableDataInsertAllRequest;
use gcp_bigquery_client::model::table_data_insert_all_response::TableDataInsertAllResponse;
use tracing::instrument;

pub struct BigQueryClient {
    client: Client,
}

impl BigQueryClient {
    /// Create a new BigQueryClient authenticated as the given service account
    #[instrument(name = "Authenticating to BigQuery", skip(private_key))]
    pub async fn new(private_key: &[u8], service_email: &str) -> Result<Self> {
        let key = service_account_key(private_key, service_email)?;
        let client = Client::from_service_account_key(key, false).await?;

        Ok(Self { client })
    }
}

#[async_trait]
impl BigQueryOperations for BigQueryClient {
    #[instrument(name = "Fetching table", skip(self))]
    async fn get_table(
        &self,
        project_id: &str,
        dataset_id: &str,
        table_id: &str,
    ) -> Result<Table> {
        let table = self
            .client
            .table()
            .get(project_id, dataset_id, table_id, None)
            .await?;

        Ok(table)
    }

    #[instrument(name = "Creating table", skip_all)]
    async fn create_table(&self, table: Table) -> Result<Table> {
        let table = self.client.table().create(table).await?;

        Ok(table)
    }

    #[instrument(name = "Inserting rows", skip(self, request))]
    async fn insert_all(
        &self,
        project_id: &str,
        dataset_id: &str,
        table_id: &str,
        request: TableDataInsertAllRequest,
    ) -> Result<TableDataInsertAllResponse> {
        let response = self
            .client
            .tabledata()
            .insert_all(project_id, dataset_id, table_id, request)
            .await?;

        Ok(response)
    }
}
