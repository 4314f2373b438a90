use crate::bigquery::{BigQueryClient, BigQueryOperations};
use crate::error::{AppError, Result};
use crate::models::{Row, parse_schema};
use gcp_bigquery_client::model::table::Table;
use gcp_bigquery_client::model::table_data_insert_all_request::TableDataInsertAllRequest;
use tracing::{debug, info, instrument};

/// Handle for uploading rows into tables of a single BigQuery dataset.
pub struct Uploader<C> {
    client: C,
    project_id: String,
    dataset_id: String,
}

impl Uploader<BigQueryClient> {
    /// Authenticate as the service account and bind the handle to `project_id`
    /// and `dataset_id` for its whole lifetime.
    pub async fn connect(
        private_key: &[u8],
        project_id: String,
        dataset_id: String,
        service_email: &str,
    ) -> Result<Self> {
        let client = BigQueryClient::new(private_key, service_email).await?;

        Ok(Self::new(client, project_id, dataset_id))
    }
}

impl<C> Uploader<C>
where
    C: BigQueryOperations + Sync,
{
    pub fn new(client: C, project_id: String, dataset_id: String) -> Self {
        Self {
            client,
            project_id,
            dataset_id,
        }
    }

    /// Create the table from `schema` unless a lookup for it succeeds.
    ///
    /// Any lookup failure counts as a missing table, so a transient failure on an
    /// existing table surfaces as the creation error. A schema that does not parse
    /// is sent as an empty schema.
    #[instrument(name = "Ensuring table exists", skip(self, schema))]
    pub async fn ensure_table(&self, table_id: &str, schema: &[u8]) -> Result<()> {
        match self
            .client
            .get_table(&self.project_id, &self.dataset_id, table_id)
            .await
        {
            Ok(_) => debug!("Found existing table"),
            Err(e) => {
                debug!(error = %e, "Table lookup failed");

                let table = Table::new(
                    &self.project_id,
                    &self.dataset_id,
                    table_id,
                    parse_schema(schema),
                );
                self.client.create_table(table).await?;

                info!("Created table");
            }
        }

        Ok(())
    }

    #[instrument(name = "Inserting row", skip_all, fields(table_id = %table_id))]
    pub async fn insert_row(&self, table_id: &str, row: Row) -> Result<()> {
        self.send_insert(table_id, wrap_rows(vec![row])?).await
    }

    /// Insert all rows with a single streaming insert request.
    #[instrument(name = "Inserting rows", skip_all, fields(table_id = %table_id))]
    pub async fn insert_rows(&self, table_id: &str, rows: Vec<Row>) -> Result<()> {
        info!(rows = rows.len(), "Sending batch");
        self.send_insert(table_id, wrap_rows(rows)?).await
    }

    /// Send a prepared insert request, e.g. one carrying insert IDs, and fold any
    /// per-row errors in the response into a single [`AppError::Insert`].
    pub async fn send_insert(
        &self,
        table_id: &str,
        request: TableDataInsertAllRequest,
    ) -> Result<()> {
        let response = self
            .client
            .insert_all(&self.project_id, &self.dataset_id, table_id, request)
            .await?;

        match response.insert_errors {
            Some(errors) if !errors.is_empty() => {
                Err(AppError::Insert(serde_json::to_string(&errors)?))
            }
            _ => Ok(()),
        }
    }
}

fn wrap_rows(rows: Vec<Row>) -> Result<TableDataInsertAllRequest> {
    let mut request = TableDataInsertAllRequest::new();
    for row in rows {
        request.add_row(None, row)?;
    }

    Ok(request)
}
