use crate::error::{AppError, Result};
use gcp_bigquery_client::yup_oauth2::ServiceAccountKey;

const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";

/// Build a service account key for the signed JWT flow from a PEM private key
/// and the service account email.
pub(super) fn service_account_key(
    private_key: &[u8],
    service_email: &str,
) -> Result<ServiceAccountKey> {
    let private_key = String::from_utf8(private_key.to_vec())
        .map_err(|e| AppError::Auth(format!("Private key is not PEM text: {}", e)))?;

    Ok(ServiceAccountKey {
        key_type: Some("service_account".to_string()),
        project_id: None,
        private_key_id: None,
        private_key,
        client_email: service_email.to_string(),
        client_id: None,
        auth_uri: None,
        token_uri: GOOGLE_TOKEN_URL.to_string(),
        auth_provider_x509_cert_url: None,
        client_x509_cert_url: None,
    })
}
