//! Sheet-service implementation of the data fetch facade.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, info};

use crate::error::FetchError;
use crate::models::{EventEntry, FaqEntry, ScheduleEntry};
use crate::sheets::{decode_rows, sheet_url};
use crate::traits::{DataSource, Headers, HttpClient};

/// Sheet names for the three collections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetNames {
    pub schedule: String,
    pub events: String,
    pub faq: String,
}

impl Default for SheetNames {
    fn default() -> Self {
        Self {
            schedule: "Ensalamento".to_string(),
            events: "Eventos".to_string(),
            faq: "FAQ".to_string(),
        }
    }
}

/// Fetches each collection from `{base_url}/{sheet}` over an [`HttpClient`].
pub struct SheetDataSource {
    client: Arc<dyn HttpClient>,
    base_url: String,
    sheets: SheetNames,
}

impl SheetDataSource {
    pub fn new(client: Arc<dyn HttpClient>, base_url: impl Into<String>, sheets: SheetNames) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            sheets,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET one sheet and decode its rows.
    async fn fetch_sheet<T: DeserializeOwned>(&self, sheet: &str) -> Result<Vec<T>, FetchError> {
        let url = sheet_url(&self.base_url, sheet);
        let mut headers = Headers::new();
        headers.insert("Accept".to_string(), "application/json".to_string());

        debug!(sheet, url = %url, "fetching sheet");

        let response = self
            .client
            .get(&url, &headers)
            .await
            .map_err(|e| FetchError::from_http(e, &url))?;

        if !response.is_success() {
            let message = response
                .text()
                .unwrap_or_default()
                .chars()
                .take(200)
                .collect::<String>();
            return Err(FetchError::HttpStatus {
                url,
                status: response.status,
                message,
            });
        }

        let rows: Vec<T> = decode_rows(sheet, &response.body)?;
        info!(sheet, rows = rows.len(), "sheet loaded");
        Ok(rows)
    }
}

#[async_trait]
impl DataSource for SheetDataSource {
    async fn fetch_schedule_entries(&self) -> Result<Vec<ScheduleEntry>, FetchError> {
        self.fetch_sheet(&self.sheets.schedule).await
    }

    async fn fetch_events(&self) -> Result<Vec<EventEntry>, FetchError> {
        self.fetch_sheet(&self.sheets.events).await
    }

    async fn fetch_faq_entries(&self) -> Result<Vec<FaqEntry>, FetchError> {
        self.fetch_sheet(&self.sheets.faq).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use crate::traits::{HttpError, Response};
    use bytes::Bytes;

    fn source(client: &MockHttpClient) -> SheetDataSource {
        SheetDataSource::new(
            Arc::new(client.clone()),
            "http://sheets.test/abc",
            SheetNames::default(),
        )
    }

    #[tokio::test]
    async fn test_fetch_schedule_entries() {
        let client = MockHttpClient::new();
        client.set_response(
            "http://sheets.test/abc/Ensalamento",
            MockResponse::Success(Response::new(
                200,
                Bytes::from(r#"[{"curso":"Direito","turno":"Noturno","periodo":"1","dia":"Segunda"}]"#),
            )),
        );

        let entries = source(&client).fetch_schedule_entries().await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].course, "Direito");

        let requests = client.get_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0].headers.get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[tokio::test]
    async fn test_non_success_status_is_http_status_error() {
        let client = MockHttpClient::new();
        client.set_response(
            "http://sheets.test/abc/Eventos",
            MockResponse::Success(Response::new(500, Bytes::from("boom"))),
        );

        let err = source(&client).fetch_events().await.unwrap_err();
        assert_eq!(
            err,
            FetchError::HttpStatus {
                url: "http://sheets.test/abc/Eventos".to_string(),
                status: 500,
                message: "boom".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_transport_error_is_mapped() {
        let client = MockHttpClient::new();
        client.set_response(
            "http://sheets.test/abc/FAQ",
            MockResponse::Error(HttpError::Timeout("15s".to_string())),
        );

        let err = source(&client).fetch_faq_entries().await.unwrap_err();
        assert!(matches!(err, FetchError::Timeout { .. }));
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let client = MockHttpClient::new();
        client.set_response(
            "http://sheets.test/abc/FAQ",
            MockResponse::Success(Response::new(200, Bytes::from("not json"))),
        );

        let err = source(&client).fetch_faq_entries().await.unwrap_err();
        assert!(matches!(err, FetchError::Decode { .. }));
    }
}
