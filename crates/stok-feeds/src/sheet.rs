//! Remote sheet endpoint loader.
//!
//! The endpoint answers `GET` with the whole sheet as a JSON array of row
//! objects. There is no paging and no retry; a failed request leaves the
//! store on its previous snapshot.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use stok_core::{Dataset, DatasetLoader, FetchError};

/// Loads the dataset from a sheet.best-style HTTP endpoint.
#[derive(Debug, Clone)]
pub struct SheetLoader {
    client: Client,
    url: String,
}

impl SheetLoader {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let url = url.into();
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Transport {
                url: url.clone(),
                source: Box::new(e),
            })?;
        Ok(Self { client, url })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn transport(&self, err: reqwest::Error) -> FetchError {
        FetchError::Transport {
            url: self.url.clone(),
            source: Box::new(err),
        }
    }
}

#[async_trait]
impl DatasetLoader for SheetLoader {
    async fn load(&self) -> Result<Dataset, FetchError> {
        tracing::debug!(url = %self.url, "fetching sheet");

        let response = self
            .client
            .get(&self.url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| self.transport(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| self.transport(e))?;
        let dataset = crate::decode_dataset(&body)?;
        tracing::debug!(url = %self.url, bytes = body.len(), records = dataset.len(), "sheet fetched");
        Ok(dataset)
    }

    fn describe(&self) -> String {
        format!("sheet {}", self.url)
    }
}
