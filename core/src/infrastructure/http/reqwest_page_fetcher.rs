use std::time::Duration;

use reqwest::{
    Client,
    header::{CACHE_CONTROL, CONTENT_TYPE},
};

use crate::domain::{
    common::entities::app_errors::CoreError,
    menu::ports::{FetchedPage, PageFetcher},
};

const USER_AGENT: &str = concat!("lunchbox/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct ReqwestPageFetcher {
    client: Client,
}

impl ReqwestPageFetcher {
    pub fn new(timeout: Duration) -> Result<Self, CoreError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build http client: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Self { client })
    }
}

impl PageFetcher for ReqwestPageFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, CoreError> {
        let response = self
            .client
            .get(url)
            .header(CACHE_CONTROL, "no-store")
            .send()
            .await
            .map_err(|e| CoreError::ExternalServiceError(format!("GET {}: {}", url, e)))?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        let body = response
            .text()
            .await
            .map_err(|e| CoreError::ExternalServiceError(format!("reading {}: {}", url, e)))?;

        Ok(FetchedPage {
            status,
            content_type,
            body,
        })
    }
}
