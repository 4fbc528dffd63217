use anyhow::{Context, Result};
use async_trait::async_trait;
use escape_core::{HttpResponse, Transport, TransportError};
use std::time::Duration;

/// Live transport backed by a shared `reqwest` client.
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self { client })
    }

    async fn read(response: reqwest::Response) -> Result<HttpResponse, TransportError> {
        let status = response.status().as_u16();
        let body = response.text().await.map_err(network)?;
        log::debug!("<- {status} ({} bytes)", body.len());
        Ok(HttpResponse::new(status, body))
    }
}

fn network(err: reqwest::Error) -> TransportError {
    TransportError::Network(err.to_string())
}

#[async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        log::debug!("-> GET {url}");
        let response = self.client.get(url).send().await.map_err(network)?;
        Self::read(response).await
    }

    async fn post_json(&self, url: &str, body: &str) -> Result<HttpResponse, TransportError> {
        log::debug!("-> POST {url}");
        let response = self
            .client
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body.to_owned())
            .send()
            .await
            .map_err(network)?;
        Self::read(response).await
    }
}
