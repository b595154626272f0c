use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};

use crate::error::ClientError;
use crate::types::ClientConfig;
use fleetdeck_core::{AppResult, RecordStore};
use fleetdeck_types::{Host, HostId};

/// Client for the fleet admin API's host endpoints.
pub struct HostApiClient {
    client: Client,
    config: ClientConfig,
}

impl HostApiClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    /// Fetch all hosts in server order.
    pub async fn list_hosts(&self) -> Result<Vec<Host>, ClientError> {
        let resp = self
            .client
            .get(self.url("/api/hosts"))
            .bearer_auth(&self.config.api_token)
            .send()
            .await?;
        parse_json(resp).await
    }

    /// Create a host; the response carries the server-assigned id.
    pub async fn create_host(&self, host: &Host) -> Result<Host, ClientError> {
        let resp = self
            .client
            .post(self.url("/api/hosts"))
            .bearer_auth(&self.config.api_token)
            .json(host)
            .send()
            .await?;
        parse_json(resp).await
    }

    /// Replace a single host by id.
    pub async fn modify_host(&self, id: HostId, host: &Host) -> Result<Host, ClientError> {
        let resp = self
            .client
            .put(self.url(&format!("/api/hosts/{}", id)))
            .bearer_auth(&self.config.api_token)
            .json(host)
            .send()
            .await?;
        parse_json(resp).await
    }

    /// Bulk-update many hosts in one call.
    pub async fn modify_hosts(&self, hosts: &[Host]) -> Result<(), ClientError> {
        let resp = self
            .client
            .put(self.url("/api/hosts"))
            .bearer_auth(&self.config.api_token)
            .json(hosts)
            .send()
            .await?;
        check_status(resp).await?;
        Ok(())
    }

    /// Delete a host by id.
    pub async fn remove_host(&self, id: HostId) -> Result<(), ClientError> {
        let resp = self
            .client
            .delete(self.url(&format!("/api/hosts/{}", id)))
            .bearer_auth(&self.config.api_token)
            .send()
            .await?;
        check_status(resp).await?;
        Ok(())
    }
}

async fn check_status(resp: Response) -> Result<Response, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let message = resp.text().await.unwrap_or_default();
    tracing::debug!("Admin API returned {}: {}", status, message);
    Err(ClientError::ServerError { status: status.as_u16(), message })
}

async fn parse_json<T: serde::de::DeserializeOwned>(resp: Response) -> Result<T, ClientError> {
    let resp = check_status(resp).await?;
    resp.json()
        .await
        .map_err(|e| ClientError::InvalidResponse(e.to_string()))
}

#[async_trait]
impl RecordStore for HostApiClient {
    async fn list(&self) -> AppResult<Vec<Host>> {
        Ok(self.list_hosts().await?)
    }

    async fn create(&self, host: &Host) -> AppResult<Host> {
        Ok(self.create_host(host).await?)
    }

    async fn modify(&self, id: HostId, host: &Host) -> AppResult<Host> {
        Ok(self.modify_host(id, host).await?)
    }

    async fn modify_many(&self, hosts: &[Host]) -> AppResult<()> {
        Ok(self.modify_hosts(hosts).await?)
    }

    async fn remove(&self, id: HostId) -> AppResult<()> {
        Ok(self.remove_host(id).await?)
    }
}
