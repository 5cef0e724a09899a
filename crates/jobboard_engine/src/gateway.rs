use std::time::Duration;

use jobboard_core::{Job, JobId, JobInput, JobPage, QueryDescriptor};
use jobboard_logging::{board_debug, board_warn};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Method, Url};
use serde::de::DeserializeOwned;

use crate::wire::{ErrorBody, JobEnvelope, JobPayload, ListResponse};
use crate::{FailureKind, GatewayError};

#[derive(Debug, Clone)]
pub struct GatewaySettings {
    /// API root, e.g. `http://127.0.0.1:5000/api`; `/jobs` is appended.
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for GatewaySettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000/api".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Remote job storage. Implementations must report every failure through
/// the returned `Result`.
#[async_trait::async_trait]
pub trait JobGateway: Send + Sync {
    async fn list_jobs(&self, query: &QueryDescriptor) -> Result<JobPage, GatewayError>;

    async fn create_job(&self, input: &JobInput) -> Result<Job, GatewayError>;

    async fn update_job(&self, id: JobId, input: &JobInput) -> Result<Job, GatewayError>;

    async fn delete_job(&self, id: JobId) -> Result<(), GatewayError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestGateway {
    settings: GatewaySettings,
    client: reqwest::Client,
}

impl ReqwestGateway {
    pub fn new(settings: GatewaySettings) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| GatewayError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    pub fn settings(&self) -> &GatewaySettings {
        &self.settings
    }

    fn jobs_url(&self, id: Option<JobId>) -> Result<Url, GatewayError> {
        let base = self.settings.base_url.trim_end_matches('/');
        let mut url = Url::parse(&format!("{base}/jobs"))
            .map_err(|err| GatewayError::new(FailureKind::InvalidUrl, err.to_string()))?;
        if let Some(id) = id {
            url.path_segments_mut()
                .map_err(|()| {
                    GatewayError::new(FailureKind::InvalidUrl, "base url cannot have a path")
                })?
                .push(&id.to_string());
        }
        Ok(url)
    }

    async fn send(
        &self,
        method: Method,
        url: Url,
        body: Option<Vec<u8>>,
    ) -> Result<Vec<u8>, GatewayError> {
        board_debug!("{} {}", method, url);
        let mut request = self
            .client
            .request(method.clone(), url.clone())
            .header(ACCEPT, "application/json");
        if let Some(body) = body {
            request = request.header(CONTENT_TYPE, "application/json").body(body);
        }

        let response = request.send().await.map_err(map_reqwest_error)?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(map_reqwest_error)?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorBody>(&bytes)
                .ok()
                .and_then(ErrorBody::into_message)
                .unwrap_or_else(|| status.to_string());
            board_warn!("{} {} failed with {}: {}", method, url, status, message);
            return Err(GatewayError::new(
                FailureKind::HttpStatus(status.as_u16()),
                message,
            ));
        }

        Ok(bytes.to_vec())
    }
}

#[async_trait::async_trait]
impl JobGateway for ReqwestGateway {
    async fn list_jobs(&self, query: &QueryDescriptor) -> Result<JobPage, GatewayError> {
        let mut url = self.jobs_url(None)?;
        url.query_pairs_mut().extend_pairs(query.to_query_pairs());
        let body = self.send(Method::GET, url, None).await?;
        decode::<ListResponse>(&body).map(JobPage::from)
    }

    async fn create_job(&self, input: &JobInput) -> Result<Job, GatewayError> {
        let url = self.jobs_url(None)?;
        let body = self
            .send(Method::POST, url, Some(encode(&JobPayload::from(input))?))
            .await?;
        decode::<JobEnvelope>(&body).map(|envelope| Job::from(envelope.job))
    }

    async fn update_job(&self, id: JobId, input: &JobInput) -> Result<Job, GatewayError> {
        let url = self.jobs_url(Some(id))?;
        let body = self
            .send(Method::PUT, url, Some(encode(&JobPayload::from(input))?))
            .await?;
        decode::<JobEnvelope>(&body).map(|envelope| Job::from(envelope.job))
    }

    async fn delete_job(&self, id: JobId) -> Result<(), GatewayError> {
        let url = self.jobs_url(Some(id))?;
        self.send(Method::DELETE, url, None).await?;
        Ok(())
    }
}

fn encode(payload: &JobPayload<'_>) -> Result<Vec<u8>, GatewayError> {
    serde_json::to_vec(payload)
        .map_err(|err| GatewayError::new(FailureKind::InvalidPayload, err.to_string()))
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, GatewayError> {
    serde_json::from_slice(body)
        .map_err(|err| GatewayError::new(FailureKind::MalformedResponse, err.to_string()))
}

fn map_reqwest_error(err: reqwest::Error) -> GatewayError {
    if err.is_timeout() {
        return GatewayError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_builder() {
        return GatewayError::new(FailureKind::InvalidUrl, err.to_string());
    }
    GatewayError::new(FailureKind::Network, err.to_string())
}
