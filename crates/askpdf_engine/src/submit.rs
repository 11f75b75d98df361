use std::time::Duration;

use askpdf_logging::{askpdf_info, askpdf_warn, preview};
use serde::Deserialize;
use url::Url;

use crate::form::{build_form, load_parts};
use crate::{EngineError, FailureKind, QueryAnswer, QueryRequest, SubmitError};

#[derive(Debug, Clone)]
pub struct SubmitSettings {
    pub backend_url: Url,
    pub connect_timeout: Duration,
    /// No overall deadline unless set; answers can take minutes.
    pub request_timeout: Option<Duration>,
}

impl SubmitSettings {
    pub fn new(backend_url: Url) -> Self {
        Self {
            backend_url,
            connect_timeout: Duration::from_secs(30),
            request_timeout: None,
        }
    }
}

#[async_trait::async_trait]
pub trait Submitter: Send + Sync {
    async fn submit(&self, request: &QueryRequest) -> Result<QueryAnswer, SubmitError>;
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    result: String,
}

#[derive(Debug, Clone)]
pub struct ReqwestSubmitter {
    settings: SubmitSettings,
    client: reqwest::Client,
}

impl ReqwestSubmitter {
    pub fn new(settings: SubmitSettings) -> Result<Self, EngineError> {
        let mut builder = reqwest::Client::builder().connect_timeout(settings.connect_timeout);
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| EngineError::HttpClient(err.to_string()))?;
        Ok(Self { settings, client })
    }
}

#[async_trait::async_trait]
impl Submitter for ReqwestSubmitter {
    async fn submit(&self, request: &QueryRequest) -> Result<QueryAnswer, SubmitError> {
        let url = &self.settings.backend_url;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(SubmitError::new(
                FailureKind::InvalidUrl,
                format!("unsupported scheme {}", url.scheme()),
            ));
        }

        let parts = load_parts(&request.files).await?;
        let total_bytes: usize = parts.iter().map(|part| part.bytes.len()).sum();
        let form = build_form(parts, &request.query)?;

        askpdf_info!(
            "POST {} files={} bytes={} query={}",
            url,
            request.files.len(),
            total_bytes,
            preview(&request.query, 80)
        );

        let response = self
            .client
            .post(url.clone())
            .multipart(form)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        // The body decides the outcome; a non-2xx reply that still carries a
        // `result` is shown like any other answer.
        let status = response.status();
        if !status.is_success() {
            askpdf_warn!("Backend replied with status {}", status);
        }

        let body = response.bytes().await.map_err(map_reqwest_error)?;
        let decoded: QueryResponse = serde_json::from_slice(&body)
            .map_err(|err| SubmitError::new(FailureKind::Decode, err.to_string()))?;

        askpdf_info!(
            "Answer received status={} chars={}",
            status.as_u16(),
            decoded.result.chars().count()
        );
        Ok(QueryAnswer {
            result: decoded.result,
        })
    }
}

fn map_reqwest_error(err: reqwest::Error) -> SubmitError {
    if err.is_timeout() {
        return SubmitError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_decode() {
        return SubmitError::new(FailureKind::Decode, err.to_string());
    }
    SubmitError::new(FailureKind::Network, err.to_string())
}
