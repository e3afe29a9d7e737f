//! HTTP client for a hosted inference endpoint

use super::error::{HttpInferenceError, Result};
use super::ndjson::pump_fragments;
use super::protocol::{HealthResponse, PredictRequest, PromptRequest, PromptResponse};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, Url};
use streamchat_application::{FragmentStream, InferenceError, InferenceService};
use streamchat_domain::Message;
use tracing::{debug, info};

/// Channel capacity between the body reader and the session
const FRAGMENT_BUFFER: usize = 64;

/// Inference service backed by the `/health`, `/predict`, `/prompt` endpoint
#[derive(Debug, Clone)]
pub struct HttpInferenceService {
    client: Client,
    base: String,
    api_token: Option<String>,
}

impl HttpInferenceService {
    /// Create a client without contacting the endpoint
    pub fn new(endpoint: &str, api_token: Option<String>) -> Result<Self> {
        let parsed = Url::parse(endpoint)
            .map_err(|_| HttpInferenceError::InvalidEndpoint(endpoint.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(HttpInferenceError::InvalidEndpoint(endpoint.to_string()));
        }

        Ok(Self {
            client: Client::new(),
            base: endpoint.trim_end_matches('/').to_string(),
            api_token: api_token.filter(|t| !t.is_empty()),
        })
    }

    /// Create a client and verify the endpoint answers its health check
    pub async fn connect(endpoint: &str, api_token: Option<String>) -> Result<Self> {
        let service = Self::new(endpoint, api_token)?;
        let health = service.health().await?;

        info!(
            "Connected to inference endpoint {} (model: {})",
            service.base,
            health.model.as_deref().unwrap_or("unknown")
        );
        Ok(service)
    }

    pub fn endpoint(&self) -> &str {
        &self.base
    }

    pub async fn health(&self) -> Result<HealthResponse> {
        let response = self.request(self.client.get(self.url("health"))).send().await?;
        let health: HealthResponse = ensure_success(response).await?.json().await?;

        if !health.is_ok() {
            return Err(HttpInferenceError::Unhealthy(health.status));
        }
        Ok(health)
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base, path)
    }

    fn request(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.api_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }
}

async fn ensure_success(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(HttpInferenceError::Status {
        status: status.as_u16(),
        body: body.trim().to_string(),
    })
}

#[async_trait]
impl InferenceService for HttpInferenceService {
    async fn predict(
        &self,
        prompt: &str,
        history: &[Message],
        temperature: f32,
    ) -> std::result::Result<FragmentStream, InferenceError> {
        let body = PredictRequest {
            prompt,
            history,
            temperature,
        };

        debug!(
            "POST {} ({} history messages, temperature {})",
            self.url("predict"),
            history.len(),
            temperature
        );

        let response = self
            .request(self.client.post(self.url("predict")))
            .json(&body)
            .send()
            .await
            .map_err(HttpInferenceError::from)?;
        let response = ensure_success(response).await?;

        let (tx, stream) = FragmentStream::channel(FRAGMENT_BUFFER);
        tokio::spawn(pump_fragments(response.bytes_stream(), tx));
        Ok(stream)
    }

    async fn prompt(
        &self,
        prompt: &str,
        temperature: f32,
    ) -> std::result::Result<String, InferenceError> {
        let body = PromptRequest {
            prompt,
            temperature,
        };

        let response = self
            .request(self.client.post(self.url("prompt")))
            .json(&body)
            .send()
            .await
            .map_err(HttpInferenceError::from)?;
        let reply: PromptResponse = ensure_success(response)
            .await?
            .json()
            .await
            .map_err(HttpInferenceError::from)?;

        Ok(reply.completion)
    }
}
