//! OpenAI Embedding Provider
//!
//! Implements the EmbeddingProvider port using OpenAI's embedding API.
//! Supports text-embedding-3-small, text-embedding-3-large, and ada-002.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use souq_domain::error::{Error, Result};
use souq_domain::ports::EmbeddingProvider;
use souq_domain::value_objects::Embedding;

use crate::constants::{
    EMBEDDING_DIMENSION_OPENAI_LARGE, EMBEDDING_DIMENSION_OPENAI_SMALL, ERROR_MSG_REQUEST_TIMEOUT,
    OPENAI_DEFAULT_BASE_URL,
};
use crate::embedding::helpers::{constructor, fit_dimensions};

/// OpenAI embedding provider
///
/// Implements the `EmbeddingProvider` port against OpenAI's `/embeddings`
/// endpoint. Receives the HTTP client via constructor injection. Every
/// returned vector is fitted to the store width passed at construction,
/// regardless of the model's native dimensionality.
///
/// ## Example
///
/// ```rust,no_run
/// use souq_providers::embedding::OpenAiEmbeddingProvider;
/// use reqwest::Client;
/// use std::time::Duration;
///
/// fn example() -> Result<(), Box<dyn std::error::Error>> {
///     let client = Client::builder()
///         .timeout(Duration::from_secs(30))
///         .build()?;
///     let provider = OpenAiEmbeddingProvider::new(
///         "sk-your-api-key".to_string(),
///         None,
///         "text-embedding-3-small".to_string(),
///         1536,
///         Duration::from_secs(30),
///         client,
///     );
///     Ok(())
/// }
/// ```
pub struct OpenAiEmbeddingProvider {
    api_key: String,
    base_url: Option<String>,
    model: String,
    store_dimensions: usize,
    timeout: Duration,
    http_client: Client,
}

impl OpenAiEmbeddingProvider {
    /// Create a new OpenAI embedding provider
    ///
    /// # Arguments
    /// * `api_key` - OpenAI API key
    /// * `base_url` - Optional custom base URL (defaults to OpenAI API)
    /// * `model` - Model name (e.g., "text-embedding-3-small")
    /// * `store_dimensions` - Fixed vector width of the backing store
    /// * `timeout` - Request timeout duration
    /// * `http_client` - Reqwest HTTP client for making API requests
    pub fn new(
        api_key: String,
        base_url: Option<String>,
        model: String,
        store_dimensions: usize,
        timeout: Duration,
        http_client: Client,
    ) -> Self {
        let api_key = constructor::validate_api_key(&api_key);
        let base_url = constructor::validate_url(base_url);

        Self {
            api_key,
            base_url,
            model,
            store_dimensions,
            timeout,
            http_client,
        }
    }

    /// Get the base URL for this provider
    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(OPENAI_DEFAULT_BASE_URL)
    }

    /// Get the model name
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Native dimensionality of the configured model, before fitting
    pub fn native_dimensions(&self) -> usize {
        match self.model.as_str() {
            "text-embedding-3-small" => EMBEDDING_DIMENSION_OPENAI_SMALL,
            "text-embedding-3-large" => EMBEDDING_DIMENSION_OPENAI_LARGE,
            "text-embedding-ada-002" => EMBEDDING_DIMENSION_OPENAI_SMALL,
            _ => EMBEDDING_DIMENSION_OPENAI_SMALL,
        }
    }

    /// Send embedding request and get response data
    async fn fetch_embeddings(&self, texts: &[String]) -> Result<serde_json::Value> {
        let payload = serde_json::json!({
            "input": texts,
            "model": self.model,
            "encoding_format": "float"
        });

        let response = self
            .http_client
            .post(format!("{}/embeddings", self.base_url()))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .timeout(self.timeout)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    Error::provider_unavailable(format!(
                        "{} {:?}",
                        ERROR_MSG_REQUEST_TIMEOUT, self.timeout
                    ))
                } else {
                    Error::provider_unavailable(format!("HTTP request failed: {}", e))
                }
            })?;

        Self::check_and_parse(response).await
    }

    /// Check response status and parse the JSON body
    ///
    /// Transport and status failures mean the provider cannot serve us
    /// (`ProviderUnavailable`); a 2xx body we cannot read a vector out of
    /// means it answered with nothing usable (`EmptyResponse`).
    async fn check_and_parse(response: reqwest::Response) -> Result<serde_json::Value> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            let code = status.as_u16();

            return Err(match code {
                401 => Error::provider_unavailable(format!(
                    "OpenAI authentication failed: {}",
                    error_text
                )),
                429 => Error::provider_unavailable(format!(
                    "OpenAI rate limit exceeded: {}",
                    error_text
                )),
                500..=599 => Error::provider_unavailable(format!(
                    "OpenAI server error ({}): {}",
                    code, error_text
                )),
                _ => Error::provider_unavailable(format!(
                    "OpenAI request failed ({}): {}",
                    code, error_text
                )),
            });
        }

        response
            .json()
            .await
            .map_err(|e| Error::empty_response(format!("response parse failed: {}", e)))
    }

    /// Parse one embedding vector from response data and fit it to the
    /// store width
    fn parse_embedding(&self, index: usize, item: &serde_json::Value) -> Result<Embedding> {
        let embedding_vec = item["embedding"]
            .as_array()
            .ok_or_else(|| {
                Error::empty_response(format!("invalid embedding format for text {}", index))
            })?
            .iter()
            .map(|v| v.as_f64().unwrap_or(0.0) as f32)
            .collect::<Vec<f32>>();

        if embedding_vec.is_empty() {
            return Err(Error::empty_response(format!(
                "empty embedding for text {}",
                index
            )));
        }

        Ok(Embedding {
            vector: fit_dimensions(embedding_vec, self.store_dimensions),
            model: self.model.clone(),
            dimensions: self.store_dimensions,
        })
    }
}

#[async_trait]
impl EmbeddingProvider for OpenAiEmbeddingProvider {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let response_data = self.fetch_embeddings(texts).await?;

        let data = response_data["data"]
            .as_array()
            .ok_or_else(|| Error::empty_response("invalid response format: missing data array"))?;

        if data.len() != texts.len() {
            return Err(Error::empty_response(format!(
                "response data count mismatch: expected {}, got {}",
                texts.len(),
                data.len()
            )));
        }

        data.iter()
            .enumerate()
            .map(|(i, item)| self.parse_embedding(i, item))
            .collect()
    }

    fn dimensions(&self) -> usize {
        self.store_dimensions
    }

    fn provider_name(&self) -> &str {
        "openai"
    }
}
