//! Validation service client.

use crate::error::{Error, Result};
use crate::normalize::normalize;
use crate::query::{check_config_request, pipeline_types_request, GraphQlRequest};
use crate::response::{
    CheckConfigData, ConfigValidity, GraphQlResponse, PipelineOrError, PipelineTypesData,
};
use crate::types::{build_type_config, TypeConfig};
use async_trait::async_trait;
use pipecheck_config::{ConfigDocument, ValidationResult};
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

/// Anything that can ask the validation service for a verdict.
///
/// [`Client`] speaks GraphQL over HTTP; tests and embedders can supply their
/// own transport.
#[async_trait]
pub trait ConfigValidator: Send + Sync {
    /// Requests a validity verdict for `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the service could not be reached or did not
    /// produce a verdict.
    async fn validate(&self, pipeline_name: &str, config: &ConfigDocument) -> Result<ConfigValidity>;
}

/// Checks a config document and normalizes the service's verdict.
///
/// An absent document is valid and no request is made. Otherwise exactly one
/// request is issued; there is no caching and no retry.
///
/// # Errors
///
/// Returns an error if the validator fails. An invalid document is not an
/// error.
pub async fn check_config<V>(
    validator: &V,
    pipeline_name: &str,
    raw_config: Option<&ConfigDocument>,
) -> Result<ValidationResult>
where
    V: ConfigValidator + ?Sized,
{
    let Some(config) = raw_config else {
        debug!("No config document for '{}', skipping check", pipeline_name);
        return Ok(ValidationResult::Valid);
    };

    let validity = validator.validate(pipeline_name, config).await?;
    Ok(normalize(Some(config), validity))
}

/// GraphQL client for the validation service.
pub struct Client {
    endpoint: reqwest::Url,
    http: reqwest::Client,
}

/// Configuration for the validation client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// GraphQL endpoint URL.
    pub endpoint: String,
    /// Request timeout in seconds.
    pub timeout_seconds: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:3000/graphql".to_string(),
            timeout_seconds: 30,
        }
    }
}

impl Client {
    /// Creates a new client.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is not an http(s) URL or the HTTP
    /// client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let endpoint =
            reqwest::Url::parse(&config.endpoint).map_err(|e| Error::InvalidEndpoint {
                endpoint: config.endpoint.clone(),
                reason: e.to_string(),
            })?;

        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(Error::InvalidEndpoint {
                endpoint: config.endpoint,
                reason: format!("unsupported scheme '{}'", endpoint.scheme()),
            });
        }

        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self { endpoint, http })
    }

    /// Returns the endpoint this client talks to.
    pub const fn endpoint(&self) -> &reqwest::Url {
        &self.endpoint
    }

    /// Checks a config document against a pipeline's config schema.
    ///
    /// # Errors
    ///
    /// Returns an error on transport or service failure.
    pub async fn check_config(
        &self,
        pipeline_name: &str,
        raw_config: Option<&ConfigDocument>,
    ) -> Result<ValidationResult> {
        check_config(self, pipeline_name, raw_config).await
    }

    /// Fetches the type config of a pipeline.
    ///
    /// # Errors
    ///
    /// Returns an error on transport or service failure, or if the pipeline
    /// cannot be loaded.
    pub async fn fetch_type_config(
        &self,
        pipeline_name: &str,
        environment_type_name: &str,
    ) -> Result<TypeConfig> {
        info!("Fetching config types for pipeline '{}'", pipeline_name);

        let data: PipelineTypesData = self.execute(&pipeline_types_request(pipeline_name)).await?;
        let types = match data.pipeline_or_error {
            PipelineOrError::Pipeline { types } => types,
            PipelineOrError::NotFound { message } => {
                return Err(Error::PipelineUnavailable {
                    pipeline: pipeline_name.to_string(),
                    reason: message,
                });
            }
            PipelineOrError::Other => {
                return Err(Error::PipelineUnavailable {
                    pipeline: pipeline_name.to_string(),
                    reason: "service returned an error result".to_string(),
                });
            }
        };

        debug!("Received {} config types", types.len());
        Ok(build_type_config(&types, environment_type_name))
    }

    async fn execute<T: DeserializeOwned>(&self, request: &GraphQlRequest) -> Result<T> {
        debug!("Sending GraphQL request to {}", self.endpoint);

        let response = self
            .http
            .post(self.endpoint.clone())
            .header("content-type", "application/json")
            .header("cache-control", "no-cache")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        debug!("Received response with status: {}", status);

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(Error::ApiError(format!(
                "request failed with status {status}: {error_text}"
            )));
        }

        let envelope: GraphQlResponse<T> = response
            .json()
            .await
            .map_err(|e| Error::ParseError(format!("Failed to parse GraphQL response: {e}")))?;

        Self::unwrap_envelope(envelope)
    }

    fn unwrap_envelope<T>(envelope: GraphQlResponse<T>) -> Result<T> {
        if !envelope.errors.is_empty() {
            let messages: Vec<String> = envelope.errors.into_iter().map(|e| e.message).collect();
            warn!("Service returned {} GraphQL errors", messages.len());
            return Err(Error::GraphQl(messages));
        }

        envelope.data.ok_or(Error::MissingData)
    }
}

#[async_trait]
impl ConfigValidator for Client {
    async fn validate(&self, pipeline_name: &str, config: &ConfigDocument) -> Result<ConfigValidity> {
        info!("Checking config for pipeline '{}'", pipeline_name);

        let data: CheckConfigData = self
            .execute(&check_config_request(pipeline_name, config))
            .await?;
        Ok(data.is_pipeline_config_valid)
    }
}
