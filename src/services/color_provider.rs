use async_trait::async_trait;
use std::sync::Arc;

use crate::error::ProviderError;
use crate::models::{ColorRecord, ProviderConfig, SchemeRequest};

/// Source of color schemes
#[async_trait]
pub trait ColorProvider: Send + Sync {
    /// Fetch an ordered scheme of colors for the request
    async fn fetch_scheme(&self, request: &SchemeRequest)
        -> Result<Vec<ColorRecord>, ProviderError>;
}

#[async_trait]
impl<P: ColorProvider + ?Sized> ColorProvider for Arc<P> {
    async fn fetch_scheme(
        &self,
        request: &SchemeRequest,
    ) -> Result<Vec<ColorRecord>, ProviderError> {
        (**self).fetch_scheme(request).await
    }
}

/// Color provider backed by The Color API scheme endpoint
pub struct ColorApiProvider {
    client: reqwest::Client,
    endpoint: String,
}

impl ColorApiProvider {
    pub fn new(config: &ProviderConfig) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ColorProvider for ColorApiProvider {
    async fn fetch_scheme(
        &self,
        request: &SchemeRequest,
    ) -> Result<Vec<ColorRecord>, ProviderError> {
        tracing::debug!(
            endpoint = %self.endpoint,
            mode = %request.mode,
            count = request.count,
            hsl = %request.hsl_param(),
            "Requesting color scheme"
        );

        let response = self
            .client
            .get(&self.endpoint)
            .query(&request.query_params())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let json: serde_json::Value = serde_json::from_slice(&body)
            .map_err(|e| ProviderError::Malformed(format!("invalid JSON: {e}")))?;

        parse_scheme_response(json)
    }
}

/// Extract the color records from a scheme response body.
///
/// The only accepted shape is an object with an array-valued `colors` field.
pub fn parse_scheme_response(
    body: serde_json::Value,
) -> Result<Vec<ColorRecord>, ProviderError> {
    match body {
        serde_json::Value::Object(mut map) => match map.remove("colors") {
            Some(serde_json::Value::Array(colors)) => {
                Ok(colors.into_iter().map(ColorRecord::new).collect())
            }
            Some(_) => Err(ProviderError::Malformed(
                "`colors` is not an array".to_string(),
            )),
            None => Err(ProviderError::Malformed(
                "missing `colors` field".to_string(),
            )),
        },
        _ => Err(ProviderError::Malformed(
            "response is not a JSON object".to_string(),
        )),
    }
}
