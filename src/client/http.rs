// src/client/http.rs
use async_trait::async_trait;
use log::{debug, warn};
use std::time::Duration;

use super::error::{ClientError, Result};
use crate::api::types::ErrorBody;
use crate::models::{GenerationRequest, GenerationResult};

/// Anything that can turn a request into a password.
#[async_trait]
pub trait GeneratorClient: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResult>;
}

/// Calls `POST /passwords` on a remote generator service.
#[derive(Debug, Clone)]
pub struct HttpGeneratorClient {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpGeneratorClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            endpoint: format!("{}/passwords", base_url.trim_end_matches('/')),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl GeneratorClient for HttpGeneratorClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResult> {
        debug!("📡 POST {} (length={})", self.endpoint, request.length);

        let response = self.http.post(&self.endpoint).json(request).send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response.json::<GenerationResult>().await?);
        }

        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.message,
            Err(e) => {
                warn!("⚠️ Error response without a message body: {}", e);
                format!("Request failed with status code {}", status.as_u16())
            }
        };

        Err(ClientError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}
