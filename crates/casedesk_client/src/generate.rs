use reqwest::multipart;

use crate::{FailureKind, GenerateError, GenerateRequest, GeneratedContent};

/// Fixed local endpoint the prototype backend listens on.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8001/api/generate";

#[derive(Debug, Clone)]
pub struct GenerateSettings {
    pub endpoint: String,
}

impl Default for GenerateSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
        }
    }
}

#[async_trait::async_trait]
pub trait Generator: Send + Sync {
    async fn generate(&self, request: &GenerateRequest)
        -> Result<GeneratedContent, GenerateError>;
}

#[derive(Debug, Clone)]
pub struct HttpGenerator {
    settings: GenerateSettings,
}

impl HttpGenerator {
    pub fn new(settings: GenerateSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, GenerateError> {
        // No request timeout and no cancellation: the call resolves or fails
        // whenever the transport does.
        reqwest::Client::builder()
            .build()
            .map_err(|err| GenerateError::new(FailureKind::Network, err.to_string()))
    }
}

#[async_trait::async_trait]
impl Generator for HttpGenerator {
    async fn generate(
        &self,
        request: &GenerateRequest,
    ) -> Result<GeneratedContent, GenerateError> {
        // Read the material first so a vanished file fails before any
        // network traffic.
        let bytes = tokio::fs::read(&request.file_path)
            .await
            .map_err(|err| GenerateError::new(FailureKind::UnreadableFile, err.to_string()))?;

        let part = multipart::Part::bytes(bytes)
            .file_name(request.file_name.clone())
            .mime_str("application/pdf")
            .map_err(|err| GenerateError::new(FailureKind::InvalidResponse, err.to_string()))?;
        let form = multipart::Form::new()
            .part("file", part)
            .text("kind", request.kind.as_str());

        let client = self.build_client()?;
        let response = client
            .post(&self.settings.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|err| GenerateError::new(FailureKind::Network, err.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|err| GenerateError::new(FailureKind::Network, err.to_string()))?;

        if !status.is_success() {
            let detail = serde_json::from_slice::<BackendErrorBody>(&body)
                .ok()
                .and_then(|failure| failure.detail);
            return Err(GenerateError::new(
                FailureKind::Backend {
                    status: status.as_u16(),
                    detail,
                },
                status.to_string(),
            ));
        }

        serde_json::from_slice::<GeneratedContent>(&body)
            .map_err(|err| GenerateError::new(FailureKind::InvalidResponse, err.to_string()))
    }
}

/// Failure body shape; `detail` is the only field the backend promises.
#[derive(serde::Deserialize)]
struct BackendErrorBody {
    detail: Option<String>,
}
