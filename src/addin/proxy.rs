use reqwest::Client;
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

use crate::api::types::{
    ActionsRequest, ActionsResponse, DraftRequest, DraftResponse, HealthResponse, ImproveRequest,
    ImproveResponse, ReplyRequest, ReplyResponse, SummarizeRequest, SummarizeResponse,
};

/// Where the deployed proxy lives.
pub const API_BASE_URL: &str = "https://outlook-ai-addon.onrender.com/api";

#[derive(Debug, Error)]
pub enum ClientError {
    /// The proxy answered with a non-success status.
    #[error("{0}")]
    Rejected(&'static str),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// HTTP client for the proxy endpoints.
#[derive(Clone, Debug)]
pub struct ProxyClient {
    http: Client,
    base_url: String,
}

impl Default for ProxyClient {
    fn default() -> Self {
        Self::new(API_BASE_URL)
    }
}

impl ProxyClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    async fn post<Req, Resp>(
        &self,
        path: &str,
        body: &Req,
        failure: &'static str,
    ) -> Result<Resp, ClientError>
    where
        Req: Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        let response = self
            .http
            .post(format!("{}/{}", self.base_url, path))
            .json(body)
            .send()
            .await?;

        if !response.status().is_success() {
            tracing::debug!(status = %response.status(), path, "proxy call failed");
            return Err(ClientError::Rejected(failure));
        }

        Ok(response.json().await?)
    }

    pub async fn summarize(&self, subject: &str, body: &str) -> Result<String, ClientError> {
        let req = SummarizeRequest {
            subject: subject.into(),
            body: body.into(),
        };
        let resp: SummarizeResponse = self
            .post("summarize", &req, "Failed to summarize email")
            .await?;
        Ok(resp.summary)
    }

    pub async fn extract_actions(
        &self,
        subject: &str,
        body: &str,
    ) -> Result<Vec<String>, ClientError> {
        let req = ActionsRequest {
            subject: subject.into(),
            body: body.into(),
        };
        let resp: ActionsResponse = self
            .post("extract-actions", &req, "Failed to extract actions")
            .await?;
        Ok(resp.actions)
    }

    pub async fn draft(&self, instructions: &str, tone: &str) -> Result<String, ClientError> {
        let req = DraftRequest {
            instructions: instructions.into(),
            tone: tone.into(),
        };
        let resp: DraftResponse = self.post("draft", &req, "Failed to draft email").await?;
        Ok(resp.draft)
    }

    pub async fn improve(&self, content: &str) -> Result<String, ClientError> {
        let req = ImproveRequest {
            content: content.into(),
        };
        let resp: ImproveResponse = self
            .post("improve", &req, "Failed to improve email")
            .await?;
        Ok(resp.improved)
    }

    pub async fn quick_reply(&self, subject: &str, body: &str) -> Result<String, ClientError> {
        let req = ReplyRequest {
            subject: subject.into(),
            body: body.into(),
        };
        let resp: ReplyResponse = self
            .post("quick-reply", &req, "Failed to generate reply")
            .await?;
        Ok(resp.reply)
    }

    pub async fn health(&self) -> Result<HealthResponse, ClientError> {
        let response = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }
}
