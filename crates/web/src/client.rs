//! HTTP client for the schedule API.
//!
//! [`ScheduleApi`] is the seam the views depend on. [`HttpScheduleApi`]
//! implements it with [`reqwest`] against a running server.

use async_trait::async_trait;
use courtside_core::query::EventFilter;
use courtside_core::schedule::{ScheduleEvent, ScheduleInput};
use courtside_core::types::DbId;
use serde::Deserialize;

/// Token returned by a successful admin password check.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthToken {
    pub token: String,
    /// Lifetime in seconds.
    pub expires_in: i64,
}

/// Errors from the schedule API client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, TLS, decoding).
    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// The server's `error` field, or the raw body when absent.
        message: String,
    },
}

impl ClientError {
    /// The session token was missing, invalid or expired.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ClientError::Api { status: 401, .. })
    }
}

/// Operations the views perform against the server.
#[async_trait]
pub trait ScheduleApi: Send + Sync {
    async fn authenticate(&self, password: &str) -> Result<AuthToken, ClientError>;

    /// Public list in display order.
    async fn list_public(&self, filter: EventFilter) -> Result<Vec<ScheduleEvent>, ClientError>;

    /// Admin list, newest first.
    async fn list_admin(&self, token: &str) -> Result<Vec<ScheduleEvent>, ClientError>;

    async fn create(&self, token: &str, input: &ScheduleInput) -> Result<ScheduleEvent, ClientError>;

    async fn update(
        &self,
        token: &str,
        id: DbId,
        input: &ScheduleInput,
    ) -> Result<ScheduleEvent, ClientError>;

    async fn delete(&self, token: &str, id: DbId) -> Result<(), ClientError>;
}

#[derive(Deserialize)]
struct DataEnvelope {
    data: Vec<ScheduleEvent>,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// [`ScheduleApi`] over HTTP.
pub struct HttpScheduleApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpScheduleApi {
    /// * `base_url` - Server origin, e.g. `http://localhost:3000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Reuse an existing [`reqwest::Client`] for connection pooling.
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    // ---- private helpers ----

    /// Return the response unchanged on success, or a [`ClientError::Api`]
    /// carrying the server's error message.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|b| b.error)
            .unwrap_or(body);

        tracing::debug!(status = status.as_u16(), %message, "Schedule API returned an error");
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }

    /// Unwrap the single record a mutation returns in `{ "data": [..] }`.
    async fn parse_single(response: reqwest::Response) -> Result<ScheduleEvent, ClientError> {
        let envelope: DataEnvelope = Self::parse_response(response).await?;
        envelope.data.into_iter().next().ok_or_else(|| ClientError::Api {
            status: 200,
            message: "Response contained no schedule item".into(),
        })
    }
}

#[async_trait]
impl ScheduleApi for HttpScheduleApi {
    async fn authenticate(&self, password: &str) -> Result<AuthToken, ClientError> {
        let response = self
            .client
            .post(self.url("/admin/auth"))
            .json(&serde_json::json!({ "password": password }))
            .send()
            .await?;

        Self::parse_response(response).await
    }

    async fn list_public(&self, filter: EventFilter) -> Result<Vec<ScheduleEvent>, ClientError> {
        let mut request = self.client.get(self.url("/schedule"));
        if let EventFilter::Only(kind) = filter {
            request = request.query(&[("event_type", kind.as_str())]);
        }

        Self::parse_response(request.send().await?).await
    }

    async fn list_admin(&self, token: &str) -> Result<Vec<ScheduleEvent>, ClientError> {
        let response = self
            .client
            .get(self.url("/admin/schedule"))
            .bearer_auth(token)
            .send()
            .await?;

        let envelope: DataEnvelope = Self::parse_response(response).await?;
        Ok(envelope.data)
    }

    async fn create(&self, token: &str, input: &ScheduleInput) -> Result<ScheduleEvent, ClientError> {
        let response = self
            .client
            .post(self.url("/admin/schedule"))
            .bearer_auth(token)
            .json(input)
            .send()
            .await?;

        Self::parse_single(response).await
    }

    async fn update(
        &self,
        token: &str,
        id: DbId,
        input: &ScheduleInput,
    ) -> Result<ScheduleEvent, ClientError> {
        let response = self
            .client
            .put(self.url("/admin/schedule"))
            .query(&[("id", id.to_string())])
            .bearer_auth(token)
            .json(input)
            .send()
            .await?;

        Self::parse_single(response).await
    }

    async fn delete(&self, token: &str, id: DbId) -> Result<(), ClientError> {
        let response = self
            .client
            .delete(self.url("/admin/schedule"))
            .query(&[("id", id.to_string())])
            .bearer_auth(token)
            .send()
            .await?;

        Self::ensure_success(response).await?;
        Ok(())
    }
}
