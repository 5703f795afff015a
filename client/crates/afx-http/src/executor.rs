use crate::{ApiRequest, CancelSignal, HttpError, HttpResult, RequestOutcome};

use afx_config::ApiConfig;

use std::time::Duration;

use log::{debug, error, info, warn};
use reqwest::{Client as ReqwestClient, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Issues requests against one backend base URL.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct RequestExecutor {
    base_url: String,
    client: ReqwestClient,
}

impl RequestExecutor {
    /// Create a new executor
    ///
    /// # Arguments
    /// * `base_url` - Prefix for every endpoint (e.g., "https://crm.example.com/api")
    /// * `timeout` - Optional per-request timeout
    pub fn new(base_url: &str, timeout: Option<Duration>) -> HttpResult<Self> {
        let mut builder = ReqwestClient::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            client: builder.build()?,
        })
    }

    pub fn from_config(config: &ApiConfig) -> HttpResult<Self> {
        Self::new(&config.base_url, config.timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Base URL joined with `endpoint`
    pub fn url_for(&self, endpoint: &str) -> String {
        if endpoint.starts_with('/') {
            format!("{}{}", self.base_url, endpoint)
        } else {
            format!("{}/{}", self.base_url, endpoint)
        }
    }

    /// Issue the request and return the decoded body, or `None` on any failure.
    pub async fn request<T, P>(&self, request: ApiRequest<P>) -> Option<T>
    where
        T: DeserializeOwned,
        P: Serialize,
    {
        self.send(request).await.into_option()
    }

    /// Issue the request and classify the result.
    pub async fn send<T, P>(&self, request: ApiRequest<P>) -> RequestOutcome<T>
    where
        T: DeserializeOwned,
        P: Serialize,
    {
        let method = request.method.clone();
        let endpoint = request.endpoint.clone();

        match self.execute(request).await {
            Ok(value) => RequestOutcome::Success(value),
            Err(e) if e.is_unauthorized() => {
                warn!("{method} {endpoint} rejected as unauthorized: {e}");
                RequestOutcome::Unauthorized
            }
            Err(e) => {
                error!("{method} {endpoint} failed: {e}");
                RequestOutcome::Failed(e)
            }
        }
    }

    /// Like [`send`](Self::send), but abandons the request as soon as
    /// `signal` fires and reports `Canceled`.
    pub async fn send_cancellable<T, P>(
        &self,
        request: ApiRequest<P>,
        signal: &CancelSignal,
    ) -> RequestOutcome<T>
    where
        T: DeserializeOwned,
        P: Serialize,
    {
        if signal.is_canceled() {
            debug!("{} {} canceled before dispatch", request.method, request.endpoint);
            return RequestOutcome::Canceled;
        }

        let method = request.method.clone();
        let endpoint = request.endpoint.clone();

        tokio::select! {
            biased;
            _ = signal.canceled() => {
                info!("{method} {endpoint} canceled");
                RequestOutcome::Canceled
            }
            outcome = self.send(request) => outcome,
        }
    }

    async fn execute<T, P>(&self, request: ApiRequest<P>) -> HttpResult<T>
    where
        T: DeserializeOwned,
        P: Serialize,
    {
        let url = self.url_for(&request.endpoint);
        let headers = request.header_map()?;

        let mut builder = self
            .client
            .request(request.method.clone(), &url)
            .headers(headers);

        if let Some(form) = request.form {
            builder = builder.multipart(form);
        } else if let Some(ref data) = request.data {
            let body = serde_json::to_vec(data).map_err(HttpError::encode)?;
            builder = builder.body(body);
        }

        debug!("{} {}", request.method, url);

        let response = builder.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            return Err(Self::status_error(status, &bytes));
        }

        // An empty success body decodes as JSON null so `()`/Option targets work
        let body: &[u8] = if bytes.iter().all(u8::is_ascii_whitespace) {
            b"null"
        } else {
            &bytes
        };

        serde_json::from_slice(body).map_err(HttpError::decode)
    }

    /// Build a status error, picking up `{"error": {"code", "message"}}` or
    /// `{"message": ...}` bodies when the backend sends them.
    fn status_error(status: StatusCode, bytes: &[u8]) -> HttpError {
        let body: Option<Value> = serde_json::from_slice(bytes).ok();

        let error = body.as_ref().and_then(|b| b.get("error"));
        let code = error
            .and_then(|e| e.get("code"))
            .and_then(|v| v.as_str())
            .unwrap_or("UNKNOWN")
            .to_string();
        let message = error
            .and_then(|e| e.get("message"))
            .or_else(|| body.as_ref().and_then(|b| b.get("message")))
            .and_then(|v| v.as_str())
            .map(String::from)
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string()
            });

        HttpError::status(status.as_u16(), code, message)
    }
}
