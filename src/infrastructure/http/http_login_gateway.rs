//! `reqwest` implementation of [`LoginGateway`].

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::domain::entities::{AuthResult, Credentials, LoginOutcome};
use crate::domain::ports::LoginGateway;

/// Posts credentials as JSON to a fixed login endpoint.
///
/// # Outcome Mapping
///
/// - 2xx with a JSON body → [`LoginOutcome::Authenticated`], keeping the
///   body text as sent
/// - any other status with a non-null JSON body → [`LoginOutcome::Rejected`],
///   carrying the body's `detail` when it is a non-empty string
/// - connection failure, timeout, a body that is not JSON, or a `null` error
///   body → [`LoginOutcome::Unreachable`]
#[derive(Debug, Clone)]
pub struct HttpLoginGateway {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpLoginGateway {
    /// Creates a gateway for `endpoint`.
    ///
    /// Without `timeout` a request waits for as long as the connection lives.
    ///
    /// # Errors
    ///
    /// Returns a [`reqwest::Error`] if the HTTP client cannot be built (for
    /// example, when the TLS backend fails to initialize).
    pub fn new(endpoint: Url, timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl LoginGateway for HttpLoginGateway {
    async fn login(&self, credentials: &Credentials) -> LoginOutcome {
        debug!(endpoint = %self.endpoint, email = %credentials.email, "Sending login request");

        let response = match self
            .client
            .post(self.endpoint.clone())
            .json(credentials)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => return LoginOutcome::Unreachable(e.to_string()),
        };

        let status = response.status();
        let text = match response.text().await {
            Ok(text) => text,
            Err(e) => return LoginOutcome::Unreachable(e.to_string()),
        };

        debug!(status = status.as_u16(), "Login response received");

        if status.is_success() {
            return match AuthResult::from_json(&text) {
                Ok(user) => LoginOutcome::Authenticated(user),
                Err(e) => LoginOutcome::Unreachable(format!(
                    "unreadable response body (status {status}): {e}"
                )),
            };
        }

        match serde_json::from_str::<Value>(&text) {
            Ok(Value::Null) => {
                LoginOutcome::Unreachable(format!("null error body (status {status})"))
            }
            Ok(body) => LoginOutcome::Rejected {
                status: status.as_u16(),
                detail: extract_detail(&body),
            },
            Err(e) => LoginOutcome::Unreachable(format!(
                "unreadable response body (status {status}): {e}"
            )),
        }
    }
}

/// The error body's `detail` field, when it holds a non-empty string.
fn extract_detail(body: &Value) -> Option<String> {
    body.get("detail")
        .and_then(Value::as_str)
        .filter(|detail| !detail.is_empty())
        .map(str::to_owned)
}
