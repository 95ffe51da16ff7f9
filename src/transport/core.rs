//! # HTTP Gateway
//!
//! Every storefront client wraps the same [`HttpGateway`]: one base URL, one
//! reqwest client, one optional [`BearerToken`]. The gateway builds requests
//! and decodes responses, converting transport faults and non-success
//! statuses into [`ApiError`].

use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

// =============================================================================
// 1. THE CREDENTIAL
// =============================================================================

/// A bearer credential for the storefront session.
///
/// The token is an opaque string issued by the auth service. It is threaded
/// explicitly through constructors rather than read from ambient storage, so
/// every component that authenticates says so in its signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// 2. THE ERRORS
// =============================================================================

/// Errors surfaced by the storefront gateway.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a usable response.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The gateway answered with a non-success status.
    ///
    /// `message` carries the server-supplied message verbatim where one was
    /// present, so flows can surface it unchanged.
    #[error("{message}")]
    Status { status: u16, message: String },
}

impl ApiError {
    /// Builds a [`ApiError::Status`] from a response status and raw body.
    ///
    /// The gateway wraps error messages as `{"message": "..."}`; fall back to
    /// the raw body, then to the status line, when that shape is absent.
    pub fn from_status(status: StatusCode, body: String) -> Self {
        #[derive(Deserialize)]
        struct ErrorBody {
            message: String,
        }

        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|parsed| parsed.message)
            .unwrap_or_else(|_| {
                if body.trim().is_empty() {
                    format!(
                        "Request failed: {}",
                        status.canonical_reason().unwrap_or("unknown status")
                    )
                } else {
                    body
                }
            });

        Self::Status {
            status: status.as_u16(),
            message,
        }
    }

    /// HTTP status code, when the failure came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Network(_) => None,
            Self::Status { status, .. } => Some(*status),
        }
    }
}

// =============================================================================
// 3. THE GATEWAY
// =============================================================================

/// Shared request plumbing for all storefront clients.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    http: reqwest::Client,
    base_url: String,
    credential: Option<BearerToken>,
}

impl HttpGateway {
    /// Creates a gateway for `base_url`; a trailing slash is trimmed so paths
    /// can always start with one.
    pub fn new(
        http: reqwest::Client,
        base_url: impl Into<String>,
        credential: Option<BearerToken>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http,
            base_url,
            credential,
        }
    }

    /// The same gateway bound to a credential.
    pub fn with_credential(&self, credential: BearerToken) -> Self {
        Self {
            http: self.http.clone(),
            base_url: self.base_url.clone(),
            credential: Some(credential),
        }
    }

    pub fn credential(&self) -> Option<&BearerToken> {
        self.credential.as_ref()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.credential {
            Some(token) => request.bearer_auth(token.as_str()),
            None => request,
        }
    }

    // --- Request builders ---

    /// GET without credentials (public endpoints).
    pub fn get(&self, path: &str) -> RequestBuilder {
        self.http.get(self.url(path))
    }

    pub fn get_auth(&self, path: &str) -> RequestBuilder {
        self.authorize(self.http.get(self.url(path)))
    }

    /// POST without credentials (login).
    pub fn post(&self, path: &str) -> RequestBuilder {
        self.http.post(self.url(path))
    }

    pub fn post_auth(&self, path: &str) -> RequestBuilder {
        self.authorize(self.http.post(self.url(path)))
    }

    pub fn put_auth(&self, path: &str) -> RequestBuilder {
        self.authorize(self.http.put(self.url(path)))
    }

    pub fn delete_auth(&self, path: &str) -> RequestBuilder {
        self.authorize(self.http.delete(self.url(path)))
    }

    pub fn patch_auth(&self, path: &str) -> RequestBuilder {
        self.authorize(self.http.patch(self.url(path)))
    }

    // --- Response handling ---

    /// Sends the request and decodes a JSON body.
    pub async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request.send().await?;
        let response = Self::check_status(response).await?;
        Ok(response.json::<T>().await?)
    }

    /// Like [`Self::send_json`], but a 404 decodes to `None`.
    pub async fn send_json_opt<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<Option<T>, ApiError> {
        let response = request.send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            debug!("Resource not found, mapping to None");
            return Ok(None);
        }
        let response = Self::check_status(response).await?;
        Ok(Some(response.json::<T>().await?))
    }

    /// Sends the request and checks the status, discarding the body.
    pub async fn send_ok(&self, request: RequestBuilder) -> Result<(), ApiError> {
        let response = request.send().await?;
        Self::check_status(response).await?;
        Ok(())
    }

    async fn check_status(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::from_status(status, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let gateway = HttpGateway::new(reqwest::Client::new(), "http://localhost:9000/", None);
        assert_eq!(gateway.base_url(), "http://localhost:9000");
        assert_eq!(gateway.url("/cart"), "http://localhost:9000/cart");
    }

    #[test]
    fn status_error_prefers_server_message() {
        let error = ApiError::from_status(
            StatusCode::BAD_REQUEST,
            r#"{"message":"Cart is empty"}"#.to_string(),
        );
        assert_eq!(error.to_string(), "Cart is empty");
        assert_eq!(error.status(), Some(400));
    }

    #[test]
    fn status_error_falls_back_to_raw_body() {
        let error = ApiError::from_status(StatusCode::BAD_GATEWAY, "upstream down".to_string());
        assert_eq!(error.to_string(), "upstream down");
    }

    #[test]
    fn status_error_falls_back_to_status_line() {
        let error = ApiError::from_status(StatusCode::INTERNAL_SERVER_ERROR, String::new());
        assert_eq!(error.to_string(), "Request failed: Internal Server Error");
    }

    #[test]
    fn with_credential_binds_token() {
        let gateway = HttpGateway::new(reqwest::Client::new(), "http://localhost:9000", None);
        assert!(gateway.credential().is_none());
        let authed = gateway.with_credential(BearerToken::new("jwt"));
        assert_eq!(authed.credential().map(BearerToken::as_str), Some("jwt"));
    }
}
