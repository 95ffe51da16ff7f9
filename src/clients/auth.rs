//! Client for the auth service.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::transport::{ApiError, BearerToken, HttpGateway};

/// Client for logging in against the gateway's auth service.
#[derive(Debug, Clone)]
pub struct AuthClient {
    gateway: HttpGateway,
}

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub token: BearerToken,
    pub user_id: u64,
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    token: String,
    #[serde(rename = "userId", default)]
    user_id: Option<u64>,
}

impl AuthClient {
    pub fn new(gateway: HttpGateway) -> Self {
        Self { gateway }
    }

    /// Exchanges credentials for a bearer token.
    #[instrument(skip(self, password))]
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginOutcome, ApiError> {
        debug!("Sending request");
        let response: LoginResponse = self
            .gateway
            .send_json(
                self.gateway
                    .post("/api/auth/login")
                    .json(&LoginRequest { username, password }),
            )
            .await?;

        Ok(LoginOutcome {
            token: BearerToken::new(response.token),
            // The gateway omits userId for legacy accounts; 1 is its anonymous
            // fallback id.
            user_id: response.user_id.unwrap_or(1),
        })
    }
}
