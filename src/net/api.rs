//! REST client for the auth endpoints of the admin API.
//!
//! Browser (csr): real HTTP calls via `gloo-net`.
//! Elsewhere: every call returns `ApiError::Unavailable`, since these
//! endpoints are only reachable from the browser build.
//!
//! ERROR HANDLING
//! ==============
//! Transport, status, and decode failures are reported as `ApiError` values.
//! Mapping them onto session transitions is the job of `crate::auth::flow`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
use thiserror::Error;

use super::types::{LoginRequest, LoginResponse, TokenPair};

/// Failure of one API call.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("{}", status_failed_message(*status, message.as_deref()))]
    Status { status: u16, message: Option<String> },
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the server rejected the caller's credentials or token.
    pub fn is_auth_rejection(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }
}

fn status_failed_message(status: u16, message: Option<&str>) -> String {
    match message {
        Some(message) if !message.trim().is_empty() => format!("request failed: {status} ({message})"),
        _ => format!("request failed: {status}"),
    }
}

/// Auth collaborators consumed by `crate::auth::flow`.
#[async_trait(?Send)]
pub trait AuthApi {
    /// Exchange credentials for a session.
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError>;
    /// Record the signed-in leader's agreement to the required terms.
    async fn agree_terms(&self, access_token: &str) -> Result<(), ApiError>;
    /// Exchange a refresh token for a fresh token pair.
    async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, ApiError>;
    /// Invalidate the session server-side.
    async fn logout(&self, access_token: &str) -> Result<(), ApiError>;
}

#[cfg(any(test, feature = "csr"))]
fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(any(test, feature = "csr"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// HTTP implementation of `AuthApi` rooted at a base URL such as `/api`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpAuthApi {
    base_url: String,
}

impl HttpAuthApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(feature = "csr")]
async fn check_status(resp: gloo_net::http::Response) -> Result<gloo_net::http::Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let message = resp.json::<super::types::ErrorBody>().await.ok().and_then(|body| body.message);
    Err(ApiError::Status { status, message })
}

#[cfg(feature = "csr")]
fn network(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

#[cfg(feature = "csr")]
fn decode(e: gloo_net::Error) -> ApiError {
    ApiError::Decode(e.to_string())
}

#[async_trait(?Send)]
impl AuthApi for HttpAuthApi {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&endpoint(&self.base_url, "auth/login"))
                .json(request)
                .map_err(network)?
                .send()
                .await
                .map_err(network)?;
            check_status(resp).await?.json::<LoginResponse>().await.map_err(decode)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }

    async fn agree_terms(&self, access_token: &str) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&endpoint(&self.base_url, "club-leader/terms/agree"))
                .header("Authorization", &bearer(access_token))
                .send()
                .await
                .map_err(network)?;
            check_status(resp).await.map(|_| ())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = access_token;
            Err(ApiError::Unavailable)
        }
    }

    async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, ApiError> {
        #[cfg(feature = "csr")]
        {
            let payload = super::types::RefreshRequest { refresh_token: refresh_token.to_owned() };
            let resp = gloo_net::http::Request::post(&endpoint(&self.base_url, "auth/refresh"))
                .json(&payload)
                .map_err(network)?
                .send()
                .await
                .map_err(network)?;
            check_status(resp).await?.json::<TokenPair>().await.map_err(decode)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = refresh_token;
            Err(ApiError::Unavailable)
        }
    }

    async fn logout(&self, access_token: &str) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&endpoint(&self.base_url, "auth/logout"))
                .header("Authorization", &bearer(access_token))
                .send()
                .await
                .map_err(network)?;
            check_status(resp).await.map(|_| ())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = access_token;
            Err(ApiError::Unavailable)
        }
    }
}
