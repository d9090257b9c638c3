//! Build-selected `AuthApi` implementation.

#[cfg(test)]
#[path = "backend_test.rs"]
mod backend_test;

use async_trait::async_trait;

use super::api::{ApiError, AuthApi, HttpAuthApi};
use super::mock::MockAuthApi;
use super::types::{LoginRequest, LoginResponse, TokenPair};
use crate::config::{ApiMode, ClientConfig};

#[derive(Clone, Debug)]
pub enum AuthBackend {
    Http(HttpAuthApi),
    Mock(MockAuthApi),
}

impl AuthBackend {
    pub fn from_config(config: &ClientConfig) -> Self {
        match config.api_mode {
            ApiMode::Http => Self::Http(HttpAuthApi::new(config.api_base_url.clone())),
            ApiMode::Mock => {
                log::info!("using mocked auth API");
                Self::Mock(MockAuthApi::demo())
            }
        }
    }

    fn api(&self) -> &dyn AuthApi {
        match self {
            Self::Http(api) => api as &dyn AuthApi,
            Self::Mock(api) => api as &dyn AuthApi,
        }
    }
}

#[async_trait(?Send)]
impl AuthApi for AuthBackend {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.api().login(request).await
    }

    async fn agree_terms(&self, access_token: &str) -> Result<(), ApiError> {
        self.api().agree_terms(access_token).await
    }

    async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, ApiError> {
        self.api().refresh(refresh_token).await
    }

    async fn logout(&self, access_token: &str) -> Result<(), ApiError> {
        self.api().logout(access_token).await
    }
}
