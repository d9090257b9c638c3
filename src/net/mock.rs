//! Mocked auth API with canned accounts.
//!
//! SYSTEM CONTEXT
//! ==============
//! Backs the unit tests of the auth flows and the `CLUB_ADMIN_API_MODE=mock`
//! build, where the dashboard runs without a server. Tokens are issued from a
//! counter so tests can tell successive logins and refreshes apart.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "mock_test.rs"]
mod mock_test;

use std::cell::{Cell, RefCell};

use async_trait::async_trait;

use super::api::{ApiError, AuthApi};
use super::types::{LoginRequest, LoginResponse, Role, TokenPair};

const ACCESS_PREFIX: &str = "mock-access-";
const REFRESH_PREFIX: &str = "mock-refresh-";

/// A sign-in account known to the mock.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MockAccount {
    pub account: String,
    pub password: String,
    pub role: Role,
    pub club_uuid: Option<String>,
    pub agreed_terms: bool,
}

impl MockAccount {
    pub fn new(account: &str, password: &str, role: Role) -> Self {
        Self {
            account: account.to_owned(),
            password: password.to_owned(),
            role,
            club_uuid: None,
            agreed_terms: false,
        }
    }

    #[must_use]
    pub fn club(mut self, club_uuid: &str) -> Self {
        self.club_uuid = Some(club_uuid.to_owned());
        self
    }

    #[must_use]
    pub fn agreed(mut self) -> Self {
        self.agreed_terms = true;
        self
    }
}

/// One recorded call, with the credential or token it carried.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MockCall {
    Login(String),
    AgreeTerms(String),
    Refresh(String),
    Logout(String),
}

#[derive(Clone, Debug, Default)]
pub struct MockAuthApi {
    accounts: Vec<MockAccount>,
    outage: Option<ApiError>,
    terms_failure: Option<ApiError>,
    refresh_failure: Option<ApiError>,
    issued: Cell<u32>,
    calls: RefCell<Vec<MockCall>>,
}

impl MockAuthApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Demo accounts: a leader who has not agreed to the terms yet, a union
    /// admin, and a regular member who must be turned away.
    pub fn demo() -> Self {
        Self::new()
            .with_account(MockAccount::new("leader", "leader1234", Role::Leader).club("club-demo-0001"))
            .with_account(MockAccount::new("admin", "admin1234", Role::Admin))
            .with_account(MockAccount::new("member", "member1234", Role::User))
    }

    #[must_use]
    pub fn with_account(mut self, account: MockAccount) -> Self {
        self.accounts.push(account);
        self
    }

    /// Fail every call with `error`.
    #[must_use]
    pub fn with_outage(mut self, error: ApiError) -> Self {
        self.outage = Some(error);
        self
    }

    #[must_use]
    pub fn failing_terms(mut self, error: ApiError) -> Self {
        self.terms_failure = Some(error);
        self
    }

    #[must_use]
    pub fn failing_refresh(mut self, error: ApiError) -> Self {
        self.refresh_failure = Some(error);
        self
    }

    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: MockCall) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(call);
        match &self.outage {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }

    fn issue(&self) -> TokenPair {
        let n = self.issued.get() + 1;
        self.issued.set(n);
        TokenPair { access_token: format!("{ACCESS_PREFIX}{n}"), refresh_token: format!("{REFRESH_PREFIX}{n}") }
    }
}

fn unauthorized(message: &str) -> ApiError {
    ApiError::Status { status: 401, message: Some(message.to_owned()) }
}

#[async_trait(?Send)]
impl AuthApi for MockAuthApi {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.record(MockCall::Login(request.account.clone()))?;
        let account = self
            .accounts
            .iter()
            .find(|a| a.account == request.account && a.password == request.password)
            .ok_or_else(|| unauthorized("invalid account or password"))?;
        let tokens = self.issue();
        Ok(LoginResponse {
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
            role: account.role,
            club_uuid: account.club_uuid.clone(),
            is_agreed_terms: account.agreed_terms,
        })
    }

    async fn agree_terms(&self, access_token: &str) -> Result<(), ApiError> {
        self.record(MockCall::AgreeTerms(access_token.to_owned()))?;
        if let Some(error) = &self.terms_failure {
            return Err(error.clone());
        }
        if !access_token.starts_with(ACCESS_PREFIX) {
            return Err(unauthorized("invalid access token"));
        }
        Ok(())
    }

    async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, ApiError> {
        self.record(MockCall::Refresh(refresh_token.to_owned()))?;
        if let Some(error) = &self.refresh_failure {
            return Err(error.clone());
        }
        if !refresh_token.starts_with(REFRESH_PREFIX) {
            return Err(unauthorized("invalid refresh token"));
        }
        Ok(self.issue())
    }

    async fn logout(&self, access_token: &str) -> Result<(), ApiError> {
        self.record(MockCall::Logout(access_token.to_owned()))
    }
}
