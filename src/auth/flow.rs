//! Auth flows: turn collaborator results into session transitions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each flow is split into an async driver (`login`, `agree_terms`,
//! `refresh_session`, `logout`) that calls the `AuthApi`, and a synchronous
//! completion (`complete_*`) that applies the result to the `SessionStore`.
//! The completion is the only place a flow mutates the store, and it runs in
//! one step, so the route guard never observes a half-applied result.
//!
//! ERROR HANDLING
//! ==============
//! Failures come back as `AuthError` values for the calling page to display.
//! Only role rejection and refresh failure clear the session; every other
//! failure leaves the previous state untouched.

#[cfg(test)]
#[path = "flow_test.rs"]
mod flow_test;

use super::error::AuthError;
use crate::net::api::{ApiError, AuthApi};
use crate::net::types::{LoginRequest, LoginResponse, TokenPair};
use crate::routing::paths;
use crate::state::session::{SessionRole, SessionStore};

/// Validated sign-in input.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    account: String,
    password: String,
}

impl Credentials {
    /// Trim the account name and require both fields.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MissingCredentials` when either field is blank.
    pub fn new(account: &str, password: &str) -> Result<Self, AuthError> {
        let account = account.trim();
        if account.is_empty() || password.trim().is_empty() {
            return Err(AuthError::MissingCredentials);
        }
        Ok(Self { account: account.to_owned(), password: password.to_owned() })
    }

    pub fn account(&self) -> &str {
        &self.account
    }

    fn to_request(&self) -> LoginRequest {
        LoginRequest { account: self.account.clone(), password: self.password.clone() }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials").field("account", &self.account).finish_non_exhaustive()
    }
}

/// Result of a successful sign-in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoginOutcome {
    pub role: SessionRole,
    /// Where to send the user next, with history replace.
    pub landing: &'static str,
}

/// Sign in with `credentials` and apply the result to `store`.
///
/// # Errors
///
/// See `complete_login`.
pub async fn login<A: AuthApi + ?Sized>(
    store: &SessionStore,
    api: &A,
    credentials: &Credentials,
) -> Result<LoginOutcome, AuthError> {
    let result = api.login(&credentials.to_request()).await;
    complete_login(store, result)
}

/// Apply a login collaborator result.
///
/// # Errors
///
/// - `InvalidCredentials` when the server rejected the credentials;
/// - `RoleMismatch` for a member account, after clearing the session;
/// - `InvalidResponse` when the server returned no access token;
/// - `Network` for any other failure.
pub fn complete_login(
    store: &SessionStore,
    result: Result<LoginResponse, ApiError>,
) -> Result<LoginOutcome, AuthError> {
    let response = match result {
        Ok(response) => response,
        Err(e) if e.is_auth_rejection() => {
            log::info!("login rejected: {e}");
            return Err(AuthError::InvalidCredentials);
        }
        Err(e) => {
            log::warn!("login failed: {e}");
            return Err(AuthError::Network(e));
        }
    };

    let Some(role) = SessionRole::from_role(response.role) else {
        log::info!("login rejected: member account on admin dashboard");
        store.clear_auth();
        return Err(AuthError::RoleMismatch);
    };
    if response.access_token.trim().is_empty() {
        log::warn!("login response carried no access token");
        return Err(AuthError::InvalidResponse);
    }

    let agreed_terms = response.is_agreed_terms;
    store.set_auth(response.tokens(), role, response.club_uuid, agreed_terms);
    log::info!("signed in as {role:?} (terms agreed: {agreed_terms})");
    Ok(LoginOutcome { role, landing: paths::landing_path(role, agreed_terms) })
}

/// Submit the terms agreement for the signed-in leader.
///
/// # Errors
///
/// `NotAuthenticated` without a session; otherwise see
/// `complete_terms_agreement`.
pub async fn agree_terms<A: AuthApi + ?Sized>(store: &SessionStore, api: &A) -> Result<(), AuthError> {
    let Some(access_token) = store.with(|s| s.access_token().map(str::to_owned)) else {
        return Err(AuthError::NotAuthenticated);
    };
    let result = api.agree_terms(&access_token).await;
    complete_terms_agreement(store, result)
}

/// Apply a terms-agreement collaborator result.
///
/// # Errors
///
/// Returns `AuthError::TermsAgreement` on failure; the session keeps
/// `agreed_terms == false` and the user can retry.
pub fn complete_terms_agreement(store: &SessionStore, result: Result<(), ApiError>) -> Result<(), AuthError> {
    match result {
        Ok(()) => {
            store.set_agreed_terms();
            log::info!("terms agreement recorded");
            Ok(())
        }
        Err(e) => {
            log::warn!("terms agreement failed: {e}");
            Err(AuthError::TermsAgreement(e))
        }
    }
}

/// Exchange the stored refresh token for a fresh token pair.
///
/// # Errors
///
/// `SessionExpired` when there is no refresh token or the refresh fails; the
/// session is cleared in both cases.
pub async fn refresh_session<A: AuthApi + ?Sized>(store: &SessionStore, api: &A) -> Result<(), AuthError> {
    let Some(refresh_token) = store.with(|s| s.refresh_token().map(str::to_owned)) else {
        store.clear_auth();
        return Err(AuthError::SessionExpired);
    };
    let result = api.refresh(&refresh_token).await;
    complete_refresh(store, result)
}

/// Apply a token-refresh collaborator result.
///
/// # Errors
///
/// Returns `AuthError::SessionExpired` after clearing the session.
pub fn complete_refresh(store: &SessionStore, result: Result<TokenPair, ApiError>) -> Result<(), AuthError> {
    match result {
        Ok(tokens) if !tokens.access_token.trim().is_empty() => {
            store.update_tokens(tokens);
            log::debug!("session tokens refreshed");
            Ok(())
        }
        Ok(_) => {
            log::warn!("refresh returned no access token; ending session");
            store.clear_auth();
            Err(AuthError::SessionExpired)
        }
        Err(e) => {
            log::warn!("refresh failed, ending session: {e}");
            store.clear_auth();
            Err(AuthError::SessionExpired)
        }
    }
}

/// End the session. The server call is best-effort; the local session is
/// cleared regardless of its outcome.
pub async fn logout<A: AuthApi + ?Sized>(store: &SessionStore, api: &A) {
    if let Some(access_token) = store.with(|s| s.access_token().map(str::to_owned)) {
        if let Err(e) = api.logout(&access_token).await {
            log::warn!("logout request failed: {e}");
        }
    }
    store.clear_auth();
    log::info!("signed out");
}
