//! User-facing auth failures.

use thiserror::Error;

use crate::net::api::ApiError;

/// Why an auth flow did not complete. `Display` is the message shown to the
/// user.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Enter both your account and password.")]
    MissingCredentials,
    #[error("The account or password is incorrect.")]
    InvalidCredentials,
    #[error("This is a member account. Please sign in through the member app instead.")]
    RoleMismatch,
    #[error("Could not save your agreement. Please try again.")]
    TermsAgreement(ApiError),
    #[error("Your session has expired. Please sign in again.")]
    SessionExpired,
    #[error("Please sign in first.")]
    NotAuthenticated,
    #[error("The server returned an incomplete sign-in response.")]
    InvalidResponse,
    #[error("Could not reach the server ({0}).")]
    Network(ApiError),
}

impl AuthError {
    /// Whether trying the same action again may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::TermsAgreement(_) | Self::Network(_) | Self::InvalidResponse)
    }
}
