//! The login request.

use crate::domain::entities::{Credentials, LoginOutcome};
use async_trait::async_trait;

/// Sends credentials to the authentication endpoint.
///
/// All three results (accepted, rejected, unreachable) come back as a
/// [`LoginOutcome`] value; implementations do not return errors.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpLoginGateway`] - `reqwest` POST to `/login`
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginGateway: Send + Sync {
    /// Issues exactly one login request. No retries.
    async fn login(&self, credentials: &Credentials) -> LoginOutcome;
}
