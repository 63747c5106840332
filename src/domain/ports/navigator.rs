//! Page location changes.

use crate::error::NavigationError;
use url::Url;

/// Owns the current page location.
///
/// # Implementations
///
/// - [`crate::infrastructure::navigation::LocationNavigator`] - Resolves paths against the
///   current URL
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait Navigator: Send + Sync {
    /// Moves the page to `path`, resolved relative to the current location,
    /// and returns the new location.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError`] if `path` cannot be resolved.
    fn navigate(&self, path: &str) -> Result<Url, NavigationError>;

    /// The current page location.
    fn location(&self) -> Url;
}
