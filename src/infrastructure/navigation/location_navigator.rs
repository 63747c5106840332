//! Tracks the page location and resolves relative paths against it.

use std::sync::{PoisonError, RwLock};

use tracing::info;
use url::Url;

use crate::domain::ports::Navigator;
use crate::error::NavigationError;

/// Navigator holding the current page URL.
///
/// Relative targets resolve the way a browser resolves `location.href`
/// assignments: `dashboard.html` from `https://host/app/index.html` becomes
/// `https://host/app/dashboard.html`.
#[derive(Debug)]
pub struct LocationNavigator {
    current: RwLock<Url>,
}

impl LocationNavigator {
    pub fn new(page: Url) -> Self {
        Self {
            current: RwLock::new(page),
        }
    }
}

impl Navigator for LocationNavigator {
    fn navigate(&self, path: &str) -> Result<Url, NavigationError> {
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);

        let target = current
            .join(path)
            .map_err(|source| NavigationError::InvalidLocation {
                path: path.to_owned(),
                source,
            })?;

        info!(from = %*current, to = %target, "Navigating");
        *current = target.clone();
        Ok(target)
    }

    fn location(&self) -> Url {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
