//! Login form controller.
//!
//! Binds to the login page's elements and implements the three handlers the
//! page needs: field change, submit and password visibility toggle.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, info, warn};
use url::Url;

use crate::domain::entities::{
    AuthResult, Credentials, Element, FormState, HandlerOutcome, LoginOutcome,
    PasswordVisibility, SubmitOutcome,
};
use crate::domain::events::{FormEvent, SubmitEvent};
use crate::domain::messages::{
    AUTH_FLAG_KEY, AUTH_FLAG_VALUE, CONNECTION_FAILURE, UNKNOWN_ERROR, USER_DATA_KEY,
};
use crate::domain::ports::document::selectors;
use crate::domain::ports::{Document, LoginGateway, Navigator, SessionStore};
use crate::error::{BindError, CompletionError};

/// Behavior switches for [`LoginFormController`].
#[derive(Debug, Clone)]
pub struct ControllerSettings {
    /// Path navigated to after a successful login, relative to the page.
    pub dashboard_path: String,
    /// When true, a submit arriving while another request is in flight is
    /// dropped with [`SubmitOutcome::Ignored`].
    pub prevent_duplicate_submit: bool,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            dashboard_path: "dashboard.html".to_string(),
            prevent_duplicate_submit: false,
        }
    }
}

#[derive(Debug, Clone)]
struct FormElements {
    email: Element,
    password: Element,
    submit: Element,
    error: Element,
    toggle: Element,
}

impl FormElements {
    fn resolve<D: Document + ?Sized>(document: &D) -> Result<Self, BindError> {
        use selectors::*;

        document
            .get_element_by_id(FORM_ID)
            .ok_or(BindError::MissingElement("#login-form"))?;

        Ok(Self {
            email: document
                .get_element_by_id(EMAIL_ID)
                .ok_or(BindError::MissingElement("#email"))?,
            password: document
                .get_element_by_id(PASSWORD_ID)
                .ok_or(BindError::MissingElement("#password"))?,
            submit: document
                .query_selector(SUBMIT_BUTTON)
                .ok_or(BindError::MissingElement(SUBMIT_BUTTON))?,
            error: document
                .get_element_by_id(ERROR_ID)
                .ok_or(BindError::MissingElement("#error-message"))?,
            toggle: document
                .query_selector(PASSWORD_TOGGLE)
                .ok_or(BindError::MissingElement(PASSWORD_TOGGLE))?,
        })
    }
}

/// Releases the in-flight flag when the submit that took it finishes.
struct InFlight<'a>(&'a AtomicBool);

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Owns all login form behavior.
///
/// Handlers can be invoked directly or through [`LoginFormController::dispatch`].
/// Without `prevent_duplicate_submit`, concurrent submits each send their own
/// request and race to write the session and navigate.
pub struct LoginFormController<G: LoginGateway, S: SessionStore, N: Navigator> {
    elements: FormElements,
    gateway: Arc<G>,
    store: Arc<S>,
    navigator: Arc<N>,
    settings: ControllerSettings,
    in_flight: AtomicBool,
}

impl<G: LoginGateway, S: SessionStore, N: Navigator> LoginFormController<G, S, N> {
    /// Resolves the page elements and sets the initial submit state.
    ///
    /// # Errors
    ///
    /// Returns [`BindError::MissingElement`] naming the first element the page
    /// lacks.
    pub fn bind<D: Document + ?Sized>(
        document: &D,
        gateway: Arc<G>,
        store: Arc<S>,
        navigator: Arc<N>,
        settings: ControllerSettings,
    ) -> Result<Self, BindError> {
        let controller = Self {
            elements: FormElements::resolve(document)?,
            gateway,
            store,
            navigator,
            settings,
            in_flight: AtomicBool::new(false),
        };

        controller.on_field_changed();
        Ok(controller)
    }

    /// Routes an event to its handler.
    pub async fn dispatch(&self, event: FormEvent) -> HandlerOutcome {
        match event {
            FormEvent::FieldChanged => HandlerOutcome::FieldChanged(self.on_field_changed()),
            FormEvent::FormSubmitted(mut submit) => {
                HandlerOutcome::Submitted(self.on_submit(&mut submit).await)
            }
            FormEvent::ToggleClicked => HandlerOutcome::Toggled(self.on_toggle_clicked()),
        }
    }

    /// Syncs the submit control with the current field values.
    pub fn on_field_changed(&self) -> FormState {
        let state = FormState::from_fields(
            &self.elements.email.value(),
            &self.elements.password.value(),
        );
        self.elements.submit.set_disabled(!state.submit_enabled);

        debug!(submit_enabled = state.submit_enabled, "Form state updated");
        state
    }

    /// Validates the form and, if it passes, logs in.
    ///
    /// On success the session is written and the page navigates to the
    /// dashboard; nothing else happens in this flow afterwards. Every other
    /// outcome leaves a message in the error container.
    pub async fn on_submit(&self, event: &mut SubmitEvent) -> SubmitOutcome {
        event.prevent_default();

        let _in_flight = if self.settings.prevent_duplicate_submit {
            match InFlight::acquire(&self.in_flight) {
                Some(guard) => Some(guard),
                None => {
                    debug!("Submit ignored, a login request is already in flight");
                    return SubmitOutcome::Ignored;
                }
            }
        } else {
            None
        };

        self.elements.error.set_text_content("");

        let email = self.elements.email.value();
        let password = self.elements.password.value();
        let credentials = match Credentials::parse(&email, &password) {
            Ok(credentials) => credentials,
            Err(failure) => {
                debug!(reason = %failure, "Submit stopped by validation");
                self.elements.error.set_text_content(failure.message());
                return SubmitOutcome::Invalid(failure);
            }
        };

        match self.gateway.login(&credentials).await {
            LoginOutcome::Authenticated(user) => match self.complete_login(&user) {
                Ok(location) => {
                    info!(email = %credentials.email, %location, "Login succeeded");
                    SubmitOutcome::LoggedIn { location }
                }
                Err(e) => {
                    warn!(error = %e, "Login accepted but session could not be completed");
                    self.unreachable()
                }
            },
            LoginOutcome::Rejected { status, detail } => {
                let message = detail.unwrap_or_else(|| UNKNOWN_ERROR.to_string());
                info!(email = %credentials.email, status, "Login rejected");
                self.elements.error.set_text_content(&message);
                SubmitOutcome::Rejected { status, message }
            }
            LoginOutcome::Unreachable(reason) => {
                warn!(%reason, "Login request failed");
                self.unreachable()
            }
        }
    }

    /// Flips the password field between masked and plain text.
    pub fn on_toggle_clicked(&self) -> PasswordVisibility {
        let current = self.elements.password.input_type();
        let next = PasswordVisibility::from_input_type(current.as_deref()).toggled();

        self.elements.password.set_input_type(next.input_type());
        self.elements.toggle.set_text_content(next.glyph());
        next
    }

    /// Current text of the error container.
    pub fn error_message(&self) -> String {
        self.elements.error.text_content()
    }

    /// Whether the submit control is currently enabled.
    pub fn is_submit_enabled(&self) -> bool {
        !self.elements.submit.is_disabled()
    }

    fn complete_login(&self, user: &AuthResult) -> Result<Url, CompletionError> {
        self.store.set_item(AUTH_FLAG_KEY, AUTH_FLAG_VALUE)?;
        self.store.set_item(USER_DATA_KEY, user.as_json())?;

        Ok(self.navigator.navigate(&self.settings.dashboard_path)?)
    }

    fn unreachable(&self) -> SubmitOutcome {
        self.elements.error.set_text_content(CONNECTION_FAILURE);
        SubmitOutcome::Unreachable {
            message: CONNECTION_FAILURE.to_string(),
        }
    }
}
