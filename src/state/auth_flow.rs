//! Authentication dialog state machine.
//!
//! The dialog has two modes, login and register. Registration is validated
//! locally (password policy and confirmation) before any network call;
//! remote failures keep the dialog open with the server's message. A
//! successful registration does not authenticate — the user is asked to
//! log in separately, matching the backend's signup contract.

#[cfg(test)]
#[path = "auth_flow_test.rs"]
mod auth_flow_test;

use crate::net::api::AuthApi;
use crate::state::session::SessionStore;
use crate::storage::StorageBackend;

/// Minimum registration password length.
pub const PASSWORD_MIN_LEN: usize = 8;
/// Symbols satisfying the password policy's symbol requirement.
pub const PASSWORD_SYMBOLS: &str = "!@#$%^&*()-_=+[]{};:,.<>?/";

/// Dialog mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

/// Field-level registration problems, surfaced inline before any network
/// call is made.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegistrationIssue {
    PasswordTooShort,
    PasswordMissingUppercase,
    PasswordMissingDigit,
    PasswordMissingSymbol,
    ConfirmMismatch,
}

impl RegistrationIssue {
    pub fn message(self) -> &'static str {
        match self {
            RegistrationIssue::PasswordTooShort => "Password must be at least 8 characters",
            RegistrationIssue::PasswordMissingUppercase => {
                "Password must contain an uppercase letter"
            }
            RegistrationIssue::PasswordMissingDigit => "Password must contain a digit",
            RegistrationIssue::PasswordMissingSymbol => "Password must contain a symbol",
            RegistrationIssue::ConfirmMismatch => "Passwords do not match",
        }
    }
}

/// Check a registration password against the complexity policy and its
/// confirmation field. Empty result means the submission may proceed.
pub fn validate_registration(password: &str, confirm: &str) -> Vec<RegistrationIssue> {
    let mut issues = Vec::new();
    if password.chars().count() < PASSWORD_MIN_LEN {
        issues.push(RegistrationIssue::PasswordTooShort);
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        issues.push(RegistrationIssue::PasswordMissingUppercase);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        issues.push(RegistrationIssue::PasswordMissingDigit);
    }
    if !password.chars().any(|c| PASSWORD_SYMBOLS.contains(c)) {
        issues.push(RegistrationIssue::PasswordMissingSymbol);
    }
    if confirm != password {
        issues.push(RegistrationIssue::ConfirmMismatch);
    }
    issues
}

/// Authentication dialog state.
///
/// `in_flight` is the single-flight guard: while a request is pending the
/// submit affordance is disabled and [`AuthDialogState::begin_request`]
/// refuses a second start.
#[derive(Clone, Debug, Default)]
pub struct AuthDialogState {
    pub open: bool,
    pub mode: AuthMode,
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm: String,
    pub remember: bool,
    pub error: Option<String>,
    pub issues: Vec<RegistrationIssue>,
    pub notice: Option<String>,
    pub in_flight: bool,
}

impl AuthDialogState {
    /// Open the dialog in the given mode with clean fields.
    pub fn open(&mut self, mode: AuthMode) {
        self.clear_fields();
        self.mode = mode;
        self.open = true;
        self.notice = None;
    }

    /// Switch mode without closing; entered values and messages are reset.
    pub fn switch_mode(&mut self, mode: AuthMode) {
        self.clear_fields();
        self.mode = mode;
    }

    /// Close the dialog. All entered field values are discarded; no partial
    /// input is retained across opens.
    pub fn close(&mut self) {
        self.clear_fields();
        self.open = false;
    }

    fn clear_fields(&mut self) {
        self.username.clear();
        self.email.clear();
        self.password.clear();
        self.confirm.clear();
        self.remember = false;
        self.error = None;
        self.issues.clear();
    }

    /// Claim the single in-flight slot. Returns false while a request is
    /// already pending.
    pub fn begin_request(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        true
    }

    /// Release the in-flight slot.
    pub fn finish_request(&mut self) {
        self.in_flight = false;
    }
}

/// Submit the login form.
///
/// On success the credentials go through the session holder and the dialog
/// closes; on failure the dialog stays open carrying the server's message
/// and the session is untouched.
pub async fn submit_login<S, B>(
    dialog: &mut AuthDialogState,
    sessions: &mut SessionStore<S>,
    backend: &B,
) where
    S: StorageBackend,
    B: AuthApi,
{
    dialog.error = None;
    match backend
        .login(&dialog.username, &dialog.password, dialog.remember)
        .await
    {
        Ok(resp) => {
            sessions.login(&resp.access_token, &resp.user_id);
            dialog.close();
        }
        Err(err) => {
            dialog.error = Some(err.to_string());
        }
    }
}

/// Submit the registration form.
///
/// Local preconditions are checked first; when they fail the backend is
/// never contacted. A successful registration closes the dialog and sets a
/// notice asking the user to log in.
pub async fn submit_registration<B: AuthApi>(dialog: &mut AuthDialogState, backend: &B) {
    dialog.error = None;
    dialog.issues = validate_registration(&dialog.password, &dialog.confirm);
    if !dialog.issues.is_empty() {
        return;
    }
    match backend
        .register(&dialog.username, &dialog.email, &dialog.password)
        .await
    {
        Ok(_) => {
            dialog.close();
            dialog.notice = Some("Account created. Please log in.".to_owned());
        }
        Err(err) => {
            dialog.error = Some(err.to_string());
        }
    }
}
