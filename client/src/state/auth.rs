//! Sign-in / sign-up panel state and its action reducer.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthPanel` owns one `RwSignal<AuthPanelState>` and routes every UI event
//! (keystroke, submit, toggle click, identity-provider callback) through
//! [`AuthPanelState::dispatch`]. Components only read the state; they never
//! mutate fields directly.
//!
//! INVARIANTS
//! ==========
//! - Each mode keeps its own fields and errors; toggling never touches either.
//! - A mode's error map is replaced wholesale on every submit in that mode and
//!   is non-empty only when that submit failed validation.
//! - Storage is written only after a successful validation pass or a decoded
//!   identity token.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::collections::BTreeMap;

use crate::net::types::UserProfile;
use crate::util::identity::{self, IdentityError, ProviderError};
use crate::util::session::{self, SessionStore, StorageError};
use crate::util::validate::validate;

/// Which form is presented.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    #[default]
    SignIn,
    SignUp,
}

impl Mode {
    /// Fields that must be present for a submit in this mode, in display order.
    #[must_use]
    pub fn required_fields(self) -> &'static [Field] {
        match self {
            Self::SignIn => &[Field::Email, Field::Password],
            Self::SignUp => &[Field::Name, Field::Email, Field::Password],
        }
    }
}

/// A named form input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Password,
}

impl Field {
    /// Field name as used in form markup and error keys.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Password => "password",
        }
    }

    /// Capitalized label used in messages and placeholders.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Password => "Password",
        }
    }
}

/// Per-field error messages for one mode. Empty means the last submit passed.
pub type ErrorMap = BTreeMap<Field, String>;

/// Current input values of one form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldSet {
    mode: Mode,
    values: BTreeMap<Field, String>,
}

impl FieldSet {
    /// Empty field set holding exactly the fields of `mode`.
    #[must_use]
    pub fn new(mode: Mode) -> Self {
        let values = mode.required_fields().iter().map(|f| (*f, String::new())).collect();
        Self { mode, values }
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Current value of `field`; fields outside this mode read as empty.
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        self.values.get(&field).map_or("", String::as_str)
    }

    /// Replace the value of `field`. Returns `false` when the field does not
    /// belong to this mode and nothing was written.
    pub fn set(&mut self, field: Field, value: impl Into<String>) -> bool {
        match self.values.get_mut(&field) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    /// Iterate fields in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.values.iter().map(|(f, v)| (*f, v.as_str()))
    }
}

/// Messages accepted by [`AuthPanelState::dispatch`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthAction {
    /// Reload the signed-in profile from storage (after hydration).
    Restore,
    /// "Sign In" button on the toggle panel.
    ShowSignIn,
    /// "Sign Up" button on the toggle panel.
    ShowSignUp,
    /// Keystroke in one of the form inputs.
    Input { mode: Mode, field: Field, value: String },
    /// Form submit.
    Submit(Mode),
    /// Identity provider returned a credential token.
    FederatedSuccess(String),
    /// Identity provider reported a failed or cancelled flow.
    FederatedError(ProviderError),
}

/// Full panel state: active mode, both forms, both error maps, and the last
/// recorded profile.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthPanelState {
    pub mode: Mode,
    pub sign_in: FieldSet,
    pub sign_up: FieldSet,
    pub sign_in_errors: ErrorMap,
    pub sign_up_errors: ErrorMap,
    pub user: Option<UserProfile>,
}

impl Default for AuthPanelState {
    fn default() -> Self {
        Self {
            mode: Mode::SignIn,
            sign_in: FieldSet::new(Mode::SignIn),
            sign_up: FieldSet::new(Mode::SignUp),
            sign_in_errors: ErrorMap::new(),
            sign_up_errors: ErrorMap::new(),
            user: None,
        }
    }
}

impl AuthPanelState {
    #[must_use]
    pub fn fields(&self, mode: Mode) -> &FieldSet {
        match mode {
            Mode::SignIn => &self.sign_in,
            Mode::SignUp => &self.sign_up,
        }
    }

    fn fields_mut(&mut self, mode: Mode) -> &mut FieldSet {
        match mode {
            Mode::SignIn => &mut self.sign_in,
            Mode::SignUp => &mut self.sign_up,
        }
    }

    #[must_use]
    pub fn errors(&self, mode: Mode) -> &ErrorMap {
        match mode {
            Mode::SignIn => &self.sign_in_errors,
            Mode::SignUp => &self.sign_up_errors,
        }
    }

    fn errors_mut(&mut self, mode: Mode) -> &mut ErrorMap {
        match mode {
            Mode::SignIn => &mut self.sign_in_errors,
            Mode::SignUp => &mut self.sign_up_errors,
        }
    }

    /// Apply one UI action.
    ///
    /// Returns the profile written to `store` when the action recorded one.
    /// Decode and provider failures are logged and leave the state unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when a validated profile could not be written.
    /// Error maps keep the result of the validation pass that preceded the write.
    pub fn dispatch<S: SessionStore + ?Sized>(
        &mut self,
        action: AuthAction,
        store: &S,
    ) -> Result<Option<UserProfile>, StorageError> {
        match action {
            AuthAction::Restore => {
                self.user = session::load(store);
                Ok(None)
            }
            AuthAction::ShowSignIn => {
                self.mode = Mode::SignIn;
                Ok(None)
            }
            AuthAction::ShowSignUp => {
                self.mode = Mode::SignUp;
                Ok(None)
            }
            AuthAction::Input { mode, field, value } => {
                if !self.fields_mut(mode).set(field, value) {
                    leptos::logging::warn!("ignored input for {} on {mode:?} form", field.key());
                }
                Ok(None)
            }
            AuthAction::Submit(mode) => self.submit(mode, store),
            AuthAction::FederatedSuccess(credential) => match identity::on_success(store, &credential) {
                Ok(profile) => {
                    self.user = Some(profile.clone());
                    Ok(Some(profile))
                }
                Err(IdentityError::Storage(e)) => Err(e),
                Err(IdentityError::Decode(_)) => Ok(None),
            },
            AuthAction::FederatedError(err) => {
                identity::on_error(&err);
                Ok(None)
            }
        }
    }

    fn submit<S: SessionStore + ?Sized>(&mut self, mode: Mode, store: &S) -> Result<Option<UserProfile>, StorageError> {
        let errors = validate(mode, self.fields(mode));
        let failed = !errors.is_empty();
        *self.errors_mut(mode) = errors;
        if failed {
            return Ok(None);
        }

        let profile = UserProfile::from_fields(self.fields(mode));
        session::record(store, &profile)?;
        self.user = Some(profile.clone());
        Ok(Some(profile))
    }
}
