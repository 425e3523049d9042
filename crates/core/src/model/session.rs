use thiserror::Error;

/// A login attempt did not match the accepted pair.
///
/// One error for both fields, so callers cannot tell which one was wrong.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("invalid username or password")]
pub struct CredentialError;

/// The accepted credential pair, compared case-sensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// The pair the dashboard ships with.
    #[must_use]
    pub fn preset() -> Self {
        Self::new("admin", "admin123")
    }

    /// Check a submitted pair against the accepted one.
    ///
    /// # Errors
    ///
    /// Returns `CredentialError` if either field differs.
    pub fn verify(&self, username: &str, password: &str) -> Result<(), CredentialError> {
        if self.username == username && self.password == password {
            Ok(())
        } else {
            Err(CredentialError)
        }
    }
}

/// Authentication status of the single operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    LoggedOut,
    LoggedIn,
}

impl SessionState {
    /// Rebuild the state from the persisted flag.
    #[must_use]
    pub fn restored(authenticated: bool) -> Self {
        if authenticated {
            Self::LoggedIn
        } else {
            Self::LoggedOut
        }
    }

    #[must_use]
    pub fn is_authenticated(self) -> bool {
        matches!(self, Self::LoggedIn)
    }

    /// Attempt the transition to `LoggedIn`.
    ///
    /// On mismatch the state is unchanged (the caller keeps `self`).
    ///
    /// # Errors
    ///
    /// Returns `CredentialError` if the submitted pair is rejected.
    pub fn login_attempt(
        self,
        accepted: &Credentials,
        username: &str,
        password: &str,
    ) -> Result<Self, CredentialError> {
        accepted.verify(username, password)?;
        Ok(Self::LoggedIn)
    }

    /// Unconditional transition to `LoggedOut`.
    #[must_use]
    pub fn logged_out(self) -> Self {
        Self::LoggedOut
    }
}
