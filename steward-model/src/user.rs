//! User records as served by the admin backend
//!
//! A [`User`] is owned by whoever renders the users page. Views read it and
//! never write to it; flipping [`User::is_admin`] is the caller's job once a
//! privilege change has been accepted.
//!
//! ## Example
//!
//! ```
//! use steward_model::user::User;
//!
//! let bob = User::from_json(r#"{"login_name": "bob", "is_admin": true}"#).unwrap();
//! assert_eq!(bob.login_name, "bob");
//! assert!(bob.is_admin());
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// A single account on the users page
///
/// # Fields
///
/// * `login_name` - Unique login, used in every user-facing message
/// * `display_name` - Human friendly name, may be empty
/// * `email` - Optional contact address
/// * `is_admin` - Whether the user currently holds system administrator privilege
/// * `email_me` - Whether the user opted into notification mail
/// * `checkin_aliases` - Alternate identities matched against commit authors
/// * `enabled` - Disabled accounts stay listed but cannot sign in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub login_name: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub email_me: bool,
    #[serde(default)]
    pub checkin_aliases: Vec<String>,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

fn enabled_by_default() -> bool {
    true
}

impl User {
    /// Minimal enabled, non-admin user.
    pub fn new(login_name: impl Into<String>) -> Self {
        Self {
            login_name: login_name.into(),
            display_name: String::new(),
            email: None,
            is_admin: false,
            email_me: false,
            checkin_aliases: Vec::new(),
            enabled: true,
        }
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_admin(mut self, is_admin: bool) -> Self {
        self.is_admin = is_admin;
        self
    }

    /// Decode a single user record.
    ///
    /// Fails with [`ModelError::MissingLoginName`] when `login_name` is blank.
    pub fn from_json(json: &str) -> Result<Self> {
        let user: User = serde_json::from_str(json)?;
        user.validated()
    }

    pub(crate) fn validated(self) -> Result<Self> {
        if self.login_name.trim().is_empty() {
            return Err(ModelError::MissingLoginName);
        }
        Ok(self)
    }

    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    pub fn set_admin(&mut self, is_admin: bool) {
        self.is_admin = is_admin;
    }

    /// Display name, or the login name when none was given.
    pub fn label(&self) -> &str {
        if self.display_name.is_empty() {
            &self.login_name
        } else {
            &self.display_name
        }
    }
}
