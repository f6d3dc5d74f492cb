//! Session domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::resolver::avatar_initial;

/// The signed-in identity.
///
/// At most one session exists at a time; logging in replaces it and logging
/// out removes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub full_name: String,
    pub email: String,
    pub company: String,
    pub login_at: DateTime<Utc>,
}

impl Session {
    /// Uppercased first letter of the display name, `G` when empty.
    pub fn avatar_initial(&self) -> char {
        avatar_initial(&self.full_name)
    }

    /// Header label, `"<name> • <company>"`.
    pub fn profile_label(&self) -> String {
        format!("{} • {}", self.full_name, self.company)
    }
}

/// Raw login form values. Never persisted.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct LoginInput {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub company: String,
}

impl LoginInput {
    pub fn new(
        full_name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        company: impl Into<String>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            email: email.into(),
            password: password.into(),
            company: company.into(),
        }
    }
}

impl fmt::Debug for LoginInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginInput")
            .field("full_name", &self.full_name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("company", &self.company)
            .finish()
    }
}

/// Advisory message describing a fallback applied while logging in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoginNotice {
    NameFallback,
    EmailFallback,
    CompanyFallback,
    DemoPassword,
    FastTrack,
}

impl fmt::Display for LoginNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::NameFallback => "Name missing - fallback profile applied.",
            Self::EmailFallback => "Email not valid - using demo email.",
            Self::CompanyFallback => "Company missing - default company assigned.",
            Self::DemoPassword => "Password not verified - demo mode login enabled.",
            Self::FastTrack => "Fast-track enabled. Logged in with guest profile.",
        };
        f.write_str(text)
    }
}

/// A resolved login: the session plus the notices explaining any fallbacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthResolution {
    pub session: Session,
    pub notices: Vec<LoginNotice>,
}
