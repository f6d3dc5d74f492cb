//! Lenient login resolution.
//!
//! Unlike [`crate::validation::validate_login_fields`], resolution never
//! rejects: every unusable field is replaced by a fallback and reported as a
//! [`LoginNotice`].

use chrono::{DateTime, Utc};

use super::model::{AuthResolution, LoginInput, LoginNotice, Session};
use crate::config::{FALLBACK_COMPANY, FALLBACK_EMAIL, FALLBACK_NAME};
use crate::validation::is_valid_email;

/// Turns raw login input into a session.
///
/// Notices are emitted in field order: name, email, company, password.
pub fn resolve_login(input: &LoginInput, now: DateTime<Utc>) -> AuthResolution {
    let mut notices = Vec::new();

    let name = input.full_name.trim();
    let email = input.email.trim().to_lowercase();
    let company = input.company.trim();
    let password = input.password.trim();

    let full_name = if name.is_empty() {
        notices.push(LoginNotice::NameFallback);
        FALLBACK_NAME.to_string()
    } else {
        name.to_string()
    };

    let email = if is_valid_email(&email) {
        email
    } else {
        notices.push(LoginNotice::EmailFallback);
        FALLBACK_EMAIL.to_string()
    };

    let company = if company.is_empty() {
        notices.push(LoginNotice::CompanyFallback);
        FALLBACK_COMPANY.to_string()
    } else {
        company.to_string()
    };

    if password.chars().count() < 8 {
        notices.push(LoginNotice::DemoPassword);
    }

    AuthResolution {
        session: Session {
            full_name,
            email,
            company,
            login_at: now,
        },
        notices,
    }
}

/// Guest identity used by the fast-track path. Bypasses all validation.
pub fn create_guest_session(now: DateTime<Utc>) -> Session {
    Session {
        full_name: FALLBACK_NAME.to_string(),
        email: FALLBACK_EMAIL.to_string(),
        company: FALLBACK_COMPANY.to_string(),
        login_at: now,
    }
}

/// First character of the trimmed name, uppercased, or `G` when empty.
pub fn avatar_initial(name: &str) -> char {
    name.trim()
        .chars()
        .next()
        .and_then(|c| c.to_uppercase().next())
        .unwrap_or('G')
}
