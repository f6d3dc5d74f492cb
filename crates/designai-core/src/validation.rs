//! Prompt and login-field validation rules.
//!
//! All functions are pure.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::{BLOCKED_TERMS, MIN_PROMPT_CHARS};
use crate::error::ValidationError;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email pattern is valid"));

/// Checks a generation prompt.
///
/// Fails when the trimmed prompt is shorter than [`MIN_PROMPT_CHARS`]
/// characters, or when it contains any of [`BLOCKED_TERMS`] (case-insensitive
/// substring match). The length rule is checked first.
pub fn validate_prompt(prompt: &str) -> Result<(), ValidationError> {
    if prompt.trim().chars().count() < MIN_PROMPT_CHARS {
        return Err(ValidationError::PromptTooShort {
            min: MIN_PROMPT_CHARS,
        });
    }

    let lowered = prompt.to_lowercase();
    if BLOCKED_TERMS.iter().any(|term| lowered.contains(term)) {
        return Err(ValidationError::BlockedTerms);
    }

    Ok(())
}

/// Permissive `non-space@non-space.non-space` check.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Strict login validation, returning the first failing rule.
///
/// Name, email and company are trimmed before checking; the password is
/// checked as typed.
pub fn validate_login_fields(
    name: &str,
    email: &str,
    password: &str,
    company: &str,
) -> Result<(), ValidationError> {
    if name.trim().chars().count() < 2 {
        return Err(ValidationError::InvalidName);
    }
    if !is_valid_email(email.trim()) {
        return Err(ValidationError::InvalidEmail);
    }
    if password.chars().count() < 8 {
        return Err(ValidationError::InvalidPassword);
    }
    if company.trim().chars().count() < 2 {
        return Err(ValidationError::InvalidCompany);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_prompts_are_rejected() {
        for prompt in ["", "short", "   nineteen chars!!   ", "exactly nineteen ch"] {
            assert_eq!(
                validate_prompt(prompt),
                Err(ValidationError::PromptTooShort { min: 20 }),
                "prompt {prompt:?}"
            );
        }
    }

    #[test]
    fn test_long_clean_prompts_pass() {
        assert_eq!(validate_prompt("exactly twenty chars"), Ok(()));
        assert_eq!(
            validate_prompt("  A SaaS analytics dashboard with dark sidebar  "),
            Ok(())
        );
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 19 characters, more than 20 bytes
        assert!(validate_prompt("äöüäöüäöüäöüäöüäöüä").is_err());
    }

    #[test]
    fn test_blocked_terms_case_insensitive() {
        assert_eq!(
            validate_prompt("Build a landing page for my PHISHING campaign"),
            Err(ValidationError::BlockedTerms)
        );
        assert_eq!(
            validate_prompt("dashboard showing exploits and keyloggers"),
            Err(ValidationError::BlockedTerms)
        );
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("ana@x.com"));
        assert!(is_valid_email("a.b+c@sub.domain.io"));
        assert!(!is_valid_email("ana@x"));
        assert!(!is_valid_email("ana x@y.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_login_fields_first_failure_wins() {
        assert_eq!(
            validate_login_fields("A", "bad", "short", ""),
            Err(ValidationError::InvalidName)
        );
        assert_eq!(
            validate_login_fields("Ana", "bad", "short", ""),
            Err(ValidationError::InvalidEmail)
        );
        assert_eq!(
            validate_login_fields("Ana", "ana@x.com", "short", ""),
            Err(ValidationError::InvalidPassword)
        );
        assert_eq!(
            validate_login_fields("Ana", "ana@x.com", "longenough", "A"),
            Err(ValidationError::InvalidCompany)
        );
        assert_eq!(
            validate_login_fields("Ana", "ana@x.com", "longenough", "Acme"),
            Ok(())
        );
    }
}
