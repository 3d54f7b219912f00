//! Form validation: a single actionable error per submission.
//!
//! Unlike the password policy (which accumulates every unmet rule), the
//! form-level checks short-circuit in a fixed, most-fixable-first order so
//! the user is pointed at exactly one field per submission. Tests pin the
//! exact precedence.

use crate::policy::{check_requirements, RuleViolation};
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use thiserror::Error;

/// A form field that can carry an alert and an error mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldId {
    Name,
    Email,
    Password,
    Terms,
}

impl FieldId {
    /// Stable lowercase name, used for logging and styling hooks.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Password => "password",
            Self::Terms => "terms",
        }
    }
}

/// The record built from the form at submit time.
///
/// Ephemeral: created on submit, discarded after validation/submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub terms_accepted: bool,
}

impl RegistrationInput {
    /// Trim name and email before validation, so the success message and
    /// emptiness checks see the same values. Passwords are never trimmed.
    pub fn normalized(mut self) -> Self {
        self.name = self.name.trim().to_string();
        self.email = self.email.trim().to_string();
        self
    }
}

/// Broad error taxonomy for a failed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCategory {
    /// A required value is absent
    MissingField,
    /// The email shape is invalid
    FormatError,
    /// One or more password rules are unmet (batched)
    PolicyViolation,
    /// The terms checkbox is unchecked
    AcknowledgementRequired,
}

/// The single error surfaced for an invalid submission.
///
/// Display output is the exact user-facing message; policy violations
/// render one bullet line per unmet rule, joined with newlines.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("Please enter your name")]
    MissingName,

    #[error("Please enter your email")]
    MissingEmail,

    #[error("Please enter a password")]
    MissingPassword,

    #[error("You must agree to the Terms & Conditions")]
    TermsNotAccepted,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("{}", .0.iter().map(|v| v.to_string()).collect::<Vec<_>>().join("\n"))]
    PolicyUnmet(Vec<RuleViolation>),
}

impl FormError {
    /// The field this error attaches to.
    pub fn field(&self) -> FieldId {
        match self {
            Self::MissingName => FieldId::Name,
            Self::MissingEmail | Self::InvalidEmail => FieldId::Email,
            Self::MissingPassword | Self::PolicyUnmet(_) => FieldId::Password,
            Self::TermsNotAccepted => FieldId::Terms,
        }
    }

    /// Taxonomy bucket for this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingName | Self::MissingEmail | Self::MissingPassword => {
                ErrorCategory::MissingField
            }
            Self::InvalidEmail => ErrorCategory::FormatError,
            Self::PolicyUnmet(_) => ErrorCategory::PolicyViolation,
            Self::TermsNotAccepted => ErrorCategory::AcknowledgementRequired,
        }
    }
}

/// Validate a submitted record, surfacing at most one error.
///
/// Checks run in fixed order (name, email, password, terms, email format,
/// password policy) and stop at the first failure. Password-policy
/// violations are accumulated internally and reported together as one
/// [`FormError::PolicyUnmet`].
pub fn validate(input: &RegistrationInput) -> Result<(), FormError> {
    if input.name.trim().is_empty() {
        return Err(FormError::MissingName);
    }
    if input.email.trim().is_empty() {
        return Err(FormError::MissingEmail);
    }
    if input.password.is_empty() {
        return Err(FormError::MissingPassword);
    }
    if !input.terms_accepted {
        return Err(FormError::TermsNotAccepted);
    }
    if !email_shape_ok(input.email.trim()) {
        return Err(FormError::InvalidEmail);
    }
    match check_requirements(&input.password) {
        Validation::Success(_) => Ok(()),
        Validation::Failure(errors) => {
            Err(FormError::PolicyUnmet(errors.iter().copied().collect()))
        }
    }
}

/// Simple address shape: `[^\s@]+ "@" [^\s@]+ "." [^\s@]+`.
///
/// Deliberately not RFC 5322; lenient on purpose, since the address is
/// never delivered to. Because `.` is itself a legal `[^\s@]` character,
/// the domain only needs some dot with at least one character on each
/// side, so `a@.b.c` and `a@b.c.` pass while `a@.b` and `a@b.` do not.
fn email_shape_ok(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && domain
                    .char_indices()
                    .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
        }
        _ => false,
    }
}
