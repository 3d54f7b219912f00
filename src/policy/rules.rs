//! Structural password requirements, accumulated via Validation.

use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Fixed, process-wide password requirements.
#[derive(Clone, Copy, Debug)]
pub struct PasswordRequirements {
    pub min_length: usize,
    pub max_length: usize,
    pub special_chars: &'static str,
}

/// The requirement set every password is checked against.
pub const REQUIREMENTS: PasswordRequirements = PasswordRequirements {
    min_length: 6,
    max_length: 18,
    special_chars: r##"!@#$%^&*()_+-=[]{};':"\|,.<>/?"##,
};

/// A single unmet password rule.
///
/// Display output is the user-facing bullet line rendered inside the
/// password error container. Variant order is the fixed evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RuleViolation {
    #[error("• Password must be 6-18 characters long")]
    LengthOutOfRange,

    #[error("• At least one uppercase letter (A-Z)")]
    MissingUppercase,

    #[error("• At least one lowercase letter (a-z)")]
    MissingLowercase,

    #[error("• At least one number (0-9)")]
    MissingDigit,

    #[error("• At least one special character (!@#$%^&* etc.)")]
    MissingSpecial,
}

/// Check a password against every structural rule, accumulating ALL
/// violations.
///
/// Rules are evaluated independently (never short-circuited) in fixed
/// order: length, uppercase, lowercase, digit, special character.
/// Returns `Validation::Success(())` when the password satisfies them all.
pub fn check_requirements(password: &str) -> Validation<(), NonEmptyVec<RuleViolation>> {
    let mut checks: Vec<Validation<(), NonEmptyVec<RuleViolation>>> = Vec::new();

    let length = password.chars().count();
    checks.push(rule(
        length >= REQUIREMENTS.min_length && length <= REQUIREMENTS.max_length,
        RuleViolation::LengthOutOfRange,
    ));
    checks.push(rule(
        password.chars().any(|c| c.is_ascii_uppercase()),
        RuleViolation::MissingUppercase,
    ));
    checks.push(rule(
        password.chars().any(|c| c.is_ascii_lowercase()),
        RuleViolation::MissingLowercase,
    ));
    checks.push(rule(
        password.chars().any(|c| c.is_ascii_digit()),
        RuleViolation::MissingDigit,
    ));
    checks.push(rule(
        password.chars().any(|c| REQUIREMENTS.special_chars.contains(c)),
        RuleViolation::MissingSpecial,
    ));

    // Accumulate ALL failures, preserving rule order
    Validation::all_vec(checks).map(|_| ())
}

/// The ordered violation list for a password, empty when compliant.
///
/// Convenience over [`check_requirements`] for callers that do not want to
/// handle the `Validation` type directly.
pub fn violations(password: &str) -> Vec<RuleViolation> {
    match check_requirements(password) {
        Validation::Success(_) => Vec::new(),
        Validation::Failure(errors) => errors.iter().copied().collect(),
    }
}

fn rule(
    satisfied: bool,
    violation: RuleViolation,
) -> Validation<(), NonEmptyVec<RuleViolation>> {
    if satisfied {
        Validation::success(())
    } else {
        Validation::fail(violation)
    }
}
