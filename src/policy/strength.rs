//! Password strength scoring for the meter element.

use serde::{Deserialize, Serialize};

/// Compute a strength score in [0, 100] for a password.
///
/// Pure and deterministic. Reaching the minimum length earns up to 25
/// points (saturating at 6 characters); each character class present
/// (uppercase, lowercase, digit, non-alphanumeric) earns 15; a character
/// repeated three or more times in a row costs 10. The result is clamped
/// and rounded to the nearest integer.
///
/// ```rust
/// use regflow::policy::score;
///
/// assert_eq!(score(""), 0);
/// assert_eq!(score("Aa1!aa"), 85);
/// assert_eq!(score("aaaa"), 22); // 16.67 length credit, +15 lowercase, -10 repeat
/// ```
pub fn score(password: &str) -> u8 {
    if password.is_empty() {
        return 0;
    }

    let length = password.chars().count() as f64;
    let mut strength = (length / 6.0).min(1.0) * 25.0;

    if password.chars().any(|c| c.is_ascii_uppercase()) {
        strength += 15.0;
    }
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        strength += 15.0;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        strength += 15.0;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        strength += 15.0;
    }
    if has_triple_repeat(password) {
        strength -= 10.0;
    }

    strength.clamp(0.0, 100.0).round() as u8
}

/// True when any character repeats three or more times consecutively.
fn has_triple_repeat(password: &str) -> bool {
    let mut run = 0usize;
    let mut prev = None;
    for c in password.chars() {
        if prev == Some(c) {
            run += 1;
            if run >= 3 {
                return true;
            }
        } else {
            prev = Some(c);
            run = 1;
        }
    }
    false
}

/// Color band for the strength meter.
///
/// The meter's width tracks the score directly; its color comes from the
/// band the score falls into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrengthBand {
    /// score < 40
    Weak,
    /// 40 <= score < 70
    Moderate,
    /// score >= 70
    Strong,
}

impl StrengthBand {
    /// Band for a given score.
    pub fn of(score: u8) -> Self {
        match score {
            0..=39 => Self::Weak,
            40..=69 => Self::Moderate,
            _ => Self::Strong,
        }
    }

    /// CSS color rendered for this band.
    pub fn hex(&self) -> &'static str {
        match self {
            Self::Weak => "#f5576c",
            Self::Moderate => "#f093fb",
            Self::Strong => "#4facfe",
        }
    }
}
