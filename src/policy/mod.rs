//! Password policy: structural requirements and strength scoring.
//!
//! Requirement checking uses `Validation` to accumulate ALL violations
//! instead of fail-fast behavior: a user who types a six-character
//! lowercase password is told about the missing uppercase letter, digit,
//! and special character together, not one resubmission at a time.
//!
//! # Example
//!
//! ```rust
//! use regflow::policy::{check_requirements, score, violations, StrengthBand};
//!
//! assert!(check_requirements("Abcdef1!").is_success());
//! assert_eq!(violations("Abcdef1!").len(), 0);
//!
//! assert_eq!(score("Aa1!aa"), 85);
//! assert_eq!(StrengthBand::of(85), StrengthBand::Strong);
//! ```

mod rules;
mod strength;

pub use rules::{check_requirements, violations, PasswordRequirements, RuleViolation, REQUIREMENTS};
pub use strength::{score, StrengthBand};
