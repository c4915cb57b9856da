//! Password strength collaborators for pwforge.
//!
//! - [`entropy`] -- Character-pool entropy estimate
//! - [`generator`] -- Secure random password generation (feature `generate`)
//! - [`breach`] -- k-anonymity breach lookup against a range source
//! - [`strength`] -- zxcvbn pattern scoring (feature `zxcvbn`)
//! - [`report`] -- Per-password analysis report

pub mod breach;
pub mod entropy;
#[cfg(feature = "generate")]
pub mod generator;
pub mod report;
pub mod strength;

pub use breach::{BreachChecker, BreachError, BreachStatus, DirectoryRangeSource, RangeSource};
pub use entropy::estimate_entropy_bits;
#[cfg(feature = "generate")]
pub use generator::{GeneratedPassword, GeneratorError, GeneratorOptions, generate_password};
pub use report::{PasswordReport, analyze_password};
pub use strength::{StrengthFeedback, StrengthScore};
#[cfg(feature = "zxcvbn")]
pub use strength::score_password;
