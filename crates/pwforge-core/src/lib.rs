//! Shared types for pwforge.
//!
//! - [`character`] -- Character classes and simple one-to-one case mapping
//! - [`case`] -- Whole-word case conversion
//! - [`config`] -- The immutable [`WordlistConfig`] value type and its parts

pub mod case;
pub mod character;
pub mod config;

pub use config::{ConfigError, LeetMap, Pairing, WordlistConfig, YearRange};
