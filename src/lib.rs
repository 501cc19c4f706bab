//! Single-record customer transformer.
//!
//! Validates one raw customer record against a declared input schema and
//! maps it to a nested customer profile. Account status is derived from
//! age, account tier from account type and balance; everything else is
//! copied through verbatim.
//!
//! The core is a pure function over `serde_json::Value`: no I/O, no
//! logging, no shared state. The optional `cli` feature adds a small
//! command-line driver that owns reading, writing and log output.

pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub mod config;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::core::schema::{parse_record, validate_value, FieldSpec, FieldType, INPUT_SCHEMA};
pub use crate::core::transform::{
    transform, transform_record, ADULT_AGE, GOLD_BALANCE_THRESHOLD, PREMIUM_ACCOUNT_TYPE,
};
pub use crate::domain::model::{
    Account, AccountTier, Address, AgeStatus, Contact, CustomerProfile, CustomerRecord,
    Preferences, ProfileAddress, Settings,
};
pub use crate::utils::error::{Result, TransformError};
