//! Customer record to profile mapping.
//!
//! The mapping is a pure function: a validated record always yields a full
//! profile, and a rejected record yields a validation error naming the
//! offending field. Nothing in between.

use crate::core::schema::parse_record;
use crate::domain::model::{
    Account, AccountTier, AgeStatus, Contact, CustomerProfile, CustomerRecord, ProfileAddress,
    Settings,
};
use crate::utils::error::Result;
use serde_json::{Number, Value};

/// Account type that unlocks balance-based tiers.
pub const PREMIUM_ACCOUNT_TYPE: &str = "PREMIUM";

/// Minimum age classified as an adult.
pub const ADULT_AGE: i64 = 18;

/// Balance a premium account must exceed for the gold tier.
pub const GOLD_BALANCE_THRESHOLD: f64 = 10_000.0;

/// Transforms one raw JSON customer record into a profile.
///
/// The record is validated upfront; the only failure mode is a validation
/// error, surfaced before any part of the profile is built.
pub fn transform(value: &Value) -> Result<CustomerProfile> {
    let record = parse_record(value)?;
    Ok(transform_record(&record))
}

/// Maps a validated record to its profile. Total over validated records.
pub fn transform_record(record: &CustomerRecord) -> CustomerProfile {
    CustomerProfile {
        id: record.customer_id.clone(),
        full_name: record.first_name.clone(),
        contact: Contact {
            email: record.email.clone(),
            phone: record.phone.clone(),
        },
        address: ProfileAddress {
            street: record.address.street.clone(),
            city: record.address.city.clone(),
            state: record.address.state.clone(),
            zip: record.address.zip_code.clone(),
        },
        account: Account {
            kind: record.account_type.clone(),
            balance: record.balance.clone(),
            status: age_status(record.age),
            tier: account_tier(&record.account_type, &record.balance),
        },
        settings: Settings {
            notifications: record.preferences.notifications.clone(),
        },
    }
}

fn age_status(age: i64) -> AgeStatus {
    if age >= ADULT_AGE {
        AgeStatus::Adult
    } else {
        AgeStatus::Minor
    }
}

// The tier comparison reads the f64 value; the stored balance is copied
// through untouched.
fn account_tier(account_type: &str, balance: &Number) -> AccountTier {
    if account_type != PREMIUM_ACCOUNT_TYPE {
        return AccountTier::Bronze;
    }
    if balance
        .as_f64()
        .is_some_and(|amount| amount > GOLD_BALANCE_THRESHOLD)
    {
        AccountTier::Gold
    } else {
        AccountTier::Silver
    }
}
