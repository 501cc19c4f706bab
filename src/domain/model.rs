use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::fmt;

/// Inbound customer record, produced by input validation.
///
/// Field names mirror the source JSON (camelCase on the wire).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRecord {
    pub customer_id: String,
    pub first_name: String,
    pub email: String,
    pub phone: String,
    pub address: Address,
    pub account_type: String,
    /// Kept as a JSON number so integer balances stay integers on output.
    pub balance: Number,
    pub age: i64,
    pub preferences: Preferences,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    /// Carried through to the profile without interpretation.
    pub notifications: Value,
}

/// Outbound customer profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerProfile {
    pub id: String,
    pub full_name: String,
    pub contact: Contact,
    pub address: ProfileAddress,
    pub account: Account,
    pub settings: Settings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileAddress {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    #[serde(rename = "type")]
    pub kind: String,
    pub balance: Number,
    pub status: AgeStatus,
    pub tier: AccountTier,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub notifications: Value,
}

/// Age-derived account status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeStatus {
    Adult,
    Minor,
}

impl AgeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgeStatus::Adult => "adult",
            AgeStatus::Minor => "minor",
        }
    }
}

impl fmt::Display for AgeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Balance-derived account tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AccountTier {
    Gold,
    Silver,
    Bronze,
}

impl AccountTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountTier::Gold => "GOLD",
            AccountTier::Silver => "SILVER",
            AccountTier::Bronze => "BRONZE",
        }
    }
}

impl fmt::Display for AccountTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
