use crate::domain::model::{Address, CustomerRecord, Preferences};
use crate::utils::error::{Result, TransformError};
use crate::utils::validation::{
    json_type_name, require_number, require_path, require_text, require_value,
    require_whole_number,
};
use serde_json::Value;

/// Expected type of an input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Text,
    Number,
    WholeNumber,
    Object,
    Any,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Number => "number",
            FieldType::WholeNumber => "whole number",
            FieldType::Object => "object",
            FieldType::Any => "any",
        }
    }
}

/// One entry of the input schema: a dotted field path and its expected type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub path: &'static str,
    pub kind: FieldType,
}

impl FieldSpec {
    const fn new(path: &'static str, kind: FieldType) -> Self {
        FieldSpec { path, kind }
    }
}

/// Input schema, checked as a single upfront pass. Parents come before
/// children so a broken container is reported ahead of its fields.
pub const INPUT_SCHEMA: &[FieldSpec] = &[
    FieldSpec::new("customerId", FieldType::Text),
    FieldSpec::new("firstName", FieldType::Text),
    FieldSpec::new("email", FieldType::Text),
    FieldSpec::new("phone", FieldType::Text),
    FieldSpec::new("address", FieldType::Object),
    FieldSpec::new("address.street", FieldType::Text),
    FieldSpec::new("address.city", FieldType::Text),
    FieldSpec::new("address.state", FieldType::Text),
    FieldSpec::new("address.zipCode", FieldType::Text),
    FieldSpec::new("accountType", FieldType::Text),
    FieldSpec::new("balance", FieldType::Number),
    FieldSpec::new("age", FieldType::WholeNumber),
    FieldSpec::new("preferences", FieldType::Object),
    FieldSpec::new("preferences.notifications", FieldType::Any),
];

/// Validates a raw record against [`INPUT_SCHEMA`], failing on the first
/// missing or mistyped field.
pub fn validate_value(value: &Value) -> Result<()> {
    if !value.is_object() {
        return Err(TransformError::invalid_type(
            "record",
            "object",
            json_type_name(value),
        ));
    }
    for spec in INPUT_SCHEMA {
        check_field(value, spec)?;
    }
    Ok(())
}

// Type checks route through the same helpers parse_record extracts with;
// both passes diagnose a field identically.
fn check_field(root: &Value, spec: &FieldSpec) -> Result<()> {
    match spec.kind {
        FieldType::Text => require_text(root, spec.path).map(|_| ()),
        FieldType::Number => require_number(root, spec.path).map(|_| ()),
        FieldType::WholeNumber => require_whole_number(root, spec.path).map(|_| ()),
        FieldType::Any => require_path(root, spec.path).map(|_| ()),
        FieldType::Object => {
            let value = require_path(root, spec.path)?;
            if value.is_object() {
                Ok(())
            } else {
                Err(TransformError::invalid_type(
                    spec.path,
                    spec.kind.as_str(),
                    json_type_name(value),
                ))
            }
        }
    }
}

/// Validates a raw JSON record and converts it into a typed [`CustomerRecord`].
pub fn parse_record(value: &Value) -> Result<CustomerRecord> {
    validate_value(value)?;

    Ok(CustomerRecord {
        customer_id: require_text(value, "customerId")?,
        first_name: require_text(value, "firstName")?,
        email: require_text(value, "email")?,
        phone: require_text(value, "phone")?,
        address: Address {
            street: require_text(value, "address.street")?,
            city: require_text(value, "address.city")?,
            state: require_text(value, "address.state")?,
            zip_code: require_text(value, "address.zipCode")?,
        },
        account_type: require_text(value, "accountType")?,
        balance: require_number(value, "balance")?,
        age: require_whole_number(value, "age")?,
        preferences: Preferences {
            notifications: require_value(value, "preferences.notifications")?,
        },
    })
}
