// Core layer: input schema validation and the record-to-profile mapping.

pub mod schema;
pub mod transform;

pub use schema::{parse_record, validate_value, FieldSpec, FieldType, INPUT_SCHEMA};
pub use transform::{transform, transform_record};
