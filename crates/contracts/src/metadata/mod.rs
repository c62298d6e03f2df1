//! Column metadata for maintenance screens.
//!
//! A screen declares one `pub static FIELDS: &[FieldDefinition]` and the
//! table, the form, and the dependency resolver are all driven from it.
//! All types use 'static lifetimes for zero-cost compile-time constants.

mod field_kind;
mod types;
mod validation;

pub use field_kind::FieldKind;
pub use types::{find_field, FieldDefinition};
pub use validation::ValidationRules;
