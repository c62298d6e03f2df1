//! Field definition type driving both the table and the form

use super::field_kind::FieldKind;
use super::validation::ValidationRules;

/// Static descriptor of one column/field. Authored once per screen; the
/// engine never mutates it.
///
/// `depends_on` must reference only fields of kind `Select` and must not form
/// a cycle; this is assumed by construction of the static definition list,
/// not enforced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldDefinition {
    /// Unique key; also the property name in records and save payloads.
    pub id: &'static str,
    /// Title shown in the form and in the table header.
    pub label: &'static str,
    pub kind: FieldKind,
    /// Ordered. Dependency values are appended to the fetch path as segments
    /// in exactly this order.
    pub depends_on: &'static [&'static str],
    /// Lookup endpoint relative to the service base URL; required iff the
    /// kind is `Select`.
    pub fetch_path: Option<&'static str>,
    /// Shown in place of choices when a lookup yields nothing (or fails).
    pub empty_options_message: Option<&'static str>,
    /// Whether the field may be changed when editing an existing record.
    pub editable_on_update: bool,
    /// Whether the field appears on the add-new variant of the form.
    pub visible_on_create: bool,
    /// Whether the table renders a filter input for this column.
    pub filterable: bool,
    /// Whether this field participates in the record's composite key.
    pub is_key_component: bool,
    pub validation: ValidationRules,
}

impl FieldDefinition {
    pub fn is_select(&self) -> bool {
        self.kind.is_select()
    }

    /// A field with no prerequisites; fetched once when the form opens.
    pub fn is_independent(&self) -> bool {
        self.depends_on.is_empty()
    }

    pub fn depends_directly_on(&self, field_id: &str) -> bool {
        self.depends_on.iter().any(|dep| *dep == field_id)
    }
}

pub fn find_field<'a>(
    definitions: &'a [FieldDefinition],
    field_id: &str,
) -> Option<&'a FieldDefinition> {
    definitions.iter().find(|def| def.id == field_id)
}
