//! Mutable state of one open form session

use std::collections::{HashMap, HashSet};

use serde_json::Value;

use super::record::Record;
use crate::metadata::FieldDefinition;

/// One choice of a select field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionItem {
    pub value: String,
    pub label: String,
}

/// Which variant of the form is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

/// Per-session form state: raw values, fetched options, in-flight flags,
/// validation errors, touched set. Created empty (add mode) or seeded from a
/// record (edit mode); discarded when the form closes.
///
/// Every lookup gets a per-field monotonic ticket from [`begin_fetch`]; a
/// result is applied only while its ticket is still the latest issued for
/// that field, so a superseded response can never overwrite a newer one.
///
/// [`begin_fetch`]: FormState::begin_fetch
#[derive(Debug, Clone, Default)]
pub struct FormState {
    values: HashMap<String, String>,
    options: HashMap<String, Vec<OptionItem>>,
    pending: HashSet<String>,
    errors: HashMap<String, String>,
    touched: HashSet<String>,
    tickets: HashMap<String, u64>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field_id: &str) -> &str {
        self.values.get(field_id).map(String::as_str).unwrap_or("")
    }

    pub fn set_value(&mut self, field_id: &str, value: impl Into<String>) {
        self.values.insert(field_id.to_string(), value.into());
    }

    pub fn options(&self, field_id: &str) -> &[OptionItem] {
        self.options.get(field_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn set_options(&mut self, field_id: &str, options: Vec<OptionItem>) {
        self.options.insert(field_id.to_string(), options);
    }

    pub fn is_pending(&self, field_id: &str) -> bool {
        self.pending.contains(field_id)
    }

    pub fn error(&self, field_id: &str) -> Option<&str> {
        self.errors.get(field_id).map(String::as_str)
    }

    pub fn set_error(&mut self, field_id: &str, message: impl Into<String>) {
        self.errors.insert(field_id.to_string(), message.into());
    }

    pub fn clear_error(&mut self, field_id: &str) {
        self.errors.remove(field_id);
    }

    pub fn mark_touched(&mut self, field_id: &str) {
        self.touched.insert(field_id.to_string());
    }

    pub fn is_touched(&self, field_id: &str) -> bool {
        self.touched.contains(field_id)
    }

    /// Error to actually render: surfaces only once the user has interacted
    /// with the field.
    pub fn visible_error(&self, field_id: &str) -> Option<&str> {
        if self.is_touched(field_id) {
            self.error(field_id)
        } else {
            None
        }
    }

    /// Starts a lookup for `field_id`: marks it in flight and returns the
    /// ticket to pass back to [`complete_fetch`].
    ///
    /// [`complete_fetch`]: FormState::complete_fetch
    pub fn begin_fetch(&mut self, field_id: &str) -> u64 {
        let ticket = self.tickets.entry(field_id.to_string()).or_insert(0);
        *ticket += 1;
        self.pending.insert(field_id.to_string());
        *ticket
    }

    /// Applies a lookup result. Returns false (and changes nothing) when the
    /// ticket has been superseded by a newer lookup for the same field. A
    /// failed lookup completes with an empty list.
    pub fn complete_fetch(
        &mut self,
        field_id: &str,
        ticket: u64,
        options: Vec<OptionItem>,
    ) -> bool {
        if self.tickets.get(field_id) != Some(&ticket) {
            return false;
        }
        self.pending.remove(field_id);
        self.options.insert(field_id.to_string(), options);
        true
    }

    /// Cascading clear: drops the field's value, options, in-flight flag and
    /// error. Bumping the ticket invalidates any lookup still in flight.
    pub fn clear_field(&mut self, field_id: &str) {
        self.values.remove(field_id);
        self.options.remove(field_id);
        self.pending.remove(field_id);
        self.errors.remove(field_id);
        if let Some(ticket) = self.tickets.get_mut(field_id) {
            *ticket += 1;
        }
    }

    /// Overall form validity. Create mode additionally requires every
    /// required field shown on the create variant to hold a value; edit mode
    /// trusts the loaded record and only gates on the absence of errors.
    pub fn is_valid(&self, definitions: &[FieldDefinition], mode: FormMode) -> bool {
        if !self.errors.is_empty() {
            return false;
        }
        match mode {
            FormMode::Edit => true,
            FormMode::Create => definitions
                .iter()
                .filter(|def| def.visible_on_create && def.validation.is_required())
                .all(|def| !self.value(def.id).trim().is_empty()),
        }
    }

    /// Snapshot of the current values as a record (save payload).
    pub fn to_record(&self) -> Record {
        self.values
            .iter()
            .map(|(id, value)| (id.clone(), Value::String(value.clone())))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opt(value: &str) -> OptionItem {
        OptionItem {
            value: value.to_string(),
            label: value.to_string(),
        }
    }

    #[test]
    fn stale_ticket_is_discarded() {
        let mut state = FormState::new();
        let first = state.begin_fetch("areaId");
        let second = state.begin_fetch("areaId");

        // the newer request resolves first
        assert!(state.complete_fetch("areaId", second, vec![opt("102")]));
        assert!(!state.is_pending("areaId"));

        // the superseded one arrives late and must not overwrite
        assert!(!state.complete_fetch("areaId", first, vec![opt("999")]));
        assert_eq!(state.options("areaId"), [opt("102")]);
    }

    #[test]
    fn results_for_different_fields_cannot_clobber_each_other() {
        let mut state = FormState::new();
        let area = state.begin_fetch("areaId");
        let bank = state.begin_fetch("bankId");

        // completion order does not matter, each result is keyed by field
        assert!(state.complete_fetch("bankId", bank, vec![opt("Santander")]));
        assert!(state.complete_fetch("areaId", area, vec![opt("102")]));
        assert_eq!(state.options("areaId"), [opt("102")]);
        assert_eq!(state.options("bankId"), [opt("Santander")]);
    }

    #[test]
    fn clear_field_invalidates_in_flight_lookup() {
        let mut state = FormState::new();
        let ticket = state.begin_fetch("areaId");
        state.clear_field("areaId");
        assert!(!state.complete_fetch("areaId", ticket, vec![opt("102")]));
        assert!(state.options("areaId").is_empty());
    }

    #[test]
    fn errors_surface_only_after_touch() {
        let mut state = FormState::new();
        state.set_error("salida", "Salida is required");
        assert_eq!(state.visible_error("salida"), None);
        state.mark_touched("salida");
        assert_eq!(state.visible_error("salida"), Some("Salida is required"));
    }
}
