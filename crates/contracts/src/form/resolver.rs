//! Dependency resolver
//!
//! One synchronous pass per user edit: record the value, re-validate,
//! cascade-clear direct dependents, and return the option lookups whose
//! prerequisites are now all satisfied. Multi-level chains collapse over
//! successive edits; they are never eagerly re-cascaded past the direct
//! dependents, which the unconditional clearing already covers.

use super::record::{record_value, Record};
use super::state::{FormState, OptionItem};
use super::validation::validate;
use crate::metadata::{find_field, FieldDefinition};

/// One option lookup the host must execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchPlan {
    pub field_id: String,
    /// (field id, value) pairs in the dependent's `depends_on` order; path
    /// segment order follows this exactly.
    pub dependency_values: Vec<(String, String)>,
    /// From [`FormState::begin_fetch`]; pass back to
    /// [`FormState::complete_fetch`] with the result.
    pub ticket: u64,
}

/// Applies one field edit and returns the lookups to run.
///
/// Dependents are cleared unconditionally, even when the value was re-selected
/// unchanged, so a stale option list is never shown against a mismatched
/// dependency value.
pub fn on_field_change(
    state: &mut FormState,
    definitions: &[FieldDefinition],
    field_id: &str,
    new_value: &str,
) -> Vec<FetchPlan> {
    let Some(def) = find_field(definitions, field_id) else {
        log::warn!("change for unknown field '{}' ignored", field_id);
        return Vec::new();
    };

    state.set_value(field_id, new_value);
    revalidate_field(state, def);

    if !def.is_select() {
        return Vec::new();
    }

    // Direct dependents, in static definition order.
    let dependents: Vec<&FieldDefinition> = definitions
        .iter()
        .filter(|d| d.depends_directly_on(field_id))
        .collect();

    for dependent in &dependents {
        state.clear_field(dependent.id);
    }

    if new_value.is_empty() {
        // Dependents stay cleared and disabled; nothing to fetch.
        return Vec::new();
    }

    let mut plans = Vec::new();
    for dependent in dependents {
        let mapping: Vec<(String, String)> = dependent
            .depends_on
            .iter()
            .map(|&dep_id| {
                let value = if dep_id == field_id {
                    new_value.to_string()
                } else {
                    state.value(dep_id).to_string()
                };
                (dep_id.to_string(), value)
            })
            .collect();

        let all_dependencies_met = mapping.iter().all(|(_, value)| !value.is_empty());
        if all_dependencies_met {
            if let Some(plan) = plan_fetch(state, dependent, mapping) {
                plans.push(plan);
            }
        }
    }
    plans
}

/// Re-runs the evaluator for one field (also used on blur).
pub fn revalidate_field(state: &mut FormState, def: &FieldDefinition) {
    let value = state.value(def.id).to_string();
    match validate(def, &value) {
        Some(message) => state.set_error(def.id, message),
        None => state.clear_error(def.id),
    }
}

/// Opens an add-new session: empty state, independent selects fetched
/// unconditionally.
pub fn open_create(definitions: &[FieldDefinition]) -> (FormState, Vec<FetchPlan>) {
    let mut state = FormState::new();
    let mut plans = Vec::new();
    for def in definitions
        .iter()
        .filter(|d| d.is_select() && d.is_independent())
    {
        if let Some(plan) = plan_fetch(&mut state, def, Vec::new()) {
            plans.push(plan);
        }
    }
    (state, plans)
}

/// Opens an edit session seeded from `record`. Editable selects re-fetch
/// their options from the record's own values (skipped when a prerequisite is
/// missing); display-only selects get a single synthesized entry so the
/// stored selection shows without offering other choices.
pub fn open_edit(
    definitions: &[FieldDefinition],
    record: &Record,
) -> (FormState, Vec<FetchPlan>) {
    let mut state = FormState::new();
    for def in definitions {
        state.set_value(def.id, record_value(record, def.id));
    }

    let mut plans = Vec::new();
    for def in definitions.iter().filter(|d| d.is_select()) {
        if def.editable_on_update {
            let mapping: Vec<(String, String)> = def
                .depends_on
                .iter()
                .map(|&dep_id| (dep_id.to_string(), record_value(record, dep_id)))
                .collect();
            if mapping.iter().all(|(_, value)| !value.is_empty()) {
                if let Some(plan) = plan_fetch(&mut state, def, mapping) {
                    plans.push(plan);
                }
            }
        } else {
            let stored = record_value(record, def.id);
            if !stored.is_empty() {
                state.set_options(
                    def.id,
                    vec![OptionItem {
                        value: stored.clone(),
                        label: stored,
                    }],
                );
            }
        }
    }
    (state, plans)
}

/// Composite key of `record`: only the fields marked `is_key_component`.
pub fn key_values(definitions: &[FieldDefinition], record: &Record) -> Record {
    definitions
        .iter()
        .filter(|def| def.is_key_component)
        .filter_map(|def| record.get(def.id).map(|v| (def.id.to_string(), v.clone())))
        .collect()
}

fn plan_fetch(
    state: &mut FormState,
    def: &FieldDefinition,
    dependency_values: Vec<(String, String)>,
) -> Option<FetchPlan> {
    if def.fetch_path.is_none() {
        // Configuration error in the definition list; the field just stays
        // empty.
        log::error!("select field '{}' has no fetch path, lookup skipped", def.id);
        return None;
    }
    let ticket = state.begin_fetch(def.id);
    Some(FetchPlan {
        field_id: def.id.to_string(),
        dependency_values,
        ticket,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::state::FormMode;
    use crate::metadata::{FieldKind, ValidationRules};
    use serde_json::json;

    // The treasury screen's dependency graph:
    // company → area → concept, company → bank → account.
    static DEFS: &[FieldDefinition] = &[
        select("companyNumber", "Compañía", &[], Some("/getAllCompany")),
        select(
            "areaId",
            "Area",
            &["companyNumber"],
            Some("/getAreaByCompany"),
        ),
        select(
            "conceptId",
            "Concepto",
            &["companyNumber", "areaId"],
            Some("/getConceptByAreaAndCompany"),
        ),
        select(
            "bankId",
            "Banco",
            &["companyNumber"],
            Some("/getBankByCompany"),
        ),
        select(
            "accountNumber",
            "Cuenta",
            &["companyNumber", "bankId"],
            Some("/getAccountByBankAndCompany"),
        ),
        FieldDefinition {
            id: "salida",
            label: "Salida",
            kind: FieldKind::Text,
            depends_on: &[],
            fetch_path: None,
            empty_options_message: None,
            editable_on_update: true,
            visible_on_create: true,
            filterable: false,
            is_key_component: false,
            validation: ValidationRules {
                required: true,
                min: None,
                max: None,
                min_length: Some(2),
                max_length: Some(3),
                pattern: None,
            },
        },
    ];

    const fn select(
        id: &'static str,
        label: &'static str,
        depends_on: &'static [&'static str],
        fetch_path: Option<&'static str>,
    ) -> FieldDefinition {
        FieldDefinition {
            id,
            label,
            kind: FieldKind::Select,
            depends_on,
            fetch_path,
            empty_options_message: None,
            editable_on_update: false,
            visible_on_create: true,
            filterable: false,
            is_key_component: true,
            validation: ValidationRules::required(),
        }
    }

    const fn editable_select(
        id: &'static str,
        label: &'static str,
        depends_on: &'static [&'static str],
        fetch_path: Option<&'static str>,
    ) -> FieldDefinition {
        let mut def = select(id, label, depends_on, fetch_path);
        def.editable_on_update = true;
        def
    }

    fn plan_ids(plans: &[FetchPlan]) -> Vec<&str> {
        plans.iter().map(|p| p.field_id.as_str()).collect()
    }

    #[test]
    fn company_change_fetches_both_direct_dependents() {
        let (mut state, _) = open_create(DEFS);
        let plans = on_field_change(&mut state, DEFS, "companyNumber", "2");

        assert_eq!(plan_ids(&plans), ["areaId", "bankId"]);
        for plan in &plans {
            assert_eq!(
                plan.dependency_values,
                [("companyNumber".to_string(), "2".to_string())]
            );
        }
        assert!(state.is_pending("areaId"));
        assert!(state.is_pending("bankId"));
        // concept and account wait for their other prerequisites
        assert!(!state.is_pending("conceptId"));
        assert!(!state.is_pending("accountNumber"));
    }

    #[test]
    fn concept_fetch_requires_both_company_and_area() {
        let mut state = FormState::new();
        let plans = on_field_change(&mut state, DEFS, "areaId", "102");
        // company is empty, concept stays cleared and unfetched
        assert!(plans.is_empty());

        state.set_value("companyNumber", "2");
        let plans = on_field_change(&mut state, DEFS, "areaId", "102");
        assert_eq!(plan_ids(&plans), ["conceptId"]);
        assert_eq!(
            plans[0].dependency_values,
            [
                ("companyNumber".to_string(), "2".to_string()),
                ("areaId".to_string(), "102".to_string()),
            ]
        );
    }

    #[test]
    fn clearing_the_root_clears_dependents_without_fetching() {
        let mut state = FormState::new();
        state.set_value("companyNumber", "2");
        on_field_change(&mut state, DEFS, "areaId", "102");

        let plans = on_field_change(&mut state, DEFS, "companyNumber", "");
        assert!(plans.is_empty());
        assert_eq!(state.value("areaId"), "");
        assert!(state.options("areaId").is_empty());
        assert!(!state.is_pending("areaId"));
        assert!(!state.is_pending("bankId"));
    }

    #[test]
    fn reselecting_the_same_value_still_clears_and_refetches() {
        let mut state = FormState::new();
        let plans = on_field_change(&mut state, DEFS, "companyNumber", "2");
        let first_ticket = plans[0].ticket;
        state.set_value("areaId", "102");

        let plans = on_field_change(&mut state, DEFS, "companyNumber", "2");
        assert_eq!(plan_ids(&plans), ["areaId", "bankId"]);
        assert!(plans[0].ticket > first_ticket);
        // the dependent's own value was dropped by the unconditional clear
        assert_eq!(state.value("areaId"), "");
    }

    #[test]
    fn text_field_change_never_cascades() {
        let mut state = FormState::new();
        state.set_value("companyNumber", "2");
        let plans = on_field_change(&mut state, DEFS, "salida", "Sal");
        assert!(plans.is_empty());
        assert_eq!(state.value("companyNumber"), "2");
    }

    #[test]
    fn changing_one_field_never_touches_anothers_error() {
        let mut state = FormState::new();
        on_field_change(&mut state, DEFS, "salida", "S");
        let before = state.error("salida").map(str::to_string);
        on_field_change(&mut state, DEFS, "companyNumber", "2");
        assert_eq!(state.error("salida").map(str::to_string), before);
    }

    #[test]
    fn create_open_fetches_only_independent_selects() {
        let (state, plans) = open_create(DEFS);
        assert_eq!(plan_ids(&plans), ["companyNumber"]);
        assert!(plans[0].dependency_values.is_empty());
        assert!(state.is_pending("companyNumber"));
    }

    #[test]
    fn edit_open_synthesizes_options_for_display_only_selects() {
        let record: Record = [
            ("companyNumber".to_string(), json!("2")),
            ("areaId".to_string(), json!("103")),
            ("bankId".to_string(), json!("Santander")),
            ("accountNumber".to_string(), json!(98765432)),
        ]
        .into();

        let (state, plans) = open_edit(DEFS, &record);
        // every select here is display-only, nothing is fetched
        assert!(plans.is_empty());
        assert_eq!(state.options("bankId")[0].value, "Santander");
        assert_eq!(state.options("accountNumber")[0].value, "98765432");
        assert_eq!(state.value("areaId"), "103");
        // edit mode gates on errors only, so the form is valid immediately
        assert!(state.is_valid(DEFS, FormMode::Edit));
        assert!(!state.is_valid(DEFS, FormMode::Create));
    }

    #[test]
    fn edit_open_skips_fetch_when_a_prerequisite_is_missing() {
        static EDITABLE: &[FieldDefinition] = &[
            editable_select("companyNumber", "Compañía", &[], Some("/getAllCompany")),
            editable_select(
                "areaId",
                "Area",
                &["companyNumber"],
                Some("/getAreaByCompany"),
            ),
        ];
        let record: Record = [("areaId".to_string(), json!("103"))].into();

        let (state, plans) = open_edit(EDITABLE, &record);
        // company has no stored value: its own fetch is independent and runs,
        // area's is skipped
        assert_eq!(plan_ids(&plans), ["companyNumber"]);
        assert!(!state.is_pending("areaId"));
    }

    #[test]
    fn select_without_fetch_path_is_skipped() {
        static BROKEN: &[FieldDefinition] =
            &[select("companyNumber", "Compañía", &[], None)];
        let (state, plans) = open_create(BROKEN);
        assert!(plans.is_empty());
        assert!(!state.is_pending("companyNumber"));
    }

    #[test]
    fn composite_key_extraction() {
        let record: Record = [
            ("companyNumber".to_string(), json!("2")),
            ("areaId".to_string(), json!("103")),
            ("salida".to_string(), json!("Sal")),
        ]
        .into();
        let keys = key_values(DEFS, &record);
        assert_eq!(keys.len(), 2);
        assert_eq!(keys.get("companyNumber"), Some(&json!("2")));
        assert_eq!(keys.get("areaId"), Some(&json!("103")));
        assert!(!keys.contains_key("salida"));
    }

    #[test]
    fn chain_collapses_over_successive_edits() {
        let mut state = FormState::new();

        let plans = on_field_change(&mut state, DEFS, "companyNumber", "2");
        assert_eq!(plan_ids(&plans), ["areaId", "bankId"]);
        for plan in plans {
            state.complete_fetch(
                &plan.field_id,
                plan.ticket,
                vec![OptionItem {
                    value: "102".to_string(),
                    label: "Area 102".to_string(),
                }],
            );
        }

        let plans = on_field_change(&mut state, DEFS, "areaId", "102");
        assert_eq!(plan_ids(&plans), ["conceptId"]);
    }
}
