//! Column configuration for the area-account maintenance screen.
//!
//! This one static list drives the table, the add/edit form and the
//! dependency resolution between selects. Two chains hang off the company:
//! company → area → concept and company → bank → account.

use contracts::metadata::{FieldDefinition, FieldKind, ValidationRules};

pub static AREA_ACCOUNT_FIELDS: &[FieldDefinition] = &[
    FieldDefinition {
        id: "companyNumber",
        label: "Compañía",
        kind: FieldKind::Select,
        depends_on: &[],
        fetch_path: Some("/getAllCompany"),
        empty_options_message: Some("No hay compañías disponibles"),
        editable_on_update: false,
        visible_on_create: true,
        filterable: true,
        is_key_component: true,
        validation: ValidationRules::required(),
    },
    FieldDefinition {
        id: "areaId",
        label: "Area",
        kind: FieldKind::Select,
        depends_on: &["companyNumber"],
        fetch_path: Some("/getAreaByCompany"),
        empty_options_message: Some("No hay areas para la compañía"),
        editable_on_update: false,
        visible_on_create: true,
        filterable: true,
        is_key_component: true,
        validation: ValidationRules::required(),
    },
    FieldDefinition {
        id: "conceptId",
        label: "Concepto",
        kind: FieldKind::Select,
        depends_on: &["companyNumber", "areaId"],
        fetch_path: Some("/getConceptByAreaAndCompany"),
        empty_options_message: Some("No hay conceptos para el area"),
        editable_on_update: true,
        visible_on_create: true,
        filterable: true,
        is_key_component: true,
        validation: ValidationRules::required(),
    },
    FieldDefinition {
        id: "bankId",
        label: "Banco",
        kind: FieldKind::Select,
        depends_on: &["companyNumber"],
        fetch_path: Some("/getBankByCompany"),
        empty_options_message: Some("No hay bancos para la compañía"),
        editable_on_update: false,
        visible_on_create: true,
        filterable: true,
        is_key_component: true,
        validation: ValidationRules::required(),
    },
    FieldDefinition {
        id: "accountNumber",
        label: "Cuenta",
        kind: FieldKind::Select,
        depends_on: &["companyNumber", "bankId"],
        fetch_path: Some("/getAccountByBankAndCompany"),
        empty_options_message: Some("No hay cuentas para el banco"),
        editable_on_update: false,
        visible_on_create: true,
        filterable: true,
        is_key_component: true,
        validation: ValidationRules::required(),
    },
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
            pattern: Some("[A-Za-z]+"),
        },
    },
    FieldDefinition {
        id: "amount",
        label: "Importe",
        kind: FieldKind::Number,
        depends_on: &[],
        fetch_path: None,
        empty_options_message: None,
        editable_on_update: true,
        visible_on_create: true,
        filterable: false,
        is_key_component: false,
        validation: ValidationRules {
            required: false,
            min: Some(0.0),
            max: Some(99_999_999.0),
            min_length: None,
            max_length: None,
            pattern: None,
        },
    },
    FieldDefinition {
        id: "validFrom",
        label: "Vigente desde",
        kind: FieldKind::Date,
        depends_on: &[],
        fetch_path: None,
        empty_options_message: None,
        editable_on_update: true,
        visible_on_create: true,
        filterable: false,
        is_key_component: false,
        validation: ValidationRules::none(),
    },
    // Maintained by the service; shown in the list only.
    FieldDefinition {
        id: "updatedAt",
        label: "Actualizado",
        kind: FieldKind::DateTime,
        depends_on: &[],
        fetch_path: None,
        empty_options_message: None,
        editable_on_update: false,
        visible_on_create: false,
        filterable: false,
        is_key_component: false,
        validation: ValidationRules::none(),
    },
];
