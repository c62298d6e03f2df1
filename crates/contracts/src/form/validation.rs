//! Validation evaluator
//!
//! Pure mapping from (field definition, raw value) to the first failing
//! rule's message. Rule order with short-circuit:
//! required → min_length → max_length → numeric min → numeric max → pattern.
//! A field failing `required` reports nothing else; an empty optional value
//! passes every rule, matching HTML constraint semantics.

use regex::Regex;

use crate::metadata::FieldDefinition;

pub fn validate(def: &FieldDefinition, value: &str) -> Option<String> {
    let rules = &def.validation;

    if rules.required && value.trim().is_empty() {
        return Some(format!("{} is required", def.label));
    }
    if value.is_empty() {
        return None;
    }

    let length = value.chars().count();
    if let Some(min) = rules.min_length {
        if length < min {
            return Some(format!(
                "{} must contain at least {} characters",
                def.label, min
            ));
        }
    }
    if let Some(max) = rules.max_length {
        if length > max {
            return Some(format!(
                "{} must not exceed {} characters",
                def.label, max
            ));
        }
    }

    // Numeric bounds apply only when the value parses; the number input
    // already keeps free text out.
    if rules.min.is_some() || rules.max.is_some() {
        if let Ok(number) = value.parse::<f64>() {
            if let Some(min) = rules.min {
                if number < min {
                    return Some(format!("{} must be at least {}", def.label, min));
                }
            }
            if let Some(max) = rules.max {
                if number > max {
                    return Some(format!("{} must be at most {}", def.label, max));
                }
            }
        }
    }

    if let Some(pattern) = rules.pattern {
        // Anchored like the HTML pattern attribute.
        match Regex::new(&format!("^(?:{})$", pattern)) {
            Ok(re) => {
                if !re.is_match(value) {
                    return Some(format!("{} has an invalid format", def.label));
                }
            }
            Err(err) => {
                // Configuration error in the static definition list.
                log::warn!("invalid pattern on field '{}': {}", def.id, err);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::{FieldKind, ValidationRules};

    const SALIDA: FieldDefinition = FieldDefinition {
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
    };

    const AMOUNT: FieldDefinition = FieldDefinition {
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
            max: Some(100.0),
            min_length: None,
            max_length: None,
            pattern: None,
        },
    };

    #[test]
    fn required_short_circuits_length_rules() {
        let err = validate(&SALIDA, "").unwrap();
        assert_eq!(err, "Salida is required");
    }

    #[test]
    fn min_length_then_ok() {
        assert_eq!(
            validate(&SALIDA, "S"),
            Some("Salida must contain at least 2 characters".to_string())
        );
        assert_eq!(validate(&SALIDA, "Sal"), None);
    }

    #[test]
    fn max_length() {
        assert_eq!(
            validate(&SALIDA, "Sali"),
            Some("Salida must not exceed 3 characters".to_string())
        );
    }

    #[test]
    fn numeric_bounds() {
        assert_eq!(
            validate(&AMOUNT, "-1"),
            Some("Importe must be at least 0".to_string())
        );
        assert_eq!(
            validate(&AMOUNT, "250"),
            Some("Importe must be at most 100".to_string())
        );
        assert_eq!(validate(&AMOUNT, "42"), None);
        // optional and empty: no rule applies
        assert_eq!(validate(&AMOUNT, ""), None);
    }

    #[test]
    fn pattern_is_anchored() {
        let mut def = SALIDA;
        def.validation.pattern = Some("[A-Za-z]+");
        assert_eq!(validate(&def, "Sal"), None);
        assert_eq!(
            validate(&def, "S4l"),
            Some("Salida has an invalid format".to_string())
        );
    }

    #[test]
    fn evaluator_is_pure() {
        assert_eq!(validate(&SALIDA, "Sal"), validate(&SALIDA, "Sal"));
        assert_eq!(validate(&SALIDA, "S"), validate(&SALIDA, "S"));
    }
}
