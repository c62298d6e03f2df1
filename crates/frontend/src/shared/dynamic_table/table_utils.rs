//! Pure helpers behind the dynamic table: filtering, pagination, cell
//! formatting.

use chrono::NaiveDateTime;
use contracts::form::record::{record_value, Record};
use contracts::metadata::{FieldDefinition, FieldKind};
use std::collections::HashMap;

/// Case-insensitive substring match; a row passes when it matches every
/// active filter.
pub fn apply_filters(rows: &[Record], filters: &HashMap<String, String>) -> Vec<Record> {
    if filters.values().all(|f| f.trim().is_empty()) {
        return rows.to_vec();
    }
    rows.iter()
        .filter(|row| {
            filters.iter().all(|(field_id, filter)| {
                let filter = filter.trim().to_lowercase();
                if filter.is_empty() {
                    return true;
                }
                record_value(row, field_id).to_lowercase().contains(&filter)
            })
        })
        .cloned()
        .collect()
}

pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// Slice of `rows` for a 0-indexed page.
pub fn paginate(rows: &[Record], page: usize, page_size: usize) -> Vec<Record> {
    rows.iter()
        .skip(page * page_size)
        .take(page_size)
        .cloned()
        .collect()
}

/// Display value of one cell. Datetime columns are re-rendered from the wire
/// format to "Y-m-d H:M"; everything else passes through.
pub fn format_cell(row: &Record, def: &FieldDefinition) -> String {
    let raw = record_value(row, def.id);
    if def.kind == FieldKind::DateTime && !raw.is_empty() {
        for wire_format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
            if let Ok(dt) = NaiveDateTime::parse_from_str(&raw, wire_format) {
                return dt.format("%Y-%m-%d %H:%M").to_string();
            }
        }
    }
    raw
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::metadata::ValidationRules;
    use serde_json::json;

    fn row(company: &str, area: &str) -> Record {
        [
            ("companyNumber".to_string(), json!(company)),
            ("areaId".to_string(), json!(area)),
        ]
        .into()
    }

    #[test]
    fn filters_are_conjunctive_and_case_insensitive() {
        let rows = vec![row("2", "North"), row("2", "South"), row("3", "North")];

        let mut filters = HashMap::new();
        filters.insert("companyNumber".to_string(), "2".to_string());
        filters.insert("areaId".to_string(), "nor".to_string());

        let filtered = apply_filters(&rows, &filters);
        assert_eq!(filtered.len(), 1);
        assert_eq!(record_value(&filtered[0], "areaId"), "North");
    }

    #[test]
    fn blank_filters_pass_everything() {
        let rows = vec![row("2", "North"), row("3", "South")];
        let mut filters = HashMap::new();
        filters.insert("companyNumber".to_string(), "  ".to_string());
        assert_eq!(apply_filters(&rows, &filters).len(), 2);
    }

    #[test]
    fn pagination_slices_and_clamps() {
        let rows: Vec<Record> = (0..23).map(|i| row(&i.to_string(), "x")).collect();
        assert_eq!(page_count(23, 10), 3);
        assert_eq!(paginate(&rows, 0, 10).len(), 10);
        assert_eq!(paginate(&rows, 2, 10).len(), 3);
        assert!(paginate(&rows, 5, 10).is_empty());
        assert_eq!(page_count(0, 10), 0);
    }

    #[test]
    fn datetime_cells_are_reformatted() {
        let def = FieldDefinition {
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
        };
        let record: Record =
            [("updatedAt".to_string(), json!("2026-08-26T14:30:00"))].into();
        assert_eq!(format_cell(&record, &def), "2026-08-26 14:30");

        // unparsable values pass through untouched
        let record: Record = [("updatedAt".to_string(), json!("pending"))].into();
        assert_eq!(format_cell(&record, &def), "pending");
    }
}
