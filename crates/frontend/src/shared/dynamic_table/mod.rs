//! Metadata-driven table: filter row, pagination, per-row edit/delete.

pub mod table_utils;

use leptos::prelude::*;
use std::collections::HashMap;

use contracts::form::{key_values, Record};
use contracts::metadata::FieldDefinition;

use crate::shared::components::icons::icon;
use crate::shared::components::pagination_controls::PaginationControls;
use table_utils::{apply_filters, format_cell, page_count, paginate};

/// Tabular list view driven by the same column configuration as the form.
/// Filtering and pagination are a plain in-memory scan over the loaded rows.
#[component]
#[allow(non_snake_case)]
pub fn DynamicTable(
    /// Column configuration for the screen
    fields: &'static [FieldDefinition],
    /// Loaded rows
    #[prop(into)]
    rows: Signal<Vec<Record>>,
    /// Add-new action
    on_add: Callback<()>,
    /// Edit action, invoked with the full row
    on_edit: Callback<Record>,
    /// Delete action, invoked with the composite key values only
    on_delete: Callback<Record>,
) -> impl IntoView {
    let filters = RwSignal::new(HashMap::<String, String>::new());
    let (page, set_page) = signal(0usize);
    let (page_size, set_page_size) = signal(10usize);

    let filtered = Memo::new(move |_| apply_filters(&rows.get(), &filters.get()));
    let total_pages = Memo::new(move |_| page_count(filtered.get().len(), page_size.get()));
    // Page is clamped rather than reset so deleting the last row of the last
    // page lands on the new last page.
    let current_page = Memo::new(move |_| page.get().min(total_pages.get().saturating_sub(1)));
    let page_rows = Memo::new(move |_| {
        paginate(&filtered.get(), current_page.get(), page_size.get())
    });

    let filterable: Vec<&'static FieldDefinition> =
        fields.iter().filter(|def| def.filterable).collect();

    let clear_filters = move |_| {
        filters.set(HashMap::new());
        set_page.set(0);
    };

    view! {
        <div class="table-toolbar">
            <div class="table-toolbar__filters">
                {filterable.into_iter().map(|def| {
                    view! {
                        <input
                            type="text"
                            class="table-toolbar__filter-input"
                            placeholder=format!("Filtrar por {}...", def.label)
                            prop:value=move || filters.get().get(def.id).cloned().unwrap_or_default()
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                filters.update(|f| {
                                    f.insert(def.id.to_string(), value);
                                });
                                set_page.set(0);
                            }
                        />
                    }
                }).collect_view()}
                <button class="button button--icon" title="Limpiar filtros" on:click=clear_filters>
                    {icon("filter-off")}
                </button>
            </div>
            <button class="button button--primary" on:click=move |_| on_add.run(())>
                {icon("plus")}
                {"Agregar"}
            </button>
        </div>

        <div class="table">
            <table class="table__data table--striped">
                <thead class="table__head">
                    <tr>
                        {fields.iter().map(|def| view! {
                            <th class="table__header-cell">{def.label}</th>
                        }).collect_view()}
                        <th class="table__header-cell table__header-cell--actions">{"Acciones"}</th>
                    </tr>
                </thead>
                <tbody>
                    {move || page_rows.get().into_iter().map(|record| {
                        let cells: Vec<String> =
                            fields.iter().map(|def| format_cell(&record, def)).collect();
                        let keys = key_values(fields, &record);
                        let record_for_edit = record;
                        view! {
                            <tr class="table__row">
                                {cells.into_iter().map(|cell| view! {
                                    <td class="table__cell">{cell}</td>
                                }).collect_view()}
                                <td class="table__cell table__cell--actions">
                                    <button
                                        class="button button--icon"
                                        title="Editar"
                                        on:click=move |_| on_edit.run(record_for_edit.clone())
                                    >
                                        {icon("edit")}
                                    </button>
                                    <button
                                        class="button button--icon"
                                        title="Eliminar"
                                        on:click=move |_| on_delete.run(keys.clone())
                                    >
                                        {icon("delete")}
                                    </button>
                                </td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>
        </div>

        <PaginationControls
            current_page=current_page
            total_pages=total_pages
            total_count=Signal::derive(move || filtered.get().len())
            page_size=page_size
            on_page_change=Callback::new(move |p| set_page.set(p))
            on_page_size_change=Callback::new(move |size| {
                set_page_size.set(size);
                set_page.set(0);
            })
        />
    }
}
