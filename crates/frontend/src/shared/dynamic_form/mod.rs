//! Metadata-driven add/edit form with cascading select dependencies.
//!
//! All data flow lives in `contracts::form`; this component only wires DOM
//! events to the resolver and executes the fetch plans it returns. There is
//! no effect-driven re-triggering: every cascade is one explicit resolver
//! call from the event handler.

use leptos::prelude::*;

use contracts::form::resolver::revalidate_field;
use contracts::form::{on_field_change, open_create, open_edit, FormMode, FormState, Record};
use contracts::metadata::{find_field, FieldDefinition, FieldKind};

use crate::shared::api_utils::ApiConfig;
use crate::shared::components::ui::{Button, Input, Select};
use crate::shared::fetcher::{run_plans, OptionFetcher};

#[component]
#[allow(non_snake_case)]
pub fn DynamicForm(
    /// Column configuration for the screen
    fields: &'static [FieldDefinition],
    /// Record being edited; `None` opens the add-new variant
    initial: Option<Record>,
    /// Invoked with the full values mapping when the user saves
    on_save: Callback<Record>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let config = use_context::<ApiConfig>().expect("ApiConfig not found in context");
    let fetcher = OptionFetcher::new(config);

    let mode = if initial.is_some() {
        FormMode::Edit
    } else {
        FormMode::Create
    };
    let (initial_state, initial_plans) = match &initial {
        Some(record) => open_edit(fields, record),
        None => open_create(fields),
    };
    let state = RwSignal::new(initial_state);
    run_plans(&fetcher, state, fields, initial_plans);

    let handle_change = {
        let fetcher = fetcher.clone();
        move |field_id: &'static str, value: String| {
            let mut plans = Vec::new();
            state.update(|s| {
                plans = on_field_change(s, fields, field_id, &value);
            });
            run_plans(&fetcher, state, fields, plans);
        }
    };

    let handle_blur = move |field_id: &'static str| {
        state.update(|s| {
            s.mark_touched(field_id);
            if let Some(def) = find_field(fields, field_id) {
                revalidate_field(s, def);
            }
        });
    };

    // Edit shows every field; create only the ones flagged for it.
    let visible: Vec<&'static FieldDefinition> = fields
        .iter()
        .filter(|def| match mode {
            FormMode::Create => def.visible_on_create,
            FormMode::Edit => true,
        })
        .collect();

    view! {
        <div class="form">
            <div class="form__fields">
                {visible
                    .into_iter()
                    .map(|def| render_field(def, mode, state, handle_change.clone(), handle_blur))
                    .collect_view()}
            </div>
            <div class="form__footer">
                <Button variant="secondary" on_click=Callback::new(move |_| on_cancel.run(()))>
                    {"Cancelar"}
                </Button>
                <Button
                    disabled=Signal::derive(move || !state.get().is_valid(fields, mode))
                    on_click=Callback::new(move |_| on_save.run(state.get().to_record()))
                >
                    {"Guardar"}
                </Button>
            </div>
        </div>
    }
}

fn render_field<FC, FB>(
    def: &'static FieldDefinition,
    mode: FormMode,
    state: RwSignal<FormState>,
    handle_change: FC,
    handle_blur: FB,
) -> AnyView
where
    FC: Fn(&'static str, String) + Send + Sync + 'static,
    FB: Fn(&'static str) + Copy + Send + Sync + 'static,
{
    let locked = mode == FormMode::Edit && !def.editable_on_update;
    let disabled = Signal::derive(move || {
        if locked {
            return true;
        }
        // A dependent select stays disabled until every prerequisite holds a
        // value; the loading case is covered by the pending flag.
        if def.is_select() {
            let s = state.get();
            s.is_pending(def.id) || def.depends_on.iter().any(|dep| s.value(dep).is_empty())
        } else {
            false
        }
    });
    let value = Signal::derive(move || state.get().value(def.id).to_string());
    let error = Signal::derive(move || state.get().visible_error(def.id).map(str::to_string));
    let on_blur = Callback::new(move |_| handle_blur(def.id));

    match def.kind {
        FieldKind::Select => {
            let options = Signal::derive(move || state.get().options(def.id).to_vec());
            let loading = Signal::derive(move || state.get().is_pending(def.id));
            view! {
                <Select
                    label=def.label.to_string()
                    value=value
                    options=options
                    loading=loading
                    empty_message=def.empty_options_message.map(String::from)
                    disabled=disabled
                    required=def.validation.is_required()
                    error=error
                    id=def.id.to_string()
                    on_change=Callback::new(move |v| handle_change(def.id, v))
                    on_blur=on_blur
                />
            }
            .into_any()
        }
        FieldKind::Text | FieldKind::Number | FieldKind::Date | FieldKind::DateTime => {
            view! {
                <Input
                    label=def.label.to_string()
                    value=value
                    input_type=def.kind.input_type().to_string()
                    disabled=disabled
                    required=def.validation.is_required()
                    error=error
                    id=def.id.to_string()
                    on_input=Callback::new(move |v| handle_change(def.id, v))
                    on_blur=on_blur
                />
            }
            .into_any()
        }
    }
}
