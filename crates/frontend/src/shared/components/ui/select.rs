use contracts::form::OptionItem;
use leptos::prelude::*;

/// Select component with label, loading and empty-state support
///
/// While `loading` is true the control is disabled and shows a single
/// loading row; when the resolved option list is empty it shows
/// `empty_message` instead of choices. A leading blank option lets the user
/// clear the selection (which cascades to dependents).
#[component]
pub fn Select(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Current value
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Blur event handler (used to mark the field as touched)
    #[prop(optional)]
    on_blur: Option<Callback<()>>,
    /// Resolved options
    #[prop(into)]
    options: Signal<Vec<OptionItem>>,
    /// True while the option lookup is in flight
    #[prop(optional, into)]
    loading: MaybeProp<bool>,
    /// Shown when the lookup yielded nothing (or failed)
    #[prop(optional, into)]
    empty_message: MaybeProp<String>,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Required attribute
    #[prop(optional)]
    required: bool,
    /// Current validation error, rendered under the select
    #[prop(optional)]
    error: Option<Signal<Option<String>>>,
    /// ID for the select element
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let select_id = move || id.get().unwrap_or_default();
    let is_loading = move || loading.get().unwrap_or(false);
    let is_disabled = move || disabled.get().unwrap_or(false) || is_loading();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=select_id>
                    {l}
                </label>
            })}
            <select
                id=select_id
                class="form__select"
                class:form__select--loading=is_loading
                disabled=is_disabled
                required=required
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_value(&ev));
                    }
                }
                on:blur=move |_| {
                    if let Some(handler) = on_blur {
                        handler.run(());
                    }
                }
            >
                {move || {
                    if is_loading() {
                        view! { <option disabled selected>"Cargando..."</option> }.into_any()
                    } else if options.get().is_empty() {
                        let message = empty_message.get()
                            .unwrap_or_else(|| "Sin opciones disponibles".to_string());
                        view! {
                            <option value="">""</option>
                            <option disabled>{message}</option>
                        }.into_any()
                    } else {
                        view! {
                            <option value="">""</option>
                            <For
                                each=move || options.get()
                                key=|item| item.value.clone()
                                children=move |item| {
                                    let item_value = item.value.clone();
                                    let is_selected = move || value.get() == item_value;
                                    view! {
                                        <option value=item.value.clone() selected=is_selected>
                                            {item.label.clone()}
                                        </option>
                                    }
                                }
                            />
                        }.into_any()
                    }
                }}
            </select>
            {move || error.and_then(|e| e.get()).map(|message| view! {
                <span class="form__error">{message}</span>
            })}
        </div>
    }
}
