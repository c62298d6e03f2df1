//! Area-account maintenance screen: table plus slide-in add/edit form.

use leptos::prelude::*;

use contracts::form::record::record_value;
use contracts::form::Record;

use crate::domain::area_account::api;
use crate::domain::area_account::columns::AREA_ACCOUNT_FIELDS;
use crate::shared::api_utils::ApiConfig;
use crate::shared::components::drawer::Drawer;
use crate::shared::components::icons::icon;
use crate::shared::dynamic_form::DynamicForm;
use crate::shared::dynamic_table::DynamicTable;

#[component]
#[allow(non_snake_case)]
pub fn AreaAccountList() -> impl IntoView {
    let config = use_context::<ApiConfig>().expect("ApiConfig not found in context");
    let (rows, set_rows) = signal::<Vec<Record>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (drawer_open, set_drawer_open) = signal(false);
    let (editing, set_editing) = signal::<Option<Record>>(None);

    let load = {
        let config = config.clone();
        move || {
            let config = config.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api::fetch_rows(&config).await {
                    Ok(v) => {
                        set_rows.set(v);
                        set_error.set(None);
                    }
                    Err(e) => set_error.set(Some(e)),
                }
            });
        }
    };

    let handle_add = Callback::new(move |_: ()| {
        set_editing.set(None);
        set_drawer_open.set(true);
    });

    let handle_edit = Callback::new(move |record: Record| {
        set_editing.set(Some(record));
        set_drawer_open.set(true);
    });

    let handle_delete = Callback::new({
        let config = config.clone();
        let load = load.clone();
        move |keys: Record| {
            let confirmed = web_sys::window()
                .map(|win| {
                    win.confirm_with_message("¿Eliminar el registro seleccionado?")
                        .unwrap_or(false)
                })
                .unwrap_or(false);
            if !confirmed {
                return;
            }

            // Path segments follow the key components' definition order.
            let segments: Vec<String> = AREA_ACCOUNT_FIELDS
                .iter()
                .filter(|def| def.is_key_component)
                .map(|def| record_value(&keys, def.id))
                .collect();

            let config = config.clone();
            let load = load.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api::delete_record(&config, &segments).await {
                    Ok(()) => load(),
                    Err(e) => {
                        if let Some(win) = web_sys::window() {
                            let _ = win
                                .alert_with_message(&format!("No se pudo eliminar: {}", e));
                        }
                    }
                }
            });
        }
    });

    // On failure the drawer stays open with the entered values so the user
    // can retry without re-entering data.
    let handle_save = Callback::new({
        let config = config.clone();
        let load = load.clone();
        move |record: Record| {
            let config = config.clone();
            let load = load.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api::save_record(&config, &record).await {
                    Ok(_) => {
                        set_drawer_open.set(false);
                        set_editing.set(None);
                        load();
                    }
                    Err(e) => {
                        if let Some(win) = web_sys::window() {
                            let _ =
                                win.alert_with_message(&format!("No se pudo guardar: {}", e));
                        }
                    }
                }
            });
        }
    });

    let handle_close = Callback::new(move |_: ()| {
        set_drawer_open.set(false);
        set_editing.set(None);
    });

    load();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Mantenimiento de cuentas por area"}</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--secondary" on:click={
                        let load = load.clone();
                        move |_| load()
                    }>
                        {icon("refresh")}
                        {"Actualizar"}
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <div class="warning-box">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <DynamicTable
                fields=AREA_ACCOUNT_FIELDS
                rows=rows
                on_add=handle_add
                on_edit=handle_edit
                on_delete=handle_delete
            />

            <Show when=move || drawer_open.get()>
                {move || {
                    let initial = editing.get();
                    let title = if initial.is_some() { "EDITAR" } else { "AGREGAR" };
                    view! {
                        <Drawer title=title.to_string() on_close=handle_close>
                            <DynamicForm
                                fields=AREA_ACCOUNT_FIELDS
                                initial=initial
                                on_save=handle_save
                                on_cancel=handle_close
                            />
                        </Drawer>
                    }
                }}
            </Show>
        </div>
    }
}
