use crate::shared::components::icons::icon;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

/// Slide-in panel anchored to the right edge, used for the add/edit form.
#[component]
pub fn Drawer(
    /// Title shown in the drawer header
    title: String,
    /// Callback when the drawer should close
    on_close: Callback<()>,
    /// Drawer content
    children: Children,
) -> impl IntoView {
    // Handle Escape key
    Effect::new(move |_| {
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            if let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() {
                if keyboard_event.key() == "Escape" {
                    on_close.run(());
                }
            }
        }) as Box<dyn FnMut(_)>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    });

    let handle_overlay_click = move |_| {
        on_close.run(());
    };

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <div class="drawer-overlay" on:click=handle_overlay_click>
            <div class="drawer" on:click=stop_propagation>
                <div class="drawer__header">
                    <h2 class="drawer__title">{title}</h2>
                    <button class="button button--icon drawer__close" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>
                <div class="drawer__body">
                    {children()}
                </div>
            </div>
        </div>
    }
}
