use crate::domain::area_account::ui::list::AreaAccountList;
use crate::shared::api_utils::ApiConfig;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Endpoint configuration is composed once here and read from context by
    // everything that talks to the service.
    provide_context(ApiConfig::from_window());

    view! {
        <AreaAccountList />
    }
}
