//! Option lookups for dynamically fetched select fields.

use contracts::form::{FetchPlan, FormState, OptionItem};
use contracts::metadata::FieldDefinition;
use gloo_net::http::Request;
use leptos::prelude::*;
use serde::Deserialize;

use crate::shared::api_utils::ApiConfig;

/// Wire format of the lookup endpoints: a JSON array of `{id, value}`.
#[derive(Debug, Clone, Deserialize)]
struct LookupItem {
    id: String,
    value: String,
}

/// Issues option lookups against the configured service.
#[derive(Clone)]
pub struct OptionFetcher {
    config: ApiConfig,
}

impl OptionFetcher {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    /// GET `<base><fetch_path>[/<dep1>/<dep2>/...]` with dependency values
    /// appended as percent-encoded path segments in `depends_on` order.
    /// Any transport, status or decode failure resolves to an empty list;
    /// the field then renders its configured empty-state message.
    pub async fn fetch_options(
        &self,
        def: &FieldDefinition,
        dependency_values: &[(String, String)],
    ) -> Vec<OptionItem> {
        let Some(path) = def.fetch_path else {
            log::error!("select field '{}' has no fetch path configured", def.id);
            return Vec::new();
        };

        let mut url = self.config.url(path);
        for (_, value) in dependency_values {
            url.push('/');
            url.push_str(&urlencoding::encode(value));
        }

        match self.request(&url).await {
            Ok(items) => items
                .into_iter()
                .map(|item| OptionItem {
                    value: item.id,
                    label: item.value,
                })
                .collect(),
            Err(err) => {
                log::error!("option lookup for '{}' failed: {}", def.id, err);
                Vec::new()
            }
        }
    }

    async fn request(&self, url: &str) -> Result<Vec<LookupItem>, String> {
        let mut request = Request::get(url);
        for (name, value) in self.config.default_headers() {
            request = request.header(name, value);
        }
        let response = request
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP {}", response.status()));
        }

        response
            .json::<Vec<LookupItem>>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    }
}

/// Executes the fetch plans returned by the resolver. Each plan runs as its
/// own task; the result goes back through `complete_fetch`, which discards
/// superseded tickets, so completion order cannot corrupt state.
pub fn run_plans(
    fetcher: &OptionFetcher,
    state: RwSignal<FormState>,
    definitions: &'static [FieldDefinition],
    plans: Vec<FetchPlan>,
) {
    for plan in plans {
        let Some(def) = definitions.iter().find(|d| d.id == plan.field_id) else {
            continue;
        };
        let fetcher = fetcher.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let options = fetcher.fetch_options(def, &plan.dependency_values).await;
            state.update(|s| {
                s.complete_fetch(&plan.field_id, plan.ticket, options);
            });
        });
    }
}
