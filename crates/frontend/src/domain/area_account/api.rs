//! REST calls for the area-account maintenance service.

use contracts::form::Record;
use gloo_net::http::Request;

use crate::shared::api_utils::ApiConfig;

/// Fetch all maintained rows
pub async fn fetch_rows(config: &ApiConfig) -> Result<Vec<Record>, String> {
    let response = Request::get(&config.url("/getAllAreaAccounts"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch rows: {}", response.status()));
    }

    response
        .json::<Vec<Record>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Save a new or edited record. The body is the full values mapping; the
/// service echoes the saved record back.
pub async fn save_record(config: &ApiConfig, record: &Record) -> Result<Record, String> {
    let response = Request::put(&config.url("/update"))
        .json(record)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to save record: {}", response.status()));
    }

    response
        .json::<Record>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Delete one record addressed by its composite key, passed as path segments.
pub async fn delete_record(config: &ApiConfig, key_segments: &[String]) -> Result<(), String> {
    let mut url = config.url("/delete");
    for segment in key_segments {
        url.push('/');
        url.push_str(&urlencoding::encode(segment));
    }

    let response = Request::delete(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to delete record: {}", response.status()));
    }

    Ok(())
}
