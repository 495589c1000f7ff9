//! Remote API Bindings
//!
//! Read-only GET requests against the JSONPlaceholder API, decoded into
//! frontend models.

use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::models::{TodoItem, User};

const API_BASE: &str = "https://jsonplaceholder.typicode.com";

/// Fetch the full user collection
pub async fn fetch_users() -> Result<Vec<User>, String> {
    get_json(&format!("{API_BASE}/users")).await
}

/// Fetch the to-dos belonging to one user
pub async fn fetch_todos(user_id: u64) -> Result<Vec<TodoItem>, String> {
    get_json(&format!("{API_BASE}/todos?userId={user_id}")).await
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;

    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(js_message)?;
    let response: web_sys::Response = response
        .dyn_into()
        .map_err(|_| "fetch did not return a Response".to_string())?;

    if !response.ok() {
        return Err(format!("request failed with status {}", response.status()));
    }

    let body = JsFuture::from(response.json().map_err(js_message)?)
        .await
        .map_err(js_message)?;
    serde_wasm_bindgen::from_value(body).map_err(|e| e.to_string())
}

fn js_message(err: JsValue) -> String {
    err.dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .unwrap_or_else(|| format!("{err:?}"))
}
