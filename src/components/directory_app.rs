//! Directory App
//!
//! Root of the user-directory demo. Fetches the user collection once and
//! renders a card per user; each card loads its own to-dos independently.

use leptos::prelude::*;

use crate::api;
use crate::components::UserList;
use crate::fetch::{create_fetch, FetchState};

#[component]
pub fn DirectoryApp() -> impl IntoView {
    let users = create_fetch(|| (), |_| api::fetch_users());

    Effect::new(move |_| {
        if let FetchState::Success(list) = users.get() {
            web_sys::console::log_1(&format!("[DIRECTORY] Loaded {} users", list.len()).into());
        }
    });

    view! {
        <div class="directory-app">
            <h1>"Users and To-Dos"</h1>
            {move || match users.get() {
                FetchState::Loading => {
                    view! { <p class="loading">"Loading users..."</p> }.into_any()
                }
                FetchState::Error(message) => {
                    view! { <p class="error">{message}</p> }.into_any()
                }
                FetchState::Success(list) => view! { <UserList users=list /> }.into_any(),
            }}
        </div>
    }
}
