//! User Card Component
//!
//! Per-user card that runs its own fetch lifecycle for that user's to-dos.
//! Sibling cards settle independently and in any order; a failure here
//! stays inside this card.

use leptos::prelude::*;

use crate::api;
use crate::components::TodoList;
use crate::fetch::{create_fetch, FetchState};
use crate::models::User;

#[component]
pub fn UserCard(user: User) -> impl IntoView {
    let user_id = user.id;
    let todos = create_fetch(move || user_id, api::fetch_todos);

    Effect::new(move |_| {
        if let FetchState::Error(message) = todos.get() {
            web_sys::console::log_1(
                &format!("[CARD] to-dos for user {} failed: {}", user_id, message).into(),
            );
        }
    });

    view! {
        <div class="user-card">
            <h2 class="user-name">{user.name.clone()}</h2>
            <p class="user-email">{user.email.clone()}</p>
            {move || match todos.get() {
                FetchState::Loading => {
                    view! { <p class="loading">"Loading to-dos..."</p> }.into_any()
                }
                FetchState::Error(message) => {
                    view! { <p class="error">{message}</p> }.into_any()
                }
                FetchState::Success(list) => view! { <TodoList todos=list /> }.into_any(),
            }}
        </div>
    }
}
