//! User List Component
//!
//! Lays out one card per fetched user.

use leptos::prelude::*;

use crate::components::UserCard;
use crate::models::User;

/// User card grid; the collection is immutable once loaded
#[component]
pub fn UserList(users: Vec<User>) -> impl IntoView {
    view! {
        <div class="user-grid">
            <For
                each=move || users.clone()
                key=|u| u.id
                children=|user| view! { <UserCard user=user /> }
            />
        </div>
    }
}
