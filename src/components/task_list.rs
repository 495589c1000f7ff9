//! Task List Component
//!
//! Renders the checklist in insertion order, or a placeholder when empty.

use leptos::prelude::*;

use crate::components::TaskItem;
use crate::models::Task;

/// Checklist view
#[component]
pub fn TaskList(
    tasks: ReadSignal<Vec<Task>>,
    #[prop(into)] on_toggle: Callback<u64>,
    #[prop(into)] on_delete: Callback<u64>,
) -> impl IntoView {
    view! {
        <Show
            when=move || !tasks.get().is_empty()
            fallback=|| view! { <p class="empty-state">"No tasks yet!"</p> }
        >
            <ul class="task-list">
                <For
                    each=move || tasks.get()
                    // done is part of the key so a toggle re-renders the row
                    key=|t| (t.id, t.done)
                    children=move |task| {
                        view! { <TaskItem task=task on_toggle=on_toggle on_delete=on_delete /> }
                    }
                />
            </ul>
        </Show>
    }
}
