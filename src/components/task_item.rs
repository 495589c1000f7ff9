//! Task Item Component
//!
//! One checklist row with a toggle checkbox and a delete button.

use leptos::prelude::*;

use crate::models::Task;

/// Single task row. Mutations go through the callbacks; the task itself is
/// an immutable snapshot.
#[component]
pub fn TaskItem(
    task: Task,
    #[prop(into)] on_toggle: Callback<u64>,
    #[prop(into)] on_delete: Callback<u64>,
) -> impl IntoView {
    let id = task.id;
    let text_class = if task.done { "task-text done" } else { "task-text" };

    view! {
        <li class="task-item">
            <input
                type="checkbox"
                prop:checked=task.done
                on:change=move |_| on_toggle.run(id)
            />
            <span class=text_class>{task.text.clone()}</span>
            <button class="delete-btn" on:click=move |_| on_delete.run(id)>
                "×"
            </button>
        </li>
    }
}
