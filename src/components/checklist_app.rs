//! Checklist App
//!
//! Root of the local checklist demo. Owns the task collection; children
//! receive snapshots plus callbacks and never mutate it directly.

use leptos::prelude::*;

use crate::components::{TaskInput, TaskList};
use crate::models::Task;
use crate::tasks::{add_task, completed_summary, delete_task, toggle_task};

#[component]
pub fn ChecklistApp() -> impl IntoView {
    let (tasks, set_tasks) = signal(Vec::<Task>::new());

    let on_add = Callback::new(move |text: String| {
        let now_ms = js_sys::Date::now() as u64;
        set_tasks.set(add_task(&tasks.get_untracked(), &text, now_ms));
    });
    let on_toggle = Callback::new(move |id: u64| {
        set_tasks.set(toggle_task(&tasks.get_untracked(), id));
    });
    let on_delete = Callback::new(move |id: u64| {
        set_tasks.set(delete_task(&tasks.get_untracked(), id));
    });

    view! {
        <div class="checklist-app">
            <h1>"Task Manager"</h1>
            <p class="completed-summary">
                {move || format!("Completed: {}", completed_summary(&tasks.get()))}
            </p>

            <TaskInput on_add=on_add />
            <TaskList tasks=tasks on_toggle=on_toggle on_delete=on_delete />
        </div>
    }
}
