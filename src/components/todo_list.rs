//! Todo List Component
//!
//! Read-only render of one user's fetched to-dos.

use leptos::prelude::*;

use crate::models::TodoItem;

/// To-do list with disabled checkboxes
#[component]
pub fn TodoList(todos: Vec<TodoItem>) -> impl IntoView {
    view! {
        <ul class="todo-list">
            <For
                each=move || todos.clone()
                key=|t| t.id
                children=|todo| {
                    view! {
                        <li class="todo-item">
                            <input type="checkbox" prop:checked=todo.completed disabled=true />
                            <span class="todo-title">{todo.title.clone()}</span>
                        </li>
                    }
                }
            />
        </ul>
    }
}
