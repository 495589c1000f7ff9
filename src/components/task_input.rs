//! Task Input Component
//!
//! Form for entering a new checklist task.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// New-task form. Submitting a blank draft is rejected; a valid submit
/// invokes `on_add` exactly once and clears the draft.
#[component]
pub fn TaskInput(#[prop(into)] on_add: Callback<String>) -> impl IntoView {
    let (draft, set_draft) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = draft.get();
        if text.trim().is_empty() {
            return;
        }
        on_add.run(text);
        set_draft.set(String::new());
    };

    view! {
        <form class="task-input" on:submit=submit>
            <input
                type="text"
                placeholder="Enter task"
                prop:value=move || draft.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_draft.set(input.value());
                }
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
