//! App Shell
//!
//! Tab bar for switching between the two demos. Exactly one demo is
//! mounted at a time and owns all of its own state.

use leptos::prelude::*;

use crate::components::{ChecklistApp, DirectoryApp};

#[derive(Clone, Copy, PartialEq)]
enum Demo {
    Checklist,
    Directory,
}

#[component]
pub fn App() -> impl IntoView {
    let (demo, set_demo) = signal(Demo::Checklist);

    let tab_class = move |target: Demo| {
        if demo.get() == target {
            "demo-tab active"
        } else {
            "demo-tab"
        }
    };

    view! {
        <div class="app-layout">
            <nav class="demo-tab-bar">
                <button
                    class=move || tab_class(Demo::Checklist)
                    on:click=move |_| set_demo.set(Demo::Checklist)
                >
                    "Checklist"
                </button>
                <button
                    class=move || tab_class(Demo::Directory)
                    on:click=move |_| set_demo.set(Demo::Directory)
                >
                    "User Directory"
                </button>
            </nav>

            <main class="main-content">
                <Show when=move || demo.get() == Demo::Checklist>
                    <ChecklistApp />
                </Show>
                <Show when=move || demo.get() == Demo::Directory>
                    <DirectoryApp />
                </Show>
            </main>
        </div>
    }
}
