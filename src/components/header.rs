use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::commands;
use crate::dom;
use crate::theme::{toggle_label, toggled, ThemeContext};

#[component]
pub fn AppHeader() -> impl IntoView {
    let ThemeContext { theme, set_theme } = expect_context::<ThemeContext>();

    let toggle_theme = move |_| {
        let next = toggled(&theme.get());
        set_theme.set(next.to_string());
        spawn_local(async move {
            if let Err(e) = commands::set_theme(next).await {
                dom::log_error(&format!("Failed to save theme: {}", e));
            }
        });
    };

    view! {
        <header class="header">
            <h1>"BBX Deck Builder"</h1>
            <nav>
                <ul class="nav-list">
                    <li class="nav-item">
                        <a href="/" class="nav-link">"Mazo"</a>
                    </li>
                    <li class="nav-item">
                        <a href="/historial" class="nav-link">"Historial"</a>
                    </li>
                </ul>
            </nav>
            <button class="theme-toggle" on:click=toggle_theme>
                {move || toggle_label(&theme.get())}
            </button>
        </header>
    }
}
