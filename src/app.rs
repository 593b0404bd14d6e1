use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;
use wasm_bindgen_futures::spawn_local;

use crate::commands;
use crate::components::header::AppHeader;
use crate::dom;
use crate::pages::deck_editor::DeckEditorPage;
use crate::pages::history::HistoryPage;
use crate::session_context::provide_session;
use crate::theme::{apply_theme, ThemeContext, DEFAULT_THEME};

#[component]
pub fn App() -> impl IntoView {
    let (theme, set_theme) = signal(String::from(DEFAULT_THEME));
    provide_context(ThemeContext { theme, set_theme });
    provide_session();

    // Load saved theme on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match commands::get_theme().await {
                Ok(saved) => set_theme.set(saved),
                Err(e) => dom::log_error(&format!("Failed to load theme: {}", e)),
            }
        });
    });

    Effect::new(move |_| {
        let t = theme.get();
        apply_theme(&t);
    });

    view! {
        <Router>
            <div class="app-layout">
                <AppHeader />
                <main class="content">
                    <Routes fallback=|| view! { <p>"Página no encontrada"</p> }>
                        <Route path=path!("/") view=DeckEditorPage />
                        <Route path=path!("/historial") view=HistoryPage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
