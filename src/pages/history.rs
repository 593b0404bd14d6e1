//! Read-only view of every stored deck, grouped by tournament.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::commands::{self, TournamentDecks};
use crate::deck::{ComboField, Deck};
use crate::dom;

/// Status line shown after a workbook is written.
pub fn export_status(path: &str) -> String {
    format!("Exportado a {}", path)
}

/// Export the whole store. The written path goes to `status`; an empty store
/// or a failed write is alerted.
pub fn export_history_with_alert(status: WriteSignal<Option<String>>) {
    spawn_local(async move {
        match commands::export_history().await {
            Ok(path) => status.set(Some(export_status(&path))),
            Err(e) => dom::alert(&e),
        }
    });
}

/// One line per combo, parts in display order.
fn combo_summary(deck: &Deck) -> Vec<String> {
    deck.combos
        .iter()
        .enumerate()
        .map(|(i, combo)| {
            let parts: Vec<&str> = ComboField::ALL
                .iter()
                .map(|&f| combo.get(f))
                .filter(|v| !v.is_empty())
                .collect();
            format!("C{}: {}", i + 1, parts.join(" | "))
        })
        .collect()
}

#[component]
pub fn HistoryPage() -> impl IntoView {
    let (groups, set_groups) = signal::<Option<Vec<TournamentDecks>>>(None);
    let (error, set_error) = signal::<Option<String>>(None);
    let (status, set_status) = signal::<Option<String>>(None);

    Effect::new(move |_| {
        spawn_local(async move {
            match commands::list_decks().await {
                Ok(g) => set_groups.set(Some(g)),
                Err(e) => set_error.set(Some(e)),
            }
        });
    });

    view! {
        <div class="page history-page">
            <h2>"Historial"</h2>
            <button class="btn btn-primary" on:click=move |_| export_history_with_alert(set_status)>
                "Exportar Historial"
            </button>
            {move || status.get().map(|s| view! { <p class="status-text">{s}</p> })}

            {move || {
                if let Some(err) = error.get() {
                    view! { <p class="history-error">{err}</p> }.into_any()
                } else if let Some(groups) = groups.get() {
                    if groups.is_empty() {
                        view! { <p class="history-empty">"No hay mazos guardados."</p> }.into_any()
                    } else {
                        groups.into_iter().map(|group| view! {
                            <section class="section">
                                <h3>{group.tournament.clone()}</h3>
                                <table class="history-table">
                                    <thead>
                                        <tr>
                                            <th>"Mazo"</th>
                                            <th>"Blader"</th>
                                            <th>"Fecha"</th>
                                            <th>"Combos"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {group.decks.iter().enumerate().map(|(i, deck)| view! {
                                            <tr>
                                                <td>{i + 1}</td>
                                                <td>{deck.blader.clone()}</td>
                                                <td>{deck.date.clone()}</td>
                                                <td>
                                                    {combo_summary(deck).into_iter().map(|line| view! {
                                                        <div class="combo-line">{line}</div>
                                                    }).collect_view()}
                                                </td>
                                            </tr>
                                        }).collect_view()}
                                    </tbody>
                                </table>
                            </section>
                        }).collect_view().into_any()
                    }
                } else {
                    view! { <p class="history-loading">"Cargando historial..."</p> }.into_any()
                }
            }}
        </div>
    }
}
