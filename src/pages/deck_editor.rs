use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::commands;
use crate::components::combo_card::ComboCard;
use crate::components::qr_share::QrShare;
use crate::deck::{ComboCount, ComboField, DeckAction, DeckEffect};
use crate::dom;
use crate::pages::history::{export_history_with_alert, export_status};
use crate::session_context::use_session;

#[component]
pub fn DeckEditorPage() -> impl IntoView {
    let session = use_session();
    let (tournaments, set_tournaments) = signal::<Vec<String>>(vec![]);
    let (status, set_status) = signal::<Option<String>>(None);
    let today = dom::today();

    let refresh_tournaments = move || {
        spawn_local(async move {
            match commands::list_tournaments().await {
                Ok(t) => set_tournaments.set(t),
                Err(e) => dom::log_error(&format!("Failed to list tournaments: {}", e)),
            }
        });
    };

    // Suggestions for the tournament input
    Effect::new(move |_| refresh_tournaments());

    let run_effect = move |effect: DeckEffect| match effect {
        DeckEffect::Alert(message) => dom::alert(message),
        DeckEffect::Persist(deck) => {
            spawn_local(async move {
                match commands::save_deck(&deck).await {
                    Ok(count) => {
                        set_status.set(Some(format!(
                            "Mazo guardado ({} en {})",
                            count, deck.tournament
                        )));
                        refresh_tournaments();
                    }
                    Err(e) => {
                        dom::log_error(&format!("Failed to save deck: {}", e));
                        set_status.set(Some(format!("Mazo no guardado: {}", e)));
                    }
                }
            });
        }
        DeckEffect::Export(decks) => {
            spawn_local(async move {
                match commands::export_session_decks(&decks).await {
                    Ok(Some(path)) => set_status.set(Some(export_status(&path))),
                    Ok(None) => {}
                    Err(e) => dom::log_error(&format!("Failed to export decks: {}", e)),
                }
            });
        }
    };

    let dispatch = move |action: DeckAction| {
        let mut effect = None;
        session.update(|s| effect = s.reduce(action));
        if let Some(effect) = effect {
            run_effect(effect);
        }
    };

    let on_combo_change = Callback::new(move |(index, field, value): (usize, ComboField, String)| {
        dispatch(DeckAction::UpdateCombo {
            index,
            field,
            value,
        })
    });

    let combo_len = Memo::new(move |_| session.with(|s| s.combos.len()));
    let ready = Memo::new(move |_| session.with(|s| s.is_ready()));
    let share_text = {
        let today = today.clone();
        Memo::new(move |_| session.with(|s| s.share_text(&today)))
    };
    let blader = Signal::derive(move || session.with(|s| s.blader.clone()));

    let save = {
        let today = today.clone();
        move |_| dispatch(DeckAction::SaveDeck { date: today.clone() })
    };

    view! {
        <div class="page deck-editor-page">
            <section class="section">
                <h2>"Configuración"</h2>
                <div class="form">
                    <input
                        class="input"
                        placeholder="Nombre Torneo *"
                        list="torneos"
                        class:error=move || session.with(|s| s.tournament.trim().is_empty())
                        prop:value=move || session.with(|s| s.tournament.clone())
                        on:input=move |ev| dispatch(DeckAction::SetTournament(event_target_value(&ev)))
                    />
                    <datalist id="torneos">
                        {move || tournaments.get().into_iter().map(|t| {
                            view! { <option value=t></option> }
                        }).collect_view()}
                    </datalist>

                    <input
                        class="input"
                        placeholder="Blader *"
                        class:error=move || session.with(|s| s.blader.trim().is_empty())
                        prop:value=move || session.with(|s| s.blader.clone())
                        on:input=move |ev| dispatch(DeckAction::SetBlader(event_target_value(&ev)))
                    />

                    <select
                        class="input"
                        prop:value=move || u8::from(session.with(|s| s.combo_count)).to_string()
                        on:change=move |ev| {
                            let parsed = event_target_value(&ev)
                                .parse::<u8>()
                                .ok()
                                .and_then(|n| ComboCount::try_from(n).ok());
                            if let Some(count) = parsed {
                                dispatch(DeckAction::SetComboCount(count));
                            }
                        }
                    >
                        {ComboCount::ALL.into_iter().map(|count| {
                            view! { <option value=u8::from(count).to_string()>{count.label()}</option> }
                        }).collect_view()}
                    </select>

                    <div class="form toggle-row">
                        <span>"Permitir repetir piezas"</span>
                        <label class="switch">
                            <input
                                type="checkbox"
                                prop:checked=move || session.with(|s| s.allow_repeats)
                                on:change=move |ev| dispatch(DeckAction::SetAllowRepeats(event_target_checked(&ev)))
                            />
                            <span class="slider"></span>
                        </label>
                    </div>
                </div>
            </section>

            <section class="section">
                <h2>"Combos"</h2>
                {move || (0..combo_len.get()).map(|index| view! {
                    <ComboCard index=index session=session on_change=on_combo_change />
                }).collect_view()}
            </section>

            <Show when=move || ready.get()>
                <section class="section qr-container">
                    <QrShare text=share_text blader=blader date=today.clone() />
                </section>
            </Show>

            <div class="actions">
                <button class="btn btn-primary" on:click=save disabled=move || !ready.get()>
                    "Guardar mazo"
                </button>
                <button
                    class="btn"
                    on:click=move |_| dispatch(DeckAction::ClearInputs)
                    disabled=move || !session.with(|s| s.can_clear)
                >
                    "Limpiar"
                </button>
                <button
                    class="btn"
                    on:click=move |_| dispatch(DeckAction::ExportSession)
                    disabled=move || session.with(|s| s.saved_decks.is_empty())
                >
                    "Exportar Excel"
                </button>
                <button class="btn" on:click=move |_| export_history_with_alert(set_status)>
                    "Exportar Historial"
                </button>
            </div>

            {move || status.get().map(|s| view! { <p class="status-text">{s}</p> })}
        </div>
    }
}

fn event_target_checked(ev: &leptos::ev::Event) -> bool {
    use wasm_bindgen::JsCast;
    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        .map(|input| input.checked())
        .unwrap_or(false)
}
