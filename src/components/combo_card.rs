use leptos::prelude::*;

use crate::deck::{is_bit_exempt, missing_fields, ComboField, DeckSession};

fn placeholder(field: ComboField, bit_exempt: bool) -> String {
    match field {
        ComboField::LockChip | ComboField::AssistBlade => field.label().to_string(),
        ComboField::Bit if bit_exempt => "Bit ".to_string(),
        _ => format!("{} *", field.label()),
    }
}

/// Selectors for the five parts of one combo.
#[component]
pub fn ComboCard(
    /// Position of the combo in the deck, 0-based.
    index: usize,
    session: RwSignal<DeckSession>,
    /// Invoked with (index, field, value) when a selector changes.
    on_change: Callback<(usize, ComboField, String)>,
) -> impl IntoView {
    let bit_exempt = move || {
        session.with(|s| s.combos.get(index).map(is_bit_exempt).unwrap_or(false))
    };

    let selectors = ComboField::ALL
        .into_iter()
        .map(|field| {
            let current = move || {
                session.with(|s| {
                    s.combos
                        .get(index)
                        .map(|c| c.get(field).to_string())
                        .unwrap_or_default()
                })
            };
            let has_error = move || {
                session.with(|s| {
                    s.combos
                        .get(index)
                        .map(|c| missing_fields(c).contains(&field))
                        .unwrap_or(false)
                })
            };
            let disabled = move || field == ComboField::Bit && bit_exempt();

            view! {
                <select
                    class="input"
                    class:error=has_error
                    disabled=disabled
                    prop:value=current
                    on:change=move |ev| on_change.run((index, field, event_target_value(&ev)))
                >
                    <option value="">{move || placeholder(field, bit_exempt())}</option>
                    {move || {
                        let selected = current();
                        session
                            .with(|s| s.options(field, index))
                            .into_iter()
                            .map(|opt| {
                                let is_selected = opt == selected;
                                view! { <option value=opt selected=is_selected>{opt}</option> }
                            })
                            .collect_view()
                    }}
                </select>
            }
        })
        .collect_view();

    view! {
        <div class="combo-card">
            <style>{include_str!("combo_card.css")}</style>
            <h3>{format!("Combo {}", index + 1)}</h3>
            <div class="form">{selectors}</div>
        </div>
    }
}
