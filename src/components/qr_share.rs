//! QR preview of the share text with download and print actions.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::commands;
use crate::dom;

#[component]
pub fn QrShare(
    /// Payload encoded in the code.
    #[prop(into)]
    text: Signal<String>,
    /// Caption printed above the code.
    #[prop(into)]
    blader: Signal<String>,
    date: String,
) -> impl IntoView {
    let (preview, set_preview) = signal::<Option<String>>(None);
    let date = StoredValue::new(date);

    Effect::new(move |_| {
        let payload = text.get();
        spawn_local(async move {
            match commands::render_qr_preview(&payload).await {
                Ok(url) => set_preview.set(Some(url)),
                Err(e) => dom::log_error(&format!("QR preview failed: {}", e)),
            }
        });
    });

    let download = move |_| {
        let (payload, name, day) = (text.get(), blader.get(), date.get_value());
        spawn_local(async move {
            match commands::compose_share_image(&payload, &name, &day).await {
                Ok(card) => dom::download_data_url(&card.data_url, &card.file_name),
                Err(e) => dom::log_error(&format!("Share image failed: {}", e)),
            }
        });
    };

    let print = move |_| {
        let (payload, name, day) = (text.get(), blader.get(), date.get_value());
        spawn_local(async move {
            match commands::print_share_image(&payload, &name, &day).await {
                Ok(pdf) => dom::open_pdf(&pdf),
                Err(e) => dom::log_error(&format!("Print document failed: {}", e)),
            }
        });
    };

    view! {
        <div class="qr-share">
            <style>{include_str!("qr_share.css")}</style>
            <Show when=move || !blader.get().is_empty()>
                <h3>{move || blader.get()}</h3>
            </Show>
            <small>{date.get_value()}</small>

            <div class="qr-canvas">
                {move || preview.get().map(|src| view! {
                    <img src=src width="220" height="220" alt="QR del mazo" />
                })}
            </div>

            <div class="qr-actions">
                <button class="btn" on:click=download>"Descargar QR"</button>
                <button class="btn" on:click=print>"Imprimir QR"</button>
            </div>
        </div>
    }
}
