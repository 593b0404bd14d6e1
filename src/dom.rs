//! Browser side effects: alerts, downloads and the print window.
//! Missing DOM pieces make these silent no-ops.

use wasm_bindgen::JsCast;

use crate::deck::format_date;

pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

pub fn log_error(message: &str) {
    web_sys::console::error_1(&message.into());
}

/// Today's date in the `es-CL` short form.
pub fn today() -> String {
    let now = js_sys::Date::new_0();
    format_date(now.get_date(), now.get_month() + 1, now.get_full_year() as i32)
}

/// Trigger a client-side download of a `data:` URL.
pub fn download_data_url(data_url: &str, file_name: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(element) = document.create_element("a") else {
        return;
    };
    let Ok(link) = element.dyn_into::<web_sys::HtmlAnchorElement>() else {
        return;
    };
    link.set_href(data_url);
    link.set_download(file_name);
    link.click();
}

/// Open a base64-encoded PDF in a new window.
pub fn open_pdf(base64_pdf: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(binary) = window.atob(base64_pdf) else {
        log_error("Print document is not valid base64");
        return;
    };
    let bytes: Vec<u8> = binary.chars().map(|c| c as u8).collect();

    let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes.as_slice()));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("application/pdf");
    let Ok(blob) = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options) else {
        return;
    };
    let Ok(url) = web_sys::Url::create_object_url_with_blob(&blob) else {
        return;
    };
    let _ = window.open_with_url_and_target(&url, "_blank");
}
