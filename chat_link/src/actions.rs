// Browser side effects: clipboard write and opening the chat link.
// Each is attempted once; failures are logged and reported as `false`.

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use crate::error::ActionError;

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

pub async fn write_clipboard(text: &str) -> Result<(), ActionError> {
    let window = web_sys::window().ok_or(ActionError::NoWindow)?;
    let promise = window.navigator().clipboard().write_text(text);
    JsFuture::from(promise)
        .await
        .map_err(|e| ActionError::Clipboard(describe(&e)))?;
    Ok(())
}

pub fn open_in_new_context(url: &str) -> Result<(), ActionError> {
    let window = web_sys::window().ok_or(ActionError::NoWindow)?;
    match window.open_with_url_and_target(url, "_blank") {
        Ok(Some(_)) => Ok(()),
        Ok(None) => Err(ActionError::PopupBlocked),
        Err(e) => Err(ActionError::Navigation(describe(&e))),
    }
}

#[wasm_bindgen(js_name = copyToClipboard)]
pub async fn copy_to_clipboard(text: String) -> bool {
    if text.is_empty() {
        return false;
    }
    match write_clipboard(&text).await {
        Ok(()) => {
            log::info!("copied link to clipboard");
            true
        }
        Err(e) => {
            log::error!("{}", e);
            false
        }
    }
}

#[wasm_bindgen(js_name = openChat)]
pub fn open_chat(url: &str) -> bool {
    if url.is_empty() {
        return false;
    }
    match open_in_new_context(url) {
        Ok(()) => true,
        Err(e) => {
            log::error!("{}", e);
            false
        }
    }
}
