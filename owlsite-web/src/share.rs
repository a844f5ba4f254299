//! Native share sheet with a clipboard fallback.
use crate::dom::{js_error_message, window};
use js_sys::{Function, Object, Promise, Reflect};
use owlsite_core::SharePayload;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    /// The share sheet was shown (or dismissed by the visitor).
    Shared,
    /// The URL went to the clipboard and the notice was displayed.
    Copied,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShareError {
    #[error("browser window unavailable")]
    NoWindow,
    #[error("clipboard API unavailable")]
    NoClipboard,
    #[error("clipboard write failed: {0}")]
    Clipboard(String),
}

/// Look up a method on `target` without depending on web-sys bindings for it.
fn method(target: &JsValue, name: &str) -> Option<Function> {
    Reflect::get(target, &JsValue::from_str(name))
        .ok()
        .and_then(|value| value.dyn_into::<Function>().ok())
}

fn share_data(payload: &SharePayload) -> Object {
    let data = Object::new();
    for (key, value) in [
        ("title", &payload.title),
        ("text", &payload.text),
        ("url", &payload.url),
    ] {
        let _ = Reflect::set(&data, &JsValue::from_str(key), &JsValue::from_str(value));
    }
    data
}

#[allow(clippy::future_not_send)]
async fn await_promise(value: JsValue) -> Result<(), JsValue> {
    if let Ok(promise) = value.dyn_into::<Promise>() {
        JsFuture::from(promise).await?;
    }
    Ok(())
}

/// Offer `payload` through `navigator.share`, or copy its URL and show `copied_notice`.
///
/// A cancelled share sheet is not an error.
///
/// # Errors
/// Returns [`ShareError`] when neither the share sheet nor the clipboard is usable.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn share_or_copy(
    payload: &SharePayload,
    copied_notice: &str,
) -> Result<ShareOutcome, ShareError> {
    let win = window().ok_or(ShareError::NoWindow)?;
    let navigator: JsValue = win.navigator().into();

    if let Some(share) = method(&navigator, "share") {
        match share.call1(&navigator, &share_data(payload)) {
            Ok(pending) => {
                if let Err(err) = await_promise(pending).await {
                    log::debug!("share sheet dismissed: {}", js_error_message(&err));
                }
            }
            Err(err) => log::debug!("share sheet refused: {}", js_error_message(&err)),
        }
        return Ok(ShareOutcome::Shared);
    }

    let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
        .ok_or(ShareError::NoClipboard)?;
    let write_text = method(&clipboard, "writeText").ok_or(ShareError::NoClipboard)?;
    let pending = write_text
        .call1(&clipboard, &JsValue::from_str(&payload.url))
        .map_err(|err| ShareError::Clipboard(js_error_message(&err)))?;
    await_promise(pending)
        .await
        .map_err(|err| ShareError::Clipboard(js_error_message(&err)))?;

    if win.alert_with_message(copied_notice).is_err() {
        log::warn!("could not show copy notice");
    }
    Ok(ShareOutcome::Copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn sharing_outside_browser_reports_missing_window() {
        let payload = SharePayload {
            title: "Owl Night".into(),
            text: String::new(),
            url: "https://owl.example.test".into(),
        };
        assert_eq!(
            block_on(share_or_copy(&payload, "Link copied!")),
            Err(ShareError::NoWindow)
        );
    }
}
