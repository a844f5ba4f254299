use js_sys::{Function, Promise};
use owlsite_core::LoadError;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Response, Storage, Window};

/// Retrieve the global `window` object, if running in a browser.
#[must_use]
pub fn window() -> Option<Window> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Retrieve the document object for DOM interactions.
#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Log an error message to the browser console.
pub fn console_error(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::error_1(&JsValue::from(message));
    #[cfg(not(target_arch = "wasm32"))]
    log::error!("{message}");
}

/// Milliseconds since the Unix epoch.
#[must_use]
pub fn now_ms() -> i64 {
    #[cfg(target_arch = "wasm32")]
    {
        #[allow(clippy::cast_possible_truncation)]
        let now = js_sys::Date::now() as i64;
        now
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| i64::try_from(d.as_millis()).unwrap_or(i64::MAX))
    }
}

/// Yield execution for the requested number of milliseconds.
///
/// # Errors
/// Returns an error if the timer cannot be scheduled or the underlying JavaScript promise rejects.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn sleep_ms(duration_ms: i32) -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
    let mut resolve_slot: Option<Function> = None;
    let promise = Promise::new(&mut |resolve, _reject| {
        resolve_slot = Some(resolve);
    });

    let resolve =
        resolve_slot.ok_or_else(|| JsValue::from_str("resolve function should be set"))?;
    let closure = Closure::once(move || {
        let _ = resolve.call0(&JsValue::UNDEFINED);
    });

    let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        duration_ms,
    )?;
    closure.forget();

    JsFuture::from(promise).await?;
    Ok(())
}

/// Fetch `url` and return its body as text.
///
/// # Errors
/// Returns [`LoadError::Fetch`] when the request or body read fails and
/// [`LoadError::Status`] for non-2xx responses.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn fetch_text(url: &str) -> Result<String, LoadError> {
    let fail = |e: &JsValue| LoadError::fetch(url, js_error_message(e));
    let win = window().ok_or_else(|| LoadError::fetch(url, "window unavailable"))?;
    let resp_value = JsFuture::from(win.fetch_with_str(url))
        .await
        .map_err(|e| fail(&e))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| fail(&e))?;
    if !resp.ok() {
        return Err(LoadError::Status {
            resource: url.to_string(),
            status: resp.status(),
        });
    }
    let body = JsFuture::from(resp.text().map_err(|e| fail(&e))?)
        .await
        .map_err(|e| fail(&e))?;
    body.as_string()
        .ok_or_else(|| LoadError::fetch(url, "response body is not text"))
}

/// Access the browser `localStorage` handle, if available.
#[must_use]
pub fn local_storage() -> Option<Storage> {
    window().and_then(|win| win.local_storage().ok().flatten())
}

/// Current page URL, used as the share target.
#[must_use]
pub fn current_url() -> String {
    window()
        .and_then(|win| win.location().href().ok())
        .unwrap_or_default()
}

/// Open an external link in a new tab. Empty URLs are ignored.
pub fn open_external(url: &str) {
    if url.is_empty() {
        return;
    }
    if let Some(win) = window()
        && win.open_with_url_and_target(url, "_blank").is_err()
    {
        log::warn!("browser refused to open {url}");
    }
}

/// Stop the page behind an overlay from scrolling.
pub fn set_body_scroll_locked(locked: bool) {
    if let Some(body) = document().and_then(|doc| doc.body()) {
        let _ = body
            .style()
            .set_property("overflow", if locked { "hidden" } else { "" });
    }
}

pub fn set_document_title(title: &str) {
    if let Some(doc) = document() {
        doc.set_title(title);
    }
}
