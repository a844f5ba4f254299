//! Analytics sink backed by the page's global `gtag` function.
use js_sys::{Function, Object, Reflect};
use owlsite_core::{AnalyticsEvent, AnalyticsSink};
use wasm_bindgen::{JsCast, JsValue};

/// Forwards events to `gtag("event", name, { event_category, event_label })`.
///
/// Pages without the analytics snippet have no `gtag`; emitting is then a no-op.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GtagSink;

impl GtagSink {
    fn gtag() -> Option<Function> {
        let win = crate::dom::window()?;
        Reflect::get(&win, &JsValue::from_str("gtag"))
            .ok()
            .and_then(|value| value.dyn_into::<Function>().ok())
    }
}

impl AnalyticsSink for GtagSink {
    fn emit(&self, event: &AnalyticsEvent) {
        let Some(gtag) = Self::gtag() else {
            log::debug!("analytics disabled, dropping {}", event.name);
            return;
        };
        let params = Object::new();
        let _ = Reflect::set(
            &params,
            &JsValue::from_str("event_category"),
            &JsValue::from_str(event.category),
        );
        let _ = Reflect::set(
            &params,
            &JsValue::from_str("event_label"),
            &JsValue::from_str(&event.label),
        );
        if let Err(err) = gtag.call3(
            &JsValue::NULL,
            &JsValue::from_str("event"),
            &JsValue::from_str(event.name),
            &params,
        ) {
            log::warn!(
                "gtag rejected {}: {}",
                event.name,
                crate::dom::js_error_message(&err)
            );
        }
    }
}
