#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod analytics;
pub mod app;
pub mod components;
pub mod dom;
pub mod hooks;
pub mod locale;
pub mod pages;
pub mod paths;
pub mod router;
pub mod share;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        dom::console_error("logger already initialised");
    }
    // <html lang> reflects the saved preference before the first fetch.
    locale::apply_document_lang(locale::saved_lang());
    yew::Renderer::<app::App>::new().render();
}
