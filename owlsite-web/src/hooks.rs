use owlsite_core::countdown::TICK_INTERVAL_MS;
use owlsite_core::{Countdown, CountdownDisplay};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

/// Live countdown display for `countdown`, ticking once per second.
///
/// The first value is computed during render. The interval stops itself once
/// the event has started, leaving the terminal display in place.
#[hook]
pub fn use_countdown(countdown: Option<Countdown>) -> Option<CountdownDisplay> {
    let display = use_state_eq(move || countdown.map(|c| c.tick(crate::dom::now_ms())));
    {
        let display = display.clone();
        use_effect_with(countdown, move |countdown| {
            let interval_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
            let mut stored_closure: Option<Closure<dyn FnMut()>> = None;
            if let Some(countdown) = *countdown {
                let first = countdown.tick(crate::dom::now_ms());
                display.set(Some(first));
                if !first.is_terminal()
                    && let Some(window) = crate::dom::window()
                    && let Ok(timeout) = i32::try_from(TICK_INTERVAL_MS)
                {
                    let slot = Rc::clone(&interval_id);
                    let handle = display;
                    let closure = Closure::wrap(Box::new(move || {
                        let next = countdown.tick(crate::dom::now_ms());
                        handle.set(Some(next));
                        if next.is_terminal()
                            && let Some(id) = slot.take()
                            && let Some(win) = crate::dom::window()
                        {
                            win.clear_interval_with_handle(id);
                        }
                    }) as Box<dyn FnMut()>);
                    if let Ok(id) = window.set_interval_with_callback_and_timeout_and_arguments_0(
                        closure.as_ref().unchecked_ref(),
                        timeout,
                    ) {
                        interval_id.set(Some(id));
                        stored_closure = Some(closure);
                    }
                }
            }
            move || {
                if let Some(id) = interval_id.take()
                    && let Some(win) = crate::dom::window()
                {
                    win.clear_interval_with_handle(id);
                }
                drop(stored_closure);
            }
        });
    }
    *display
}
