use crate::paths::image_url;
use owlsite_core::{ItemCard, Step, SwipeOutcome, SwipeTracker};
use wasm_bindgen::JsCast;
use yew::prelude::*;

/// Length of the closing animation before the sheet is removed.
pub const CLOSE_ANIMATION_MS: i32 = 200;

/// What a key press inside the open modal does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKey {
    Close,
    Step(Step),
}

#[must_use]
pub fn key_action(key: &str) -> Option<ModalKey> {
    match key {
        "Escape" => Some(ModalKey::Close),
        "ArrowLeft" => Some(ModalKey::Step(Step::Previous)),
        "ArrowRight" => Some(ModalKey::Step(Step::Next)),
        _ => None,
    }
}

/// Inline transform following the finger. `None` once the sheet has settled.
#[must_use]
pub fn drag_style(offset: (f64, f64)) -> Option<String> {
    let (dx, dy) = offset;
    if dx == 0.0 && dy == 0.0 {
        None
    } else {
        Some(format!(
            "transform: translate({dx}px, {dy}px); transition: none;"
        ))
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub card: Option<ItemCard>,
    pub close_label: AttrValue,
    pub on_step: Callback<Step>,
    pub on_close: Callback<()>,
}

#[function_component(ItemModal)]
pub fn item_modal(p: &Props) -> Html {
    let open = p.card.is_some();
    let closing = use_state_eq(|| false);
    let offset = use_state_eq(|| (0.0_f64, 0.0_f64));
    let tracker = use_mut_ref(SwipeTracker::default);
    let sheet_ref = use_node_ref();

    {
        let sheet_ref = sheet_ref.clone();
        use_effect_with(open, move |open| {
            crate::dom::set_body_scroll_locked(*open);
            if *open && let Some(el) = sheet_ref.cast::<web_sys::HtmlElement>() {
                let _ = el.focus();
            }
            || crate::dom::set_body_scroll_locked(false)
        });
    }

    let request_close = {
        let closing = closing.clone();
        let on_close = p.on_close.clone();
        Callback::from(move |()| {
            if *closing {
                return;
            }
            closing.set(true);
            let closing = closing.clone();
            let on_close = on_close.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(err) = crate::dom::sleep_ms(CLOSE_ANIMATION_MS).await {
                    log::debug!("close animation timer failed: {}", crate::dom::js_error_message(&err));
                }
                on_close.emit(());
                closing.set(false);
            });
        })
    };

    let Some(card) = p.card.as_ref() else {
        return Html::default();
    };

    let on_pointer_down = {
        let tracker = tracker.clone();
        Callback::from(move |e: PointerEvent| {
            if let Some(el) = e.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) {
                let _ = el.set_pointer_capture(e.pointer_id());
            }
            tracker
                .borrow_mut()
                .begin(f64::from(e.client_x()), f64::from(e.client_y()));
        })
    };
    let on_pointer_move = {
        let tracker = tracker.clone();
        let offset = offset.clone();
        Callback::from(move |e: PointerEvent| {
            let moved = tracker
                .borrow_mut()
                .move_to(f64::from(e.client_x()), f64::from(e.client_y()));
            if let Some(delta) = moved {
                e.prevent_default();
                offset.set(delta);
            }
        })
    };
    let on_pointer_up = {
        let tracker = tracker.clone();
        let offset = offset.clone();
        let on_step = p.on_step.clone();
        let request_close = request_close.clone();
        Callback::from(move |_: PointerEvent| {
            let outcome = tracker.borrow_mut().release();
            match outcome {
                Some(SwipeOutcome::Dismiss) => request_close.emit(()),
                Some(SwipeOutcome::Previous) => on_step.emit(Step::Previous),
                Some(SwipeOutcome::Next) => on_step.emit(Step::Next),
                Some(SwipeOutcome::SnapBack) | None => {}
            }
            offset.set((0.0, 0.0));
        })
    };
    let on_pointer_cancel = {
        let tracker = tracker.clone();
        let offset = offset.clone();
        Callback::from(move |_: PointerEvent| {
            tracker.borrow_mut().cancel();
            offset.set((0.0, 0.0));
        })
    };
    let on_keydown = {
        let on_step = p.on_step.clone();
        let request_close = request_close.clone();
        Callback::from(move |e: KeyboardEvent| match key_action(&e.key()) {
            Some(ModalKey::Close) => {
                e.prevent_default();
                request_close.emit(());
            }
            Some(ModalKey::Step(step)) => {
                e.prevent_default();
                on_step.emit(step);
            }
            None => {}
        })
    };
    let on_backdrop = {
        let request_close = request_close.clone();
        Callback::from(move |_| request_close.emit(()))
    };
    let on_close_btn = {
        let request_close = request_close;
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            request_close.emit(());
        })
    };
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

    let state_class = if *closing {
        "item-modal--closing"
    } else {
        "item-modal--open"
    };

    html! {
        <div class={classes!("item-modal", state_class)} role="presentation" onclick={on_backdrop}>
            <div
                ref={sheet_ref}
                class="item-modal__sheet"
                role="dialog"
                aria-modal="true"
                aria-labelledby="item-modal-name"
                tabindex="-1"
                style={drag_style(*offset)}
                onclick={stop}
                onkeydown={on_keydown}
                onpointerdown={on_pointer_down}
                onpointermove={on_pointer_move}
                onpointerup={on_pointer_up}
                onpointercancel={on_pointer_cancel}
            >
                <button type="button" id="close-menu-button" class="item-modal__close" aria-label={p.close_label.clone()} onclick={on_close_btn}>
                    <i class="ph-bold ph-x" aria-hidden="true"></i>
                </button>
                <img class="item-modal__image" src={image_url(&card.image)} alt={card.name.clone()} draggable="false" />
                <h2 id="item-modal-name" class="item-modal__name">{ card.name.clone() }</h2>
                <p class="item-modal__price">{ card.price.clone() }</p>
                if !card.desc.is_empty() {
                    <p class="item-modal__desc">{ card.desc.clone() }</p>
                }
                if !card.tags.is_empty() {
                    <ul class="item-modal__tags">
                        { for card.tags.iter().map(|tag| html! { <li class="tag-chip">{ tag.clone() }</li> }) }
                    </ul>
                }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_map_to_modal_actions() {
        assert_eq!(key_action("Escape"), Some(ModalKey::Close));
        assert_eq!(key_action("ArrowLeft"), Some(ModalKey::Step(Step::Previous)));
        assert_eq!(key_action("ArrowRight"), Some(ModalKey::Step(Step::Next)));
        assert_eq!(key_action("Enter"), None);
    }

    #[test]
    fn settled_sheet_has_no_inline_transform() {
        assert_eq!(drag_style((0.0, 0.0)), None);
        let style = drag_style((-40.0, 12.5)).expect("dragging");
        assert!(style.contains("translate(-40px, 12.5px)"));
    }
}
