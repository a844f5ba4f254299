use super::state::AppStateHandle;
use owlsite_core::{
    AnalyticsEvent, AnalyticsSink, ItemId, NavAction, SharePayload, SiteAction, SwitchSequencer,
};
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

/// Callbacks handed down to the pages. Built once per render from the reducer handle.
#[derive(Clone)]
pub struct AppHandlers {
    pub nav: Callback<NavAction>,
    pub cycle_lang: Callback<()>,
    pub share: Callback<()>,
    pub ticket: Callback<()>,
    pub whatsapp: Callback<()>,
    pub open_map: Callback<()>,
}

impl PartialEq for AppHandlers {
    fn eq(&self, other: &Self) -> bool {
        self.nav == other.nav
            && self.cycle_lang == other.cycle_lang
            && self.share == other.share
            && self.ticket == other.ticket
            && self.whatsapp == other.whatsapp
            && self.open_map == other.open_map
    }
}

impl AppHandlers {
    #[must_use]
    pub fn new(
        state: &AppStateHandle,
        sequencer: &Rc<RefCell<SwitchSequencer>>,
        sink: &Rc<dyn AnalyticsSink>,
    ) -> Self {
        Self {
            nav: build_nav(state, sink),
            cycle_lang: build_cycle_lang(state, sequencer, sink),
            share: build_share(state, sink),
            ticket: build_external(state, sink, Link::Ticket),
            whatsapp: build_external(state, sink, Link::WhatsApp),
            open_map: build_external(state, sink, Link::Map),
        }
    }

    /// Handlers that do nothing, for rendering pages in isolation.
    #[must_use]
    pub fn noop() -> Self {
        Self {
            nav: Callback::noop(),
            cycle_lang: Callback::noop(),
            share: Callback::noop(),
            ticket: Callback::noop(),
            whatsapp: Callback::noop(),
            open_map: Callback::noop(),
        }
    }
}

/// Analytics event for a navigator action, if it is one worth reporting.
#[must_use]
pub fn nav_event(state: &owlsite_core::SiteState, action: &NavAction) -> Option<AnalyticsEvent> {
    match action {
        NavAction::SelectCategory(category) => Some(AnalyticsEvent::new(
            "category_select",
            "menu",
            category.clone(),
        )),
        NavAction::OpenItem(id) => {
            let name = item_name(state, *id).unwrap_or_else(|| id.to_string());
            Some(AnalyticsEvent::new("item_open", "menu", name))
        }
        NavAction::SelectType(_) | NavAction::Step(_) | NavAction::CloseModal => None,
    }
}

fn item_name(state: &owlsite_core::SiteState, id: ItemId) -> Option<String> {
    let store = state.store.as_ref()?;
    store.pack().item(id).map(|item| item.name.clone())
}

fn build_nav(state: &AppStateHandle, sink: &Rc<dyn AnalyticsSink>) -> Callback<NavAction> {
    let state = state.clone();
    let sink = Rc::clone(sink);
    Callback::from(move |action: NavAction| {
        if let Some(event) = nav_event(&state.site, &action) {
            sink.emit(&event);
        }
        state.dispatch(SiteAction::Nav(action));
    })
}

fn build_cycle_lang(
    state: &AppStateHandle,
    sequencer: &Rc<RefCell<SwitchSequencer>>,
    sink: &Rc<dyn AnalyticsSink>,
) -> Callback<()> {
    let state = state.clone();
    let sequencer = Rc::clone(sequencer);
    let sink = Rc::clone(sink);
    Callback::from(move |()| {
        let Some(current) = state.site.requested_lang() else {
            return;
        };
        let next = current.next();
        let ticket = sequencer.borrow_mut().issue(next);
        state.dispatch(SiteAction::SwitchIssued(ticket));
        crate::locale::persist_lang(next);
        sink.emit(&AnalyticsEvent::new("language_switch", "engagement", next.code()));

        let dispatcher = state.dispatcher();
        wasm_bindgen_futures::spawn_local(async move {
            dispatcher.dispatch(super::bootstrap::load_switch(ticket).await);
        });
    })
}

fn build_share(state: &AppStateHandle, sink: &Rc<dyn AnalyticsSink>) -> Callback<()> {
    let state = state.clone();
    let sink = Rc::clone(sink);
    Callback::from(move |()| {
        let Some(store) = state.site.store.as_ref() else {
            return;
        };
        let payload = SharePayload::for_event(&store.pack().event, &crate::dom::current_url());
        let notice = store.label_or("linkCopied", "Link copied!").to_string();
        sink.emit(&AnalyticsEvent::new("share", "engagement", payload.url.clone()));
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(err) = crate::share::share_or_copy(&payload, &notice).await {
                log::warn!("sharing failed: {err}");
            }
        });
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Link {
    Ticket,
    WhatsApp,
    Map,
}

impl Link {
    const fn event_name(self) -> &'static str {
        match self {
            Self::Ticket => "ticket_click",
            Self::WhatsApp => "whatsapp_click",
            Self::Map => "map_open",
        }
    }

    fn url(self, state: &owlsite_core::SiteState) -> Option<String> {
        let pack = state.store.as_ref()?.pack();
        let url = match self {
            Self::Ticket => &pack.event.ticket_link,
            Self::WhatsApp => &pack.event.whatsapp_contact,
            Self::Map => &pack.location.map_link,
        };
        Some(url.clone())
    }
}

fn build_external(
    state: &AppStateHandle,
    sink: &Rc<dyn AnalyticsSink>,
    link: Link,
) -> Callback<()> {
    let state = state.clone();
    let sink = Rc::clone(sink);
    Callback::from(move |()| {
        let Some(url) = link.url(&state.site) else {
            return;
        };
        sink.emit(&AnalyticsEvent::new(link.event_name(), "engagement", url.clone()));
        crate::dom::open_external(&url);
    })
}
