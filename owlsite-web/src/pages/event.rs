use crate::app::handlers::AppHandlers;
use crate::components::bottom_bar::BottomBar;
use crate::components::countdown::{CountdownLabels, EventCountdown};
use crate::components::header::Header;
use crate::components::hero::Hero;
use crate::components::info_card::InfoCard;
use crate::components::lineup::{Lineup, LineupEntry};
use crate::components::location::LocationCard;
use crate::components::socials::Socials;
use crate::paths::image_url;
use owlsite_core::countdown::DEFAULT_STARTED_LABEL;
use owlsite_core::text::ScheduleMarker;
use owlsite_core::{Countdown, LocalizedStore, SiteState};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub site: Rc<SiteState>,
    pub handlers: AppHandlers,
}

fn countdown_labels(store: &LocalizedStore) -> CountdownLabels {
    let label = |key: &str, default: &'static str| AttrValue::from(store.label_or(key, default).to_string());
    CountdownLabels {
        days: label("days", "Days"),
        hours: label("hours", "Hours"),
        minutes: label("minutes", "Minutes"),
        seconds: label("seconds", "Seconds"),
        started: label("eventStarted", DEFAULT_STARTED_LABEL),
    }
}

fn schedule_label(store: &LocalizedStore, marker: ScheduleMarker) -> AttrValue {
    AttrValue::from(
        store
            .label_or(marker.label_key(), marker.default_label())
            .to_string(),
    )
}

/// Parsed countdown target; an unparsable date hides the widget only.
fn countdown_target(iso: &str) -> Option<Countdown> {
    match Countdown::from_iso(iso) {
        Ok(target) => Some(target),
        Err(err) => {
            log::debug!("countdown hidden: {err}");
            None
        }
    }
}

#[function_component(EventPage)]
pub fn event_page(p: &Props) -> Html {
    let page_title = p
        .site
        .store
        .as_ref()
        .map(|store| store.label_or("pageTitle", "").to_string());
    use_effect_with(page_title, |title| {
        if let Some(title) = title.as_deref().filter(|t| !t.is_empty()) {
            crate::dom::set_document_title(title);
        }
        || {}
    });

    let Some(store) = p.site.store.as_ref() else {
        return super::pending();
    };
    let pack = store.pack();
    let event = &pack.event;
    let manifest = store.manifest();
    let handlers = &p.handlers;
    let lineup: Vec<LineupEntry> = pack
        .participants
        .iter()
        .map(|participant| LineupEntry::from_participant(participant, manifest))
        .collect();
    let text = |key: &str, default: &str| AttrValue::from(store.label_or(key, default).to_string());

    html! {
        <>
            <Header
                lang={store.lang()}
                share_label={text("share", "Share")}
                on_cycle_lang={handlers.cycle_lang.clone()}
                on_share={handlers.share.clone()}
            />
            <main id="main" class="page page--event">
                <Hero
                    cover={image_url(manifest.cover_image())}
                    presents={event.presents.clone()}
                    title={event.title.clone()}
                    subtitle={event.subtitle.clone()}
                />
                <EventCountdown
                    target={countdown_target(&event.event_date_iso)}
                    labels={countdown_labels(store)}
                />
                <InfoCard
                    date={event.date.clone()}
                    session_type={event.session_type.clone()}
                    schedule={event.schedule.clone()}
                    open_label={schedule_label(store, ScheduleMarker::Open)}
                    live_label={schedule_label(store, ScheduleMarker::Live)}
                />
                if !event.description.is_empty() {
                    <p class="event-description">{ event.description.clone() }</p>
                }
                <Socials socials={pack.socials.clone()} />
                <Lineup title={text("lineupGuests", "Line-up")} entries={lineup} />
                <LocationCard
                    title={text("location", "Location")}
                    location={pack.location.clone()}
                    map_image={image_url(manifest.map_image())}
                    open_map_label={text("openMap", "Open map")}
                    on_open_map={handlers.open_map.clone()}
                />
            </main>
            <BottomBar
                price={event.price.clone()}
                tickets_label={text("tickets", "Tickets")}
                menu_label={text("menu", "Menu")}
                on_ticket={handlers.ticket.clone()}
                on_whatsapp={handlers.whatsapp.clone()}
            />
        </>
    }
}
