use owlsite_core::text::{ScheduleMarker, ScheduleSegment, schedule_segments};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub date: AttrValue,
    pub session_type: AttrValue,
    pub schedule: AttrValue,
    pub open_label: AttrValue,
    pub live_label: AttrValue,
}

#[function_component(InfoCard)]
pub fn info_card(p: &Props) -> Html {
    let marker = |m: ScheduleMarker| match m {
        ScheduleMarker::Open => p.open_label.clone(),
        ScheduleMarker::Live => p.live_label.clone(),
    };
    html! {
        <section class="info-card">
            <p class="info-card__date">{ p.date.clone() }</p>
            <p class="info-card__session">{ p.session_type.clone() }</p>
            <p class="info-card__schedule">
                { for schedule_segments(&p.schedule).into_iter().map(|segment| match segment {
                    ScheduleSegment::Marker(m) => html! {
                        <span class="info-card__marker">{ marker(m) }</span>
                    },
                    ScheduleSegment::Text(text) => html! { { text.to_string() } },
                }) }
            </p>
        </section>
    }
}
