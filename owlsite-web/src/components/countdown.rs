use crate::hooks::use_countdown;
use owlsite_core::{Countdown, CountdownDisplay};
use yew::prelude::*;

/// Localized unit captions plus the terminal message.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct CountdownLabels {
    pub days: AttrValue,
    pub hours: AttrValue,
    pub minutes: AttrValue,
    pub seconds: AttrValue,
    pub started: AttrValue,
}

#[derive(Properties, PartialEq, Clone)]
pub struct ViewProps {
    pub display: Option<CountdownDisplay>,
    pub labels: CountdownLabels,
}

/// Static rendering of one countdown state. Nothing is shown without a valid target.
#[function_component(CountdownView)]
pub fn countdown_view(props: &ViewProps) -> Html {
    match props.display {
        None => Html::default(),
        Some(CountdownDisplay::Started) => html! {
            <div class="countdown countdown--started" role="timer">
                <span class="countdown__started">{ props.labels.started.clone() }</span>
            </div>
        },
        Some(CountdownDisplay::Remaining(parts)) => {
            let [days, hours, minutes, seconds] = parts.padded();
            let labels = &props.labels;
            let units = [
                ("days", days, labels.days.clone()),
                ("hours", hours, labels.hours.clone()),
                ("minutes", minutes, labels.minutes.clone()),
                ("seconds", seconds, labels.seconds.clone()),
            ];
            html! {
                <div class="countdown" role="timer" aria-live="off">
                    { for units.into_iter().map(|(unit, value, caption)| html! {
                        <div class={classes!("countdown__unit", format!("countdown__unit--{unit}"))}>
                            <span class="countdown__value">{ value }</span>
                            <span class="countdown__label">{ caption }</span>
                        </div>
                    }) }
                </div>
            }
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub target: Option<Countdown>,
    pub labels: CountdownLabels,
}

#[function_component(EventCountdown)]
pub fn event_countdown(props: &Props) -> Html {
    let display = use_countdown(props.target);
    html! { <CountdownView {display} labels={props.labels.clone()} /> }
}
