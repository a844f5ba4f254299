use crate::paths::image_url;
use owlsite_core::{ImageManifest, Participant};
use yew::prelude::*;

/// One line-up card, photo already resolved through the manifest.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineupEntry {
    pub name: String,
    pub role: String,
    pub instagram: String,
    pub status: Option<String>,
    pub photo: String,
}

impl LineupEntry {
    #[must_use]
    pub fn from_participant(participant: &Participant, manifest: &ImageManifest) -> Self {
        Self {
            name: participant.name.clone(),
            role: participant.role.clone(),
            instagram: participant.instagram.clone(),
            status: participant
                .status
                .clone()
                .filter(|status| !status.trim().is_empty()),
            photo: image_url(manifest.participant_image(&participant.name)),
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub title: AttrValue,
    pub entries: Vec<LineupEntry>,
}

#[function_component(Lineup)]
pub fn lineup(p: &Props) -> Html {
    if p.entries.is_empty() {
        return Html::default();
    }
    html! {
        <section class="lineup">
            <h3 id="lineup-title" class="section-title">
                { p.title.clone() }
                <span class="lineup__count">{ p.entries.len() }</span>
            </h3>
            <ul class="lineup__list">
                { for p.entries.iter().map(|entry| html! {
                    <li class="lineup__card">
                        <a href={entry.instagram.clone()} target="_blank" rel="noopener noreferrer">
                            <img class="lineup__photo" src={entry.photo.clone()} alt={entry.name.clone()} loading="lazy" />
                            if let Some(status) = entry.status.as_ref() {
                                <span class="lineup__status">{ status.clone() }</span>
                            }
                            <span class="lineup__name">{ entry.name.clone() }</span>
                            <span class="lineup__role">{ entry.role.clone() }</span>
                        </a>
                    </li>
                }) }
            </ul>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_status_is_dropped_and_photo_falls_back() {
        let participant: Participant = serde_json::from_str(
            r#"{ "name": "DJ Noct", "role": "Live set", "instagram": "", "status": " " }"#,
        )
        .expect("participant");
        let entry = LineupEntry::from_participant(&participant, &ImageManifest::default());
        assert_eq!(entry.status, None);
        assert_eq!(entry.photo, "/img/placeholder.png");
    }
}
