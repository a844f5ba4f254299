//! Whole-page state and its single mutation entry point.
use crate::lang::Lang;
use crate::navigator::{NavAction, NavigatorState, Repaint};
use crate::pack::LanguagePack;
use crate::store::{LocalizedStore, SwitchTicket};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Pending,
    Ready,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum SiteAction {
    /// Initial pack and manifest both arrived.
    Loaded(LocalizedStore),
    /// Initial load failed; the page stays unrendered.
    LoadFailed(String),
    /// A language switch was requested and its fetch is about to start.
    SwitchIssued(SwitchTicket),
    PackArrived(SwitchTicket, LanguagePack),
    SwitchFailed(SwitchTicket, String),
    Nav(NavAction),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SiteState {
    pub status: LoadStatus,
    pub store: Option<LocalizedStore>,
    pub nav: NavigatorState,
    /// Most recently issued language switch.
    pub latest_switch: Option<SwitchTicket>,
}

impl SiteState {
    #[must_use]
    pub fn lang(&self) -> Option<Lang> {
        self.store.as_ref().map(LocalizedStore::lang)
    }

    /// Language the visitor asked for last, even while its pack is in flight.
    #[must_use]
    pub fn requested_lang(&self) -> Option<Lang> {
        self.latest_switch.map(|t| t.lang).or_else(|| self.lang())
    }

    pub fn apply(&mut self, action: SiteAction) -> Repaint {
        match action {
            SiteAction::Loaded(store) => {
                self.nav = NavigatorState::initial(&store);
                self.store = Some(store);
                self.status = LoadStatus::Ready;
                Repaint::ALL
            }
            SiteAction::LoadFailed(message) => {
                log::error!("site data failed to load: {message}");
                if self.store.is_none() {
                    self.status = LoadStatus::Failed(message);
                }
                Repaint::NONE
            }
            SiteAction::SwitchIssued(ticket) => {
                self.latest_switch = Some(ticket);
                Repaint::NONE
            }
            SiteAction::PackArrived(ticket, pack) => {
                if self.latest_switch != Some(ticket) {
                    log::debug!(
                        "discarding stale {} pack (request #{})",
                        ticket.lang,
                        ticket.seq
                    );
                    return Repaint::NONE;
                }
                let Some(store) = self.store.as_mut() else {
                    return Repaint::NONE;
                };
                let anchor = self.nav.modal_anchor(store);
                store.replace_pack(ticket.lang, pack);
                self.nav.rebind(store, anchor)
            }
            SiteAction::SwitchFailed(ticket, message) => {
                log::error!("switching to {} failed: {message}", ticket.lang);
                if self.latest_switch == Some(ticket) {
                    self.latest_switch = None;
                }
                Repaint::NONE
            }
            SiteAction::Nav(nav) => match self.store.as_ref() {
                Some(store) => self.nav.apply(store, nav),
                None => Repaint::NONE,
            },
        }
    }
}
