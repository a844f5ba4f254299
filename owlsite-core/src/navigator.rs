//! Category/type navigator and the detail modal cursor.
//!
//! All transitions go through [`NavigatorState::apply`], which reports the
//! regions that need repainting.
use crate::category::distinct_categories;
use crate::items::items_for;
use crate::pack::{ItemId, ItemType};
use crate::store::LocalizedStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Previous,
    Next,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavAction {
    SelectType(ItemType),
    SelectCategory(String),
    OpenItem(ItemId),
    Step(Step),
    CloseModal,
}

/// Regions touched by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Repaint {
    pub page: bool,
    pub toggle: bool,
    pub grid: bool,
    pub items: bool,
    pub modal: bool,
}

impl Repaint {
    pub const NONE: Self = Self {
        page: false,
        toggle: false,
        grid: false,
        items: false,
        modal: false,
    };

    pub const ALL: Self = Self {
        page: true,
        toggle: true,
        grid: true,
        items: true,
        modal: true,
    };

    #[must_use]
    pub const fn any(&self) -> bool {
        self.page || self.toggle || self.grid || self.items || self.modal
    }
}

/// Items of the opened item's category, addressed by id, plus the cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalState {
    pub items: Vec<ItemId>,
    pub index: usize,
}

impl ModalState {
    #[must_use]
    pub fn current(&self) -> Option<ItemId> {
        self.items.get(self.index).copied()
    }

    /// Move one step, wrapping at both ends.
    pub fn step(&mut self, step: Step) {
        let len = self.items.len();
        if len == 0 {
            return;
        }
        self.index = match step {
            Step::Previous => (self.index + len - 1) % len,
            Step::Next => (self.index + 1) % len,
        };
    }
}

/// Language-independent position of the open item: its category and its
/// rank among that category's items in pack order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalAnchor {
    pub category: String,
    pub rank: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavigatorState {
    pub active_type: ItemType,
    pub categories: Vec<String>,
    pub active_category: Option<String>,
    pub modal: Option<ModalState>,
}

impl NavigatorState {
    /// Bar type, first bar category selected.
    #[must_use]
    pub fn initial(store: &LocalizedStore) -> Self {
        let mut state = Self::default();
        state.load_type(store, ItemType::Bar);
        state
    }

    fn load_type(&mut self, store: &LocalizedStore, kind: ItemType) {
        self.active_type = kind;
        self.categories = distinct_categories(&store.pack().menu.items, kind);
        self.active_category = self.categories.first().cloned();
    }

    pub fn apply(&mut self, store: &LocalizedStore, action: NavAction) -> Repaint {
        match action {
            NavAction::SelectType(kind) => {
                if kind == self.active_type {
                    return Repaint::NONE;
                }
                self.load_type(store, kind);
                self.modal = None;
                Repaint {
                    toggle: true,
                    grid: true,
                    items: true,
                    modal: true,
                    ..Repaint::NONE
                }
            }
            NavAction::SelectCategory(category) => {
                if !self.categories.contains(&category) {
                    log::debug!("ignoring unknown category {category}");
                    return Repaint::NONE;
                }
                self.active_category = Some(category);
                Repaint {
                    grid: true,
                    items: true,
                    ..Repaint::NONE
                }
            }
            NavAction::OpenItem(id) => self.open(store, id),
            NavAction::Step(step) => match self.modal.as_mut() {
                Some(modal) if modal.items.len() > 1 => {
                    modal.step(step);
                    Repaint {
                        modal: true,
                        ..Repaint::NONE
                    }
                }
                _ => Repaint::NONE,
            },
            NavAction::CloseModal => {
                if self.modal.take().is_some() {
                    Repaint {
                        modal: true,
                        ..Repaint::NONE
                    }
                } else {
                    Repaint::NONE
                }
            }
        }
    }

    fn open(&mut self, store: &LocalizedStore, id: ItemId) -> Repaint {
        let Some(item) = store.pack().item(id) else {
            return Repaint::NONE;
        };
        let items: Vec<ItemId> = items_for(&store.pack().menu.items, &item.category, store.manifest())
            .iter()
            .map(|i| i.id)
            .collect();
        let index = items.iter().position(|candidate| *candidate == id).unwrap_or(0);
        self.modal = Some(ModalState { items, index });
        Repaint {
            modal: true,
            ..Repaint::NONE
        }
    }

    /// Where the open item sits in `store`'s pack, for re-resolving it in another language.
    #[must_use]
    pub fn modal_anchor(&self, store: &LocalizedStore) -> Option<ModalAnchor> {
        let id = self.current_item()?;
        let item = store.pack().item(id)?;
        let rank = store
            .pack()
            .menu
            .items
            .iter()
            .filter(|candidate| candidate.category == item.category)
            .position(|candidate| candidate.id == id)?;
        Some(ModalAnchor {
            category: item.category.clone(),
            rank,
        })
    }

    /// Re-derive state after the pack was replaced by a language switch.
    ///
    /// An open modal is reopened on the item found at `anchor` in the new
    /// pack, or closed when the category no longer has that many items.
    pub fn rebind(&mut self, store: &LocalizedStore, anchor: Option<ModalAnchor>) -> Repaint {
        let previous = self.active_category.take();
        self.categories = distinct_categories(&store.pack().menu.items, self.active_type);
        self.active_category = previous
            .filter(|c| self.categories.contains(c))
            .or_else(|| self.categories.first().cloned());
        self.modal = None;
        let reopened = anchor.and_then(|anchor| {
            store
                .pack()
                .menu
                .items
                .iter()
                .filter(|item| item.category == anchor.category)
                .nth(anchor.rank)
                .map(|item| item.id)
        });
        if let Some(id) = reopened {
            self.open(store, id);
        }
        Repaint::ALL
    }

    #[must_use]
    pub fn current_item(&self) -> Option<ItemId> {
        self.modal.as_ref().and_then(ModalState::current)
    }
}
