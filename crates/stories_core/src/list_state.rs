use stories_logging::stories_warn;

use crate::{Item, ItemId};

/// Items currently held plus the flags of the last fetch cycle.
///
/// `is_loading` and `is_error` are never both set: every transition that
/// raises one clears the other.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListState {
    pub items: Vec<Item>,
    pub is_loading: bool,
    pub is_error: bool,
}

impl ListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn item(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| &item.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A fetch cycle started.
    FetchInit,
    /// The fetch resolved; the payload replaces the held items.
    FetchSuccess(Vec<Item>),
    /// The fetch was rejected; held items stay as they were.
    FetchFailure,
    /// Drop the item with this id, if present.
    RemoveItem(ItemId),
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::FetchInit => "FETCH_INIT",
            Action::FetchSuccess(_) => "FETCH_SUCCESS",
            Action::FetchFailure => "FETCH_FAILURE",
            Action::RemoveItem(_) => "REMOVE_ITEM",
        }
    }
}

/// Pure transition function of the list controller.
pub fn reduce(mut state: ListState, action: Action) -> ListState {
    match action {
        Action::FetchInit => {
            state.is_loading = true;
            state.is_error = false;
        }
        Action::FetchSuccess(items) => {
            state.items = items;
            state.is_loading = false;
            state.is_error = false;
        }
        Action::FetchFailure => {
            state.is_loading = false;
            state.is_error = true;
        }
        Action::RemoveItem(id) => {
            let before = state.items.len();
            state.items.retain(|item| item.id != id);
            if before - state.items.len() > 1 {
                stories_warn!(
                    "REMOVE_ITEM id={} matched {} entries",
                    id,
                    before - state.items.len()
                );
            }
        }
    }
    state
}
