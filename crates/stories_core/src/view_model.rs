use crate::{Item, ListState, SearchState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListStatus {
    #[default]
    Ready,
    Loading,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub pending_term: String,
    pub search_term: String,
    pub request_url: String,
    pub can_submit: bool,
    pub status: ListStatus,
    pub items: Vec<Item>,
}

impl AppViewModel {
    pub fn new(search: &SearchState, list: &ListState) -> Self {
        let status = if list.is_loading {
            ListStatus::Loading
        } else if list.is_error {
            ListStatus::Failed
        } else {
            ListStatus::Ready
        };
        Self {
            pending_term: search.pending_term().to_owned(),
            search_term: search.search_term().to_owned(),
            request_url: search.request_url().to_owned(),
            can_submit: search.can_submit(),
            status,
            items: list.items.clone(),
        }
    }
}

/// Items whose title contains `needle`, ignoring case. Order is preserved.
pub fn filter_items<'a>(items: &'a [Item], needle: &str) -> Vec<&'a Item> {
    let needle = needle.to_lowercase();
    items
        .iter()
        .filter(|item| item.title.to_lowercase().contains(&needle))
        .collect()
}
