//! Stories core: pure list/search state machines, persistence cell and view-model helpers.
mod effect;
mod error;
mod item;
mod list_state;
mod msg;
mod search;
mod store;
mod update;
mod view_model;

pub use effect::Effect;
pub use error::CoreError;
pub use item::{Item, ItemId};
pub use list_state::{reduce, Action, ListState};
pub use msg::Msg;
pub use search::{request_url, SearchState, DEFAULT_ENDPOINT};
pub use store::{MemoryStore, PersistentValue, StoreError, StringStore};
pub use update::update;
pub use view_model::{filter_items, AppViewModel, ListStatus};
