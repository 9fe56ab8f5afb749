use stories_logging::stories_debug;

use crate::{Action, CoreError, Effect, Msg, SearchState};

/// Pure update function: applies a message to the search state and returns any effects.
///
/// Submitting an empty term is a caller bug and is reported instead of ignored.
pub fn update(mut state: SearchState, msg: Msg) -> Result<(SearchState, Vec<Effect>), CoreError> {
    let effects = match msg {
        Msg::PendingTermChanged(text) => {
            state.set_pending_term(text);
            Vec::new()
        }
        Msg::SearchSubmitted => {
            if !state.can_submit() {
                return Err(CoreError::PreconditionNotMet("search term is empty"));
            }
            if state.commit_pending() {
                vec![
                    Effect::PersistSearchTerm(state.search_term().to_owned()),
                    Effect::FetchStories {
                        term: state.search_term().to_owned(),
                        url: state.request_url().to_owned(),
                    },
                ]
            } else {
                stories_debug!("Submit of unchanged url {} ignored", state.request_url());
                Vec::new()
            }
        }
        Msg::RemoveItem(id) => vec![Effect::Dispatch(Action::RemoveItem(id))],
    };

    Ok((state, effects))
}
