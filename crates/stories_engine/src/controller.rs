use std::sync::{Arc, Mutex, PoisonError};

use stories_core::{reduce, Action, ListState};
use stories_logging::{stories_debug, stories_info, stories_warn};
use tokio::task::JoinHandle;

use crate::{FetchCycle, Fetcher};

/// Shared handle over one [`ListState`]. Clones drive the same state.
///
/// Every mutation goes through [`reduce`]. Overlapping fetch cycles are not
/// told apart: whichever dispatch lands last decides the final state.
#[derive(Debug, Clone, Default)]
pub struct ListStateController {
    state: Arc<Mutex<ListState>>,
}

impl ListStateController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> ListState {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn dispatch(&self, action: Action) {
        stories_debug!("dispatch {}", action.name());
        let mut guard = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        let current = std::mem::take(&mut *guard);
        *guard = reduce(current, action);
    }

    /// Runs one fetch cycle: FETCH_INIT, then FETCH_SUCCESS or FETCH_FAILURE.
    ///
    /// An empty `term` makes this a no-op. Failures are absorbed into the
    /// `is_error` flag; the returned [`FetchCycle`] is informational only.
    pub async fn fetch_and_dispatch(&self, term: &str, url: &str, fetcher: &dyn Fetcher) -> FetchCycle {
        if term.is_empty() {
            stories_debug!("Skipping fetch for empty term");
            return FetchCycle::Skipped;
        }

        self.dispatch(Action::FetchInit);
        match fetcher.search(url).await {
            Ok(response) => {
                let items = response.into_items();
                let count = items.len();
                stories_info!("Fetched {} items for {:?}", count, term);
                self.dispatch(Action::FetchSuccess(items));
                FetchCycle::Loaded(count)
            }
            Err(err) => {
                stories_warn!("Fetch for {:?} failed: {}", term, err);
                self.dispatch(Action::FetchFailure);
                FetchCycle::Failed(err.kind)
            }
        }
    }

    /// Starts [`fetch_and_dispatch`](Self::fetch_and_dispatch) on the current
    /// tokio runtime. The cycle cannot be cancelled once started; dropping the
    /// handle detaches it.
    pub fn spawn_fetch(&self, term: String, url: String, fetcher: Arc<dyn Fetcher>) -> JoinHandle<FetchCycle> {
        let controller = self.clone();
        tokio::spawn(async move {
            controller
                .fetch_and_dispatch(&term, &url, fetcher.as_ref())
                .await
        })
    }
}
