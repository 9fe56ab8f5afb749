use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use stories_core::{
    update, AppViewModel, CoreError, Effect, ItemId, ListState, Msg, PersistentValue, SearchState,
    StringStore, DEFAULT_ENDPOINT,
};
use stories_logging::{stories_debug, stories_info};
use tokio::task::JoinHandle;

use crate::{FetchCycle, Fetcher, ListStateController};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub endpoint: String,
    pub storage_key: String,
    pub default_term: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            storage_key: "search".to_string(),
            default_term: "React".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct FetchRequest {
    term: String,
    url: String,
}

/// Search input, remembered term and story list wired together.
///
/// A fetch cycle runs once at [`start`](Self::start) and afterwards only when
/// a submission changes the request URL.
pub struct SearchSession<S: StringStore> {
    search: SearchState,
    remembered: PersistentValue<S>,
    controller: ListStateController,
    fetcher: Arc<dyn Fetcher>,
    started: AtomicBool,
}

impl<S: StringStore> SearchSession<S> {
    pub fn new(config: SessionConfig, store: S, fetcher: Arc<dyn Fetcher>) -> Self {
        let remembered = PersistentValue::create(store, config.storage_key, config.default_term);
        let search = SearchState::new(config.endpoint, remembered.get());
        stories_info!("Session starts with term {:?}", search.search_term());
        Self {
            search,
            remembered,
            controller: ListStateController::new(),
            fetcher,
            started: AtomicBool::new(false),
        }
    }

    pub fn search(&self) -> &SearchState {
        &self.search
    }

    pub fn list_state(&self) -> ListState {
        self.controller.state()
    }

    pub fn remembered_term(&self) -> &str {
        self.remembered.get()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel::new(&self.search, &self.controller.state())
    }

    /// Initial fetch cycle for the remembered term. Only the first call
    /// fetches; later calls return [`FetchCycle::Skipped`].
    pub async fn start(&self) -> FetchCycle {
        match self.initial_request() {
            Some(request) => self.run(request).await,
            None => FetchCycle::Skipped,
        }
    }

    /// Like [`start`](Self::start) but leaves the cycle running on the tokio
    /// runtime. `None` once the session has already started.
    pub fn start_detached(&self) -> Option<JoinHandle<FetchCycle>> {
        self.initial_request().map(|request| self.spawn(request))
    }

    pub fn update_pending_term(&mut self, text: impl Into<String>) {
        // Typing cannot fail and never yields a fetch.
        let _ = self.apply(Msg::PendingTermChanged(text.into()));
    }

    /// Submits the pending term and waits for the resulting fetch cycle, if any.
    pub async fn submit(&mut self) -> Result<FetchCycle, CoreError> {
        match self.apply(Msg::SearchSubmitted)? {
            Some(request) => Ok(self.run(request).await),
            None => Ok(FetchCycle::Skipped),
        }
    }

    /// Like [`submit`](Self::submit) but leaves the fetch cycle running on
    /// the tokio runtime. `None` when the request URL did not change.
    pub fn submit_detached(&mut self) -> Result<Option<JoinHandle<FetchCycle>>, CoreError> {
        Ok(self
            .apply(Msg::SearchSubmitted)?
            .map(|request| self.spawn(request)))
    }

    pub fn remove_item(&mut self, id: impl Into<ItemId>) {
        let _ = self.apply(Msg::RemoveItem(id.into()));
    }

    fn initial_request(&self) -> Option<FetchRequest> {
        if self.started.swap(true, Ordering::SeqCst) {
            stories_debug!("Session already started; initial fetch skipped");
            return None;
        }
        Some(FetchRequest {
            term: self.search.search_term().to_owned(),
            url: self.search.request_url().to_owned(),
        })
    }

    async fn run(&self, request: FetchRequest) -> FetchCycle {
        self.controller
            .fetch_and_dispatch(&request.term, &request.url, self.fetcher.as_ref())
            .await
    }

    fn spawn(&self, request: FetchRequest) -> JoinHandle<FetchCycle> {
        self.controller
            .spawn_fetch(request.term, request.url, self.fetcher.clone())
    }

    /// Runs the pure update and executes its effects. A fetch effect is
    /// handed back so the caller decides whether to await or spawn it.
    fn apply(&mut self, msg: Msg) -> Result<Option<FetchRequest>, CoreError> {
        let (search, effects) = update(self.search.clone(), msg)?;
        self.search = search;

        let mut fetch = None;
        for effect in effects {
            match effect {
                Effect::PersistSearchTerm(term) => self.remembered.set(term),
                Effect::Dispatch(action) => self.controller.dispatch(action),
                Effect::FetchStories { term, url } => {
                    stories_info!("Search submitted: {}", url);
                    fetch = Some(FetchRequest { term, url });
                }
            }
        }
        Ok(fetch)
    }
}
