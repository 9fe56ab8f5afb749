use std::io::Write;
use std::sync::Arc;

use anyhow::Context;
use stories_core::StringStore;
use stories_engine::{FetchCycle, Fetcher, FileStore, ReqwestFetcher, SearchSession};
use stories_logging::{stories_error, stories_info, stories_warn};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::{JoinError, JoinHandle, JoinSet};

use crate::command::{self, Command, HELP};
use crate::config::Settings;
use crate::render;

type Cycles = JoinSet<Result<FetchCycle, JoinError>>;

pub async fn run(settings: Settings) -> anyhow::Result<()> {
    let store = FileStore::open(&settings.store);
    let fetcher: Arc<dyn Fetcher> = Arc::new(ReqwestFetcher::new(settings.fetch_settings()));
    let mut app = App::new(SearchSession::new(settings.session_config(), store, fetcher));
    stories_info!("Starting with store {:?}", settings.store);

    if let Some(handle) = app.session.start_detached() {
        app.track(handle);
    }
    app.show()?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("reading stdin")? else {
                    break;
                };
                if !app.handle_line(&line)? {
                    break;
                }
            }
            Some(joined) = app.cycles.join_next(), if !app.cycles.is_empty() => {
                app.finish_cycle(joined)?;
            }
        }
    }

    // In-flight requests are not cancelled; they are left to the runtime.
    app.cycles.detach_all();
    Ok(())
}

struct App<S: StringStore> {
    session: SearchSession<S>,
    cycles: Cycles,
    filter: String,
}

impl<S: StringStore> App<S> {
    fn new(session: SearchSession<S>) -> Self {
        Self {
            session,
            cycles: JoinSet::new(),
            filter: String::new(),
        }
    }

    fn track(&mut self, handle: JoinHandle<FetchCycle>) {
        self.cycles.spawn(handle);
    }

    /// Returns `false` when the user asked to quit.
    fn handle_line(&mut self, line: &str) -> anyhow::Result<bool> {
        let command = match command::parse(line) {
            Ok(command) => command,
            Err(err) => {
                println!("{err}");
                return Ok(true);
            }
        };

        match command {
            Command::Type(text) => {
                self.session.update_pending_term(text);
                println!("Search: [{}]", self.session.search().pending_term());
                return Ok(true);
            }
            Command::Submit => self.submit(),
            Command::Search(text) => {
                self.session.update_pending_term(text);
                self.submit();
            }
            Command::Remove(id) => {
                if self.session.list_state().item(&id).is_none() {
                    println!("No story with id {id}.");
                }
                self.session.remove_item(id);
            }
            Command::Filter(text) => self.filter = text,
            Command::Show => {}
            Command::Help => {
                println!("{HELP}");
                return Ok(true);
            }
            Command::Quit => return Ok(false),
        }

        self.show()?;
        Ok(true)
    }

    fn submit(&mut self) {
        match self.session.submit_detached() {
            Ok(Some(handle)) => self.track(handle),
            Ok(None) => println!(
                "Already showing results for {:?}.",
                self.session.search().search_term()
            ),
            Err(err) => {
                stories_error!("Rejected submit: {}", err);
                eprintln!("error: {err}");
            }
        }
    }

    fn finish_cycle(&mut self, joined: Result<Result<FetchCycle, JoinError>, JoinError>) -> anyhow::Result<()> {
        match joined.and_then(|inner| inner) {
            Ok(cycle) => println!("{}", render::cycle_summary(&cycle)),
            Err(err) => stories_warn!("Fetch task ended abnormally: {}", err),
        }
        self.show()
    }

    fn show(&self) -> anyhow::Result<()> {
        let mut stdout = std::io::stdout().lock();
        write!(stdout, "{}", render::render(&self.session.view(), &self.filter))?;
        write!(stdout, "> ")?;
        stdout.flush()?;
        Ok(())
    }
}
