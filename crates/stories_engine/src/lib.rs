//! Stories engine: fetch capability, list controller driver and session wiring.
mod controller;
mod fetch;
mod persist;
mod session;
mod types;

pub use controller::ListStateController;
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher};
pub use persist::{ensure_store_dir, AtomicFileWriter, FileStore, PersistError};
pub use session::{SearchSession, SessionConfig};
pub use types::{FailureKind, FetchCycle, FetchError, Hit, SearchResponse};
