#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Write the submitted term back to the durable store.
    PersistSearchTerm(String),
    /// Run one fetch cycle against `url`.
    FetchStories { term: String, url: String },
    /// Apply an action to the list controller.
    Dispatch(crate::Action),
}
