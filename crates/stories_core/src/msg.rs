#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the search input.
    PendingTermChanged(String),
    /// User submitted the current search input.
    SearchSubmitted,
    /// User dismissed a story from the list.
    RemoveItem(crate::ItemId),
}
