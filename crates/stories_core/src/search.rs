use url::form_urlencoded;

/// Hacker News search endpoint used when no other is configured.
pub const DEFAULT_ENDPOINT: &str = "https://hn.algolia.com/api/v1/search";

/// Builds `<endpoint>?query=<term>` with the term form-urlencoded.
pub fn request_url(endpoint: &str, term: &str) -> String {
    let query: String = form_urlencoded::byte_serialize(term.as_bytes()).collect();
    format!("{endpoint}?query={query}")
}

/// Search input state.
///
/// `pending_term` follows the text input; `search_term` and `request_url`
/// only move on submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    endpoint: String,
    pending_term: String,
    search_term: String,
    request_url: String,
}

impl SearchState {
    pub fn new(endpoint: impl Into<String>, initial_term: impl Into<String>) -> Self {
        let endpoint = endpoint.into();
        let term = initial_term.into();
        let request_url = request_url(&endpoint, &term);
        Self {
            endpoint,
            pending_term: term.clone(),
            search_term: term,
            request_url,
        }
    }

    pub fn pending_term(&self) -> &str {
        &self.pending_term
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn request_url(&self) -> &str {
        &self.request_url
    }

    pub fn can_submit(&self) -> bool {
        !self.pending_term.is_empty()
    }

    pub(crate) fn set_pending_term(&mut self, text: String) {
        self.pending_term = text;
    }

    /// Promotes the pending term. Returns `true` when the request URL changed.
    pub(crate) fn commit_pending(&mut self) -> bool {
        self.search_term = self.pending_term.clone();
        let next_url = request_url(&self.endpoint, &self.search_term);
        if next_url == self.request_url {
            return false;
        }
        self.request_url = next_url;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_url_encodes_term() {
        assert_eq!(
            request_url("https://example.com/search", "rust lang&co"),
            "https://example.com/search?query=rust+lang%26co"
        );
        assert_eq!(
            request_url(DEFAULT_ENDPOINT, "React"),
            "https://hn.algolia.com/api/v1/search?query=React"
        );
    }

    #[test]
    fn commit_reports_url_change_only_once() {
        let mut state = SearchState::new("https://example.com", "React");
        assert!(!state.commit_pending());

        state.set_pending_term("Vue".to_string());
        assert!(state.commit_pending());
        assert!(!state.commit_pending());
        assert_eq!(state.search_term(), "Vue");
        assert_eq!(state.request_url(), "https://example.com?query=Vue");
    }
}
