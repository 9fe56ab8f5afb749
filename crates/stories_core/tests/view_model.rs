use stories_core::{
    filter_items, reduce, Action, AppViewModel, Item, ItemId, ListState, ListStatus, SearchState,
};

fn story(id: u64, title: &str) -> Item {
    Item {
        id: ItemId::from(id),
        title: title.to_string(),
        url: String::new(),
        author: "someone".to_string(),
        num_comments: 0,
        points: 0,
    }
}

#[test]
fn status_follows_list_flags() {
    let search = SearchState::new("https://example.com", "React");

    let idle = AppViewModel::new(&search, &ListState::new());
    assert_eq!(idle.status, ListStatus::Ready);
    assert!(idle.can_submit);
    assert_eq!(idle.request_url, "https://example.com?query=React");

    let loading = reduce(ListState::new(), Action::FetchInit);
    assert_eq!(AppViewModel::new(&search, &loading).status, ListStatus::Loading);

    let failed = reduce(loading, Action::FetchFailure);
    assert_eq!(AppViewModel::new(&search, &failed).status, ListStatus::Failed);
}

#[test]
fn filter_matches_title_case_insensitively() {
    let items = vec![story(0, "React"), story(1, "Redux"), story(2, "Preact Signals")];

    let titles: Vec<_> = filter_items(&items, "REACT")
        .into_iter()
        .map(|item| item.title.as_str())
        .collect();
    assert_eq!(titles, vec!["React", "Preact Signals"]);

    assert_eq!(filter_items(&items, "").len(), 3);
    assert!(filter_items(&items, "angular").is_empty());
}
