use pretty_assertions::assert_eq;
use stories_core::{reduce, Action, Item, ItemId, ListState};

fn story(id: u64, title: &str) -> Item {
    Item {
        id: ItemId::from(id),
        title: title.to_string(),
        url: format!("https://{}.example.com", title.to_lowercase()),
        author: "someone".to_string(),
        num_comments: 3,
        points: 4,
    }
}

fn loaded(items: Vec<Item>) -> ListState {
    ListState {
        items,
        is_loading: false,
        is_error: false,
    }
}

fn every_action() -> Vec<Action> {
    vec![
        Action::FetchInit,
        Action::FetchSuccess(vec![story(7, "Rust")]),
        Action::FetchFailure,
        Action::RemoveItem(ItemId::from(0u64)),
        Action::RemoveItem(ItemId::from(99u64)),
    ]
}

fn sample_states() -> Vec<ListState> {
    vec![
        ListState::new(),
        loaded(vec![story(0, "React"), story(1, "Redux")]),
        ListState {
            items: vec![story(0, "React")],
            is_loading: true,
            is_error: false,
        },
        ListState {
            items: Vec::new(),
            is_loading: false,
            is_error: true,
        },
    ]
}

#[test]
fn initial_state_is_idle_and_empty() {
    let state = ListState::new();
    assert!(state.items.is_empty());
    assert!(!state.is_loading);
    assert!(!state.is_error);
}

#[test]
fn reduce_is_deterministic_and_leaves_input_untouched() {
    for state in sample_states() {
        for action in every_action() {
            let before = state.clone();
            let first = reduce(state.clone(), action.clone());
            let second = reduce(state.clone(), action.clone());
            assert_eq!(first, second, "action {}", action.name());
            assert_eq!(state, before);
        }
    }
}

#[test]
fn fetch_init_always_sets_loading_and_clears_error() {
    for state in sample_states() {
        let items = state.items.clone();
        let next = reduce(state, Action::FetchInit);
        assert!(next.is_loading);
        assert!(!next.is_error);
        assert_eq!(next.items, items);
    }
}

#[test]
fn fetch_success_replaces_items_in_payload_order() {
    let payload = vec![story(5, "Zig"), story(2, "Go"), story(9, "Rust")];
    for state in sample_states() {
        let next = reduce(state, Action::FetchSuccess(payload.clone()));
        assert_eq!(next.items, payload);
        assert!(!next.is_loading);
        assert!(!next.is_error);
    }
}

#[test]
fn fetch_failure_keeps_items_and_flags_error() {
    let state = reduce(loaded(vec![story(0, "React")]), Action::FetchInit);
    let next = reduce(state, Action::FetchFailure);
    assert_eq!(next.items, vec![story(0, "React")]);
    assert!(!next.is_loading);
    assert!(next.is_error);
}

#[test]
fn remove_unknown_id_is_a_noop() {
    let state = loaded(vec![story(0, "React"), story(1, "Redux")]);
    let next = reduce(state.clone(), Action::RemoveItem(ItemId::from(42u64)));
    assert_eq!(next, state);
}

#[test]
fn remove_drops_exactly_one_entry_and_keeps_order() {
    let state = loaded(vec![story(0, "React"), story(1, "Redux"), story(2, "MobX")]);
    let next = reduce(state, Action::RemoveItem(ItemId::from(1u64)));
    assert_eq!(next.items, vec![story(0, "React"), story(2, "MobX")]);
}

#[test]
fn remove_does_not_touch_flags() {
    let state = ListState {
        items: vec![story(0, "React")],
        is_loading: true,
        is_error: false,
    };
    let next = reduce(state, Action::RemoveItem(ItemId::from(0u64)));
    assert!(next.items.is_empty());
    assert!(next.is_loading);
    assert!(!next.is_error);
}

#[test]
fn terminal_states_never_raise_both_flags() {
    for state in sample_states() {
        for action in [Action::FetchSuccess(Vec::new()), Action::FetchFailure] {
            let next = reduce(reduce(state.clone(), Action::FetchInit), action);
            assert!(!(next.is_loading && next.is_error));
        }
    }
}

#[test]
fn item_lookup_by_id() {
    let state = loaded(vec![story(0, "React"), story(1, "Redux")]);
    assert_eq!(state.item(&ItemId::from("1")).map(|i| i.title.as_str()), Some("Redux"));
    assert!(state.item(&ItemId::from("3")).is_none());
}
