use std::fmt::Write;

use stories_core::{filter_items, AppViewModel, ListStatus};
use stories_engine::FetchCycle;

pub fn render(view: &AppViewModel, filter: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# My Hacker Stories");
    let _ = writeln!(
        out,
        "Search: [{}]{}  Searching for {}",
        view.pending_term,
        if view.can_submit { "" } else { " (empty)" },
        view.search_term
    );

    match view.status {
        ListStatus::Loading => {
            let _ = writeln!(out, "Loading ...");
            return out;
        }
        ListStatus::Failed => {
            let _ = writeln!(out, "Something went wrong ...");
            return out;
        }
        ListStatus::Ready => {}
    }

    let shown = filter_items(&view.items, filter);
    if !filter.is_empty() {
        let _ = writeln!(
            out,
            "Filter {:?}: {} of {} stories",
            filter,
            shown.len(),
            view.items.len()
        );
    }
    if shown.is_empty() {
        let _ = writeln!(out, "No stories.");
    }
    for item in shown {
        let _ = writeln!(out, "- {}  <{}>", item.title, item.url);
        let _ = writeln!(
            out,
            "    by {} | {} comments | {} points | id {}",
            item.author, item.num_comments, item.points, item.id
        );
    }
    out
}

pub fn cycle_summary(cycle: &FetchCycle) -> String {
    match cycle {
        FetchCycle::Skipped => "Nothing to fetch.".to_string(),
        FetchCycle::Loaded(count) => format!("Loaded {count} stories."),
        FetchCycle::Failed(kind) => format!("Fetch failed: {kind}."),
    }
}

#[cfg(test)]
mod tests {
    use stories_core::{Item, ItemId};

    use super::*;

    fn view(status: ListStatus) -> AppViewModel {
        AppViewModel {
            pending_term: "React".into(),
            search_term: "React".into(),
            request_url: "https://example.com?query=React".into(),
            can_submit: true,
            status,
            items: vec![
                Item {
                    id: ItemId::from("0"),
                    title: "React".into(),
                    url: "https://reactjs.org".into(),
                    author: "Jordan Walke".into(),
                    num_comments: 3,
                    points: 4,
                },
                Item {
                    id: ItemId::from("1"),
                    title: "Redux".into(),
                    url: "https://redux.js.org".into(),
                    author: "Dan Abramov, Andrew Clark".into(),
                    num_comments: 2,
                    points: 5,
                },
            ],
        }
    }

    #[test]
    fn ready_view_lists_items() {
        let text = render(&view(ListStatus::Ready), "");
        assert!(text.contains("Searching for React"));
        assert!(text.contains("- React  <https://reactjs.org>"));
        assert!(text.contains("by Dan Abramov, Andrew Clark | 2 comments | 5 points | id 1"));
    }

    #[test]
    fn loading_and_failure_hide_items() {
        let loading = render(&view(ListStatus::Loading), "");
        assert!(loading.contains("Loading ..."));
        assert!(!loading.contains("Redux"));

        let failed = render(&view(ListStatus::Failed), "");
        assert!(failed.contains("Something went wrong ..."));
        assert!(!failed.contains("Redux"));
    }

    #[test]
    fn filter_narrows_rendered_items() {
        let text = render(&view(ListStatus::Ready), "dux");
        assert!(text.contains("1 of 2 stories"));
        assert!(text.contains("Redux"));
        assert!(!text.contains("<https://reactjs.org>"));
    }
}
