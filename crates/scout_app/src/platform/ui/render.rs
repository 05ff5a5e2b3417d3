use std::fmt::Write;

use scout_core::{AppViewModel, FetchStatus, RepoCardView};

pub fn render_status(view: &AppViewModel) -> String {
    let status = match view.status {
        FetchStatus::Idle => "Idle",
        FetchStatus::Loading => "Loading...",
        FetchStatus::Settled => "Ready",
        FetchStatus::Failed => "Failed",
    };
    let language = view.language.as_deref().unwrap_or("any");
    let topics = if view.selected_topics.is_empty() {
        "none".to_string()
    } else {
        view.selected_topics.join(", ")
    };
    let sort = view
        .sort_options
        .iter()
        .find(|option| option.selected)
        .map_or(view.sort.as_str(), |option| option.label);

    let mut out = format!(
        "[{status}] query={:?} language={language} sort={sort} topics={topics} | {} repos, page {}",
        view.query,
        view.repositories.len(),
        view.page + 1
    );
    if let Some(error) = &view.error {
        let _ = write!(out, "\n  ! {error}");
    }
    out
}

pub fn render_results(view: &AppViewModel) -> String {
    let mut out = String::new();
    if view.repositories.is_empty() {
        out.push_str("  (no repositories)\n");
    }
    for (index, card) in view.repositories.iter().enumerate() {
        render_card(&mut out, index + 1, card);
    }
    if view.end_reached {
        out.push_str("  -- end of results --\n");
    } else if view.can_load_more {
        out.push_str("  -- `more` to load the next page --\n");
    }
    out
}

fn render_card(out: &mut String, position: usize, card: &RepoCardView) {
    let _ = writeln!(
        out,
        "{position:>3}. {}  Stars: {} | Forks: {}",
        card.title, card.stars, card.forks
    );
    if !card.description.is_empty() {
        let _ = writeln!(out, "     {}", card.description);
    }
    if !card.topics.is_empty() {
        let mut chips = card.topics.join(" · ");
        if let Some(more) = &card.more_topics {
            let _ = write!(chips, " {more}");
        }
        let _ = writeln!(out, "     [{chips}]");
    }
    let _ = writeln!(out, "     {}", card.url);
}

pub fn render_list(title: &str, items: &[String]) -> String {
    format!("{title}: {}", items.join(", "))
}
