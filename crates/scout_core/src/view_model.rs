use crate::{FetchStatus, Repository, RepositoryId, SortOrder};

const TITLE_MAX_CHARS: usize = 30;
const DESCRIPTION_MAX_CHARS: usize = 75;
const VISIBLE_TOPICS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub query: String,
    pub language: Option<String>,
    pub sort: SortOrder,
    pub selected_topics: Vec<String>,
    pub page: u32,
    pub status: FetchStatus,
    pub loading: bool,
    pub error: Option<String>,
    pub repositories: Vec<RepoCardView>,
    pub vocabulary: Vec<String>,
    pub languages: Vec<String>,
    pub sort_options: Vec<SortOptionView>,
    pub can_load_more: bool,
    /// The last page came back shorter than a full page.
    pub end_reached: bool,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoCardView {
    pub id: RepositoryId,
    pub title: String,
    pub description: String,
    pub stars: u64,
    pub forks: u64,
    pub topics: Vec<String>,
    /// `+N` when more topics exist than are shown.
    pub more_topics: Option<String>,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOptionView {
    pub order: SortOrder,
    pub label: &'static str,
    pub selected: bool,
}

pub(crate) fn card_view(repo: &Repository) -> RepoCardView {
    let hidden = repo.topics.len().saturating_sub(VISIBLE_TOPICS);
    let description = repo.description.as_deref().unwrap_or_default();
    RepoCardView {
        id: repo.id,
        title: truncate(&repo.full_name, TITLE_MAX_CHARS),
        description: truncate(description, DESCRIPTION_MAX_CHARS),
        stars: repo.star_count,
        forks: repo.fork_count,
        topics: repo.topics.iter().take(VISIBLE_TOPICS).cloned().collect(),
        more_topics: (hidden > 0).then(|| format!("+{hidden}")),
        url: repo.url.clone(),
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_counts_chars_not_bytes() {
        assert_eq!(truncate("abc", 3), "abc");
        assert_eq!(truncate("abcd", 3), "abc...");
        assert_eq!(truncate("åäöü", 2), "åä...");
    }

    #[test]
    fn card_shows_five_topics_and_overflow_marker() {
        let repo = Repository {
            id: 9,
            full_name: "someone/a-very-long-repository-name-indeed".into(),
            url: "https://github.com/someone/x".into(),
            description: None,
            star_count: 5,
            fork_count: 2,
            topics: (1..=7).map(|i| format!("t{i}")).collect(),
        };
        let card = card_view(&repo);
        assert_eq!(card.title, "someone/a-very-long-repository...");
        assert_eq!(card.description, "");
        assert_eq!(card.topics.len(), 5);
        assert_eq!(card.more_topics.as_deref(), Some("+2"));
    }
}
