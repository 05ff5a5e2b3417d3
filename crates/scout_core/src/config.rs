use std::time::Duration;

use crate::SortOrder;

pub const DEFAULT_QUERY: &str = "React UI Component";
pub const DEFAULT_LANGUAGE: &str = "TypeScript";
pub const DEFAULT_TOPICS: [&str; 10] = [
    "react",
    "angular",
    "vue",
    "svelte",
    "javascript",
    "typescript",
    "nodejs",
    "frontend",
    "backend",
    "fullstack",
];
pub const LANGUAGES: [&str; 8] = [
    "JavaScript",
    "Python",
    "Java",
    "Go",
    "Ruby",
    "TypeScript",
    "C++",
    "Vue",
];
pub const PAGE_SIZE: u32 = 15;
pub const DEBOUNCE_MS: u64 = 300;
pub const FAILURE_MESSAGE: &str = "Failed to fetch repositories. Please try again later.";

/// Immutable session configuration handed to [`crate::AppState::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub default_query: String,
    pub default_language: Option<String>,
    pub default_sort: SortOrder,
    /// Always offered as topic filters, regardless of fetched data.
    pub default_topics: Vec<String>,
    /// Languages offered in the language picker.
    pub languages: Vec<String>,
    pub page_size: u32,
    /// Only repositories with strictly more stars than this are returned.
    pub star_floor: u32,
    pub debounce: Duration,
    pub failure_message: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_query: DEFAULT_QUERY.to_string(),
            default_language: Some(DEFAULT_LANGUAGE.to_string()),
            default_sort: SortOrder::Desc,
            default_topics: DEFAULT_TOPICS.iter().map(|t| t.to_string()).collect(),
            languages: LANGUAGES.iter().map(|l| l.to_string()).collect(),
            page_size: PAGE_SIZE,
            star_floor: 1,
            debounce: Duration::from_millis(DEBOUNCE_MS),
            failure_message: FAILURE_MESSAGE.to_string(),
        }
    }
}
