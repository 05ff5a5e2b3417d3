use crate::{Generation, RequestOutcome, SortOrder};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Session opened; schedules the first fetch with the default filters.
    SessionStarted,
    /// User edited the free-text search box.
    QueryChanged(String),
    /// User picked (or cleared) the language filter.
    LanguageChanged(Option<String>),
    /// User picked a star sort direction.
    SortChanged(SortOrder),
    /// User replaced the whole topic selection.
    TopicsChanged(Vec<String>),
    /// User toggled one topic in or out of the selection.
    TopicToggled(String),
    /// User clicked "load more".
    LoadMoreClicked,
    /// The quiescence window scheduled for `generation` has elapsed.
    DebounceElapsed { generation: Generation },
    /// Engine completion for a request.
    FetchCompleted {
        generation: Generation,
        /// 0-indexed page the request was built for.
        page: u32,
        outcome: RequestOutcome,
    },
    /// Fallback for placeholder wiring.
    NoOp,
}
