use crate::view_model::{card_view, AppViewModel, SortOptionView};
use crate::{
    build_request, FilterState, Generation, Repository, ResultAccumulator, SearchConfig,
    SearchRequest, SortOrder, TopicVocabulary,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Settled,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct InFlight {
    generation: Generation,
    page: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    config: SearchConfig,
    filter: FilterState,
    results: ResultAccumulator,
    vocabulary: TopicVocabulary,
    status: FetchStatus,
    generation: Generation,
    pending_trigger: Option<Generation>,
    in_flight: Option<InFlight>,
    /// Highest page applied under the current filters; `None` until page 0 lands.
    settled_page: Option<u32>,
    last_page_short: bool,
    error: Option<String>,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl AppState {
    pub fn new(config: SearchConfig) -> Self {
        let filter = FilterState::from_config(&config);
        let vocabulary = TopicVocabulary::from_defaults(&config.default_topics);
        Self {
            config,
            filter,
            results: ResultAccumulator::new(),
            vocabulary,
            status: FetchStatus::Idle,
            generation: 0,
            pending_trigger: None,
            in_flight: None,
            settled_page: None,
            last_page_short: false,
            error: None,
            dirty: false,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn repositories(&self) -> &[Repository] {
        self.results.items()
    }

    pub fn vocabulary(&self) -> &TopicVocabulary {
        &self.vocabulary
    }

    pub fn status(&self) -> FetchStatus {
        self.status
    }

    /// The generation a response must carry to be applied.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn has_pending_trigger(&self) -> bool {
        self.pending_trigger.is_some()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            query: self.filter.query().to_string(),
            language: self.filter.language().map(ToOwned::to_owned),
            sort: self.filter.sort(),
            selected_topics: self.filter.topics().to_vec(),
            page: self.filter.page(),
            status: self.status,
            loading: self.status == FetchStatus::Loading,
            error: self.error.clone(),
            repositories: self.results.items().iter().map(card_view).collect(),
            vocabulary: self.vocabulary.as_slice().to_vec(),
            languages: self.config.languages.clone(),
            sort_options: [SortOrder::Desc, SortOrder::Asc]
                .into_iter()
                .map(|order| SortOptionView {
                    order,
                    label: order.label(),
                    selected: order == self.filter.sort(),
                })
                .collect(),
            can_load_more: self.can_load_more(),
            end_reached: self.last_page_short,
            dirty: self.dirty,
        }
    }

    /// Returns whether anything visible changed since the last call, then clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn filter_mut(&mut self) -> &mut FilterState {
        &mut self.filter
    }

    pub(crate) fn can_load_more(&self) -> bool {
        self.status != FetchStatus::Loading && self.pending_trigger.is_none()
    }

    /// Starts a new filter session: supersedes whatever trigger or request is
    /// outstanding and returns the generation the next trigger must carry.
    pub(crate) fn begin_trigger(&mut self) -> Generation {
        self.generation += 1;
        self.pending_trigger = Some(self.generation);
        self.in_flight = None;
        self.settled_page = None;
        self.status = FetchStatus::Idle;
        self.mark_dirty();
        self.generation
    }

    /// Consumes the pending trigger if it is still the current one.
    pub(crate) fn take_trigger(&mut self, generation: Generation) -> bool {
        if self.pending_trigger == Some(generation) && self.generation == generation {
            self.pending_trigger = None;
            true
        } else {
            false
        }
    }

    /// Page the next load-more issues: one past the last applied page, or a
    /// retry of page 0 when nothing has landed yet for these filters.
    pub(crate) fn next_page(&self) -> u32 {
        self.settled_page.map_or(0, |page| page + 1)
    }

    pub(crate) fn start_fetch(&mut self, page: u32) -> (Generation, SearchRequest) {
        let generation = self.generation;
        self.filter.set_page(page);
        self.in_flight = Some(InFlight { generation, page });
        self.status = FetchStatus::Loading;
        self.error = None;
        self.mark_dirty();
        (generation, build_request(&self.filter, page, &self.config))
    }

    pub(crate) fn bump_generation(&mut self) -> Generation {
        self.generation += 1;
        self.generation
    }

    /// Returns the in-flight page if `generation` is the one being awaited.
    pub(crate) fn take_in_flight(&mut self, generation: Generation) -> Option<u32> {
        match self.in_flight {
            Some(in_flight)
                if in_flight.generation == generation && self.generation == generation =>
            {
                self.in_flight = None;
                Some(in_flight.page)
            }
            _ => None,
        }
    }

    pub(crate) fn apply_success(&mut self, page: u32, items: Vec<Repository>) -> usize {
        let received = items.len();
        let added = if page == 0 {
            self.results.replace(items)
        } else {
            self.results.append(items)
        };
        self.vocabulary =
            TopicVocabulary::derive(&self.config.default_topics, self.results.items());
        self.settled_page = Some(page);
        self.last_page_short = received < self.config.page_size as usize;
        self.status = FetchStatus::Settled;
        self.error = None;
        self.mark_dirty();
        added
    }

    pub(crate) fn apply_failure(&mut self) {
        let rollback = self.settled_page.unwrap_or(0);
        self.filter.set_page(rollback);
        self.status = FetchStatus::Failed;
        self.error = Some(self.config.failure_message.clone());
        self.mark_dirty();
    }
}
