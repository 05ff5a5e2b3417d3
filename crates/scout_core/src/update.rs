use scout_logging::{scout_debug, scout_info, scout_warn};

use crate::{AppState, Effect, FilterState, Msg, RequestOutcome};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::SessionStarted => schedule(&mut state),
        Msg::QueryChanged(query) => edit(&mut state, |filter| filter.set_query(query)),
        Msg::LanguageChanged(language) => {
            edit(&mut state, |filter| filter.set_language(language))
        }
        Msg::SortChanged(sort) => edit(&mut state, |filter| filter.set_sort(sort)),
        Msg::TopicsChanged(topics) => edit(&mut state, |filter| filter.set_topics(topics)),
        Msg::TopicToggled(topic) => edit(&mut state, |filter| filter.toggle_topic(&topic)),
        Msg::DebounceElapsed { generation } => {
            if !state.take_trigger(generation) {
                scout_debug!("Debounce for generation {} superseded", generation);
                return (state, Vec::new());
            }
            vec![fetch(&mut state, 0)]
        }
        Msg::LoadMoreClicked => {
            if !state.can_load_more() {
                scout_debug!(
                    "Load more ignored (status={:?}, pending={})",
                    state.status(),
                    state.has_pending_trigger()
                );
                return (state, Vec::new());
            }
            let page = state.next_page();
            state.bump_generation();
            vec![fetch(&mut state, page)]
        }
        Msg::FetchCompleted {
            generation,
            page,
            outcome,
        } => {
            let Some(expected_page) = state.take_in_flight(generation) else {
                scout_debug!(
                    "Discarding stale response generation={} current={}",
                    generation,
                    state.generation()
                );
                return (state, Vec::new());
            };
            if expected_page != page {
                scout_warn!(
                    "Response for generation {} reported page {} but page {} was requested",
                    generation,
                    page,
                    expected_page
                );
            }
            match outcome {
                RequestOutcome::Success(items) => {
                    let received = items.len();
                    let added = state.apply_success(expected_page, items);
                    scout_info!(
                        "Page {} settled: received={} added={} total={} topics={}",
                        expected_page,
                        received,
                        added,
                        state.repositories().len(),
                        state.vocabulary().len()
                    );
                }
                RequestOutcome::Failure { status, message } => {
                    scout_warn!(
                        "Fetch failed for page {} (status={:?}): {}",
                        expected_page,
                        status,
                        message
                    );
                    state.apply_failure();
                }
            }
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn edit(state: &mut AppState, apply: impl FnOnce(&mut FilterState) -> bool) -> Vec<Effect> {
    if !apply(state.filter_mut()) {
        return Vec::new();
    }
    schedule(state)
}

fn schedule(state: &mut AppState) -> Vec<Effect> {
    let generation = state.begin_trigger();
    vec![Effect::ScheduleFetch {
        generation,
        delay: state.config().debounce,
    }]
}

fn fetch(state: &mut AppState, page: u32) -> Effect {
    let (generation, request) = state.start_fetch(page);
    scout_info!(
        "Fetch generation={} page={} q={:?}",
        generation,
        request.page,
        request.q()
    );
    Effect::Fetch {
        generation,
        page,
        request,
    }
}
