use pretty_assertions::assert_eq;
use scout_core::{update, AppState, Effect, FetchStatus, Msg, SearchRequest};
use scout_engine::{outcome_from, FetchSettings, ReqwestSearchClient, SearchClient};
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn repo_json(id: u64, topics: &[&str]) -> Value {
    json!({
        "id": id,
        "full_name": format!("ui-kits/component-{id}"),
        "html_url": format!("https://github.com/ui-kits/component-{id}"),
        "description": format!("React UI Component number {id}"),
        "stargazers_count": 5000 - id,
        "forks_count": 40 + id,
        "topics": topics,
    })
}

fn expect_fetch(effects: Vec<Effect>) -> (u64, u32, SearchRequest) {
    match effects.into_iter().next() {
        Some(Effect::Fetch {
            generation,
            page,
            request,
        }) => (generation, page, request),
        other => panic!("expected fetch, got {other:?}"),
    }
}

#[tokio::test]
async fn default_session_loads_first_page_and_learns_topics() {
    scout_logging::initialize_for_tests();
    let server = MockServer::start().await;
    let items: Vec<Value> = (1..=15)
        .map(|id| match id {
            1..=3 => repo_json(id, &["react", "hooks"]),
            4..=8 => repo_json(id, &["react", "typescript"]),
            _ => repo_json(id, &[]),
        })
        .collect();
    Mock::given(method("GET"))
        .and(path("/search/repositories"))
        .and(query_param(
            "q",
            "stars:>1 React UI Component in:name language:TypeScript",
        ))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": items })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/search/repositories"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [repo_json(15, &["react"]), repo_json(16, &["storybook"])],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = ReqwestSearchClient::new(FetchSettings {
        api_base_url: server.uri(),
        ..FetchSettings::default()
    })
    .unwrap();

    let state = AppState::default();
    assert_eq!(state.vocabulary().len(), 10);

    let (state, effects) = update(state, Msg::SessionStarted);
    let generation = match effects[..] {
        [Effect::ScheduleFetch { generation, .. }] => generation,
        _ => panic!("expected a scheduled fetch, got {effects:?}"),
    };
    let (state, effects) = update(state, Msg::DebounceElapsed { generation });
    let (generation, page, request) = expect_fetch(effects);

    let result = client.search(&request).await;
    let (state, _) = update(
        state,
        Msg::FetchCompleted {
            generation,
            page,
            outcome: outcome_from(result),
        },
    );

    assert_eq!(state.status(), FetchStatus::Settled);
    assert_eq!(state.repositories().len(), 15);
    assert_eq!(state.vocabulary().len(), 11);
    assert_eq!(
        state
            .vocabulary()
            .as_slice()
            .iter()
            .filter(|topic| topic.as_str() == "hooks")
            .count(),
        1
    );

    // Second page overlaps by one item; the accumulator keeps the first copy.
    let (state, effects) = update(state, Msg::LoadMoreClicked);
    let (generation, page, request) = expect_fetch(effects);
    assert_eq!(page, 1);
    let result = client.search(&request).await;
    let (state, _) = update(
        state,
        Msg::FetchCompleted {
            generation,
            page,
            outcome: outcome_from(result),
        },
    );

    let ids: Vec<_> = state.repositories().iter().map(|r| r.id).collect();
    assert_eq!(ids, (1..=16u64).collect::<Vec<_>>());
    assert_eq!(state.vocabulary().as_slice().last().unwrap(), "storybook");
    assert!(state.view().end_reached);
}

#[tokio::test]
async fn rate_limited_load_more_keeps_results_and_shows_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [repo_json(1, &["react"])],
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(query_param("page", "2"))
        .respond_with(
            ResponseTemplate::new(403)
                .set_body_json(json!({ "message": "API rate limit exceeded" })),
        )
        .mount(&server)
        .await;

    let client = ReqwestSearchClient::new(FetchSettings {
        api_base_url: server.uri(),
        ..FetchSettings::default()
    })
    .unwrap();

    let (state, _) = update(AppState::default(), Msg::SessionStarted);
    let generation = state.generation();
    let (state, effects) = update(state, Msg::DebounceElapsed { generation });
    let (generation, page, request) = expect_fetch(effects);
    let outcome = outcome_from(client.search(&request).await);
    let (state, _) = update(
        state,
        Msg::FetchCompleted {
            generation,
            page,
            outcome,
        },
    );
    let before = state.repositories().to_vec();

    let (state, effects) = update(state, Msg::LoadMoreClicked);
    let (generation, page, request) = expect_fetch(effects);
    let outcome = outcome_from(client.search(&request).await);
    let (state, _) = update(
        state,
        Msg::FetchCompleted {
            generation,
            page,
            outcome,
        },
    );

    assert_eq!(state.repositories(), &before[..]);
    assert_eq!(state.status(), FetchStatus::Failed);
    assert_eq!(
        state.error(),
        Some("Failed to fetch repositories. Please try again later.")
    );
}
