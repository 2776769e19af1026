use finder_core::{
    update, AppState, Effect, KeywordRow, Keywords, Msg, ResponseOrdering, ResultsView,
    SUBMIT_LABEL_BUSY, SUBMIT_LABEL_IDLE,
};
use pretty_assertions::assert_eq;

fn submit_url(state: AppState, input: &str) -> (AppState, Vec<Effect>) {
    let (state, _) = update(state, Msg::InputChanged(input.to_string()));
    update(state, Msg::SubmitRequested)
}

fn keywords(primary: &str, secondary: &[&str]) -> Keywords {
    Keywords {
        primary_keyword: primary.to_string(),
        secondary_keywords: secondary.iter().map(|s| s.to_string()).collect(),
    }
}

fn settle(state: AppState, request_id: u64, result: Result<Keywords, String>) -> AppState {
    let (state, effects) = update(state, Msg::ExtractionSettled { request_id, result });
    assert!(effects.is_empty());
    state
}

#[test]
fn success_renders_primary_and_ordered_secondary() {
    let (state, _) = submit_url(AppState::new(), "https://example.com");
    let state = settle(
        state,
        1,
        Ok(keywords("seo", &["search", "optimization"])),
    );
    let view = state.view();

    assert_eq!(
        view.results,
        Some(ResultsView {
            primary_keyword: "seo".to_string(),
            secondary_keywords: vec![
                KeywordRow {
                    position: 0,
                    text: "search".to_string(),
                },
                KeywordRow {
                    position: 1,
                    text: "optimization".to_string(),
                },
            ],
        })
    );
    assert_eq!(view.error, None);
    assert!(!view.loading);
}

#[test]
fn secondary_keywords_keep_collaborator_order() {
    let (state, _) = submit_url(AppState::new(), "https://example.com");
    let state = settle(state, 1, Ok(keywords("x", &["b", "a"])));

    let texts: Vec<_> = state
        .view()
        .results
        .expect("results")
        .secondary_keywords
        .into_iter()
        .map(|row| row.text)
        .collect();
    assert_eq!(texts, vec!["b", "a"]);
}

#[test]
fn failure_shows_message_without_results() {
    let (state, _) = submit_url(AppState::new(), "https://example.com");
    let state = settle(state, 1, Err("invalid url".to_string()));
    let view = state.view();

    assert_eq!(view.error.as_deref(), Some("invalid url"));
    assert_eq!(view.results, None);
    assert!(!view.loading);
}

#[test]
fn submit_control_reflects_request_lifecycle() {
    let view = AppState::new().view();
    assert!(view.submit_enabled);
    assert_eq!(view.submit_label(), SUBMIT_LABEL_IDLE);

    let (state, _) = submit_url(AppState::new(), "https://example.com");
    let view = state.view();
    assert!(!view.submit_enabled);
    assert_eq!(view.submit_label(), SUBMIT_LABEL_BUSY);

    let state = settle(state, 1, Err("Something went wrong".to_string()));
    let view = state.view();
    assert!(view.submit_enabled);
    assert_eq!(view.submit_label(), SUBMIT_LABEL_IDLE);

    let (state, _) = update(state, Msg::SubmitRequested);
    let state = settle(state, 2, Ok(keywords("seo", &[])));
    let view = state.view();
    assert!(view.submit_enabled);
    assert_eq!(view.submit_label(), SUBMIT_LABEL_IDLE);
}

#[test]
fn unknown_request_id_is_ignored() {
    let (mut state, _) = submit_url(AppState::new(), "https://example.com");
    assert!(state.consume_dirty());

    let mut state = settle(state, 42, Ok(keywords("stray", &[])));

    assert!(state.view().loading);
    assert_eq!(state.view().results, None);
    assert!(!state.consume_dirty());
}

#[test]
fn duplicate_settlement_is_ignored() {
    let (state, _) = submit_url(AppState::new(), "https://example.com");
    let state = settle(state, 1, Ok(keywords("seo", &[])));
    let state = settle(state, 1, Err("late duplicate".to_string()));

    assert_eq!(state.view().error, None);
    assert!(state.view().results.is_some());
}

#[test]
fn last_settled_lets_the_slowest_response_win() {
    let (state, _) = submit_url(AppState::new(), "https://a.example.com");
    let (state, _) = submit_url(state, "https://b.example.com");

    // Newer request settles first; the earlier one lands afterwards.
    let state = settle(state, 2, Ok(keywords("newer", &[])));
    assert!(!state.view().loading);
    assert_eq!(state.view().in_flight, 1);

    let state = settle(state, 1, Err("older failed".to_string()));
    let view = state.view();
    assert_eq!(view.error.as_deref(), Some("older failed"));
    assert_eq!(view.results, None);
    assert_eq!(view.in_flight, 0);
}

#[test]
fn first_settlement_ends_loading_under_last_settled() {
    let (state, _) = submit_url(AppState::new(), "https://a.example.com");
    let (state, _) = submit_url(state, "https://b.example.com");

    let state = settle(state, 1, Ok(keywords("older", &[])));
    let view = state.view();

    assert!(!view.loading);
    assert_eq!(view.in_flight, 1);
    assert_eq!(
        view.results.map(|results| results.primary_keyword),
        Some("older".to_string())
    );
}

#[test]
fn latest_request_discards_stale_settlements() {
    let state = AppState::with_ordering(ResponseOrdering::LatestRequest);
    let (state, _) = submit_url(state, "https://a.example.com");
    let (state, _) = submit_url(state, "https://b.example.com");

    let state = settle(state, 1, Ok(keywords("stale", &[])));
    let view = state.view();
    assert!(view.loading);
    assert_eq!(view.results, None);
    assert_eq!(view.in_flight, 1);

    let state = settle(state, 2, Ok(keywords("fresh", &["kept"])));
    let view = state.view();
    assert!(!view.loading);
    assert_eq!(
        view.results.map(|results| results.primary_keyword),
        Some("fresh".to_string())
    );
}

#[test]
fn discarded_settlement_still_marks_dirty() {
    let state = AppState::with_ordering(ResponseOrdering::LatestRequest);
    let (state, _) = submit_url(state, "https://a.example.com");
    let (mut state, _) = submit_url(state, "https://b.example.com");
    assert!(state.consume_dirty());

    let mut state = settle(state, 1, Ok(keywords("stale", &[])));

    assert!(state.consume_dirty());
    assert_eq!(state.view().in_flight, 1);
    assert_eq!(state.view().results, None);
}

#[test]
fn latest_request_ignores_stale_settlement_after_latest() {
    let state = AppState::with_ordering(ResponseOrdering::LatestRequest);
    let (state, _) = submit_url(state, "https://a.example.com");
    let (state, _) = submit_url(state, "https://b.example.com");

    let state = settle(state, 2, Err("invalid url".to_string()));
    let state = settle(state, 1, Ok(keywords("stale", &[])));
    let view = state.view();

    assert_eq!(view.error.as_deref(), Some("invalid url"));
    assert_eq!(view.results, None);
    assert_eq!(view.in_flight, 0);
}
