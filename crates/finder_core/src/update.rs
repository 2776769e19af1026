use url::Url;

use crate::{AppState, Effect, Msg, ResponseOrdering};

const HINT_REQUIRED: &str = "Please fill out this field.";
const HINT_INVALID_URL: &str = "Please enter a URL.";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            state.set_url_input(text);
            Vec::new()
        }
        Msg::SubmitRequested => {
            // Invalid input never reaches the collaborator and leaves the
            // previous outcome on screen.
            let url = match validate_url(state.url_input()) {
                Ok(url) => url,
                Err(hint) => {
                    state.set_validation_hint(hint);
                    return (state, Vec::new());
                }
            };
            let request_id = state.begin_request();
            vec![Effect::ExtractKeywords { request_id, url }]
        }
        Msg::ExtractionSettled { request_id, result } => {
            if !state.settle_request(request_id) {
                return (state, Vec::new());
            }
            let applies = match state.ordering() {
                ResponseOrdering::LastSettled => true,
                ResponseOrdering::LatestRequest => state.is_latest_request(request_id),
            };
            if applies {
                state.apply_settlement(result);
            }
            Vec::new()
        }
    };

    (state, effects)
}

fn validate_url(raw: &str) -> Result<String, &'static str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(HINT_REQUIRED);
    }
    match Url::parse(trimmed) {
        Ok(_) => Ok(trimmed.to_string()),
        Err(_) => Err(HINT_INVALID_URL),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_url_requires_absolute_url() {
        assert_eq!(validate_url("   "), Err(HINT_REQUIRED));
        assert_eq!(validate_url("example.com"), Err(HINT_INVALID_URL));
        assert_eq!(validate_url("/relative/path"), Err(HINT_INVALID_URL));
        assert_eq!(
            validate_url("  https://example.com/page  "),
            Ok("https://example.com/page".to_string())
        );
    }
}
