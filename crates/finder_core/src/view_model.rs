pub const HEADING: &str = "Keyword Finder";
pub const SUBTITLE: &str = "Enter a URL to extract primary and secondary keywords";
pub const INPUT_PLACEHOLDER: &str = "Enter URL (e.g., https://example.com)";
pub const SUBMIT_LABEL_IDLE: &str = "Extract Keywords";
pub const SUBMIT_LABEL_BUSY: &str = "Extracting...";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub url_input: String,
    pub submit_enabled: bool,
    pub loading: bool,
    pub error: Option<String>,
    pub results: Option<ResultsView>,
    /// Shown instead of submitting when the input is not a usable URL.
    pub validation_hint: Option<String>,
    pub in_flight: usize,
    pub dirty: bool,
}

impl AppViewModel {
    pub fn submit_label(&self) -> &'static str {
        if self.loading {
            SUBMIT_LABEL_BUSY
        } else {
            SUBMIT_LABEL_IDLE
        }
    }

    /// Placeholder text to show while the input is empty.
    pub fn placeholder(&self) -> Option<&'static str> {
        self.url_input.is_empty().then_some(INPUT_PLACEHOLDER)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsView {
    pub primary_keyword: String,
    pub secondary_keywords: Vec<KeywordRow>,
}

/// One secondary keyword; `position` is its stable, order-derived identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordRow {
    pub position: usize,
    pub text: String,
}
