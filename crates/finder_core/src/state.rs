use std::collections::BTreeSet;

use crate::view_model::{AppViewModel, KeywordRow, ResultsView};

pub type RequestId = u64;

/// Keywords returned by the collaborator for one submitted URL.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Keywords {
    pub primary_keyword: String,
    pub secondary_keywords: Vec<String>,
}

/// How settlements of overlapping requests are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseOrdering {
    /// Every settlement is applied; whichever settles last wins.
    #[default]
    LastSettled,
    /// Only the settlement of the most recently issued request is applied.
    LatestRequest,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    url_input: String,
    loading: bool,
    error: Option<String>,
    result: Option<Keywords>,
    validation_hint: Option<String>,
    ordering: ResponseOrdering,
    next_request_id: RequestId,
    latest_request_id: Option<RequestId>,
    pending: BTreeSet<RequestId>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ordering(ordering: ResponseOrdering) -> Self {
        Self {
            ordering,
            ..Self::default()
        }
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            url_input: self.url_input.clone(),
            submit_enabled: !self.loading,
            loading: self.loading,
            error: self.error.clone(),
            results: self.result.as_ref().map(|keywords| ResultsView {
                primary_keyword: keywords.primary_keyword.clone(),
                secondary_keywords: keywords
                    .secondary_keywords
                    .iter()
                    .enumerate()
                    .map(|(position, text)| KeywordRow {
                        position,
                        text: text.clone(),
                    })
                    .collect(),
            }),
            validation_hint: self.validation_hint.clone(),
            in_flight: self.pending.len(),
            dirty: self.dirty,
        }
    }

    pub fn url_input(&self) -> &str {
        &self.url_input
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn ordering(&self) -> ResponseOrdering {
        self.ordering
    }

    /// Returns whether anything changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_url_input(&mut self, text: String) {
        if self.url_input != text || self.validation_hint.is_some() {
            self.url_input = text;
            self.validation_hint = None;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_validation_hint(&mut self, hint: &str) {
        self.validation_hint = Some(hint.to_string());
        self.mark_dirty();
    }

    /// Enters the loading state for a fresh submission and returns its id.
    pub(crate) fn begin_request(&mut self) -> RequestId {
        self.loading = true;
        self.error = None;
        self.result = None;
        self.validation_hint = None;
        self.next_request_id += 1;
        let request_id = self.next_request_id;
        self.latest_request_id = Some(request_id);
        self.pending.insert(request_id);
        self.mark_dirty();
        request_id
    }

    /// Returns false when the id is not pending (never issued, or already settled).
    pub(crate) fn settle_request(&mut self, request_id: RequestId) -> bool {
        let settled = self.pending.remove(&request_id);
        if settled {
            // The in-flight count changed even if the outcome is discarded.
            self.mark_dirty();
        }
        settled
    }

    pub(crate) fn is_latest_request(&self, request_id: RequestId) -> bool {
        self.latest_request_id == Some(request_id)
    }

    pub(crate) fn apply_settlement(&mut self, result: Result<Keywords, String>) {
        self.loading = false;
        match result {
            Ok(keywords) => {
                self.error = None;
                self.result = Some(keywords);
            }
            Err(message) => {
                self.result = None;
                self.error = Some(message);
            }
        }
        self.mark_dirty();
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
