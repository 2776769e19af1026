//! Keyword finder core: pure state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use state::{AppState, Keywords, RequestId, ResponseOrdering};
pub use update::update;
pub use view_model::{
    AppViewModel, KeywordRow, ResultsView, HEADING, INPUT_PLACEHOLDER, SUBMIT_LABEL_BUSY,
    SUBMIT_LABEL_IDLE, SUBTITLE,
};
