//! Keyword finder engine: the collaborator client and effect execution.
mod engine;
mod extract;
mod types;

pub use engine::{EngineError, EngineHandle};
pub use extract::{ExtractSettings, KeywordExtractor, ReqwestExtractor, DEFAULT_ENDPOINT};
pub use types::{
    EngineEvent, ExtractError, ExtractedKeywords, FailureKind, RequestId, GENERIC_ERROR_MESSAGE,
};
