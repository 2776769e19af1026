use finder_core::{Effect, Keywords, Msg};
use finder_engine::{EngineError, EngineEvent, EngineHandle, ExtractSettings, ExtractedKeywords};
use finder_logging::{finder_debug, finder_info};

/// Executes core effects on the engine and turns engine events back into messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: ExtractSettings) -> Result<Self, EngineError> {
        Ok(Self::with_engine(EngineHandle::new(settings)?))
    }

    pub fn with_engine(engine: EngineHandle) -> Self {
        Self { engine }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::ExtractKeywords { request_id, url } => {
                    finder_info!(
                        "ExtractKeywords request_id={} url_len={} url={}",
                        request_id,
                        url.len(),
                        url
                    );
                    self.engine.submit(request_id, url);
                }
            }
        }
    }

    /// Collects every engine event that is ready, without blocking.
    pub fn drain_events(&self) -> Vec<Msg> {
        let mut msgs = Vec::new();
        while let Some(event) = self.engine.try_recv() {
            msgs.push(map_event(event));
        }
        msgs
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::ExtractionCompleted { request_id, result } => {
            let result = match result {
                Ok(keywords) => Ok(map_keywords(keywords)),
                Err(err) => {
                    finder_debug!(
                        "Request {} failure kind={} shown as {:?}",
                        request_id,
                        err.kind,
                        err.user_message()
                    );
                    Err(err.user_message())
                }
            };
            Msg::ExtractionSettled { request_id, result }
        }
    }
}

fn map_keywords(keywords: ExtractedKeywords) -> Keywords {
    Keywords {
        primary_keyword: keywords.primary_keyword,
        secondary_keywords: keywords.secondary_keywords,
    }
}
