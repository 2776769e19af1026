use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use finder_engine::{
    EngineEvent, EngineHandle, ExtractError, ExtractedKeywords, KeywordExtractor,
};
use pretty_assertions::assert_eq;

/// Answers each URL after a fixed per-URL delay.
struct DelayedExtractor {
    delays: HashMap<String, Duration>,
}

#[async_trait::async_trait]
impl KeywordExtractor for DelayedExtractor {
    async fn extract(&self, url: &str) -> Result<ExtractedKeywords, ExtractError> {
        let delay = self.delays.get(url).copied().unwrap_or_default();
        tokio::time::sleep(delay).await;
        Ok(ExtractedKeywords {
            primary_keyword: url.to_string(),
            secondary_keywords: Vec::new(),
        })
    }
}

fn collect_events(engine: &EngineHandle, count: usize) -> Vec<EngineEvent> {
    let deadline = Instant::now() + Duration::from_secs(5);
    let mut events = Vec::new();
    while events.len() < count && Instant::now() < deadline {
        if let Some(event) = engine.recv_timeout(Duration::from_millis(50)) {
            events.push(event);
        }
    }
    events
}

fn completed_ids(events: &[EngineEvent]) -> Vec<u64> {
    events
        .iter()
        .map(|event| match event {
            EngineEvent::ExtractionCompleted { request_id, .. } => *request_id,
        })
        .collect()
}

#[test]
fn reports_completion_with_request_id() {
    finder_logging::initialize_for_tests();
    let engine = EngineHandle::with_extractor(Arc::new(DelayedExtractor {
        delays: HashMap::new(),
    }))
    .expect("engine");

    engine.submit(7, "https://example.com");
    let events = collect_events(&engine, 1);

    assert_eq!(
        events,
        vec![EngineEvent::ExtractionCompleted {
            request_id: 7,
            result: Ok(ExtractedKeywords {
                primary_keyword: "https://example.com".to_string(),
                secondary_keywords: Vec::new(),
            }),
        }]
    );
}

#[test]
fn overlapping_requests_complete_in_settlement_order() {
    finder_logging::initialize_for_tests();
    let delays = HashMap::from([
        ("https://slow.example.com".to_string(), Duration::from_millis(300)),
        ("https://fast.example.com".to_string(), Duration::from_millis(10)),
    ]);
    let engine =
        EngineHandle::with_extractor(Arc::new(DelayedExtractor { delays })).expect("engine");

    engine.submit(1, "https://slow.example.com");
    engine.submit(2, "https://fast.example.com");
    let events = collect_events(&engine, 2);

    assert_eq!(completed_ids(&events), vec![2, 1]);
}

#[test]
fn try_recv_is_empty_when_idle() {
    let engine = EngineHandle::with_extractor(Arc::new(DelayedExtractor {
        delays: HashMap::new(),
    }))
    .expect("engine");

    assert_eq!(engine.try_recv(), None);
}
