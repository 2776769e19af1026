use std::sync::{mpsc, Arc};
use std::thread;

use finder_logging::{finder_debug, finder_info, finder_warn};

use crate::extract::{ExtractSettings, KeywordExtractor, ReqwestExtractor};
use crate::{EngineEvent, RequestId};

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

enum EngineCommand {
    Extract { request_id: RequestId, url: String },
}

/// Runs extraction requests on a background tokio runtime.
///
/// Every submitted request runs to completion independently; nothing is
/// cancelled or retried. Completions arrive in settlement order.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: ExtractSettings) -> Result<Self, EngineError> {
        finder_info!("Keyword service endpoint: {}", settings.endpoint);
        Self::with_extractor(Arc::new(ReqwestExtractor::new(settings)))
    }

    pub fn with_extractor(extractor: Arc<dyn KeywordExtractor>) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let extractor = extractor.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(extractor.as_ref(), command, event_tx).await;
                });
            }
            finder_debug!("Engine command channel closed");
        });

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn submit(&self, request_id: RequestId, url: impl Into<String>) {
        let command = EngineCommand::Extract {
            request_id,
            url: url.into(),
        };
        if self.cmd_tx.send(command).is_err() {
            finder_warn!("Engine stopped; request {} dropped", request_id);
        }
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Blocks until the next event or until `timeout` elapses.
    pub fn recv_timeout(&self, timeout: std::time::Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    extractor: &dyn KeywordExtractor,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Extract { request_id, url } => {
            let result = extractor.extract(&url).await;
            match &result {
                Ok(keywords) => finder_info!(
                    "Request {} succeeded: primary={:?} secondary={}",
                    request_id,
                    keywords.primary_keyword,
                    keywords.secondary_keywords.len()
                ),
                Err(err) => finder_warn!("Request {} failed: {}", request_id, err),
            }
            let _ = event_tx.send(EngineEvent::ExtractionCompleted { request_id, result });
        }
    }
}
