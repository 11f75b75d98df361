use std::time::Duration;

use askpdf_core::{Effect, Msg, SubmitOutcome};
use askpdf_engine::{EngineError, EngineEvent, EngineHandle, QueryRequest, SubmitSettings};
use askpdf_logging::{askpdf_info, askpdf_warn, preview};

/// Executes core effects on the engine and turns engine events back into messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: SubmitSettings) -> Result<Self, EngineError> {
        Ok(Self::with_engine(EngineHandle::new(settings)?))
    }

    pub fn with_engine(engine: EngineHandle) -> Self {
        Self { engine }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SubmitQuery {
                    request_id,
                    files,
                    query,
                } => {
                    askpdf_info!(
                        "SubmitQuery request_id={} files={} query={}",
                        request_id,
                        files.len(),
                        preview(&query, 80)
                    );
                    let files = files.into_iter().map(|file| file.path).collect();
                    self.engine.submit(request_id, QueryRequest { files, query });
                }
            }
        }
    }

    /// Drain finished engine work without blocking.
    pub fn poll(&self) -> Vec<Msg> {
        std::iter::from_fn(|| self.engine.try_recv())
            .map(event_to_msg)
            .collect()
    }

    /// Block until the next engine event, or `None` after `timeout`. Errors
    /// once the engine thread has stopped.
    pub fn wait(&self, timeout: Duration) -> Result<Option<Msg>, EngineError> {
        Ok(self.engine.recv_timeout(timeout)?.map(event_to_msg))
    }
}

fn event_to_msg(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::SubmitCompleted { request_id, result } => {
            let outcome = match result {
                Ok(answer) => SubmitOutcome::Answered(answer.result),
                Err(err) => {
                    askpdf_warn!("Request {} failed: {}", request_id, err);
                    SubmitOutcome::Failed
                }
            };
            Msg::SubmitCompleted {
                request_id,
                outcome,
            }
        }
    }
}
