use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use askpdf_logging::{askpdf_debug, askpdf_warn};

use crate::submit::{ReqwestSubmitter, SubmitSettings, Submitter};
use crate::{EngineError, EngineEvent, QueryRequest, RequestId};

enum EngineCommand {
    Submit {
        request_id: RequestId,
        request: QueryRequest,
    },
}

/// Runs submissions on a background thread with its own tokio runtime.
///
/// Dropping the handle closes the command channel; the thread exits once
/// in-flight work has been handed to the runtime.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: SubmitSettings) -> Result<Self, EngineError> {
        let submitter = ReqwestSubmitter::new(settings)?;
        Self::with_submitter(Arc::new(submitter))
    }

    pub fn with_submitter(submitter: Arc<dyn Submitter>) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("askpdf-engine-worker")
            .enable_all()
            .build()?;

        thread::Builder::new()
            .name("askpdf-engine".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let submitter = submitter.clone();
                    let event_tx = event_tx.clone();
                    runtime.spawn(async move {
                        handle_command(submitter.as_ref(), command, event_tx).await;
                    });
                }
                askpdf_debug!("Engine command channel closed");
            })?;

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn submit(&self, request_id: RequestId, request: QueryRequest) {
        if self
            .cmd_tx
            .send(EngineCommand::Submit {
                request_id,
                request,
            })
            .is_err()
        {
            askpdf_warn!("Engine thread gone; dropping request {}", request_id);
        }
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Waits up to `timeout` for the next event. `Ok(None)` on timeout,
    /// `Err(EngineError::Stopped)` once the engine thread is gone.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<Option<EngineEvent>, EngineError> {
        match self.event_rx.recv_timeout(timeout) {
            Ok(event) => Ok(Some(event)),
            Err(mpsc::RecvTimeoutError::Timeout) => Ok(None),
            Err(mpsc::RecvTimeoutError::Disconnected) => Err(EngineError::Stopped),
        }
    }
}

async fn handle_command(
    submitter: &dyn Submitter,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Submit {
            request_id,
            request,
        } => {
            let result = submitter.submit(&request).await;
            let _ = event_tx.send(EngineEvent::SubmitCompleted { request_id, result });
        }
    }
}
