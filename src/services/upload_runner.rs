//! Drives uploads through a transport and reports them as widget actions

use crate::model::abort_handle::AbortHandle;
use crate::model::action::Action;
use crate::model::app_action::{UploadEvent, UploadId};
use crate::services::task_registry::{TaskId, TaskRegistry};
use crate::services::transport::{CancelSignal, TransportEvent, UploadSource, UploadTransport};
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedSender};

pub struct UploadRunner<T: UploadTransport> {
    transport: Arc<T>,
    registry: Arc<TaskRegistry>,
    event_tx: UnboundedSender<UploadEvent>,
}

impl<T: UploadTransport> UploadRunner<T> {
    pub fn new(transport: T, event_tx: UnboundedSender<UploadEvent>) -> Self {
        UploadRunner {
            transport: Arc::new(transport),
            registry: Arc::new(TaskRegistry::new()),
            event_tx,
        }
    }

    pub fn registry(&self) -> Arc<TaskRegistry> {
        self.registry.clone()
    }

    /// Starts sending `sources` in the background as upload `upload`
    pub async fn start(&self, upload: UploadId, title: &str, sources: Vec<UploadSource>) -> TaskId {
        let cancel = CancelSignal::default();
        let abort = abort_handle(upload, cancel.clone());
        let (transport_tx, mut transport_rx) = mpsc::unbounded_channel::<TransportEvent>();

        let transport = self.transport.clone();
        let blocking_cancel = cancel.clone();
        let transfer = tokio::task::spawn_blocking(move || {
            transport.upload(sources, transport_tx, blocking_cancel);
        });

        let event_tx = self.event_tx.clone();
        self.registry
            .spawn_tracked(upload, title, async move {
                while let Some(event) = transport_rx.recv().await {
                    if cancel.load(Ordering::SeqCst) {
                        tracing::debug!("Upload {} cancelled, dropping pending transport events", upload);
                        break;
                    }
                    let Some(action) = to_action(upload, event, &abort) else {
                        continue;
                    };
                    if event_tx.send(UploadEvent::new(upload, action)).is_err() {
                        // nobody listens anymore, stop the transfer
                        cancel.store(true, Ordering::SeqCst);
                        break;
                    }
                }
                if let Err(e) = transfer.await {
                    tracing::error!("Transfer of upload {} panicked: {}", upload, e);
                    let _ = event_tx.send(UploadEvent::new(upload, Action::Error));
                }
            })
            .await
    }
}

fn abort_handle(upload: UploadId, cancel: CancelSignal) -> AbortHandle {
    AbortHandle::new(move || {
        if !cancel.swap(true, Ordering::SeqCst) {
            tracing::info!("Abort requested for upload {}", upload);
        }
    })
}

/// Maps a transport event to the widget action, `None` for events the widget
/// cannot accept
fn to_action(upload: UploadId, event: TransportEvent, abort: &AbortHandle) -> Option<Action> {
    match event {
        TransportEvent::Progress(progress) => match Action::progress(abort.clone(), progress) {
            Ok(action) => Some(action),
            Err(e) => {
                tracing::warn!("Ignoring progress of upload {}: {}", upload, e);
                None
            }
        },
        TransportEvent::Done => {
            tracing::info!("Upload {} finished", upload);
            Some(Action::Uploaded)
        }
        TransportEvent::Failed(reason) => {
            tracing::warn!("Upload {} failed: {}", upload, reason);
            Some(Action::Error)
        }
    }
}
