//! Transports move the bytes of an upload and report what happened.
//!
//! The widget itself never talks to a transport, the upload runner turns
//! transport events into widget actions.

use crate::model::file_descriptor::FileDescriptor;
use crate::model::progress::ProgressEvent;
use crate::settings::app_settings::TransferSettings;
use rand::Rng;
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;

/// Set to true to stop a running transfer
pub type CancelSignal = Arc<AtomicBool>;

/// A file handed to a transport, optionally backed by a local path
#[derive(Debug, Clone, PartialEq)]
pub struct UploadSource {
    pub descriptor: FileDescriptor,
    pub path: Option<PathBuf>,
}

impl UploadSource {
    pub fn new(descriptor: FileDescriptor, path: Option<PathBuf>) -> Self {
        UploadSource { descriptor, path }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TransportEvent {
    Progress(ProgressEvent),
    Done,
    Failed(String),
}

/// Blocking upload of a group of files.
///
/// Implementations send events until the transfer finishes, fails or is
/// cancelled. A cancelled transfer sends nothing further.
#[cfg_attr(test, mockall::automock)]
pub trait UploadTransport: Send + Sync + 'static {
    fn upload(&self, sources: Vec<UploadSource>, events: UnboundedSender<TransportEvent>, cancel: CancelSignal);
}

/// Reads local files chunk by chunk and pretends to send them
pub struct SimulatedTransport {
    settings: TransferSettings,
}

impl SimulatedTransport {
    pub fn new(settings: TransferSettings) -> Self {
        SimulatedTransport { settings }
    }

    fn pause(&self, millis: u64, cancel: &CancelSignal) -> bool {
        let step = Duration::from_millis(10);
        let mut waited = Duration::ZERO;
        let target = Duration::from_millis(millis);
        while waited < target {
            if cancel.load(Ordering::SeqCst) {
                return false;
            }
            std::thread::sleep(step.min(target - waited));
            waited += step;
        }
        !cancel.load(Ordering::SeqCst)
    }

    fn send_source(
        &self,
        source: &UploadSource,
        loaded: &mut u64,
        total: Option<u64>,
        events: &UnboundedSender<TransportEvent>,
        cancel: &CancelSignal,
    ) -> Result<bool, String> {
        let mut reader = match &source.path {
            Some(path) => Some(File::open(path).map_err(|e| format!("{}: {}", path.display(), e))?),
            None => None,
        };
        let chunk_size = self.settings.chunk_size.max(1);
        let mut buffer = vec![0u8; chunk_size as usize];
        let mut remaining = source.descriptor.size_or_zero();
        let mut rng = rand::thread_rng();

        while remaining > 0 {
            if cancel.load(Ordering::SeqCst) {
                return Ok(false);
            }
            let wanted = remaining.min(chunk_size);
            let sent = match reader.as_mut() {
                Some(file) => file
                    .read(&mut buffer[..wanted as usize])
                    .map_err(|e| e.to_string())? as u64,
                None => wanted,
            };
            if sent == 0 {
                // the file shrank since it was described
                break;
            }
            if rng.gen::<f64>() < self.settings.failure_rate {
                return Err(format!("connection lost while sending {}", source.descriptor.name));
            }
            remaining -= sent;
            *loaded += sent;
            let event = ProgressEvent {
                loaded: Some(*loaded),
                total,
            };
            if cancel.load(Ordering::SeqCst) {
                return Ok(false);
            }
            if events.send(TransportEvent::Progress(event)).is_err() {
                return Ok(false);
            }
            if !self.pause(self.settings.tick_ms, cancel) {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

impl UploadTransport for SimulatedTransport {
    fn upload(&self, sources: Vec<UploadSource>, events: UnboundedSender<TransportEvent>, cancel: CancelSignal) {
        // the total is only known when every file reported a size
        let total = sources
            .iter()
            .map(|s| s.descriptor.size)
            .sum::<Option<u64>>();
        let mut loaded = 0u64;

        for source in &sources {
            match self.send_source(source, &mut loaded, total, &events, &cancel) {
                Ok(true) => {}
                Ok(false) => return,
                Err(reason) => {
                    let _ = events.send(TransportEvent::Failed(reason));
                    return;
                }
            }
        }
        if loaded == 0 {
            let _ = events.send(TransportEvent::Progress(ProgressEvent {
                loaded: Some(0),
                total,
            }));
        }
        if self.pause(self.settings.processing_ms, &cancel) {
            let _ = events.send(TransportEvent::Done);
        }
    }
}
