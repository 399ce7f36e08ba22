use crate::model::app_action::{AppAction, UploadEvent};
use crate::model::state::State;
use crate::services::task_registry::TaskRegistry;
use crate::termination::{Interrupted, Terminator};
use color_eyre::eyre;
use std::sync::Arc;
use tokio::sync::broadcast;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Owns the application state and applies every action to it
pub struct StateStore {
    state_tx: UnboundedSender<State>,
}

impl StateStore {
    pub fn new() -> (Self, UnboundedReceiver<State>) {
        let (state_tx, state_rx) = mpsc::unbounded_channel::<State>();

        (StateStore { state_tx }, state_rx)
    }

    pub async fn main_loop(
        self,
        mut terminator: Terminator,
        mut state: State,
        registry: Arc<TaskRegistry>,
        mut action_rx: UnboundedReceiver<AppAction>,
        mut upload_rx: UnboundedReceiver<UploadEvent>,
        mut interrupt_rx: broadcast::Receiver<Interrupted>,
    ) -> eyre::Result<Interrupted> {
        // the initial state once
        self.state_tx.send(state.clone())?;

        let result = loop {
            tokio::select! {
                Some(event) = upload_rx.recv() => {
                    if state.apply(event.upload, event.action) {
                        self.state_tx.send(state.clone())?;
                    }
                },
                Some(action) = action_rx.recv() => {
                    if handle_app_action(&mut state, action) {
                        let _ = terminator.terminate(Interrupted::UserInt);

                        break Interrupted::UserInt;
                    }
                    self.state_tx.send(state.clone())?;
                },
                // Catch and handle interrupt signal to gracefully shutdown
                Ok(interrupted) = interrupt_rx.recv() => {
                    break interrupted;
                }
            }
        };

        for upload in state.uploads.iter().filter(|u| u.is_abortable()) {
            upload.abort.abort();
        }
        let cancelled = registry.cancel_all().await;
        tracing::debug!("Stopped {} upload tasks on exit", cancelled);

        Ok(result)
    }
}

/// Applies a user action to the state, returns true when the user asked to exit
fn handle_app_action(state: &mut State, action: AppAction) -> bool {
    match action {
        AppAction::SelectNext => state.select_next(),
        AppAction::SelectPrevious => state.select_previous(),
        AppAction::AbortSelected => {
            state.abort(state.selected);
        }
        AppAction::Exit => return true,
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::abort_handle::AbortHandle;
    use crate::model::action::Action;
    use crate::model::file_descriptor::FileDescriptor;
    use crate::model::progress::ProgressEvent;
    use crate::model::upload::init;
    use crate::model::upload_status::UploadStatus;
    use crate::services::transport::{MockUploadTransport, TransportEvent, UploadSource};
    use crate::services::upload_runner::UploadRunner;
    use crate::termination::create_termination;
    use crate::view::options::ProgressSpecs;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    fn state() -> State {
        State::new(
            vec![
                init(vec![FileDescriptor::new("a", Some(10))]),
                init(vec![FileDescriptor::new("b", Some(10))]),
            ],
            ProgressSpecs::default(),
        )
    }

    fn counting_abort() -> (AbortHandle, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let handle = AbortHandle::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        (handle, calls)
    }

    #[test]
    fn test_abort_selected_uploading() {
        let mut state = state();
        let (abort, calls) = counting_abort();
        state.apply(1, Action::progress(abort, ProgressEvent::new(2, 10)).unwrap());
        state.select_next();

        assert!(!handle_app_action(&mut state, AppAction::AbortSelected));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(state.uploads[1].status, UploadStatus::Abort);
        assert_eq!(state.uploads[0].status, UploadStatus::Initial);
    }

    #[test]
    fn test_abort_selected_ignored_when_not_abortable() {
        let mut state = state();
        let (abort, calls) = counting_abort();
        state.apply(0, Action::progress(abort, ProgressEvent::new(10, 10)).unwrap());

        handle_app_action(&mut state, AppAction::AbortSelected);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(state.uploads[0].status, UploadStatus::Processing);
    }

    #[test]
    fn test_exit_and_selection() {
        let mut state = state();
        assert!(!handle_app_action(&mut state, AppAction::SelectPrevious));
        assert_eq!(state.selected, 1);
        assert!(handle_app_action(&mut state, AppAction::Exit));
    }

    #[tokio::test]
    async fn test_main_loop_applies_upload_events_until_exit() {
        let (store, mut state_rx) = StateStore::new();
        let (terminator, interrupt_rx) = create_termination();
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let (upload_tx, upload_rx) = mpsc::unbounded_channel();

        let handle = tokio::spawn(store.main_loop(
            terminator,
            state(),
            Arc::new(TaskRegistry::new()),
            action_rx,
            upload_rx,
            interrupt_rx,
        ));

        let initial = state_rx.recv().await.unwrap();
        assert_eq!(initial.uploads.len(), 2);

        upload_tx.send(UploadEvent::new(0, Action::Uploaded)).unwrap();
        let next = state_rx.recv().await.unwrap();
        assert_eq!(next.uploads[0].status, UploadStatus::Uploaded);

        action_tx.send(AppAction::Exit).unwrap();
        assert_eq!(handle.await.unwrap().unwrap(), Interrupted::UserInt);
    }

    async fn next_state(state_rx: &mut UnboundedReceiver<State>) -> State {
        tokio::time::timeout(Duration::from_secs(5), state_rx.recv())
            .await
            .expect("timed out waiting for a state")
            .expect("state store closed")
    }

    #[tokio::test]
    async fn test_abort_sticks_when_transport_reports_late_progress() {
        let (late_sent_tx, mut late_sent_rx) = mpsc::unbounded_channel::<()>();
        let mut transport = MockUploadTransport::new();
        transport.expect_upload().returning(move |_, events, cancel| {
            events.send(TransportEvent::Progress(ProgressEvent::new(10, 100))).unwrap();
            while !cancel.load(Ordering::SeqCst) {
                std::thread::sleep(Duration::from_millis(5));
            }
            let _ = events.send(TransportEvent::Progress(ProgressEvent::new(20, 100)));
            late_sent_tx.send(()).unwrap();
        });

        let (store, mut state_rx) = StateStore::new();
        let (terminator, interrupt_rx) = create_termination();
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let (upload_tx, upload_rx) = mpsc::unbounded_channel();
        let runner = UploadRunner::new(transport, upload_tx);
        let uploads = vec![init(vec![FileDescriptor::new("a.png", Some(100))])];
        runner
            .start(0, "a.png", vec![UploadSource::new(FileDescriptor::new("a.png", Some(100)), None)])
            .await;

        let handle = tokio::spawn(store.main_loop(
            terminator,
            State::new(uploads, ProgressSpecs::default()),
            runner.registry(),
            action_rx,
            upload_rx,
            interrupt_rx,
        ));

        let mut state = next_state(&mut state_rx).await;
        while state.uploads[0].status != UploadStatus::Uploading {
            state = next_state(&mut state_rx).await;
        }

        action_tx.send(AppAction::AbortSelected).unwrap();
        assert_eq!(next_state(&mut state_rx).await.uploads[0].status, UploadStatus::Abort);

        tokio::time::timeout(Duration::from_secs(5), late_sent_rx.recv())
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(50)).await;

        action_tx.send(AppAction::Exit).unwrap();
        assert_eq!(handle.await.unwrap().unwrap(), Interrupted::UserInt);

        let mut last = None;
        while let Ok(state) = state_rx.try_recv() {
            last = Some(state);
        }
        let last_status = last.map(|s| s.uploads[0].status).unwrap_or(UploadStatus::Abort);
        assert_eq!(last_status, UploadStatus::Abort);
    }
}
