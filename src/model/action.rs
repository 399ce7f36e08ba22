//! This module provides the events an upload widget reacts to
use crate::model::abort_handle::AbortHandle;
use crate::model::error::{ActionError, ActionResult};
use crate::model::progress::{Progress, ProgressEvent};

/// Events reported by the upload transport.
///
/// `Progress` can only be built through [`Action::progress`], which rejects
/// events without both byte counters.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Progress {
        abort: AbortHandle,
        progress: Progress,
    },
    Uploaded,
    Error,
    Abort,
}

impl Action {
    pub fn progress(abort: AbortHandle, event: ProgressEvent) -> ActionResult<Action> {
        let loaded = event.loaded.ok_or(ActionError::MissingLoaded)?;
        let total = event.total.ok_or(ActionError::MissingTotal)?;
        Ok(Action::Progress {
            abort,
            progress: Progress::new(loaded, total),
        })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Action::Progress { .. } => "Progress",
            Action::Uploaded => "Uploaded",
            Action::Error => "Error",
            Action::Abort => "Abort",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_with_both_fields() {
        let abort = AbortHandle::new(|| {});
        let action = Action::progress(abort.clone(), ProgressEvent::new(5, 10)).unwrap();
        assert_eq!(
            action,
            Action::Progress {
                abort,
                progress: Progress::new(5, 10)
            }
        );
    }

    #[test]
    fn test_progress_missing_total_is_rejected() {
        let event = ProgressEvent {
            loaded: Some(5),
            total: None,
        };
        assert_eq!(
            Action::progress(AbortHandle::noop(), event),
            Err(ActionError::MissingTotal)
        );
    }

    #[test]
    fn test_progress_missing_loaded_is_rejected() {
        assert_eq!(
            Action::progress(AbortHandle::noop(), ProgressEvent::default()),
            Err(ActionError::MissingLoaded)
        );
    }

    #[test]
    fn test_names() {
        assert_eq!(Action::Uploaded.name(), "Uploaded");
        assert_eq!(Action::Abort.name(), "Abort");
    }
}
