//! State of a single upload widget and its transition function

use crate::model::abort_handle::AbortHandle;
use crate::model::action::Action;
use crate::model::file_descriptor::FileDescriptor;
use crate::model::progress::{percent_progress, Progress};
use crate::model::upload_status::UploadStatus;

/// Everything the widget needs to render one upload
#[derive(Debug, Clone, PartialEq)]
pub struct UploadModel {
    pub status: UploadStatus,
    pub progress: Option<Progress>,
    pub abort: AbortHandle,
    pub title: String,
    pub files: Vec<FileDescriptor>,
    /// Link to the uploaded resource, only ever set by the host
    pub url: Option<String>,
}

/// Creates the model for a new upload of `files`
pub fn init(files: Vec<FileDescriptor>) -> UploadModel {
    let title = match files.as_slice() {
        [single] => single.name.clone(),
        _ => format!("({} files)", files.len()),
    };
    UploadModel {
        status: UploadStatus::Initial,
        progress: None,
        abort: AbortHandle::noop(),
        title,
        files,
        url: None,
    }
}

/// Applies `action` to `model` and returns the new model.
///
/// Every action is accepted in every status, the last one wins.
pub fn update(action: Action, model: UploadModel) -> UploadModel {
    let previous = model.status;
    let next = match action {
        Action::Progress { abort, progress } => UploadModel {
            status: if progress.is_partial() {
                UploadStatus::Uploading
            } else {
                UploadStatus::Processing
            },
            progress: Some(progress),
            abort,
            ..model
        },
        Action::Uploaded => UploadModel {
            status: UploadStatus::Uploaded,
            ..model
        },
        Action::Error => UploadModel {
            status: UploadStatus::Error,
            ..model
        },
        Action::Abort => UploadModel {
            status: UploadStatus::Abort,
            ..model
        },
    };
    if previous != next.status {
        tracing::debug!(title = %next.title, from = %previous, to = %next.status, "upload status changed");
    }
    next
}

/// Total size of all files in bytes
pub fn size(model: &UploadModel) -> u64 {
    model
        .files
        .iter()
        .fold(0u64, |total, file| total.saturating_add(file.size_or_zero()))
}

pub fn status(expected: UploadStatus, model: &UploadModel) -> bool {
    model.status == expected
}

pub fn uploading(model: &UploadModel) -> bool {
    status(UploadStatus::Uploading, model)
}

pub fn aborted(model: &UploadModel) -> bool {
    status(UploadStatus::Abort, model)
}

/// Whether the abort control should be offered
pub fn abortable(model: &UploadModel) -> bool {
    model.abort.is_set() && uploading(model)
}

impl UploadModel {
    pub fn with_url(self, url: impl Into<String>) -> Self {
        UploadModel {
            url: Some(url.into()),
            ..self
        }
    }

    pub fn apply(self, action: Action) -> Self {
        update(action, self)
    }

    pub fn size(&self) -> u64 {
        size(self)
    }

    pub fn is(&self, expected: UploadStatus) -> bool {
        status(expected, self)
    }

    pub fn is_abortable(&self) -> bool {
        abortable(self)
    }

    pub fn percent_progress(&self) -> Option<f64> {
        percent_progress(self.progress.as_ref())
    }
}
