//! This module provides list of all possible actions which can be executed on the UI
use crate::model::action::Action;

/// Position of an upload in the application state
pub type UploadId = usize;

/// List of all possible actions a user can execute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    SelectNext,
    SelectPrevious,
    AbortSelected,
    Exit,
}

/// Widget action addressed to one of the uploads
#[derive(Debug, Clone, PartialEq)]
pub struct UploadEvent {
    pub upload: UploadId,
    pub action: Action,
}

impl UploadEvent {
    pub fn new(upload: UploadId, action: Action) -> Self {
        UploadEvent { upload, action }
    }
}
