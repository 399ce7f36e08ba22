//! This module provides functionality for keeping the application state
use crate::model::action::Action;
use crate::model::app_action::UploadId;
use crate::model::upload::{update, UploadModel};
use crate::view::options::ProgressSpecs;
use std::collections::HashSet;

/// Represents entire state of the application, each page transforms this information for
/// suitable Props object
#[derive(Debug, Clone, Default, PartialEq)]
pub struct State {
    pub uploads: Vec<UploadModel>,
    pub selected: usize,
    pub progress_specs: ProgressSpecs,
    /// Uploads stopped by the user, late progress for them is ignored
    aborted: HashSet<UploadId>,
}

impl State {
    pub fn new(uploads: Vec<UploadModel>, progress_specs: ProgressSpecs) -> State {
        State {
            uploads,
            selected: 0,
            progress_specs,
            aborted: HashSet::new(),
        }
    }

    /// Runs the widget update for one upload, returns false when the action
    /// was dropped
    pub fn apply(&mut self, upload: UploadId, action: Action) -> bool {
        let Some(slot) = self.uploads.get_mut(upload) else {
            tracing::warn!("Dropping {} for unknown upload {}", action.name(), upload);
            return false;
        };
        if matches!(action, Action::Progress { .. }) && self.aborted.contains(&upload) {
            tracing::debug!("Dropping late progress of aborted upload {}", upload);
            return false;
        }
        *slot = update(action, slot.clone());
        true
    }

    /// Calls the abort handle of `upload` and marks it aborted, returns false
    /// when the upload cannot be aborted
    pub fn abort(&mut self, upload: UploadId) -> bool {
        let Some(model) = self.uploads.get(upload) else {
            return false;
        };
        if !model.is_abortable() {
            tracing::debug!("Upload {} is not abortable in status {}", upload, model.status);
            return false;
        }
        tracing::info!("Aborting upload {} ({})", upload, model.title);
        model.abort.abort();
        self.aborted.insert(upload);
        self.apply(upload, Action::Abort)
    }

    pub fn select_next(&mut self) {
        if !self.uploads.is_empty() {
            self.selected = (self.selected + 1) % self.uploads.len();
        }
    }

    pub fn select_previous(&mut self) {
        if !self.uploads.is_empty() {
            self.selected = self
                .selected
                .checked_sub(1)
                .unwrap_or(self.uploads.len() - 1);
        }
    }

    pub fn selected_upload(&self) -> Option<&UploadModel> {
        self.uploads.get(self.selected)
    }
}
