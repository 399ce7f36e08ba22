//! Static styles and label tables shared by the views

use crate::model::upload_status::UploadStatus;
use crate::view::node::Style;
use lazy_static::lazy_static;
use std::collections::HashMap;

lazy_static! {
    pub static ref UPLOAD_STYLE: Style = Style::from([("display", "inline-block".to_string())]);
    pub static ref BLOCK_STYLE: Style = Style::from([
        ("display", "inline-block".to_string()),
        ("vertical-align", "top".to_string()),
        ("margin-right", "1rem".to_string()),
    ]);
    /// Block style for the last column, which has nothing to its right
    pub static ref LAST_BLOCK_STYLE: Style = {
        let mut style = BLOCK_STYLE.clone();
        style.remove("margin-right");
        style
    };
    static ref STATUS_LABELS: HashMap<UploadStatus, &'static str> = HashMap::from([
        (UploadStatus::Uploading, "uploading"),
        (UploadStatus::Processing, "processing"),
        (UploadStatus::Uploaded, "done"),
        (UploadStatus::Error, "error"),
        (UploadStatus::Abort, "stopped"),
    ]);
    static ref ACTION_LABELS: HashMap<&'static str, &'static str> = HashMap::from([("abort", "×")]);
}

/// Human readable status, `None` for statuses without a label
pub fn status_label(status: UploadStatus) -> Option<&'static str> {
    STATUS_LABELS.get(&status).copied()
}

pub fn action_label(action: &str) -> Option<&'static str> {
    ACTION_LABELS.get(action).copied()
}

/// `display: none` when hidden, nothing otherwise
pub fn visible(shown: bool) -> Style {
    if shown {
        Style::new()
    } else {
        Style::from([("display", "none".to_string())])
    }
}
