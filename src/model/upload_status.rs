//! Lifecycle of a single upload widget

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of an upload as seen by the widget.
///
/// Transitions are not guarded: any status can follow any other one,
/// the most recent action wins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadStatus {
    /// Created, nothing reported yet
    #[default]
    Initial,
    /// Bytes are still being sent
    Uploading,
    /// All bytes sent, waiting for the server to finish
    Processing,
    /// Server confirmed the upload
    Uploaded,
    /// Upload failed
    Error,
    /// Upload was stopped
    Abort,
}

impl UploadStatus {
    pub const ALL: [UploadStatus; 6] = [
        UploadStatus::Initial,
        UploadStatus::Uploading,
        UploadStatus::Processing,
        UploadStatus::Uploaded,
        UploadStatus::Error,
        UploadStatus::Abort,
    ];

    /// Name used in CSS classes and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            UploadStatus::Initial => "initial",
            UploadStatus::Uploading => "uploading",
            UploadStatus::Processing => "processing",
            UploadStatus::Uploaded => "uploaded",
            UploadStatus::Error => "error",
            UploadStatus::Abort => "abort",
        }
    }

    /// Returns true once the upload reached uploaded, error or abort
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            UploadStatus::Uploaded | UploadStatus::Error | UploadStatus::Abort
        )
    }
}

impl fmt::Display for UploadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_initial() {
        assert_eq!(UploadStatus::default(), UploadStatus::Initial);
    }

    #[test]
    fn test_terminal_statuses() {
        let terminal: Vec<_> = UploadStatus::ALL
            .iter()
            .filter(|s| s.is_terminal())
            .collect();
        assert_eq!(
            terminal,
            vec![&UploadStatus::Uploaded, &UploadStatus::Error, &UploadStatus::Abort]
        );
    }

    #[test]
    fn test_display_matches_css_name() {
        assert_eq!(format!("{}", UploadStatus::Abort), "abort");
        assert_eq!(format!("{}", UploadStatus::Processing), "processing");
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&UploadStatus::Uploading).unwrap();
        assert_eq!(json, "\"uploading\"");
    }
}
