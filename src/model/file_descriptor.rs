use color_eyre::eyre;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::UNIX_EPOCH;

/// Represents a single file handed over by the host for uploading
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDescriptor {
    pub name: String,
    /// Last modification time in seconds since the unix epoch
    #[serde(default)]
    pub last_modified: Option<u64>,
    /// Size in bytes, files without a known size count as 0
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default, rename = "type")]
    pub mime_type: String,
}

impl FileDescriptor {
    pub fn new(name: impl Into<String>, size: Option<u64>) -> Self {
        FileDescriptor {
            name: name.into(),
            size,
            ..Default::default()
        }
    }

    /// Builds a descriptor from the local file metadata
    pub fn from_path(path: &Path) -> eyre::Result<Self> {
        let metadata = fs::metadata(path)?;
        let name = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let last_modified = metadata
            .modified()
            .ok()
            .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
            .map(|d| d.as_secs());
        Ok(FileDescriptor {
            mime_type: guess_mime_type(&name).to_string(),
            name,
            last_modified,
            size: Some(metadata.len()),
        })
    }

    pub fn size_or_zero(&self) -> u64 {
        self.size.unwrap_or(0)
    }
}

/// Loads a list of descriptors from a JSON manifest file
pub fn load_manifest(path: &Path) -> eyre::Result<Vec<FileDescriptor>> {
    let content = fs::read_to_string(path)?;
    let files: Vec<FileDescriptor> = serde_json::from_str(&content)?;
    Ok(files)
}

fn guess_mime_type(name: &str) -> &'static str {
    let extension = name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "txt" => "text/plain",
        "csv" => "text/csv",
        "json" => "application/json",
        "pdf" => "application/pdf",
        "zip" => "application/zip",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_from_path_reads_size_and_name() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("photo.PNG");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(&[0u8; 42]).unwrap();

        let descriptor = FileDescriptor::from_path(&path).unwrap();
        assert_eq!(descriptor.name, "photo.PNG");
        assert_eq!(descriptor.size, Some(42));
        assert_eq!(descriptor.mime_type, "image/png");
        assert!(descriptor.last_modified.is_some());
    }

    #[test]
    fn test_from_path_missing_file() {
        let dir = tempdir().unwrap();
        assert!(FileDescriptor::from_path(&dir.path().join("nope")).is_err());
    }

    #[test]
    fn test_load_manifest() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("files.json");
        fs::write(
            &path,
            r#"[{"name":"a.png","size":100,"type":"image/png"},{"name":"b.txt"}]"#,
        )
        .unwrap();

        let files = load_manifest(&path).unwrap();
        assert_eq!(files.len(), 2);
        assert_eq!(files[0].mime_type, "image/png");
        assert_eq!(files[0].size_or_zero(), 100);
        assert_eq!(files[1].size, None);
        assert_eq!(files[1].size_or_zero(), 0);
    }

    #[test]
    fn test_guess_mime_type_fallback() {
        assert_eq!(guess_mime_type("archive"), "application/octet-stream");
        assert_eq!(guess_mime_type("notes.TXT"), "text/plain");
    }
}
