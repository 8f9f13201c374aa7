use crate::error::Result;
use crate::types::signals::HostingMetadata;
use std::path::Path;

/// Loads a saved hosting-platform repository document.
pub fn load_hosting_metadata(path: &Path) -> Result<HostingMetadata> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MirrorError;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_hosting_metadata_reads_plain_field_names() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("hosting.json");
        fs::write(
            &path,
            r#"{"stars": 4, "forks": 1, "open_issues": 2, "commit_count": 30}"#,
        )
        .expect("metadata should write");

        let metadata = load_hosting_metadata(&path).expect("metadata should load");
        assert_eq!(metadata.stars, 4);
        assert_eq!(metadata.commit_count, 30);
        assert!(metadata.language_breakdown.is_empty());
    }

    #[test]
    fn load_hosting_metadata_reports_malformed_json() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("hosting.json");
        fs::write(&path, "not json").expect("metadata should write");
        assert!(matches!(
            load_hosting_metadata(&path),
            Err(MirrorError::Json(_))
        ));
    }

    #[test]
    fn load_hosting_metadata_reports_missing_file() {
        let dir = TempDir::new().expect("temp dir should be created");
        assert!(matches!(
            load_hosting_metadata(&dir.path().join("absent.json")),
            Err(MirrorError::Io(_))
        ));
    }
}
