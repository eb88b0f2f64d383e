//! Secondary rpc source
//!
//! The registry ships a separate module of extra rpc endpoints. It is probed
//! so its availability shows up in logs, but its contents are never merged
//! into records. Whatever state it is in, the run continues.

use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtraRpcsStatus {
    /* No path was configured */
    NotConfigured,
    /* Configured path does not exist */
    Missing,
    /* Path exists but could not be read */
    Unreadable(String),
    /* Source is present; `bytes` is its size */
    Available { bytes: usize },
}

pub struct ExtraRpcsSource {
    path: Option<PathBuf>,
}

impl ExtraRpcsSource {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    /* Check the source without applying anything. Never fails. */
    pub fn probe(&self) -> ExtraRpcsStatus {
        let Some(path) = &self.path else {
            return ExtraRpcsStatus::NotConfigured;
        };

        let status = match std::fs::read_to_string(path) {
            Ok(content) => ExtraRpcsStatus::Available {
                bytes: content.len(),
            },
            Err(err) if err.kind() == ErrorKind::NotFound => ExtraRpcsStatus::Missing,
            Err(err) => ExtraRpcsStatus::Unreadable(err.to_string()),
        };
        debug!(path = %path.display(), ?status, "probed extra rpc source");
        status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_configured() {
        assert_eq!(ExtraRpcsSource::new(None).probe(), ExtraRpcsStatus::NotConfigured);
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = ExtraRpcsSource::new(Some(dir.path().join("extraRpcs.js")));
        assert_eq!(source.probe(), ExtraRpcsStatus::Missing);
    }

    #[test]
    fn malformed_content_is_still_available() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("extraRpcs.js");
        std::fs::write(&path, "import { x } from './y';\nexport const extraRpcs = {").unwrap();
        let source = ExtraRpcsSource::new(Some(path));
        assert!(matches!(source.probe(), ExtraRpcsStatus::Available { .. }));
    }

    #[test]
    fn directory_path_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let source = ExtraRpcsSource::new(Some(dir.path().to_path_buf()));
        assert!(matches!(source.probe(), ExtraRpcsStatus::Unreadable(_)));
    }
}
