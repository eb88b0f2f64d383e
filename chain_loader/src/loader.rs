use crate::entry::RegistryEntry;
use crate::error::{EntryError, LoadError};
use chain_types::ChainRecord;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/* An entry that could not be turned into a record */
#[derive(Debug)]
pub struct SkippedEntry {
    pub file_name: String,
    pub error: EntryError,
}

/* Result of loading a registry directory */
#[derive(Debug, Default)]
pub struct LoadReport {
    /* Decoded records, sorted ascending by chain id */
    pub records: Vec<ChainRecord>,

    /* Entries skipped along the way, in discovery order */
    pub skipped: Vec<SkippedEntry>,
}

impl LoadReport {
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}

/* Loader for a directory of `chainid-*.js` registry entries */
pub struct RegistryLoader {
    registry_dir: PathBuf,
}

impl RegistryLoader {
    pub fn new(registry_dir: impl Into<PathBuf>) -> Self {
        Self {
            registry_dir: registry_dir.into(),
        }
    }

    pub fn registry_dir(&self) -> &Path {
        &self.registry_dir
    }

    fn read_dir_error(&self, source: std::io::Error) -> LoadError {
        LoadError::ReadDir {
            path: self.registry_dir.clone(),
            source,
        }
    }

    /* List entry files in file-name order so runs are reproducible */
    pub fn discover_entries(&self) -> Result<Vec<RegistryEntry>, LoadError> {
        let read_dir = std::fs::read_dir(&self.registry_dir).map_err(|e| self.read_dir_error(e))?;

        let mut entries = Vec::new();
        for dir_entry in read_dir {
            let dir_entry = dir_entry.map_err(|e| self.read_dir_error(e))?;
            let Ok(file_name) = dir_entry.file_name().into_string() else {
                continue;
            };
            if !RegistryEntry::is_entry_file_name(&file_name) {
                continue;
            }
            let path = dir_entry.path();
            if !path.is_file() {
                continue;
            }
            entries.push(RegistryEntry { path, file_name });
        }

        entries.sort_by(|a, b| a.file_name.cmp(&b.file_name));
        Ok(entries)
    }

    /* Load every entry, skipping (and reporting) the ones that fail */
    pub fn load(&self) -> Result<LoadReport, LoadError> {
        let entries = self.discover_entries()?;
        debug!(
            registry_dir = %self.registry_dir.display(),
            entries = entries.len(),
            "discovered registry entries"
        );

        let mut report = LoadReport::default();
        for entry in entries {
            match entry.read_record() {
                Ok(record) => report.records.push(record),
                Err(error) => {
                    warn!(entry = %entry.file_name, %error, "skipping registry entry");
                    report.skipped.push(SkippedEntry {
                        file_name: entry.file_name,
                        error,
                    });
                }
            }
        }

        sort_by_chain_id(&mut report.records);
        Ok(report)
    }
}

/* Stable sort: records sharing a chain id keep their discovery order */
pub fn sort_by_chain_id(records: &mut [ChainRecord]) {
    records.sort_by_key(|record| record.chain_id);
}
