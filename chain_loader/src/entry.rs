use crate::error::EntryError;
use crate::literal::parse_object_literal;
use chain_types::ChainRecord;
use regex::Regex;
use serde_json::Value;
use std::path::PathBuf;
use std::sync::OnceLock;

const ENTRY_PREFIX: &str = "chainid-";
const ENTRY_SUFFIX: &str = ".js";

/* The exported assignment registry entries use, up to and including its opening brace */
fn exported_data_marker() -> &'static Regex {
    static MARKER: OnceLock<Regex> = OnceLock::new();
    MARKER.get_or_init(|| {
        Regex::new(r"(?m)^\s*export\s+const\s+data\s*=\s*\{").expect("exported data marker pattern is valid")
    })
}

/* Bare `data = {` assignment, for entries without the export form */
fn data_marker() -> &'static Regex {
    static MARKER: OnceLock<Regex> = OnceLock::new();
    MARKER.get_or_init(|| Regex::new(r"\bdata\s*=\s*\{").expect("data marker pattern is valid"))
}

/* A registry file selected by discovery */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryEntry {
    pub path: PathBuf,
    pub file_name: String,
}

impl RegistryEntry {
    /* Registry entries are named `chainid-<id>.js` */
    pub fn is_entry_file_name(file_name: &str) -> bool {
        file_name.starts_with(ENTRY_PREFIX) && file_name.ends_with(ENTRY_SUFFIX)
    }

    /* Read this entry from disk and decode its record */
    pub fn read_record(&self) -> Result<ChainRecord, EntryError> {
        let content = std::fs::read_to_string(&self.path)?;
        extract_record(&content)
    }
}

/* Extract and decode the `data = { ... }` record embedded in an entry's source text */
pub fn extract_record(content: &str) -> Result<ChainRecord, EntryError> {
    let marker = exported_data_marker()
        .find(content)
        .or_else(|| data_marker().find(content))
        .ok_or(EntryError::MissingMarker)?;
    let literal_start = marker.end() - 1;

    let (value, _) = parse_object_literal(&content[literal_start..]).map_err(|err| {
        let (line, column) = line_col(content, literal_start + err.offset);
        EntryError::Literal {
            line,
            column,
            message: err.message,
        }
    })?;

    if value.get("chainId").map_or(true, Value::is_null) {
        return Err(EntryError::MissingChainId);
    }

    Ok(serde_json::from_value(value)?)
}

/* 1-based line and column (in chars) of a byte offset */
fn line_col(content: &str, offset: usize) -> (usize, usize) {
    let before = &content[..offset.min(content.len())];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let column = before[line_start..].chars().count() + 1;
    (line, column)
}
