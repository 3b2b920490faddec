//! UniFFI proc-macro wrapper around `scel_tools`.
//!
//! The exported records mirror `ScelDict` and `WordEntry`; bindings are
//! generated from the metadata embedded in the compiled library, so no
//! `.udl` file is needed.
uniffi::setup_scaffolding!();

use scel_tools::{ScelDict, ScelError, WordEntry};

#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct WordEntryRecord {
    pub text: String,
    pub pinyin: Vec<String>,
    pub abbr: Vec<String>,
    /// Joined abbreviations, e.g. `"zg"`.
    pub abbr_string: String,
}

#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct ScelDictRecord {
    pub name: String,
    pub category: String,
    pub description: String,
    pub examples: String,
    /// Ordered by ascending usage weight.
    pub items: Vec<WordEntryRecord>,
}

#[derive(Debug, thiserror::Error, uniffi::Error)]
#[uniffi(flat_error)]
pub enum ScelFfiError {
    #[error("not a valid sogou dict")]
    InvalidDict,
    #[error("dict file might be corrupted: {0}")]
    CorruptedDict(String),
    #[error("IO Error: {0}")]
    Io(String),
}

impl From<ScelError> for ScelFfiError {
    fn from(e: ScelError) -> Self {
        match e {
            ScelError::InvalidDict => ScelFfiError::InvalidDict,
            ScelError::CorruptedDict(msg) => ScelFfiError::CorruptedDict(msg),
            ScelError::Io(msg) => ScelFfiError::Io(msg),
        }
    }
}

impl From<&WordEntry> for WordEntryRecord {
    fn from(entry: &WordEntry) -> Self {
        WordEntryRecord {
            text: entry.text.clone(),
            pinyin: entry.pinyin.clone(),
            abbr: entry.abbr.clone(),
            abbr_string: entry.abbr_string(),
        }
    }
}

impl From<ScelDict> for ScelDictRecord {
    fn from(dict: ScelDict) -> Self {
        let items = dict.items.iter().map(WordEntryRecord::from).collect();
        ScelDictRecord {
            name: dict.name,
            category: dict.category,
            description: dict.description,
            examples: dict.examples,
            items,
        }
    }
}

/// Return the crate version.
#[uniffi::export]
fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Parse the `.scel` file at `path`.
#[uniffi::export]
fn scel_parse_file(path: String) -> Result<ScelDictRecord, ScelFfiError> {
    let dict = scel_tools::parse_file(&path)?;
    Ok(dict.into())
}

/// Parse a `.scel` image already held in memory, e.g. a download body.
#[uniffi::export]
fn scel_parse_bytes(data: Vec<u8>) -> Result<ScelDictRecord, ScelFfiError> {
    let dict = scel_tools::parse_bytes(&data)?;
    Ok(dict.into())
}
