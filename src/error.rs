use std::io;

use crate::io::WindowError;

/// Errors produced while decoding a `.scel` file.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScelError {
    /// Not a sogou dictionary at all: the leading magic did not match.
    #[error("Invalid Dict: not a valid sogou dict")]
    InvalidDict,
    /// The file starts like a sogou dictionary but its body could not be read.
    #[error("Corrupted Dict: {0}")]
    CorruptedDict(String),
    /// The file could not be opened or mapped.
    #[error("IO Error: {0}")]
    Io(String),
}

impl From<io::Error> for ScelError {
    fn from(e: io::Error) -> Self {
        ScelError::Io(e.to_string())
    }
}

impl From<WindowError> for ScelError {
    fn from(e: WindowError) -> Self {
        ScelError::CorruptedDict(e.to_string())
    }
}

impl From<binrw::Error> for ScelError {
    fn from(e: binrw::Error) -> Self {
        ScelError::CorruptedDict(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ScelError>;
