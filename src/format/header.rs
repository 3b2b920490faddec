use std::io::{Read, Seek};

use log::debug;

use super::{
    decode_utf16le, MetadataField, CATEGORY_FIELD, DESCRIPTION_FIELD, EXAMPLES_FIELD, NAME_FIELD,
    SCEL_MAGIC, SCEL_MAGIC_OFFSET, SYLLABLE_TABLE_MAGIC, SYLLABLE_TABLE_MAGIC_OFFSET,
};
use crate::error::{Result, ScelError};
use crate::io::ByteWindow;

/// Descriptive metadata stored in the fixed-layout header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScelHeader {
    pub name: String,
    pub category: String,
    pub description: String,
    pub examples: String,
}

impl ScelHeader {
    /// Validate both magic markers and read the four metadata strings.
    ///
    /// On success the window is left right after the syllable table marker.
    pub fn read_from<R: Read + Seek>(window: &mut ByteWindow<R>) -> Result<Self> {
        check_scel_magic(window)?;

        let header = ScelHeader {
            name: read_field(window, NAME_FIELD)?,
            category: read_field(window, CATEGORY_FIELD)?,
            description: read_field(window, DESCRIPTION_FIELD)?,
            examples: read_field(window, EXAMPLES_FIELD)?,
        };
        debug!("scel header: name={:?} category={:?}", header.name, header.category);

        check_syllable_table_magic(window)?;
        Ok(header)
    }
}

fn check_scel_magic<R: Read + Seek>(window: &mut ByteWindow<R>) -> Result<()> {
    // Anything unreadable here simply is not a scel file.
    match window.read_at(SCEL_MAGIC_OFFSET, SCEL_MAGIC.len()) {
        Ok(bytes) if bytes == SCEL_MAGIC => Ok(()),
        _ => Err(ScelError::InvalidDict),
    }
}

fn check_syllable_table_magic<R: Read + Seek>(window: &mut ByteWindow<R>) -> Result<()> {
    match window.read_at(SYLLABLE_TABLE_MAGIC_OFFSET, SYLLABLE_TABLE_MAGIC.len()) {
        Ok(bytes) if bytes == SYLLABLE_TABLE_MAGIC => Ok(()),
        Ok(bytes) => Err(ScelError::CorruptedDict(format!(
            "unexpected syllable table marker {:02x?}",
            bytes
        ))),
        Err(e) => Err(ScelError::CorruptedDict(format!(
            "missing syllable table marker: {}",
            e
        ))),
    }
}

fn read_field<R: Read + Seek>(window: &mut ByteWindow<R>, field: MetadataField) -> Result<String> {
    let bytes = window.read_at(field.offset, field.size)?;
    Ok(decode_utf16le(&bytes))
}
