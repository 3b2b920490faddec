use std::fs::File;
use std::io::{Cursor, Read, Seek};
use std::path::Path;

use log::debug;
use memmap2::Mmap;

use crate::error::Result;
use crate::format::{read_word_records, ScelHeader, SyllableTable};
use crate::io::ByteWindow;
use crate::types::ScelDict;

impl ScelDict {
    /// Decode a dictionary from any `Read + Seek` source.
    ///
    /// Pass `&mut reader` to keep using the source afterwards.
    pub fn parse<R: Read + Seek>(reader: R) -> Result<Self> {
        let mut window = ByteWindow::new(reader);

        let header = ScelHeader::read_from(&mut window)?;
        let table = SyllableTable::read_from(&mut window)?;
        let mut items = read_word_records(&mut window, &table)?;

        items.sort_by_key(|item| item.weight);

        let ScelHeader {
            name,
            category,
            description,
            examples,
        } = header;
        Ok(ScelDict {
            name,
            category,
            description,
            examples,
            items,
        })
    }

    /// Open `path` and decode it. The file is closed before returning.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        debug!("parsing {}", path.as_ref().display());
        ScelDict::parse(file)
    }
}

pub fn parse<R: Read + Seek>(reader: R) -> Result<ScelDict> {
    ScelDict::parse(reader)
}

pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<ScelDict> {
    ScelDict::open(path)
}

/// Decode an in-memory copy of a dictionary, e.g. a downloaded body.
pub fn parse_bytes(bytes: &[u8]) -> Result<ScelDict> {
    ScelDict::parse(Cursor::new(bytes))
}

/// Like [`parse_file`], but reads through a memory map instead of buffered I/O.
pub fn parse_file_mapped<P: AsRef<Path>>(path: P) -> Result<ScelDict> {
    let file = File::open(path.as_ref())?;
    // SAFETY: the mapping is read-only and dropped before returning; the file
    // must not be truncated by another process while we parse it.
    let mmap = unsafe { Mmap::map(&file)? };
    parse_bytes(&mmap)
}
