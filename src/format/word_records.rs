use std::io::{Cursor, Read, Seek};

use binrw::BinRead;
use log::{debug, trace, warn};

use super::{decode_utf16le, padded_len, SyllableTable, WORD_RECORDS_OFFSET};
use crate::error::{Result, ScelError};
use crate::io::{ByteWindow, WindowError};
use crate::types::WordEntry;

/// Head of a word group: how many words share the following syllable run.
#[derive(Debug, BinRead)]
#[br(little)]
struct GroupHeaderRaw {
    word_count: u16,
    pinyin_len: u16,
}

enum GroupError {
    Window(WindowError),
    Format(binrw::Error),
}

impl From<WindowError> for GroupError {
    fn from(e: WindowError) -> Self {
        GroupError::Window(e)
    }
}

impl From<binrw::Error> for GroupError {
    fn from(e: binrw::Error) -> Self {
        GroupError::Format(e)
    }
}

/// Decode word groups from the start of the word region to end of stream.
///
/// Entries come back in file order. A stream that stops partway through a
/// group keeps the words already completed and drops the rest.
pub fn read_word_records<R: Read + Seek>(
    window: &mut ByteWindow<R>,
    table: &SyllableTable,
) -> Result<Vec<WordEntry>> {
    window.seek_to(WORD_RECORDS_OFFSET)?;

    let mut items = Vec::new();
    loop {
        let group_start = window.position()?;
        match read_group(window, table, &mut items) {
            Ok(()) => {}
            Err(GroupError::Window(WindowError::ShortRead { offset, actual, .. })) => {
                if actual == 0 && offset == group_start {
                    debug!("word records end at offset {}", group_start);
                } else {
                    warn!(
                        "discarding truncated word record at offset {} (stream ends at {})",
                        group_start,
                        offset + actual as u64
                    );
                }
                break;
            }
            Err(GroupError::Window(e)) => return Err(e.into()),
            Err(GroupError::Format(e)) => return Err(ScelError::from(e)),
        }
    }

    debug!("decoded {} word entries", items.len());
    Ok(items)
}

fn read_group<R: Read + Seek>(
    window: &mut ByteWindow<R>,
    table: &SyllableTable,
    items: &mut Vec<WordEntry>,
) -> std::result::Result<(), GroupError> {
    let header_buf = window.read_array::<4>()?;
    let header = GroupHeaderRaw::read(&mut Cursor::new(&header_buf))?;
    trace!(
        "word group: {} words, {} bytes of syllable indices",
        header.word_count,
        header.pinyin_len
    );

    let index_buf = window.read_exact(padded_len(header.pinyin_len))?;
    let indices: Vec<u16> = index_buf
        .chunks_exact(2)
        .map(|chunk| u16::from_le_bytes([chunk[0], chunk[1]]))
        .collect();
    let (pinyin, abbr) = table.resolve(&indices);

    for _ in 0..header.word_count {
        let text_len = u16::from_le_bytes(window.read_array::<2>()?);
        let text = decode_utf16le(&window.read_exact(text_len as usize)?);

        let weight_len = u16::from_le_bytes(window.read_array::<2>()?);
        let weight_buf = window.read_exact(weight_len as usize)?;

        items.push(WordEntry {
            text,
            pinyin: pinyin.clone(),
            abbr: abbr.clone(),
            weight: weight_from(&weight_buf),
        });
    }

    Ok(())
}

/// Only the leading two bytes carry the weight; anything after is ignored.
fn weight_from(buf: &[u8]) -> u16 {
    match buf {
        [] => 0,
        [lo] => *lo as u16,
        [lo, hi, ..] => u16::from_le_bytes([*lo, *hi]),
    }
}
