use std::collections::HashMap;
use std::io::{Cursor, Read, Seek};

use binrw::BinRead;
use log::debug;

use super::{padded_len, SYLLABLE_TABLE_OFFSET, WORD_RECORDS_OFFSET};
use crate::error::Result;
use crate::io::ByteWindow;

#[derive(Debug, BinRead)]
#[br(little)]
struct SyllableHeaderRaw {
    index: u16,
    payload_len: u16,
}

/// Lookup from the 16-bit indices used by word records to pinyin spellings.
#[derive(Debug, Clone, Default)]
pub struct SyllableTable {
    entries: HashMap<u16, String>,
}

impl SyllableTable {
    /// Read every record between the table marker and the word records.
    pub fn read_from<R: Read + Seek>(window: &mut ByteWindow<R>) -> Result<Self> {
        window.seek_to(SYLLABLE_TABLE_OFFSET)?;

        let mut entries = HashMap::new();
        while window.position()? < WORD_RECORDS_OFFSET {
            let header_buf = window.read_array::<4>()?;
            let raw = SyllableHeaderRaw::read(&mut Cursor::new(&header_buf))?;

            let payload = window.read_exact(padded_len(raw.payload_len))?;
            entries.insert(raw.index, strip_nul(&payload));
        }

        debug!("syllable table: {} entries", entries.len());
        Ok(SyllableTable { entries })
    }

    /// Spelling for `index`. Empty spellings count as absent.
    pub fn get(&self, index: u16) -> Option<&str> {
        self.entries
            .get(&index)
            .map(String::as_str)
            .filter(|s| !s.is_empty())
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Resolve a run of indices into `(pinyin, abbr)`, silently dropping
    /// indices the table does not know.
    ///
    /// The abbreviation is the syllable's first byte. A syllable whose first
    /// byte is not ASCII (only possible after lossy decoding of a damaged
    /// entry) falls back to its first character, since a lone non-ASCII byte
    /// is not a valid `String`.
    pub fn resolve(&self, indices: &[u16]) -> (Vec<String>, Vec<String>) {
        let mut pinyin = Vec::with_capacity(indices.len());
        let mut abbr = Vec::with_capacity(indices.len());

        for &index in indices {
            let Some(syllable) = self.get(index) else {
                debug!("skipping unknown syllable index {}", index);
                continue;
            };
            if let Some(first) = abbreviation(syllable) {
                pinyin.push(syllable.to_string());
                abbr.push(first.to_string());
            }
        }

        (pinyin, abbr)
    }
}

fn abbreviation(syllable: &str) -> Option<&str> {
    match syllable.as_bytes().first() {
        Some(b) if b.is_ascii() => Some(&syllable[..1]),
        Some(_) => syllable.chars().next().map(|c| &syllable[..c.len_utf8()]),
        None => None,
    }
}

#[cfg(test)]
impl FromIterator<(u16, String)> for SyllableTable {
    fn from_iter<I: IntoIterator<Item = (u16, String)>>(iter: I) -> Self {
        SyllableTable {
            entries: iter.into_iter().collect(),
        }
    }
}

// Syllables are ASCII stored as UTF-16, so dropping the zero bytes is enough.
fn strip_nul(payload: &[u8]) -> String {
    let bytes: Vec<u8> = payload.iter().copied().filter(|&b| b != 0).collect();
    String::from_utf8_lossy(&bytes).into_owned()
}
