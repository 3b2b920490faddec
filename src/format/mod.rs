pub mod header;
pub mod syllable_table;
pub mod text;
pub mod word_records;

pub use header::ScelHeader;
pub use syllable_table::SyllableTable;
pub use text::decode_utf16le;
pub use word_records::read_word_records;

/// Leading bytes of every `.scel` file.
pub const SCEL_MAGIC: [u8; 12] = [0x40, 0x15, 0x00, 0x00, 0x44, 0x43, 0x53, 0x01, 0x01, 0x00, 0x00, 0x00];
pub const SCEL_MAGIC_OFFSET: u64 = 0;

/// Marker placed right before the syllable table.
pub const SYLLABLE_TABLE_MAGIC: [u8; 4] = [0x9D, 0x01, 0x00, 0x00];
pub const SYLLABLE_TABLE_MAGIC_OFFSET: u64 = 5440;

pub const SYLLABLE_TABLE_OFFSET: u64 = 5444;
pub const SYLLABLE_TABLE_SIZE: u64 = 4324;
pub const WORD_RECORDS_OFFSET: u64 = SYLLABLE_TABLE_OFFSET + SYLLABLE_TABLE_SIZE;

/// A fixed-size, NUL-padded UTF-16LE metadata field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetadataField {
    pub offset: u64,
    pub size: usize,
}

pub const NAME_FIELD: MetadataField = MetadataField { offset: 304, size: 520 };
pub const CATEGORY_FIELD: MetadataField = MetadataField { offset: 824, size: 520 };
pub const DESCRIPTION_FIELD: MetadataField = MetadataField { offset: 1344, size: 2048 };
pub const EXAMPLES_FIELD: MetadataField = MetadataField { offset: 3392, size: 2048 };

/// Variable-length payloads are consumed in whole 2-byte units, so an odd
/// declared length still eats the trailing pad byte.
pub(crate) fn padded_len(len: u16) -> usize {
    let len = len as usize;
    len + (len & 1)
}
