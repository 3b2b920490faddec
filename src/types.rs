use std::fmt;

/// A decoded `.scel` dictionary.
///
/// `items` is ordered by ascending usage weight.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScelDict {
    pub name: String,
    pub category: String,
    pub description: String,
    pub examples: String,
    pub items: Vec<WordEntry>,
}

/// One Chinese word with its reading.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WordEntry {
    pub text: String,
    /// Pinyin of each character, e.g. `["zhong", "guo"]`.
    pub pinyin: Vec<String>,
    /// Leading letter of each syllable, e.g. `["z", "g"]`.
    pub abbr: Vec<String>,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub(crate) weight: u16,
}

impl ScelDict {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WordEntry> {
        self.items.iter()
    }
}

impl<'a> IntoIterator for &'a ScelDict {
    type Item = &'a WordEntry;
    type IntoIter = std::slice::Iter<'a, WordEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl WordEntry {
    /// Abbreviations joined together, e.g. `"zg"` for 中国.
    pub fn abbr_string(&self) -> String {
        self.abbr.concat()
    }
}

/// Renders as `中国 zg [zhong guo]`.
impl fmt::Display for WordEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} [{}]", self.text, self.abbr_string(), self.pinyin.join(" "))
    }
}
