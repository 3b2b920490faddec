//! Builds synthetic `.scel` images for the integration tests.
#![allow(dead_code)]

use scel_tools::format::{
    MetadataField, CATEGORY_FIELD, DESCRIPTION_FIELD, EXAMPLES_FIELD, NAME_FIELD, SCEL_MAGIC,
    SYLLABLE_TABLE_MAGIC, SYLLABLE_TABLE_MAGIC_OFFSET, SYLLABLE_TABLE_OFFSET, SYLLABLE_TABLE_SIZE,
    WORD_RECORDS_OFFSET,
};

/// The 23 words of the "programming" cell, in ascending weight order.
pub const PROGRAMMING: [(&str, &[&str]); 23] = [
    ("哈希", &["ha", "xi"]),
    ("第一类对象", &["di", "yi", "lei", "dui", "xiang"]),
    ("方法", &["fang", "fa"]),
    ("初始化", &["chu", "shi", "hua"]),
    ("伪变量", &["wei", "bian", "liang"]),
    ("全局变量", &["quan", "ju", "bian", "liang"]),
    ("局部变量", &["ju", "bu", "bian", "liang"]),
    ("实例变量", &["shi", "li", "bian", "liang"]),
    ("类变量", &["lei", "bian", "liang"]),
    ("变量", &["bian", "liang"]),
    ("常量", &["chang", "liang"]),
    ("析构函数", &["xi", "gou", "han", "shu"]),
    ("构造函数", &["gou", "zao", "han", "shu"]),
    ("访问器", &["fang", "wen", "qi"]),
    ("属性", &["shu", "xing"]),
    ("成员方法", &["cheng", "yuan", "fang", "fa"]),
    ("成员函数", &["cheng", "yuan", "han", "shu"]),
    ("成员属性", &["cheng", "yuan", "shu", "xing"]),
    ("成员", &["cheng", "yuan"]),
    ("实例", &["shi", "li"]),
    ("函数式", &["han", "shu", "shi"]),
    ("面向过程", &["mian", "xiang", "guo", "cheng"]),
    ("面向对象", &["mian", "xiang", "dui", "xiang"]),
];

pub fn utf16le(s: &str) -> Vec<u8> {
    s.encode_utf16().flat_map(|u| u.to_le_bytes()).collect()
}

struct Group {
    indices: Vec<u16>,
    words: Vec<(String, Vec<u8>)>,
}

#[derive(Default)]
pub struct ScelBuilder {
    name: String,
    category: String,
    description: String,
    examples: String,
    syllables: Vec<String>,
    groups: Vec<Group>,
}

impl ScelBuilder {
    pub fn new(name: &str) -> Self {
        ScelBuilder {
            name: name.to_string(),
            ..Default::default()
        }
    }

    pub fn category(mut self, value: &str) -> Self {
        self.category = value.to_string();
        self
    }

    pub fn description(mut self, value: &str) -> Self {
        self.description = value.to_string();
        self
    }

    pub fn examples(mut self, value: &str) -> Self {
        self.examples = value.to_string();
        self
    }

    pub fn syllable_index(&mut self, syllable: &str) -> u16 {
        match self.syllables.iter().position(|s| s == syllable) {
            Some(i) => i as u16,
            None => {
                self.syllables.push(syllable.to_string());
                (self.syllables.len() - 1) as u16
            }
        }
    }

    /// Add a group of words sharing `pinyin`, each with a 2-byte weight.
    pub fn group(mut self, pinyin: &[&str], words: &[(&str, u16)]) -> Self {
        let indices = pinyin.iter().map(|s| self.syllable_index(s)).collect();
        let words = words
            .iter()
            .map(|(text, weight)| (text.to_string(), weight.to_le_bytes().to_vec()))
            .collect();
        self.groups.push(Group { indices, words });
        self
    }

    /// Add a group with explicit raw indices and weight blocks.
    pub fn raw_group(mut self, indices: &[u16], words: &[(&str, Vec<u8>)]) -> Self {
        let words = words
            .iter()
            .map(|(text, weight)| (text.to_string(), weight.clone()))
            .collect();
        self.groups.push(Group {
            indices: indices.to_vec(),
            words,
        });
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut buf = vec![0u8; WORD_RECORDS_OFFSET as usize];
        buf[..SCEL_MAGIC.len()].copy_from_slice(&SCEL_MAGIC);
        for (field, value) in [
            (NAME_FIELD, &self.name),
            (CATEGORY_FIELD, &self.category),
            (DESCRIPTION_FIELD, &self.description),
            (EXAMPLES_FIELD, &self.examples),
        ] {
            write_field(&mut buf, field, value);
        }
        let at = SYLLABLE_TABLE_MAGIC_OFFSET as usize;
        buf[at..at + SYLLABLE_TABLE_MAGIC.len()].copy_from_slice(&SYLLABLE_TABLE_MAGIC);

        let table = self.syllable_table();
        let at = SYLLABLE_TABLE_OFFSET as usize;
        buf[at..at + table.len()].copy_from_slice(&table);

        for group in &self.groups {
            buf.extend_from_slice(&(group.words.len() as u16).to_le_bytes());
            buf.extend_from_slice(&((group.indices.len() * 2) as u16).to_le_bytes());
            for index in &group.indices {
                buf.extend_from_slice(&index.to_le_bytes());
            }
            for (text, weight) in &group.words {
                let text = utf16le(text);
                buf.extend_from_slice(&(text.len() as u16).to_le_bytes());
                buf.extend_from_slice(&text);
                buf.extend_from_slice(&(weight.len() as u16).to_le_bytes());
                buf.extend_from_slice(weight);
            }
        }
        buf
    }

    fn syllable_table(&self) -> Vec<u8> {
        let mut table = Vec::new();
        for (i, syllable) in self.syllables.iter().enumerate() {
            let payload = utf16le(syllable);
            table.extend_from_slice(&(i as u16).to_le_bytes());
            table.extend_from_slice(&(payload.len() as u16).to_le_bytes());
            table.extend_from_slice(&payload);
        }
        let size = SYLLABLE_TABLE_SIZE as usize;
        assert!(table.len() + 4 <= size, "too many syllables for the table region");
        // Pad the region with one entry whose payload is all NUL.
        let rest = size - table.len() - 4;
        table.extend_from_slice(&u16::MAX.to_le_bytes());
        table.extend_from_slice(&(rest as u16).to_le_bytes());
        table.resize(size, 0);
        table
    }
}

fn write_field(buf: &mut [u8], field: MetadataField, value: &str) {
    let encoded = utf16le(value);
    assert!(encoded.len() <= field.size);
    let at = field.offset as usize;
    buf[at..at + encoded.len()].copy_from_slice(&encoded);
}

// 7 is coprime with 23, so this visits every word exactly once.
fn programming_positions() -> impl Iterator<Item = usize> {
    (0..PROGRAMMING.len()).map(|step| (step * 7) % PROGRAMMING.len())
}

/// Words of [`programming`] in the order they are stored in the file.
pub fn programming_file_order() -> Vec<&'static str> {
    programming_positions().map(|i| PROGRAMMING[i].0).collect()
}

/// The "programming" cell with its words stored out of weight order.
pub fn programming() -> ScelBuilder {
    let mut builder = ScelBuilder::new("编程语言")
        .category("计算机")
        .description("面向对象编程常用词汇")
        .examples("哈希 方法 变量");
    for i in programming_positions() {
        let (text, pinyin) = PROGRAMMING[i];
        builder = builder.group(pinyin, &[(text, (i as u16 + 1) * 100)]);
    }
    builder
}
