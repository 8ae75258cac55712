//! 拼音相关：报告里的注音。
//!
//! - `ToneRomanizer`：逐字查带声调拼音（`pinyin` crate），非汉字原样保留
//! - `marked_from_numbered`：把 CC-CEDICT 的数字声调（`chuan2 tong3`）转成声调符号（`chuán tǒng`）

use duzhe_core::dictionary::Romanizer;
use pinyin::ToPinyin;

/// 逐字注音：`"中文"` -> `"zhōng wén"`。
///
/// 多音字取 `pinyin` crate 的默认读音；需要整词读音时把它放在词典注音之后兜底。
#[derive(Debug, Clone, Copy, Default)]
pub struct ToneRomanizer;

impl ToneRomanizer {
    pub fn new() -> Self {
        Self
    }
}

impl Romanizer for ToneRomanizer {
    fn romanize(&self, word: &str) -> Option<String> {
        let mut syllables: Vec<String> = Vec::new();
        // 连续的非汉字合并成一段，和汉字音节一样用空格隔开。
        let mut other = String::new();
        for c in word.chars() {
            match c.to_pinyin() {
                Some(p) => {
                    if !other.is_empty() {
                        syllables.push(std::mem::take(&mut other));
                    }
                    syllables.push(p.with_tone().to_string());
                }
                None => other.push(c),
            }
        }
        if !other.is_empty() {
            syllables.push(other);
        }
        if syllables.is_empty() {
            None
        } else {
            Some(syllables.join(" "))
        }
    }
}

/// 数字声调串 -> 声调符号串（按空白切分音节，结果用单个空格连接）。
pub fn marked_from_numbered(numbered: &str) -> String {
    numbered
        .split_whitespace()
        .map(mark_syllable)
        .collect::<Vec<_>>()
        .join(" ")
}

/// 单个音节：`lu:4` -> `lǜ`，`hao3` -> `hǎo`，`ma5`/`ma` -> `ma`。
///
/// 不是“字母 + 可选数字”形式的片段（如 `,`、`·`）原样返回。
pub fn mark_syllable(syllable: &str) -> String {
    let (body, tone) = match syllable.char_indices().last() {
        Some((idx, c)) if c.is_ascii_digit() => (&syllable[..idx], c.to_digit(10).unwrap_or(5)),
        _ => (syllable, 5),
    };
    if body.is_empty() || !body.chars().all(|c| c.is_ascii_alphabetic() || c == ':') {
        return syllable.to_string();
    }

    // u: / v -> ü
    let mut letters: Vec<char> = Vec::with_capacity(body.len());
    let mut chars = body.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            'u' | 'U' if chars.peek() == Some(&':') => {
                chars.next();
                letters.push(if c == 'u' { 'ü' } else { 'Ü' });
            }
            'v' => letters.push('ü'),
            'V' => letters.push('Ü'),
            ':' => {}
            _ => letters.push(c),
        }
    }

    if !(1..=4).contains(&tone) {
        return letters.into_iter().collect();
    }
    if let Some(pos) = tone_position(&letters) {
        letters[pos] = with_tone(letters[pos], tone);
    }
    letters.into_iter().collect()
}

/// 声调标在哪个字母上：有 a/e 标 a/e；有 ou 标 o；否则标最后一个元音。
fn tone_position(letters: &[char]) -> Option<usize> {
    let lower: Vec<char> = letters.iter().map(|c| c.to_lowercase().next().unwrap_or(*c)).collect();
    if let Some(p) = lower.iter().position(|&c| c == 'a' || c == 'e') {
        return Some(p);
    }
    if let Some(p) = lower.windows(2).position(|w| w[0] == 'o' && w[1] == 'u') {
        return Some(p);
    }
    lower
        .iter()
        .rposition(|c| matches!(c, 'i' | 'o' | 'u' | 'ü'))
}

fn with_tone(vowel: char, tone: u32) -> char {
    const TABLE: &[(char, [char; 4])] = &[
        ('a', ['ā', 'á', 'ǎ', 'à']),
        ('e', ['ē', 'é', 'ě', 'è']),
        ('i', ['ī', 'í', 'ǐ', 'ì']),
        ('o', ['ō', 'ó', 'ǒ', 'ò']),
        ('u', ['ū', 'ú', 'ǔ', 'ù']),
        ('ü', ['ǖ', 'ǘ', 'ǚ', 'ǜ']),
        ('A', ['Ā', 'Á', 'Ǎ', 'À']),
        ('E', ['Ē', 'É', 'Ě', 'È']),
        ('I', ['Ī', 'Í', 'Ǐ', 'Ì']),
        ('O', ['Ō', 'Ó', 'Ǒ', 'Ò']),
        ('U', ['Ū', 'Ú', 'Ǔ', 'Ù']),
        ('Ü', ['Ǖ', 'Ǘ', 'Ǚ', 'Ǜ']),
    ];
    TABLE
        .iter()
        .find(|(v, _)| *v == vowel)
        .and_then(|(_, marks)| marks.get((tone - 1) as usize).copied())
        .unwrap_or(vowel)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbered_to_marked() {
        assert_eq!(marked_from_numbered("chuan2 tong3"), "chuán tǒng");
        assert_eq!(marked_from_numbered("ni3 hao3"), "nǐ hǎo");
        assert_eq!(marked_from_numbered("lu:4 se4"), "lǜ sè");
        assert_eq!(marked_from_numbered("nv3 er2"), "nǚ ér");
        assert_eq!(marked_from_numbered("gou3"), "gǒu");
        assert_eq!(marked_from_numbered("gui4"), "guì");
        assert_eq!(marked_from_numbered("liu2"), "liú");
        assert_eq!(marked_from_numbered("Bei3 jing1"), "Běi jīng");
        assert_eq!(marked_from_numbered("ma5"), "ma");
        assert_eq!(marked_from_numbered("ma"), "ma");
        assert_eq!(marked_from_numbered("xi1 , ha1"), "xī , hā");
        assert_eq!(marked_from_numbered("  hao3   de5 "), "hǎo de");
    }

    #[test]
    fn syllable_without_vowel_is_left_bare() {
        // 鼻音自成音节（m4 / ng2）不加符号
        assert_eq!(mark_syllable("ng2"), "ng");
        assert_eq!(mark_syllable("·"), "·");
    }

    #[test]
    fn tone_romanizer_reads_hanzi() {
        let r = ToneRomanizer::new();
        assert_eq!(r.romanize("中文").as_deref(), Some("zhōng wén"));
        assert_eq!(r.romanize("T恤").as_deref(), Some("T xù"));
        assert_eq!(r.romanize(""), None);
    }
}
