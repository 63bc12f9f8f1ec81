//! Bopomofo key sequences.
//!
//! Bopomofo keyboards print the 37 phonetic symbols and four tone marks
//! on the ASCII keys; which key carries which symbol depends on the
//! vendor layout. The parser maps keystrokes to symbols and then matches
//! runs of up to three sound symbols, optionally closed by a tone mark,
//! against the syllable table. Tone marks are consumed but do not take
//! part in matching.

use crate::syllable::{Syllable, SyllableToken};
use crate::MAX_PHRASE_LEN;

use super::Options;

/// The supported Bopomofo keyboard layouts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u32)]
pub enum BopomofoKeyboard {
    /// The layout printed on most keyboards.
    #[default]
    Standard = 0,
    /// Ching-Yeah (精業).
    GinYieh,
    /// Eten (倚天).
    Eten,
    Ibm,
}

impl BopomofoKeyboard {
    pub const COUNT: u32 = 4;

    pub fn from_index(index: u32) -> Option<BopomofoKeyboard> {
        use BopomofoKeyboard::*;
        [Standard, GinYieh, Eten, Ibm].get(index as usize).copied()
    }
}

const TONES: [char; 4] = ['ˊ', 'ˇ', 'ˋ', '˙'];

#[derive(Clone, Copy, Debug, Default)]
pub struct BopomofoParser {
    pub keyboard: BopomofoKeyboard,
}

impl BopomofoParser {
    pub fn new(keyboard: BopomofoKeyboard) -> BopomofoParser {
        BopomofoParser { keyboard }
    }

    /// The symbol printed on `key`, if any.
    pub fn glyph(&self, key: char) -> Option<char> {
        let map = match self.keyboard {
            BopomofoKeyboard::Standard => table::STANDARD,
            BopomofoKeyboard::GinYieh => table::GIN_YIEH,
            BopomofoKeyboard::Eten => table::ETEN,
            BopomofoKeyboard::Ibm => table::IBM,
        };
        map.iter().find(|entry| entry.0 == key).map(|entry| entry.1)
    }

    pub fn accepts(&self, key: char) -> bool {
        self.glyph(key).is_some()
    }

    pub fn is_tone(glyph: char) -> bool {
        TONES.contains(&glyph)
    }

    /// Renders a run of raw keys as their symbols, used for phonetic
    /// commit text and preedit tails. Keys without a symbol pass through.
    pub fn keys_to_bopomofo(&self, keys: &str) -> String {
        keys.chars().map(|key| self.glyph(key).unwrap_or(key)).collect()
    }

    /// Re-segments `text[..cursor]`, replacing `tokens`. Returns true if
    /// the token array changed.
    pub fn update(
        &self,
        text: &str,
        cursor: usize,
        options: Options,
        tokens: &mut Vec<SyllableToken>,
        parsed: &mut usize,
    ) -> bool {
        let mut fresh = Vec::with_capacity(tokens.len() + 1);
        let mut pos = 0;
        'outer: while pos < cursor && fresh.len() < MAX_PHRASE_LEN {
            let limit = 4.min(cursor - pos);
            for take in (1..=limit).rev() {
                if let Some(syllable) = self.match_window(&text[pos..pos + take], options) {
                    fresh.push(SyllableToken::new(syllable, pos, take));
                    pos += take;
                    continue 'outer;
                }
            }
            break;
        }
        let changed = fresh != *tokens || pos != *parsed;
        *tokens = fresh;
        *parsed = pos;
        changed
    }

    /// Matches one window of keys: up to three sound symbols, optionally
    /// closed by a tone mark.
    fn match_window(&self, keys: &str, options: Options) -> Option<&'static Syllable> {
        let mut glyphs = String::new();
        let count = keys.chars().count();
        for (i, key) in keys.chars().enumerate() {
            let glyph = self.glyph(key)?;
            if BopomofoParser::is_tone(glyph) {
                if i + 1 != count {
                    return None;
                }
            } else {
                if glyphs.chars().count() == 3 {
                    return None;
                }
                glyphs.push(glyph);
            }
        }
        Syllable::from_bopomofo(&glyphs)
            .filter(|s| !s.is_incomplete() || options.contains(Options::INCOMPLETE_PINYIN))
    }
}

mod table {
    /// key → symbol, rows follow the keyboard rows.
    #[rustfmt::skip]
    pub(super) const STANDARD: &[(char, char)] = &[
        ('1', 'ㄅ'), ('q', 'ㄆ'), ('a', 'ㄇ'), ('z', 'ㄈ'),
        ('2', 'ㄉ'), ('w', 'ㄊ'), ('s', 'ㄋ'), ('x', 'ㄌ'),
        ('e', 'ㄍ'), ('d', 'ㄎ'), ('c', 'ㄏ'),
        ('r', 'ㄐ'), ('f', 'ㄑ'), ('v', 'ㄒ'),
        ('5', 'ㄓ'), ('t', 'ㄔ'), ('g', 'ㄕ'), ('b', 'ㄖ'),
        ('y', 'ㄗ'), ('h', 'ㄘ'), ('n', 'ㄙ'),
        ('u', 'ㄧ'), ('j', 'ㄨ'), ('m', 'ㄩ'),
        ('8', 'ㄚ'), ('i', 'ㄛ'), ('k', 'ㄜ'), (',', 'ㄝ'),
        ('9', 'ㄞ'), ('o', 'ㄟ'), ('l', 'ㄠ'), ('.', 'ㄡ'),
        ('0', 'ㄢ'), ('p', 'ㄣ'), (';', 'ㄤ'), ('/', 'ㄥ'), ('-', 'ㄦ'),
        ('6', 'ˊ'), ('3', 'ˇ'), ('4', 'ˋ'), ('7', '˙'),
    ];

    #[rustfmt::skip]
    pub(super) const GIN_YIEH: &[(char, char)] = &[
        ('2', 'ㄅ'), ('w', 'ㄆ'), ('s', 'ㄇ'), ('x', 'ㄈ'),
        ('3', 'ㄉ'), ('e', 'ㄊ'), ('d', 'ㄋ'), ('c', 'ㄌ'),
        ('4', 'ㄍ'), ('r', 'ㄎ'), ('f', 'ㄏ'),
        ('5', 'ㄐ'), ('t', 'ㄑ'), ('g', 'ㄒ'),
        ('6', 'ㄓ'), ('y', 'ㄔ'), ('h', 'ㄕ'), ('b', 'ㄖ'),
        ('7', 'ㄗ'), ('u', 'ㄘ'), ('j', 'ㄙ'),
        ('8', 'ㄧ'), ('i', 'ㄨ'), ('k', 'ㄩ'),
        ('9', 'ㄚ'), ('o', 'ㄛ'), ('l', 'ㄜ'), ('0', 'ㄝ'),
        ('p', 'ㄞ'), (';', 'ㄟ'), ('-', 'ㄠ'), ('[', 'ㄡ'),
        ('=', 'ㄢ'), (']', 'ㄣ'), ('\'', 'ㄤ'), ('/', 'ㄥ'), ('\\', 'ㄦ'),
        ('q', 'ˊ'), ('a', 'ˇ'), ('z', 'ˋ'), ('1', '˙'),
    ];

    #[rustfmt::skip]
    pub(super) const ETEN: &[(char, char)] = &[
        ('b', 'ㄅ'), ('p', 'ㄆ'), ('m', 'ㄇ'), ('f', 'ㄈ'),
        ('d', 'ㄉ'), ('t', 'ㄊ'), ('n', 'ㄋ'), ('l', 'ㄌ'),
        ('v', 'ㄍ'), ('k', 'ㄎ'), ('h', 'ㄏ'),
        ('g', 'ㄐ'), ('7', 'ㄑ'), ('c', 'ㄒ'),
        (',', 'ㄓ'), ('.', 'ㄔ'), ('/', 'ㄕ'), ('j', 'ㄖ'),
        (';', 'ㄗ'), ('\'', 'ㄘ'), ('s', 'ㄙ'),
        ('e', 'ㄧ'), ('x', 'ㄨ'), ('u', 'ㄩ'),
        ('a', 'ㄚ'), ('o', 'ㄛ'), ('r', 'ㄜ'), ('w', 'ㄝ'),
        ('i', 'ㄞ'), ('q', 'ㄟ'), ('z', 'ㄠ'), ('y', 'ㄡ'),
        ('8', 'ㄢ'), ('9', 'ㄣ'), ('0', 'ㄤ'), ('-', 'ㄥ'), ('=', 'ㄦ'),
        ('2', 'ˊ'), ('3', 'ˇ'), ('4', 'ˋ'), ('1', '˙'),
    ];

    #[rustfmt::skip]
    pub(super) const IBM: &[(char, char)] = &[
        ('1', 'ㄅ'), ('2', 'ㄆ'), ('3', 'ㄇ'), ('4', 'ㄈ'),
        ('5', 'ㄉ'), ('6', 'ㄊ'), ('7', 'ㄋ'), ('8', 'ㄌ'),
        ('9', 'ㄍ'), ('0', 'ㄎ'), ('q', 'ㄏ'),
        ('w', 'ㄐ'), ('e', 'ㄑ'), ('r', 'ㄒ'),
        ('t', 'ㄓ'), ('y', 'ㄔ'), ('u', 'ㄕ'), ('i', 'ㄖ'),
        ('o', 'ㄗ'), ('p', 'ㄘ'), ('a', 'ㄙ'),
        ('s', 'ㄧ'), ('d', 'ㄨ'), ('f', 'ㄩ'),
        ('g', 'ㄚ'), ('h', 'ㄛ'), ('j', 'ㄜ'), ('k', 'ㄝ'),
        ('l', 'ㄞ'), (';', 'ㄟ'), ('z', 'ㄠ'), ('x', 'ㄡ'),
        ('c', 'ㄢ'), ('v', 'ㄣ'), ('b', 'ㄤ'), ('n', 'ㄥ'), ('m', 'ㄦ'),
        (',', 'ˊ'), ('.', 'ˇ'), ('/', 'ˋ'), ('-', '˙'),
    ];
}

#[cfg(test)]
mod tests {
    use super::{BopomofoKeyboard, BopomofoParser, Options};
    use crate::syllable::SyllableToken;

    fn parse(text: &str) -> (Vec<SyllableToken>, usize) {
        let parser = BopomofoParser::new(BopomofoKeyboard::Standard);
        let mut tokens = Vec::new();
        let mut parsed = 0;
        parser.update(text, text.len(), Options::default(), &mut tokens, &mut parsed);
        (tokens, parsed)
    }

    fn texts(tokens: &[SyllableToken]) -> Vec<&'static str> {
        tokens.iter().map(|t| t.syllable.text).collect()
    }

    #[test]
    fn standard_layout_matches_syllables() {
        // s u c l → ㄋㄧㄏㄠ
        let (tokens, parsed) = parse("sucl");
        assert_eq!(vec!["ni", "hao"], texts(&tokens));
        assert_eq!(4, parsed);
        assert_eq!(2, tokens[1].begin);
    }

    #[test]
    fn lone_symbols_fall_back_to_incomplete() {
        // a a z h i → ㄇㄇㄈㄘㄛ
        let (tokens, _) = parse("aazhi");
        assert_eq!(vec!["m", "m", "f", "c", "o"], texts(&tokens));
        assert!(tokens[0].syllable.is_incomplete());
        // ㄛ alone is the complete syllable o.
        assert!(!tokens[4].syllable.is_incomplete());
    }

    #[test]
    fn tone_marks_close_a_syllable() {
        // s u 3 → ㄋㄧˇ
        let (tokens, parsed) = parse("su3");
        assert_eq!(vec!["ni"], texts(&tokens));
        assert_eq!(3, tokens[0].len);
        assert_eq!(3, parsed);

        // A tone with no sounds before it stays unparsed.
        let (tokens, parsed) = parse("3su");
        assert!(tokens.is_empty());
        assert_eq!(0, parsed);
    }

    #[test]
    fn keys_render_to_symbols() {
        let parser = BopomofoParser::new(BopomofoKeyboard::Standard);
        assert_eq!("ㄋㄧㄏㄠ", parser.keys_to_bopomofo("sucl"));
        assert_eq!("ㄈㄘㄙㄛㄘㄜ", parser.keys_to_bopomofo("zhnihk"));
    }

    #[test]
    fn all_layouts_cover_the_alphabet_of_symbols() {
        for index in 0..BopomofoKeyboard::COUNT {
            let keyboard = BopomofoKeyboard::from_index(index).unwrap();
            let parser = BopomofoParser::new(keyboard);
            let mut symbols: Vec<char> = Vec::new();
            for key in ('a'..='z').chain('0'..='9').chain(",.;/'-=[]\\".chars()) {
                if let Some(glyph) = parser.glyph(key) {
                    assert!(!symbols.contains(&glyph), "{keyboard:?} duplicates {glyph}");
                    symbols.push(glyph);
                }
            }
            assert_eq!(41, symbols.len(), "{keyboard:?} is missing symbols");
        }
    }
}
