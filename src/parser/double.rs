//! Double pinyin.
//!
//! Double pinyin layouts encode one syllable in two keystrokes: the first
//! key selects the initial, the second the final. Keys whose final slot
//! is ambiguous carry a second candidate final; the six supported schemas
//! differ only in their key tables.

use crate::syllable::{Final, Initial, Syllable, SyllableToken};
use crate::MAX_PHRASE_LEN;

use super::Options;

mod table;

/// The supported double pinyin keyboard schemas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u32)]
pub enum DoublePinyinSchema {
    /// Microsoft Pinyin.
    #[default]
    Mspy = 0,
    /// Ziranma (自然码).
    Zrm,
    /// Intelligent ABC (智能ABC).
    Abc,
    /// Ziguang Pinyin (紫光拼音).
    Zgpy,
    /// Pinyin Jiajia (拼音加加).
    Pyjj,
    /// Xiaohe (小鹤).
    Xhe,
}

impl DoublePinyinSchema {
    pub const COUNT: u32 = 6;

    pub fn from_index(index: u32) -> Option<DoublePinyinSchema> {
        use DoublePinyinSchema::*;
        [Mspy, Zrm, Abc, Zgpy, Pyjj, Xhe].get(index as usize).copied()
    }
}

/// Maps `a`..`z` to key indexes 0..26; `;` is key 26.
fn key_index(ch: char) -> Option<usize> {
    match ch {
        'a'..='z' => Some(ch as usize - 'a' as usize),
        ';' => Some(26),
        _ => None,
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct DoublePinyinParser {
    pub schema: DoublePinyinSchema,
}

impl DoublePinyinParser {
    pub fn new(schema: DoublePinyinSchema) -> DoublePinyinParser {
        DoublePinyinParser { schema }
    }

    pub fn accepts(&self, ch: char) -> bool {
        key_index(ch).is_some()
    }

    /// Whether `ch` can open a new syllable (its key carries an initial).
    pub fn accepts_leading(&self, ch: char) -> bool {
        key_index(ch).is_some_and(|id| self.sheng(id).is_some())
    }

    fn sheng(&self, key: usize) -> Option<Initial> {
        self.table().sheng[key]
    }

    fn yuns(&self, key: usize) -> [Option<Final>; 2] {
        self.table().yun[key]
    }

    fn table(&self) -> &'static table::SchemaTable {
        &table::SCHEMAS[self.schema as usize]
    }

    /// Resolves a two-key code. Strict matches of either final slot win
    /// over fuzzy ones, and the v→u correction is the last resort.
    fn pair(&self, first: usize, second: usize, options: Options) -> Option<&'static Syllable> {
        let sheng = self.sheng(first)?;
        let fuzzy = options & (Options::FUZZY_ALL | Options::CORRECT_V_TO_U);
        match self.yuns(second) {
            [Some(yun), None] => Syllable::from_ids(sheng, yun, fuzzy),
            [Some(yun0), Some(yun1)] => Syllable::from_ids(sheng, yun0, Options::empty())
                .or_else(|| Syllable::from_ids(sheng, yun1, Options::empty()))
                .or_else(|| Syllable::from_ids(sheng, yun0, options & Options::FUZZY_ALL))
                .or_else(|| Syllable::from_ids(sheng, yun1, options & Options::FUZZY_ALL))
                .or_else(|| {
                    if !options.contains(Options::CORRECT_V_TO_U) {
                        return None;
                    }
                    match sheng {
                        Initial::J | Initial::Q | Initial::X | Initial::Y => {
                            Syllable::from_ids(sheng, Final::V, fuzzy)
                        }
                        _ => None,
                    }
                }),
            _ => None,
        }
    }

    /// Resolves a lone trailing key as an incomplete syllable.
    fn single(&self, key: usize, options: Options) -> Option<&'static Syllable> {
        if !options.contains(Options::INCOMPLETE_PINYIN) {
            return None;
        }
        Syllable::incomplete(self.sheng(key)?)
    }

    /// Extends or shrinks the token array to track `text[..cursor]`.
    /// Returns true if the tokens changed.
    pub fn update(
        &self,
        text: &str,
        cursor: usize,
        options: Options,
        tokens: &mut Vec<SyllableToken>,
        parsed: &mut usize,
    ) -> bool {
        let bytes = text.as_bytes();
        let key_at = |pos: usize| key_index(bytes[pos] as char);
        let mut changed = false;

        while *parsed > cursor {
            let last = tokens.pop().expect("tokens cover parsed bytes");
            *parsed = last.begin;
            changed = true;
        }
        if *parsed == cursor {
            return changed;
        }

        let before = *parsed;

        // A trailing incomplete syllable may pair up with the key that
        // just arrived behind it.
        if tokens.last().is_some_and(|t| t.syllable.is_incomplete()) {
            let pair = key_at(*parsed - 1)
                .zip(key_at(*parsed))
                .and_then(|(i, j)| self.pair(i, j, options));
            if let Some(syllable) = pair {
                let begin = *parsed - 1;
                tokens.pop();
                tokens.push(SyllableToken::new(syllable, begin, 2));
                *parsed += 1;
            }
        }

        while *parsed < cursor && tokens.len() < MAX_PHRASE_LEN {
            let syllable = if *parsed == cursor - 1 {
                key_at(*parsed).and_then(|i| self.single(i, options))
            } else {
                key_at(*parsed)
                    .zip(key_at(*parsed + 1))
                    .and_then(|(i, j)| self.pair(i, j, options))
                    .or_else(|| key_at(*parsed).and_then(|i| self.single(i, options)))
            };
            let Some(syllable) = syllable else {
                break;
            };
            let len = if syllable.is_incomplete() { 1 } else { 2 };
            tokens.push(SyllableToken::new(syllable, *parsed, len));
            *parsed += len;
        }

        changed || before != *parsed
    }
}

#[cfg(test)]
mod tests {
    use super::{DoublePinyinParser, DoublePinyinSchema, Options};
    use crate::syllable::SyllableToken;

    fn parse(text: &str) -> (Vec<SyllableToken>, usize) {
        let parser = DoublePinyinParser::new(DoublePinyinSchema::Mspy);
        let mut tokens = Vec::new();
        let mut parsed = 0;
        parser.update(text, text.len(), Options::default(), &mut tokens, &mut parsed);
        (tokens, parsed)
    }

    fn texts(tokens: &[SyllableToken]) -> Vec<&'static str> {
        tokens.iter().map(|t| t.syllable.text).collect()
    }

    #[test]
    fn mspy_pairs() {
        let (tokens, parsed) = parse("nihk");
        assert_eq!(vec!["ni", "hao"], texts(&tokens));
        assert_eq!(4, parsed);

        let (tokens, _) = parse("aazh");
        assert_eq!(vec!["a", "zang"], texts(&tokens));
    }

    #[test]
    fn lone_trailing_key_is_incomplete() {
        let (tokens, parsed) = parse("aazhi");
        assert_eq!(vec!["a", "zang", "ch"], texts(&tokens));
        assert!(tokens[2].syllable.is_incomplete());
        assert_eq!(1, tokens[2].len);
        assert_eq!(5, parsed);
    }

    #[test]
    fn incomplete_token_pairs_with_the_next_key() {
        let parser = DoublePinyinParser::new(DoublePinyinSchema::Mspy);
        let mut tokens = Vec::new();
        let mut parsed = 0;
        parser.update("aazhi", 5, Options::default(), &mut tokens, &mut parsed);
        assert_eq!(vec!["a", "zang", "ch"], texts(&tokens));

        // One more key turns the trailing "ch" into "chi".
        parser.update("aazhii", 6, Options::default(), &mut tokens, &mut parsed);
        assert_eq!(vec!["a", "zang", "chi"], texts(&tokens));
        assert_eq!(6, parsed);
    }

    #[test]
    fn cursor_retreat_drops_tokens() {
        let parser = DoublePinyinParser::new(DoublePinyinSchema::Mspy);
        let mut tokens = Vec::new();
        let mut parsed = 0;
        parser.update("aazhii", 6, Options::default(), &mut tokens, &mut parsed);
        assert!(parser.update("aazhii", 5, Options::default(), &mut tokens, &mut parsed));
        assert_eq!(vec!["a", "zang", "ch"], texts(&tokens));
        assert_eq!(5, parsed);
    }

    #[test]
    fn zero_initial_keys_lead_only_syllable_starts() {
        let parser = DoublePinyinParser::new(DoublePinyinSchema::Mspy);
        assert!(parser.accepts_leading('a'));
        assert!(parser.accepts_leading('n'));
        assert!(!parser.accepts_leading(';'));
        assert!(parser.accepts(';'));
        assert!(!parser.accepts('1'));
    }

    #[test]
    fn every_schema_table_is_complete() {
        for schema in 0..DoublePinyinSchema::COUNT {
            let schema = DoublePinyinSchema::from_index(schema).unwrap();
            let parser = DoublePinyinParser::new(schema);
            // ni must spell out in every schema: n is an identity key.
            let id_n = super::key_index('n').unwrap();
            let id_i = super::key_index('i').unwrap();
            assert!(
                parser.pair(id_n, id_i, Options::default()).is_some(),
                "{schema:?} cannot type ni"
            );
        }
    }
}
