//! Phrase dictionaries.
//!
//! A dictionary maps syllable sequences to phrases with a system
//! frequency. Lookups are per-position: each queried syllable is an
//! alternative set (its own ids plus the fuzzy peers the options enable),
//! and an incomplete syllable matches any final over its initial. The
//! process-wide [`store::PhraseStore`] layers the per-user frequencies on
//! top of these lookups.

use std::collections::HashMap;

use thiserror::Error;

use crate::parser::Options;
use crate::syllable::{Final, Initial, Syllable, SyllableKey, SyllableToken};
use crate::MAX_PHRASE_LEN;

pub mod sqlite;
pub mod store;

/// A dictionary phrase, or a run of them concatenated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Phrase {
    /// UTF-8 text of the phrase.
    pub text: String,
    /// One key per syllable.
    pub keys: Vec<SyllableKey>,
    /// System frequency from the lexicon.
    pub freq: u32,
    /// Per-user frequency learned from commits.
    pub user_freq: u32,
}

impl Phrase {
    pub fn new(text: impl Into<String>, keys: Vec<SyllableKey>, freq: u32) -> Phrase {
        Phrase {
            text: text.into(),
            keys,
            freq,
            user_freq: 0,
        }
    }

    /// Number of syllables this phrase covers.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// A phrase the user taught the engine, as opposed to one shipped in
    /// the lexicon.
    pub fn is_user_phrase(&self) -> bool {
        self.len() > 1 && self.user_freq > 0 && self.freq == 0
    }

    /// Appends another phrase, concatenating text and keys.
    pub fn push(&mut self, other: &Phrase) {
        self.text.push_str(&other.text);
        self.keys.extend_from_slice(&other.keys);
    }
}

/// The alternative set one queried syllable matches.
#[derive(Clone, Debug)]
pub struct SyllablePattern {
    pub shengs: Vec<Initial>,
    /// Empty means any final (incomplete input).
    pub yuns: Vec<Final>,
}

impl SyllablePattern {
    pub fn from_syllable(syllable: &Syllable, options: Options) -> SyllablePattern {
        let mut shengs = vec![syllable.sheng];
        syllable.sheng.push_fuzzy_peers(options, &mut shengs);
        let mut yuns = Vec::new();
        if let Some(yun) = syllable.yun {
            yuns.push(yun);
            if let Some(peer) = yun.fuzzy_peer(options) {
                yuns.push(peer);
            }
        }
        SyllablePattern { shengs, yuns }
    }

    pub fn from_token(token: &SyllableToken, options: Options) -> SyllablePattern {
        SyllablePattern::from_syllable(token.syllable, options)
    }

    pub fn matches(&self, key: SyllableKey) -> bool {
        if !self.shengs.contains(&key.sheng) {
            return false;
        }
        if self.yuns.is_empty() {
            return true;
        }
        match key.yun {
            Some(yun) => self.yuns.contains(&yun),
            None => false,
        }
    }
}

pub fn matches_pattern(patterns: &[SyllablePattern], keys: &[SyllableKey]) -> bool {
    patterns.len() == keys.len()
        && patterns
            .iter()
            .zip(keys.iter())
            .all(|(pattern, &key)| pattern.matches(key))
}

/// Read-only phrase lookup: all phrases whose syllable count equals the
/// pattern length and whose every syllable matches.
pub trait Dictionary {
    fn lookup(&self, patterns: &[SyllablePattern]) -> Vec<Phrase>;
}

/// `HashMap` dictionaries back the unit tests.
impl Dictionary for HashMap<Vec<SyllableKey>, Vec<(String, u32)>> {
    fn lookup(&self, patterns: &[SyllablePattern]) -> Vec<Phrase> {
        let mut result = Vec::new();
        for (keys, phrases) in self {
            if matches_pattern(patterns, keys) {
                for (text, freq) in phrases {
                    result.push(Phrase::new(text.clone(), keys.clone(), *freq));
                }
            }
        }
        result
    }
}

/// The error type returned when a lexicon file cannot be parsed.
#[derive(Error, Debug)]
pub enum LexiconError {
    #[error("line {line}: expected `syllables<TAB>phrase<TAB>freq`")]
    Malformed { line: usize },
    #[error("line {line}: unknown syllable {syllable:?}")]
    UnknownSyllable { line: usize, syllable: String },
    #[error("line {line}: phrase exceeds the syllable limit")]
    TooLong { line: usize },
}

#[derive(Debug)]
struct LexiconEntry {
    keys: Vec<SyllableKey>,
    text: String,
    freq: u32,
}

/// The in-memory system dictionary, loaded from tab-separated lines of
/// `syllables<TAB>phrase<TAB>freq`, for example `ni hao<TAB>你好<TAB>5000`.
/// `#` starts a comment.
#[derive(Debug, Default)]
pub struct Lexicon {
    /// Entries bucketed by syllable count; index 0 holds 1-syllable words.
    by_len: Vec<Vec<LexiconEntry>>,
}

impl Lexicon {
    pub fn parse(source: &str) -> Result<Lexicon, LexiconError> {
        let mut lexicon = Lexicon::default();
        for (index, line) in source.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let number = index + 1;
            let mut fields = line.split('\t');
            let (Some(syllables), Some(text), Some(freq)) =
                (fields.next(), fields.next(), fields.next())
            else {
                return Err(LexiconError::Malformed { line: number });
            };
            let freq: u32 = freq
                .trim()
                .parse()
                .map_err(|_| LexiconError::Malformed { line: number })?;
            let mut keys = Vec::new();
            for name in syllables.split_whitespace() {
                let syllable = Syllable::from_text(name)
                    .filter(|s| !s.is_incomplete())
                    .ok_or_else(|| LexiconError::UnknownSyllable {
                        line: number,
                        syllable: name.to_string(),
                    })?;
                keys.push(syllable.key());
            }
            if keys.is_empty() {
                return Err(LexiconError::Malformed { line: number });
            }
            if keys.len() > MAX_PHRASE_LEN {
                return Err(LexiconError::TooLong { line: number });
            }
            lexicon.insert(keys, text.to_string(), freq);
        }
        Ok(lexicon)
    }

    fn insert(&mut self, keys: Vec<SyllableKey>, text: String, freq: u32) {
        let bucket = keys.len() - 1;
        if self.by_len.len() <= bucket {
            self.by_len.resize_with(bucket + 1, Vec::new);
        }
        self.by_len[bucket].push(LexiconEntry { keys, text, freq });
    }

    /// Merges another lexicon in; later entries win on duplicate text.
    pub fn merge(&mut self, other: Lexicon) {
        for bucket in other.by_len {
            for entry in bucket {
                let existing = self.by_len.get(entry.keys.len() - 1).and_then(|bucket| {
                    bucket
                        .iter()
                        .position(|e| e.keys == entry.keys && e.text == entry.text)
                });
                match existing {
                    Some(index) => self.by_len[entry.keys.len() - 1][index].freq = entry.freq,
                    None => self.insert(entry.keys, entry.text, entry.freq),
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.by_len.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Dictionary for Lexicon {
    fn lookup(&self, patterns: &[SyllablePattern]) -> Vec<Phrase> {
        let Some(bucket) = patterns.len().checked_sub(1).and_then(|i| self.by_len.get(i)) else {
            return Vec::new();
        };
        bucket
            .iter()
            .filter(|entry| matches_pattern(patterns, &entry.keys))
            .map(|entry| Phrase::new(entry.text.clone(), entry.keys.clone(), entry.freq))
            .collect()
    }
}
