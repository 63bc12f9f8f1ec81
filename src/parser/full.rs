//! Full Hanyu Pinyin.

use crate::syllable::{Syllable, SyllableToken};
use crate::MAX_PHRASE_LEN;

use super::Options;

const MAX_SYLLABLE_LEN: usize = 6;

/// Greedy longest-match segmenter for full pinyin.
///
/// At each position the longest admissible syllable wins, trying spans of
/// six characters down to one. A span that is not a syllable as typed may
/// still match after one of the enabled typo-correction rewrites.
#[derive(Clone, Copy, Debug, Default)]
pub struct FullPinyinParser;

impl FullPinyinParser {
    pub fn new() -> FullPinyinParser {
        FullPinyinParser
    }

    pub fn accepts(&self, ch: char) -> bool {
        ch.is_ascii_lowercase()
    }

    /// Re-segments `text[..cursor]`, replacing `tokens`. Returns true if
    /// the token array changed. `parsed` is left at the number of bytes
    /// the tokens cover.
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
            let longest = MAX_SYLLABLE_LEN.min(cursor - pos);
            for len in (1..=longest).rev() {
                if let Some(syllable) = match_syllable(&text[pos..pos + len], options) {
                    fresh.push(SyllableToken::new(syllable, pos, len));
                    pos += len;
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
}

/// Matches one span of typed text against the syllable table.
fn match_syllable(typed: &str, options: Options) -> Option<&'static Syllable> {
    if !typed.bytes().all(|b| b.is_ascii_lowercase()) {
        return None;
    }
    if let Some(syllable) = admissible(Syllable::from_text(typed), options) {
        return Some(syllable);
    }
    for (bit, pattern, replacement) in CORRECTIONS {
        if !options.contains(*bit) {
            continue;
        }
        if let Some(rewritten) = rewrite(typed, pattern, replacement) {
            if let Some(syllable) = admissible(Syllable::from_text(&rewritten), options) {
                return Some(syllable);
            }
        }
    }
    if options.contains(Options::CORRECT_V_TO_U) {
        if let Some(rest) = typed
            .strip_prefix(&['j', 'q', 'x', 'y'][..])
            .filter(|rest| rest.starts_with('v'))
        {
            let rewritten = format!("{}u{}", &typed[..1], &rest[1..]);
            if let Some(syllable) = admissible(Syllable::from_text(&rewritten), options) {
                return Some(syllable);
            }
        }
    }
    None
}

/// Suffix rewrites for common typos; the typed form on the left, the
/// canonical spelling on the right.
const CORRECTIONS: &[(Options, &str, &str)] = &[
    (Options::CORRECT_GN_TO_NG, "gn", "ng"),
    (Options::CORRECT_MG_TO_NG, "mg", "ng"),
    (Options::CORRECT_IOU_TO_IU, "iou", "iu"),
    (Options::CORRECT_UEI_TO_UI, "uei", "ui"),
    (Options::CORRECT_UEN_TO_UN, "uen", "un"),
    (Options::CORRECT_UE_TO_VE, "ue", "ve"),
    (Options::CORRECT_ON_TO_ONG, "on", "ong"),
];

fn rewrite(typed: &str, pattern: &str, replacement: &str) -> Option<String> {
    let stem = typed.strip_suffix(pattern)?;
    // A bare final is not a typo of itself.
    if stem.is_empty() && pattern.len() == typed.len() {
        return None;
    }
    Some(format!("{stem}{replacement}"))
}

fn admissible(syllable: Option<&'static Syllable>, options: Options) -> Option<&'static Syllable> {
    syllable.filter(|s| !s.is_incomplete() || options.contains(Options::INCOMPLETE_PINYIN))
}

#[cfg(test)]
mod tests {
    use super::{FullPinyinParser, Options};
    use crate::syllable::SyllableToken;

    fn parse(text: &str, options: Options) -> (Vec<SyllableToken>, usize) {
        let mut tokens = Vec::new();
        let mut parsed = 0;
        FullPinyinParser::new().update(text, text.len(), options, &mut tokens, &mut parsed);
        (tokens, parsed)
    }

    fn texts(tokens: &[SyllableToken]) -> Vec<&'static str> {
        tokens.iter().map(|t| t.syllable.text).collect()
    }

    #[test]
    fn greedy_longest_match() {
        let (tokens, parsed) = parse("nihao", Options::default());
        assert_eq!(vec!["ni", "hao"], texts(&tokens));
        assert_eq!(5, parsed);
        assert_eq!(0, tokens[0].begin);
        assert_eq!(2, tokens[1].begin);

        let (tokens, _) = parse("xian", Options::default());
        assert_eq!(vec!["xian"], texts(&tokens));
    }

    #[test]
    fn unparsable_tail_is_left_alone() {
        let (tokens, parsed) = parse("aazhii", Options::default());
        assert_eq!(vec!["a", "a", "zhi"], texts(&tokens));
        assert_eq!(5, parsed);
    }

    #[test]
    fn incomplete_syllables_are_gated() {
        let (tokens, _) = parse("aazh", Options::default());
        assert_eq!(vec!["a", "a", "zh"], texts(&tokens));

        let without = Options::CORRECT_ALL | Options::FUZZY_ALL;
        let (tokens, parsed) = parse("aazh", without);
        assert_eq!(vec!["a", "a"], texts(&tokens));
        assert_eq!(2, parsed);
    }

    #[test]
    fn corrections_apply_to_the_typed_span() {
        let (tokens, _) = parse("liou", Options::default());
        assert_eq!(vec!["liu"], texts(&tokens));
        assert_eq!(4, tokens[0].len);

        let (tokens, _) = parse("zhuei", Options::default());
        assert_eq!(vec!["zhui"], texts(&tokens));

        let (tokens, _) = parse("lue", Options::default());
        assert_eq!(vec!["lve"], texts(&tokens));

        let (tokens, _) = parse("jv", Options::default());
        assert_eq!(vec!["ju"], texts(&tokens));

        let (tokens, _) = parse("gon", Options::default());
        assert_eq!(vec!["gong"], texts(&tokens));

        // Without the correction bit the span falls apart.
        let strict = Options::INCOMPLETE_PINYIN;
        let (tokens, _) = parse("liou", strict);
        assert_eq!(vec!["li", "ou"], texts(&tokens));
    }

    #[test]
    fn update_reports_changes() {
        let parser = FullPinyinParser::new();
        let mut tokens = Vec::new();
        let mut parsed = 0;
        assert!(parser.update("ni", 2, Options::default(), &mut tokens, &mut parsed));
        assert!(!parser.update("ni", 2, Options::default(), &mut tokens, &mut parsed));
        assert!(parser.update("nih", 3, Options::default(), &mut tokens, &mut parsed));
    }

    #[test]
    fn tokens_cover_a_prefix_without_gaps() {
        for text in ["nihao", "aazhii", "xyzzy", "luelve", "gnat", "wo"] {
            for cursor in 0..=text.len() {
                let mut tokens = Vec::new();
                let mut parsed = 0;
                FullPinyinParser::new().update(
                    text,
                    cursor,
                    Options::default(),
                    &mut tokens,
                    &mut parsed,
                );
                let mut pos = 0;
                for token in &tokens {
                    assert_eq!(pos, token.begin);
                    pos += token.len;
                }
                assert_eq!(parsed, pos);
                assert!(parsed <= cursor);
            }
        }
    }

    #[test]
    fn token_cap_is_enforced() {
        let text = "a".repeat(40);
        let (tokens, parsed) = parse(&text, Options::default());
        assert_eq!(crate::MAX_PHRASE_LEN, tokens.len());
        assert_eq!(crate::MAX_PHRASE_LEN, parsed);
    }
}
