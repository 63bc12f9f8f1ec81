//! The phrase editor.
//!
//! Sits between a session's syllable array and the phrase store. It keeps
//! the boundary between the phrases already picked in this session and
//! the pending syllables, generates the ranked candidate window for the
//! pending part, and maintains the greedy default conversion that is
//! offered when the user just commits.

use std::sync::Arc;

use tracing::debug;

use crate::dictionary::store::{PhraseStore, Query};
use crate::dictionary::Phrase;
use crate::parser::Options;
use crate::simptrad::simp_to_trad;
use crate::syllable::SyllableToken;
use crate::MAX_PHRASE_LEN;

/// Candidates are produced in batches of this size.
pub const FILL_GRAN: usize = 12;

pub struct PhraseEditor {
    store: Arc<PhraseStore>,
    candidates: Vec<Phrase>,
    /// Phrases picked so far, in order.
    selected_phrases: Vec<Phrase>,
    /// Their display text, Traditional-converted when the session says so.
    selected_string: String,
    /// The greedy default conversion of the pending syllables.
    candidate0: Vec<Phrase>,
    tokens: Vec<SyllableToken>,
    /// Number of leading syllables consumed by `selected_phrases`.
    cursor: usize,
    query: Option<Query>,
}

impl PhraseEditor {
    pub fn new(store: Arc<PhraseStore>) -> PhraseEditor {
        PhraseEditor {
            store,
            candidates: Vec::new(),
            selected_phrases: Vec::new(),
            selected_string: String::new(),
            candidate0: Vec::new(),
            tokens: Vec::new(),
            cursor: 0,
            query: None,
        }
    }

    pub fn candidates(&self) -> &[Phrase] {
        &self.candidates
    }

    pub fn candidate(&self, index: usize) -> &Phrase {
        &self.candidates[index]
    }

    pub fn candidate_is_user_phrase(&self, index: usize) -> bool {
        self.candidates[index].is_user_phrase()
    }

    pub fn candidate0(&self) -> &[Phrase] {
        &self.candidate0
    }

    pub fn selected_string(&self) -> &str {
        &self.selected_string
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The raw-buffer offset just past the last selected syllable.
    pub fn cursor_in_bytes(&self) -> usize {
        if self.cursor == 0 {
            0
        } else {
            self.tokens[self.cursor - 1].end()
        }
    }

    /// Whether unconverted syllables remain after the selection.
    pub fn pending(&self) -> bool {
        self.tokens.len() > self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.selected_string.is_empty() && self.candidate0.is_empty()
    }

    /// Replaces the syllable array. Any in-session selection is dropped
    /// and the candidates are recomputed from the start.
    pub fn update(&mut self, tokens: &[SyllableToken], options: Options) {
        debug_assert!(tokens.len() <= MAX_PHRASE_LEN);
        self.tokens = tokens.to_vec();
        self.cursor = 0;
        self.selected_phrases.clear();
        self.selected_string.clear();
        self.update_candidates(options);
    }

    pub fn reset(&mut self) {
        self.candidates.clear();
        self.selected_phrases.clear();
        self.selected_string.clear();
        self.candidate0.clear();
        self.tokens.clear();
        self.cursor = 0;
        self.query = None;
    }

    /// Picks candidate `index`. Index 0 always stands for the default
    /// conversion, which consumes every pending syllable; other indexes
    /// consume the candidate's own syllables.
    pub fn select_candidate(&mut self, index: usize, mode_simp: bool, options: Options) -> bool {
        if index >= self.candidates.len() {
            return false;
        }
        if index == 0 {
            let picked = std::mem::take(&mut self.candidate0);
            let text = self.candidates[0].text.clone();
            self.append_selected_text(&text, mode_simp);
            self.selected_phrases.extend(picked);
            self.cursor = self.tokens.len();
        } else {
            let picked = self.candidates[index].clone();
            self.append_selected_text(&picked.text, mode_simp);
            self.cursor += picked.len();
            self.selected_phrases.push(picked);
        }
        self.update_candidates(options);
        true
    }

    fn append_selected_text(&mut self, text: &str, mode_simp: bool) {
        if mode_simp {
            self.selected_string.push_str(text);
        } else {
            self.selected_string.push_str(&simp_to_trad(text));
        }
    }

    /// Drops the in-session selection, restoring candidates for the whole
    /// syllable array. Returns false when nothing was selected.
    pub fn unselect_candidates(&mut self, options: Options) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.selected_phrases.clear();
        self.selected_string.clear();
        self.cursor = 0;
        self.update_candidates(options);
        true
    }

    /// Forgets the learned frequency of candidate `index`.
    pub fn reset_candidate(&mut self, index: usize, options: Options) -> bool {
        if index >= self.candidates.len() {
            return false;
        }
        self.store.remove(&self.candidates[index]);
        self.update_candidates(options);
        true
    }

    /// Feeds the selection to the store's learning and clears the editor.
    pub fn commit(&mut self) {
        self.store.commit(&self.selected_phrases);
        self.reset();
    }

    /// Pulls one more batch of candidates from the open query. Returns
    /// false once the query is exhausted.
    pub fn fill_candidates(&mut self) -> bool {
        let Some(query) = self.query.as_mut() else {
            return false;
        };
        let got = query.fill(&mut self.candidates, FILL_GRAN);
        if got < FILL_GRAN {
            // Got everything the query had.
            self.query = None;
        }
        got > 0
    }

    fn update_candidates(&mut self, options: Options) {
        self.candidates.clear();
        self.query = None;
        self.update_candidate0(options);

        if self.tokens.len() == self.cursor {
            return;
        }

        if self.candidate0.len() > 1 {
            let mut joined = self.candidate0[0].clone();
            for phrase in &self.candidate0[1..] {
                joined.push(phrase);
            }
            joined.freq = 0;
            joined.user_freq = 0;
            self.candidates.push(joined);
        }

        self.query = Some(Query::new(
            Arc::clone(&self.store),
            &self.tokens,
            self.cursor,
            self.tokens.len() - self.cursor,
            options,
        ));
        self.fill_candidates();
    }

    /// Greedy default conversion: from the selection boundary, repeatedly
    /// take the best phrase covering the most syllables. Syllables the
    /// lexicon cannot cover fall back to their own spelling, so the
    /// default conversion always exists.
    fn update_candidate0(&mut self, options: Options) {
        self.candidate0.clear();
        if self.tokens.len() == self.cursor {
            return;
        }
        let mut begin = self.cursor;
        let end = self.tokens.len();
        while begin != end {
            let mut query = Query::new(Arc::clone(&self.store), &self.tokens, begin, end - begin, options);
            let mut best = Vec::new();
            if query.fill(&mut best, 1) == 0 {
                let token = &self.tokens[begin];
                debug!("no phrase for syllable {}", token.syllable);
                best.push(Phrase::new(
                    token.syllable.text.to_string(),
                    vec![token.syllable.key()],
                    0,
                ));
            }
            let phrase = best.remove(0);
            begin += phrase.len();
            self.candidate0.push(phrase);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::dictionary::store::PhraseStore;
    use crate::dictionary::Lexicon;
    use crate::parser::{FullPinyinParser, Options};
    use crate::syllable::SyllableToken;

    use super::PhraseEditor;

    const LEXICON: &str = "\
a	啊	9000
a	阿	3000
a a	啊啊	500
a a zhi	啊啊之	100
a zhi	阿紫	800
zhi	之	6000
zhi	制	3000
ni	你	8000
hao	好	7000
ni hao	你好	9000
";

    fn store() -> Arc<PhraseStore> {
        PhraseStore::open(Lexicon::parse(LEXICON).unwrap(), None).unwrap()
    }

    fn tokens(text: &str) -> Vec<SyllableToken> {
        let mut tokens = Vec::new();
        let mut parsed = 0;
        FullPinyinParser::new().update(
            text,
            text.len(),
            Options::default(),
            &mut tokens,
            &mut parsed,
        );
        tokens
    }

    fn texts(editor: &PhraseEditor) -> Vec<&str> {
        editor.candidates().iter().map(|p| p.text.as_str()).collect()
    }

    #[test]
    fn default_conversion_is_greedy() {
        let mut editor = PhraseEditor::new(store());
        editor.update(&tokens("nihao"), Options::default());
        let candidate0: Vec<&str> =
            editor.candidate0().iter().map(|p| p.text.as_str()).collect();
        assert_eq!(vec!["你好"], candidate0);
        // A single-phrase default conversion adds no joined candidate.
        assert_eq!(vec!["你好", "你"], texts(&editor));
    }

    #[test]
    fn multi_phrase_default_conversion_is_joined_at_index_0() {
        let mut editor = PhraseEditor::new(store());
        // a zhi a: greedy picks 阿紫 then 啊.
        editor.update(&tokens("azhia"), Options::default());
        let candidate0: Vec<&str> =
            editor.candidate0().iter().map(|p| p.text.as_str()).collect();
        assert_eq!(vec!["阿紫", "啊"], candidate0);
        assert_eq!("阿紫啊", editor.candidates()[0].text);
        assert_eq!(3, editor.candidates()[0].len());
    }

    #[test]
    fn selection_moves_the_boundary() {
        let mut editor = PhraseEditor::new(store());
        editor.update(&tokens("aazhi"), Options::default());
        assert_eq!(vec!["啊啊之", "啊啊", "啊", "阿"], texts(&editor));

        // Candidate 3 is 阿, one syllable.
        assert!(editor.select_candidate(3, true, Options::default()));
        assert_eq!("阿", editor.selected_string());
        assert_eq!(1, editor.cursor());
        assert_eq!(1, editor.cursor_in_bytes());
        assert!(editor.pending());
        // Remaining a zhi converts to 阿紫 by default.
        assert_eq!("阿紫", editor.candidates()[0].text);

        // Index 0 consumes the rest and auto-clears pending.
        assert!(editor.select_candidate(0, true, Options::default()));
        assert_eq!("阿阿紫", editor.selected_string());
        assert!(!editor.pending());
        assert!(!editor.select_candidate(0, true, Options::default()));
    }

    #[test]
    fn unselect_restores_the_full_window() {
        let mut editor = PhraseEditor::new(store());
        editor.update(&tokens("aazhi"), Options::default());
        assert!(!editor.unselect_candidates(Options::default()));
        editor.select_candidate(3, true, Options::default());
        assert!(editor.unselect_candidates(Options::default()));
        assert_eq!("", editor.selected_string());
        assert_eq!(0, editor.cursor());
        assert_eq!(vec!["啊啊之", "啊啊", "啊", "阿"], texts(&editor));
    }

    #[test]
    fn commit_learns_the_selection() {
        let store = store();
        let mut editor = PhraseEditor::new(Arc::clone(&store));
        editor.update(&tokens("aazhi"), Options::default());
        editor.select_candidate(3, true, Options::default());
        editor.select_candidate(0, true, Options::default());
        editor.commit();
        assert!(editor.is_empty());

        // 阿 + 阿紫 were learned; the pair now outranks 啊啊之.
        editor.update(&tokens("aazhi"), Options::default());
        assert_eq!("阿阿紫", editor.candidates()[0].text);
        store.shutdown();
    }

    #[test]
    fn uncovered_syllables_echo_their_spelling() {
        let mut editor = PhraseEditor::new(store());
        // "xi" has no entry in the test lexicon.
        editor.update(&tokens("xi"), Options::default());
        let candidate0: Vec<&str> =
            editor.candidate0().iter().map(|p| p.text.as_str()).collect();
        assert_eq!(vec!["xi"], candidate0);
    }
}
