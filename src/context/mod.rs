//! Editing sessions.
//!
//! A [`Context`] is one interactive conversion session: it owns the raw
//! keystroke buffer, the parsed syllables, the phrase editor and the
//! preedit view model, and reports every observable change to the host
//! through a [`ContextObserver`]. Contexts are created by
//! [`Ime::create_context`](crate::Ime::create_context); the three input
//! styles share this one type and differ in parsing and rendering.
//!
//! All operations are synchronous and total: they return `false` for
//! inadmissible input or out-of-range indexes and leave the session
//! untouched. Notifications fire after the state change that caused
//! them, and observers receive the context immutably, so a callback can
//! read the new state but never re-enter the session.

use std::sync::{Arc, Weak};

use tracing::warn;

use crate::dictionary::store::PhraseStore;
use crate::editor::PhraseEditor;
use crate::parser::{
    BopomofoParser, DoublePinyinParser, FullPinyinParser, Options,
};
use crate::simptrad::simp_to_trad;
use crate::special::SpecialPhraseTable;
use crate::syllable::SyllableToken;
use crate::MAX_PINYIN_LEN;

mod bopomofo;
mod pinyin;

/// The input style of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputType {
    FullPinyin,
    DoublePinyin,
    Bopomofo,
}

/// What [`Context::commit`] renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommitType {
    /// The raw keystrokes.
    Raw,
    /// The phonetic reading: Bopomofo symbols for Bopomofo sessions, the
    /// raw keystrokes otherwise.
    Phonetic,
    /// The converted text: selected phrases followed by whatever was not
    /// converted.
    Converted,
}

/// Where a candidate came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CandidateType {
    NormalPhrase,
    UserPhrase,
    SpecialPhrase,
}

/// One entry of the candidate window.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    pub text: String,
    pub kind: CandidateType,
}

/// Typed session properties.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PropertyName {
    /// The parser and query option bitset; see [`Options`].
    ConversionOption,
    /// Key table for double pinyin sessions, `0..=5`.
    DoublePinyinSchema,
    /// Keyboard layout for Bopomofo sessions, `0..=3`.
    BopomofoKeyboard,
    /// Whether the special phrase overlay is consulted.
    SpecialPhrase,
    /// Emit Simplified characters; when false, phrase text is converted
    /// to Traditional on the way out.
    ModeSimp,
}

/// A property value: null, boolean, or unsigned integer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PropertyValue {
    Null,
    Bool(bool),
    U32(u32),
}

/// Change notifications a host can react to.
///
/// Every method has a no-op default so hosts implement only what they
/// display. The session holds the observer weakly; the host owns both
/// and must keep the observer alive as long as the session runs.
pub trait ContextObserver {
    /// The session produced final text.
    fn commit_text(&self, _context: &Context, _text: &str) {}
    fn input_text_changed(&self, _context: &Context) {}
    fn cursor_changed(&self, _context: &Context) {}
    fn preedit_text_changed(&self, _context: &Context) {}
    fn auxiliary_text_changed(&self, _context: &Context) {}
    fn candidates_changed(&self, _context: &Context) {}
}

#[derive(Clone, Debug, Default, PartialEq)]
struct Preedit {
    selected_text: String,
    conversion_text: String,
    rest_text: String,
}

impl Preedit {
    fn clear(&mut self) {
        self.selected_text.clear();
        self.conversion_text.clear();
        self.rest_text.clear();
    }
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct Config {
    pub options: Options,
    pub special_phrase: bool,
    pub mode_simp: bool,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            options: Options::default(),
            special_phrase: true,
            mode_simp: true,
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Flavor {
    FullPinyin(FullPinyinParser),
    DoublePinyin(DoublePinyinParser),
    Bopomofo(BopomofoParser),
}

/// One editing session.
pub struct Context {
    flavor: Flavor,
    config: Config,
    text: String,
    cursor: usize,
    focused_candidate: usize,
    tokens: Vec<SyllableToken>,
    /// Bytes of `text` covered by `tokens`; never exceeds `cursor`.
    parsed_len: usize,
    editor: PhraseEditor,
    special_phrases: Vec<String>,
    selected_special_phrase: String,
    preedit: Preedit,
    auxiliary_text: String,
    specials: Arc<SpecialPhraseTable>,
    observer: Weak<dyn ContextObserver>,
}

impl Context {
    pub(crate) fn new(
        kind: InputType,
        observer: Weak<dyn ContextObserver>,
        store: Arc<PhraseStore>,
        specials: Arc<SpecialPhraseTable>,
    ) -> Context {
        let flavor = match kind {
            InputType::FullPinyin => Flavor::FullPinyin(FullPinyinParser::new()),
            InputType::DoublePinyin => Flavor::DoublePinyin(DoublePinyinParser::default()),
            InputType::Bopomofo => Flavor::Bopomofo(BopomofoParser::default()),
        };
        Context {
            flavor,
            config: Config::default(),
            text: String::new(),
            cursor: 0,
            focused_candidate: 0,
            tokens: Vec::new(),
            parsed_len: 0,
            editor: PhraseEditor::new(store),
            special_phrases: Vec::new(),
            selected_special_phrase: String::new(),
            preedit: Preedit::default(),
            auxiliary_text: String::new(),
            specials,
            observer,
        }
    }

    pub fn input_type(&self) -> InputType {
        match self.flavor {
            Flavor::FullPinyin(_) => InputType::FullPinyin,
            Flavor::DoublePinyin(_) => InputType::DoublePinyin,
            Flavor::Bopomofo(_) => InputType::Bopomofo,
        }
    }

    // Accessors of the view model.

    pub fn input_text(&self) -> &str {
        &self.text
    }

    pub fn selected_text(&self) -> &str {
        &self.preedit.selected_text
    }

    pub fn conversion_text(&self) -> &str {
        &self.preedit.conversion_text
    }

    pub fn rest_text(&self) -> &str {
        &self.preedit.rest_text
    }

    pub fn auxiliary_text(&self) -> &str {
        &self.auxiliary_text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn focused_candidate(&self) -> usize {
        self.focused_candidate
    }

    /// Appends a character at the cursor. Returns false when the
    /// character is not admissible for this input style or the buffer is
    /// full; the session is unchanged in that case.
    pub fn insert(&mut self, ch: char) -> bool {
        match self.flavor {
            Flavor::FullPinyin(parser) => self.insert_full(parser, ch),
            Flavor::DoublePinyin(parser) => self.insert_double(parser, ch),
            Flavor::Bopomofo(parser) => self.insert_bopomofo(parser, ch),
        }
    }

    /// Renders and emits the commit text, then resets the session.
    /// Committing `Converted` also feeds the selection to the store's
    /// learning.
    pub fn commit(&mut self, commit_type: CommitType) {
        let text = match self.flavor {
            Flavor::Bopomofo(parser) => self.render_commit_bopomofo(parser, commit_type),
            _ => self.render_commit_pinyin(commit_type),
        };
        if commit_type == CommitType::Converted {
            self.editor.commit();
        }
        self.reset_context();
        self.update();
        self.notify_input_text();
        self.notify_cursor();
        self.commit_text(&text);
    }

    /// Clears the session.
    pub fn reset(&mut self) {
        self.reset_context();
        self.update();
        self.notify_input_text();
        self.notify_cursor();
    }

    pub fn remove_char_before(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.text.remove(self.cursor);
        self.notify_input_text();
        self.notify_cursor();
        let reparsed = self.update_syllables();
        self.refresh_after_edit(reparsed);
        true
    }

    pub fn remove_char_after(&mut self) -> bool {
        if self.cursor == self.text.len() {
            return false;
        }
        self.text.remove(self.cursor);
        self.notify_input_text();
        self.refresh_tail_edit();
        true
    }

    /// Removes the word before the cursor: the unparsed tail when the
    /// cursor sits past the last syllable, otherwise the last syllable.
    pub fn remove_word_before(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        if self.cursor > self.parsed_len {
            self.text.replace_range(self.parsed_len..self.cursor, "");
            self.cursor = self.parsed_len;
            self.notify_input_text();
            self.notify_cursor();
            self.refresh_tail_edit();
        } else {
            if let Some(last) = self.tokens.pop() {
                self.parsed_len = last.begin;
            }
            self.text.replace_range(self.parsed_len..self.cursor, "");
            self.cursor = self.parsed_len;
            self.notify_input_text();
            self.notify_cursor();
            self.update_special_phrases();
            self.update_phrase_editor();
            self.update();
        }
        true
    }

    /// Text after the cursor counts as one opaque word.
    pub fn remove_word_after(&mut self) -> bool {
        if self.cursor == self.text.len() {
            return false;
        }
        self.text.truncate(self.cursor);
        self.notify_input_text();
        self.refresh_tail_edit();
        true
    }

    pub fn move_cursor_left(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.notify_cursor();
        if self.cursor >= self.parsed_len {
            self.refresh_tail_edit();
        } else {
            let reparsed = self.update_syllables();
            self.refresh_after_edit(reparsed);
        }
        true
    }

    pub fn move_cursor_right(&mut self) -> bool {
        if self.cursor == self.text.len() {
            return false;
        }
        self.cursor += 1;
        self.notify_cursor();
        let reparsed = self.update_syllables();
        self.refresh_after_edit(reparsed);
        true
    }

    pub fn move_cursor_left_by_word(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        if self.cursor > self.parsed_len {
            self.cursor = self.parsed_len;
            self.notify_cursor();
            self.refresh_tail_edit();
        } else {
            if let Some(last) = self.tokens.pop() {
                self.parsed_len = last.begin;
            }
            self.cursor = self.parsed_len;
            self.notify_cursor();
            self.update_special_phrases();
            self.update_phrase_editor();
            self.update();
        }
        true
    }

    /// Text after the cursor counts as one opaque word.
    pub fn move_cursor_right_by_word(&mut self) -> bool {
        self.move_cursor_to_end()
    }

    pub fn move_cursor_to_begin(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor = 0;
        self.tokens.clear();
        self.parsed_len = 0;
        self.notify_cursor();
        self.update_special_phrases();
        self.update_phrase_editor();
        self.update();
        true
    }

    pub fn move_cursor_to_end(&mut self) -> bool {
        if self.cursor == self.text.len() {
            return false;
        }
        self.cursor = self.text.len();
        self.notify_cursor();
        let reparsed = self.update_syllables();
        self.refresh_after_edit(reparsed);
        true
    }

    /// Selects candidate `index` and converts what remains. Commits
    /// directly when the selection consumed everything.
    pub fn select_candidate(&mut self, index: usize) -> bool {
        if !self.has_candidate(index) {
            warn!("select_candidate({index}): no such candidate");
            return false;
        }
        if index < self.special_phrases.len() {
            self.selected_special_phrase = self.special_phrases[index].clone();
            self.focused_candidate = 0;
            if self.cursor == self.text.len() {
                self.commit(CommitType::Converted);
            } else {
                self.update_special_phrases();
                self.update();
            }
            return true;
        }
        let index = index - self.special_phrases.len();
        if !self
            .editor
            .select_candidate(index, self.config.mode_simp, self.config.options)
        {
            return false;
        }
        self.focused_candidate = 0;
        if self.editor.pending() || !self.text_after_tokens().is_empty() {
            self.update_special_phrases();
            self.update();
        } else {
            self.commit(CommitType::Converted);
        }
        true
    }

    /// Moves the highlight; only the preedit follows.
    pub fn focus_candidate(&mut self, index: usize) -> bool {
        if !self.has_candidate(index) {
            warn!("focus_candidate({index}): no such candidate");
            return false;
        }
        self.focused_candidate = index;
        self.update_preedit_text();
        true
    }

    pub fn focus_candidate_previous(&mut self) -> bool {
        if self.focused_candidate == 0 {
            return false;
        }
        self.focus_candidate(self.focused_candidate - 1)
    }

    pub fn focus_candidate_next(&mut self) -> bool {
        if !self.has_candidate(self.focused_candidate + 1) {
            return false;
        }
        self.focus_candidate(self.focused_candidate + 1)
    }

    /// Forgets the learned frequency behind candidate `index`. Special
    /// phrases carry no frequency and are rejected.
    pub fn reset_candidate(&mut self, index: usize) -> bool {
        if index < self.special_phrases.len() {
            return false;
        }
        let index = index - self.special_phrases.len();
        if self.editor.reset_candidate(index, self.config.options) {
            self.update_candidates();
            return true;
        }
        false
    }

    /// Puts the selected phrases back into the candidate window.
    pub fn unselect_candidates(&mut self) -> bool {
        if !self.editor.unselect_candidates(self.config.options) {
            return false;
        }
        self.update_special_phrases();
        self.update();
        true
    }

    /// Whether candidate `index` exists, paging in more candidates as
    /// needed.
    pub fn has_candidate(&mut self, index: usize) -> bool {
        if !self.selected_special_phrase.is_empty() {
            return false;
        }
        loop {
            let len = self.special_phrases.len() + self.editor.candidates().len();
            if index < len {
                return true;
            }
            if !self.editor.fill_candidates() {
                return false;
            }
        }
    }

    /// Fetches candidate `index`, paging in more candidates as needed.
    pub fn get_candidate(&mut self, index: usize) -> Option<Candidate> {
        if !self.has_candidate(index) {
            return None;
        }
        if index < self.special_phrases.len() {
            return Some(Candidate {
                text: self.special_phrases[index].clone(),
                kind: CandidateType::SpecialPhrase,
            });
        }
        let index = index - self.special_phrases.len();
        let phrase = self.editor.candidate(index);
        let text = if self.config.mode_simp {
            phrase.text.clone()
        } else {
            simp_to_trad(&phrase.text)
        };
        let kind = if self.editor.candidate_is_user_phrase(index) {
            CandidateType::UserPhrase
        } else {
            CandidateType::NormalPhrase
        };
        Some(Candidate { text, kind })
    }

    /// Candidates fetched so far, without paging in more.
    pub fn prepared_candidates_len(&self) -> usize {
        if !self.selected_special_phrase.is_empty() {
            return 0;
        }
        self.special_phrases.len() + self.editor.candidates().len()
    }

    pub fn get_property(&self, name: PropertyName) -> PropertyValue {
        match name {
            PropertyName::ConversionOption => PropertyValue::U32(self.config.options.bits()),
            PropertyName::SpecialPhrase => PropertyValue::Bool(self.config.special_phrase),
            PropertyName::ModeSimp => PropertyValue::Bool(self.config.mode_simp),
            PropertyName::DoublePinyinSchema => match self.flavor {
                Flavor::DoublePinyin(parser) => PropertyValue::U32(parser.schema as u32),
                _ => PropertyValue::Null,
            },
            PropertyName::BopomofoKeyboard => match self.flavor {
                Flavor::Bopomofo(parser) => PropertyValue::U32(parser.keyboard as u32),
                _ => PropertyValue::Null,
            },
        }
    }

    /// Sets a property; returns false on a type or range mismatch, or
    /// when the property does not apply to this input style.
    pub fn set_property(&mut self, name: PropertyName, value: PropertyValue) -> bool {
        match (name, value) {
            (PropertyName::ConversionOption, PropertyValue::U32(bits)) => {
                self.config.options = Options::from_bits(bits);
                true
            }
            (PropertyName::SpecialPhrase, PropertyValue::Bool(value)) => {
                self.config.special_phrase = value;
                true
            }
            (PropertyName::ModeSimp, PropertyValue::Bool(value)) => {
                self.config.mode_simp = value;
                true
            }
            (PropertyName::DoublePinyinSchema, PropertyValue::U32(index)) => {
                let Flavor::DoublePinyin(ref mut parser) = self.flavor else {
                    return false;
                };
                match crate::parser::DoublePinyinSchema::from_index(index) {
                    Some(schema) => {
                        parser.schema = schema;
                        true
                    }
                    None => false,
                }
            }
            (PropertyName::BopomofoKeyboard, PropertyValue::U32(index)) => {
                let Flavor::Bopomofo(ref mut parser) = self.flavor else {
                    return false;
                };
                match crate::parser::BopomofoKeyboard::from_index(index) {
                    Some(keyboard) => {
                        parser.keyboard = keyboard;
                        true
                    }
                    None => false,
                }
            }
            _ => {
                warn!("set_property: type mismatch for {name:?}");
                false
            }
        }
    }

    // Shared internals.

    pub(crate) fn buffer_full(&self) -> bool {
        self.text.len() >= MAX_PINYIN_LEN
    }

    fn update_syllables(&mut self) -> bool {
        match self.flavor {
            Flavor::FullPinyin(parser) => parser.update(
                &self.text,
                self.cursor,
                self.config.options,
                &mut self.tokens,
                &mut self.parsed_len,
            ),
            Flavor::DoublePinyin(parser) => parser.update(
                &self.text,
                self.cursor,
                self.config.options,
                &mut self.tokens,
                &mut self.parsed_len,
            ),
            Flavor::Bopomofo(parser) => parser.update(
                &self.text,
                self.cursor,
                self.config.options,
                &mut self.tokens,
                &mut self.parsed_len,
            ),
        }
    }

    /// Refreshes the special phrase overlay for the raw span between the
    /// last selected syllable and the cursor. Returns true if the
    /// overlay changed.
    fn update_special_phrases(&mut self) -> bool {
        let before = self.special_phrases.len();
        self.special_phrases.clear();
        if !self.config.special_phrase || !self.selected_special_phrase.is_empty() {
            return false;
        }
        let begin = self.editor.cursor_in_bytes();
        let end = self.cursor;
        if begin < end {
            self.specials
                .lookup(&self.text[begin..end], &mut self.special_phrases);
        }
        before != self.special_phrases.len() || before != 0
    }

    fn update_phrase_editor(&mut self) {
        self.editor.update(&self.tokens, self.config.options);
    }

    fn update(&mut self) {
        self.update_candidates();
        self.update_preedit_text();
        self.update_auxiliary_text();
    }

    fn update_candidates(&mut self) {
        self.focused_candidate = 0;
        self.notify_candidates();
    }

    fn update_preedit_text(&mut self) {
        match self.flavor {
            Flavor::Bopomofo(parser) => self.render_preedit_bopomofo(parser),
            _ => self.render_preedit_pinyin(),
        }
        self.notify_preedit();
    }

    fn update_auxiliary_text(&mut self) {
        self.auxiliary_text = match self.flavor {
            Flavor::Bopomofo(parser) => self.render_auxiliary_bopomofo(parser),
            _ => self.render_auxiliary_pinyin(),
        };
        self.notify_auxiliary();
    }

    /// The edit flows shared by cursor moves and removals: a reparse
    /// refreshes everything, an overlay change refreshes the view, and
    /// otherwise only the texts follow.
    fn refresh_after_edit(&mut self, reparsed: bool) {
        if reparsed {
            self.update_special_phrases();
            self.update_phrase_editor();
            self.update();
        } else {
            self.refresh_tail_edit();
        }
    }

    fn refresh_tail_edit(&mut self) {
        if self.update_special_phrases() {
            self.update();
        } else {
            self.update_preedit_text();
            self.update_auxiliary_text();
        }
    }

    fn reset_context(&mut self) {
        self.cursor = 0;
        self.focused_candidate = 0;
        self.tokens.clear();
        self.parsed_len = 0;
        self.editor.reset();
        self.special_phrases.clear();
        self.selected_special_phrase.clear();
        self.text.clear();
        self.preedit.clear();
        self.auxiliary_text.clear();
    }

    /// The raw tail not covered by syllables.
    pub(crate) fn text_after_tokens(&self) -> &str {
        &self.text[self.parsed_len..]
    }

    pub(crate) fn text_after_cursor(&self) -> &str {
        &self.text[self.cursor..]
    }

    /// The raw text after the last syllable consumed by the selection.
    pub(crate) fn text_after_selection(&self) -> &str {
        &self.text[self.editor.cursor_in_bytes()..]
    }

    // Notification plumbing. The observer sees the context immutably.

    fn commit_text(&self, text: &str) {
        if let Some(observer) = self.observer.upgrade() {
            observer.commit_text(self, text);
        }
    }

    fn notify_input_text(&self) {
        if let Some(observer) = self.observer.upgrade() {
            observer.input_text_changed(self);
        }
    }

    fn notify_cursor(&self) {
        if let Some(observer) = self.observer.upgrade() {
            observer.cursor_changed(self);
        }
    }

    fn notify_preedit(&self) {
        if let Some(observer) = self.observer.upgrade() {
            observer.preedit_text_changed(self);
        }
    }

    fn notify_auxiliary(&self) {
        if let Some(observer) = self.observer.upgrade() {
            observer.auxiliary_text_changed(self);
        }
    }

    fn notify_candidates(&self) {
        if let Some(observer) = self.observer.upgrade() {
            observer.candidates_changed(self);
        }
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{insert_keys, session};
    use super::{CommitType, InputType};

    #[test]
    fn notifications_fire_after_mutation() {
        let (observer, mut context) = session(InputType::FullPinyin);
        insert_keys(&mut context, "ni");
        assert!(*observer.preedit_changes.borrow() > 0);
        assert!(*observer.candidate_changes.borrow() > 0);
    }

    #[test]
    fn a_dropped_observer_is_skipped() {
        let (observer, mut context) = session(InputType::FullPinyin);
        drop(observer);
        insert_keys(&mut context, "nihao");
        context.commit(CommitType::Converted);
        assert_eq!("", context.input_text());
    }

    #[test]
    fn cursor_word_motion_snaps_to_syllables() {
        let (_observer, mut context) = session(InputType::FullPinyin);
        insert_keys(&mut context, "nihao");
        assert!(context.move_cursor_left_by_word());
        assert_eq!(2, context.cursor());
        assert!(context.move_cursor_right_by_word());
        assert_eq!(5, context.cursor());
        assert!(!context.move_cursor_right_by_word());
        assert!(context.move_cursor_to_begin());
        assert_eq!(0, context.cursor());
        assert_eq!("", context.conversion_text());
        assert!(context.move_cursor_to_end());
        assert_eq!("你好", context.conversion_text());
    }

    #[test]
    fn word_motion_snaps_the_raw_tail_first() {
        let (_observer, mut context) = session(InputType::FullPinyin);
        insert_keys(&mut context, "nihaoii");
        assert_eq!(5, context.tokens.iter().map(|t| t.len).sum::<usize>());
        // First step swallows the unparsed tail, second a syllable.
        assert!(context.move_cursor_left_by_word());
        assert_eq!(5, context.cursor());
        assert!(context.move_cursor_left_by_word());
        assert_eq!(2, context.cursor());
    }

    #[test]
    fn remove_word_after_drops_the_whole_tail() {
        let (_observer, mut context) = session(InputType::FullPinyin);
        insert_keys(&mut context, "nihao");
        context.move_cursor_left_by_word();
        context.move_cursor_left_by_word();
        assert!(context.remove_word_after());
        assert_eq!("ni", context.input_text());
        assert!(!context.remove_word_after());
    }

    #[test]
    fn remove_char_after_trims_the_tail() {
        let (_observer, mut context) = session(InputType::FullPinyin);
        insert_keys(&mut context, "nihao");
        assert!(!context.remove_char_after());
        context.move_cursor_left();
        assert!(context.remove_char_after());
        assert_eq!("niha", context.input_text());
        assert_eq!(4, context.cursor());
    }
}
