//! Bopomofo session behavior.
//!
//! The session state machine is shared with the pinyin styles; what
//! differs is rendering. Wherever a pinyin session would show raw
//! keystrokes, a Bopomofo session shows the symbols those keys stand
//! for, including unparsed tails and the phonetic commit text.

use crate::parser::BopomofoParser;
use crate::simptrad::simp_to_trad;

use super::{CommitType, Context};

impl Context {
    pub(super) fn insert_bopomofo(&mut self, parser: BopomofoParser, ch: char) -> bool {
        if !parser.accepts(ch) || self.buffer_full() {
            return false;
        }
        self.text.insert(self.cursor, ch);
        self.cursor += 1;
        self.update_syllables();
        self.notify_input_text();
        self.notify_cursor();
        self.update_special_phrases();
        self.update_phrase_editor();
        self.update();
        true
    }

    pub(super) fn render_commit_bopomofo(
        &self,
        parser: BopomofoParser,
        commit_type: CommitType,
    ) -> String {
        match commit_type {
            CommitType::Raw => self.text.clone(),
            // Parsed syllables and the tail render the same way, and the
            // key-wise mapping keeps typed tone marks.
            CommitType::Phonetic => parser.keys_to_bopomofo(&self.text),
            CommitType::Converted => {
                let mut out = String::from(self.editor.selected_string());
                if self.selected_special_phrase.is_empty() {
                    out.push_str(&parser.keys_to_bopomofo(self.text_after_selection()));
                } else {
                    out.push_str(&self.selected_special_phrase);
                    out.push_str(&parser.keys_to_bopomofo(self.text_after_cursor()));
                }
                out
            }
        }
    }

    pub(super) fn render_preedit_bopomofo(&mut self, parser: BopomofoParser) {
        self.preedit.clear();
        if self.editor.is_empty() && self.text.is_empty() {
            return;
        }
        self.preedit.selected_text = self.editor.selected_string().to_string();

        if !self.selected_special_phrase.is_empty() {
            let special = self.selected_special_phrase.clone();
            self.preedit.selected_text.push_str(&special);
            self.preedit.rest_text = parser.keys_to_bopomofo(self.text_after_cursor());
        } else if self.focused_candidate < self.special_phrases.len() {
            self.preedit.conversion_text = self.special_phrases[self.focused_candidate].clone();
            self.preedit.rest_text = parser.keys_to_bopomofo(self.text_after_cursor());
        } else if !self.editor.pending() {
            self.preedit.rest_text = parser.keys_to_bopomofo(self.text_after_selection());
        } else if self.cursor == self.text.len() {
            let index = self.focused_candidate - self.special_phrases.len();
            if index < self.editor.candidates().len() {
                let candidate = self.editor.candidate(index);
                self.preedit.conversion_text = if self.config.mode_simp {
                    candidate.text.clone()
                } else {
                    simp_to_trad(&candidate.text)
                };
                let covered = self.editor.cursor() + candidate.len();
                let end = match covered {
                    0 => 0,
                    covered => self.tokens[covered - 1].end(),
                };
                self.preedit.rest_text = parser.keys_to_bopomofo(&self.text[end..]);
            } else {
                self.preedit.rest_text = parser.keys_to_bopomofo(self.text_after_selection());
            }
        } else {
            self.preedit.conversion_text = self.bopomofo_syllable_display(parser);
        }
    }

    pub(super) fn render_auxiliary_bopomofo(&self, parser: BopomofoParser) -> String {
        if self.text.is_empty() || !self.selected_special_phrase.is_empty() {
            return String::new();
        }
        if self.focused_candidate < self.special_phrases.len() {
            let begin = self.editor.cursor_in_bytes();
            return format!(
                "{}|{}",
                &self.text[begin..self.cursor],
                self.text_after_cursor()
            );
        }
        if self.editor.candidates().is_empty() {
            return String::new();
        }
        let mut out = String::new();
        let start = self.editor.cursor();
        for (index, token) in self.tokens.iter().enumerate().skip(start) {
            if index != start {
                out.push(',');
            }
            out.push_str(token.syllable.bopomofo);
        }
        if self.parsed_len == self.cursor {
            out.push('|');
            out.push_str(&parser.keys_to_bopomofo(self.text_after_tokens()));
        } else {
            out.push(',');
            out.push_str(&parser.keys_to_bopomofo(&self.text[self.parsed_len..self.cursor]));
            out.push('|');
            out.push_str(&parser.keys_to_bopomofo(self.text_after_cursor()));
        }
        out
    }

    /// Pending syllable symbols run together, a space at the cursor, and
    /// the tail keys as symbols.
    fn bopomofo_syllable_display(&self, parser: BopomofoParser) -> String {
        let mut out = String::new();
        for token in self.tokens.iter().skip(self.editor.cursor()) {
            out.push_str(token.syllable.bopomofo);
        }
        if self.parsed_len == self.cursor {
            out.push(' ');
            out.push_str(&parser.keys_to_bopomofo(self.text_after_tokens()));
        } else {
            out.push(' ');
            out.push_str(&parser.keys_to_bopomofo(&self.text[self.parsed_len..self.cursor]));
            out.push(' ');
            out.push_str(&parser.keys_to_bopomofo(self.text_after_cursor()));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use crate::context::testing::{insert_keys, session};
    use crate::context::{CommitType, InputType, PropertyName, PropertyValue};

    fn bopomofo_session() -> (
        std::sync::Arc<crate::context::testing::RecordingObserver>,
        crate::Context,
    ) {
        let (observer, mut context) = session(InputType::Bopomofo);
        context.set_property(PropertyName::SpecialPhrase, PropertyValue::Bool(false));
        (observer, context)
    }

    #[test]
    fn basic_conversion() {
        let (observer, mut context) = bopomofo_session();
        insert_keys(&mut context, "sucl");
        assert_eq!(4, context.cursor());
        assert_eq!("sucl", context.input_text());
        assert_eq!("你好", context.conversion_text());
        assert_eq!("", context.rest_text());
        assert_eq!("ㄋㄧ,ㄏㄠ|", context.auxiliary_text());
        assert!(context.has_candidate(0));
        assert_eq!("", observer.committed());

        assert!(context.select_candidate(0));
        assert_eq!("你好", observer.committed());
        assert_eq!("", context.input_text());
    }

    #[test]
    fn commit_types_render_phonetically() {
        let (observer, mut context) = bopomofo_session();
        insert_keys(&mut context, "sucl");
        context.commit(CommitType::Raw);
        assert_eq!("sucl", observer.committed());

        insert_keys(&mut context, "sucl");
        context.commit(CommitType::Phonetic);
        assert_eq!("ㄋㄧㄏㄠ", observer.committed());

        // An unselected converted commit also falls back to the symbols.
        insert_keys(&mut context, "sucl");
        context.commit(CommitType::Converted);
        assert_eq!("ㄋㄧㄏㄠ", observer.committed());
    }

    #[test]
    fn incomplete_symbols_convert_through_fuzzy_matching() {
        let (_observer, mut context) = bopomofo_session();
        // a a z h i → ㄇㄇㄈㄘㄛ: lone initials reach 妈妈 + 好吃 + 哦.
        insert_keys(&mut context, "aazhi");
        assert_eq!("妈妈好吃哦", context.conversion_text());
        assert_eq!("ㄇ,ㄇ,ㄈ,ㄘ,ㄛ|", context.auxiliary_text());
    }

    #[test]
    fn partial_selection_keeps_the_tail_phonetic() {
        let (observer, mut context) = bopomofo_session();
        insert_keys(&mut context, "aazhi");
        // Candidate 1 is 妈妈 covering the first two symbols.
        assert_eq!("妈妈", context.get_candidate(1).unwrap().text);
        assert!(context.select_candidate(1));
        assert_eq!("妈妈", context.selected_text());
        assert_eq!("好吃哦", context.conversion_text());
        assert_eq!("ㄈ,ㄘ,ㄛ|", context.auxiliary_text());

        context.commit(CommitType::Converted);
        assert_eq!("妈妈ㄈㄘㄛ", observer.committed());
    }

    #[test]
    fn editing_in_the_middle_shows_symbols() {
        let (observer, mut context) = bopomofo_session();
        insert_keys(&mut context, "aazhii");
        assert_eq!("妈妈好吃哦哦", context.conversion_text());
        assert_eq!("ㄇ,ㄇ,ㄈ,ㄘ,ㄛ,ㄛ|", context.auxiliary_text());

        assert!(context.move_cursor_left());
        assert_eq!(5, context.cursor());
        assert_eq!("ㄇㄇㄈㄘㄛ ㄛ", context.conversion_text());
        assert_eq!("ㄇ,ㄇ,ㄈ,ㄘ,ㄛ|ㄛ", context.auxiliary_text());
        assert_eq!("", context.rest_text());

        assert!(context.select_candidate(0));
        assert_eq!("妈妈好吃哦", context.selected_text());
        assert_eq!("", context.conversion_text());
        assert_eq!("ㄛ", context.rest_text());
        assert_eq!("", context.auxiliary_text());

        context.commit(CommitType::Converted);
        assert_eq!("妈妈好吃哦ㄛ", observer.committed());
    }

    #[test]
    fn tone_keys_are_absorbed() {
        let (observer, mut context) = bopomofo_session();
        insert_keys(&mut context, "su3cl");
        assert_eq!("你好", context.conversion_text());
        assert_eq!("ㄋㄧ,ㄏㄠ|", context.auxiliary_text());
        context.commit(CommitType::Phonetic);
        assert_eq!("ㄋㄧˇㄏㄠ", observer.committed());
    }

    #[test]
    fn keyboard_property_selects_the_layout() {
        let (_observer, mut context) = bopomofo_session();
        assert_eq!(
            PropertyValue::U32(0),
            context.get_property(PropertyName::BopomofoKeyboard)
        );
        // Eten prints ㄋ on n and ㄧ on e.
        assert!(context.set_property(PropertyName::BopomofoKeyboard, PropertyValue::U32(2)));
        insert_keys(&mut context, "ne");
        assert_eq!("ㄋㄧ|", context.auxiliary_text());
        assert!(!context.set_property(PropertyName::BopomofoKeyboard, PropertyValue::U32(4)));
    }

    #[test]
    fn unmapped_keys_are_rejected() {
        let (_observer, mut context) = bopomofo_session();
        assert!(!context.insert('='));
        assert_eq!("", context.input_text());
    }
}
