//! Pinyin session behavior, shared by the full and double input styles.

use crate::parser::{DoublePinyinParser, FullPinyinParser};
use crate::simptrad::simp_to_trad;

use super::{CommitType, Context};

impl Context {
    pub(super) fn insert_full(&mut self, parser: FullPinyinParser, ch: char) -> bool {
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

    pub(super) fn insert_double(&mut self, parser: DoublePinyinParser, ch: char) -> bool {
        if !parser.accepts(ch) || self.buffer_full() {
            return false;
        }
        if self.text.is_empty() && !parser.accepts_leading(ch) {
            return false;
        }
        self.text.insert(self.cursor, ch);
        self.cursor += 1;

        // A key far beyond the parsed prefix cannot extend it; skip the
        // parser and treat the key as tail text.
        let reparsed = self.cursor <= self.parsed_len + 2 && self.update_syllables();
        if reparsed {
            self.notify_input_text();
            self.notify_cursor();
            self.update_special_phrases();
            self.update_phrase_editor();
            self.update();
        } else {
            if !ch.is_ascii_alphabetic() {
                // A pairing key like `;` is only admissible inside a
                // syllable.
                self.text.remove(self.cursor - 1);
                self.cursor -= 1;
                return false;
            }
            self.notify_input_text();
            self.notify_cursor();
            self.refresh_tail_edit();
        }
        true
    }

    pub(super) fn render_commit_pinyin(&self, commit_type: CommitType) -> String {
        match commit_type {
            // Pinyin is its own phonetic rendering.
            CommitType::Raw | CommitType::Phonetic => self.text.clone(),
            CommitType::Converted => {
                let mut out = String::from(self.editor.selected_string());
                if self.selected_special_phrase.is_empty() {
                    out.push_str(self.text_after_selection());
                } else {
                    out.push_str(&self.selected_special_phrase);
                    out.push_str(self.text_after_cursor());
                }
                out
            }
        }
    }

    pub(super) fn render_preedit_pinyin(&mut self) {
        self.preedit.clear();
        if self.editor.is_empty() && self.text.is_empty() {
            return;
        }
        self.preedit.selected_text = self.editor.selected_string().to_string();

        if !self.selected_special_phrase.is_empty() {
            let special = self.selected_special_phrase.clone();
            self.preedit.selected_text.push_str(&special);
            self.preedit.rest_text = self.text_after_cursor().to_string();
        } else if self.focused_candidate < self.special_phrases.len() {
            self.preedit.conversion_text = self.special_phrases[self.focused_candidate].clone();
            self.preedit.rest_text = self.text_after_cursor().to_string();
        } else if !self.editor.pending() {
            self.preedit.rest_text = self.text_after_selection().to_string();
        } else if self.cursor == self.text.len() {
            // Converting: show the focused candidate and what it leaves
            // uncovered.
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
                self.preedit.rest_text = self.text[end..].to_string();
            } else {
                self.preedit.rest_text = self.text_after_selection().to_string();
            }
        } else {
            // Editing in the middle: echo the syllables around the
            // cursor instead of a conversion.
            self.preedit.conversion_text = self.pinyin_syllable_display();
        }
    }

    pub(super) fn render_auxiliary_pinyin(&self) -> String {
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
        self.pinyin_syllable_display()
    }

    /// Pending syllables separated by spaces, with `|` at the cursor and
    /// the unparsed tail trailing.
    fn pinyin_syllable_display(&self) -> String {
        let mut out = String::new();
        let start = self.editor.cursor();
        for (index, token) in self.tokens.iter().enumerate().skip(start) {
            if index != start {
                out.push(' ');
            }
            out.push_str(token.syllable.text);
        }
        if self.parsed_len == self.cursor {
            out.push('|');
            out.push_str(self.text_after_tokens());
        } else {
            out.push(' ');
            out.push_str(&self.text[self.parsed_len..self.cursor]);
            out.push('|');
            out.push_str(self.text_after_cursor());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use crate::context::testing::{insert_keys, session};
    use crate::context::{CandidateType, CommitType, InputType, PropertyName, PropertyValue};

    #[test]
    fn full_pinyin_basic_conversion() {
        let (observer, mut context) = session(InputType::FullPinyin);
        insert_keys(&mut context, "nihao");
        assert_eq!(5, context.cursor());
        assert_eq!("nihao", context.input_text());
        assert_eq!("", context.selected_text());
        assert_eq!("你好", context.conversion_text());
        assert_eq!("", context.rest_text());
        assert_eq!("ni hao|", context.auxiliary_text());
        assert!(context.has_candidate(0));
        assert_eq!("", observer.committed());

        context.reset();
        assert_eq!(0, context.cursor());
        assert_eq!("", context.input_text());
        assert_eq!("", context.conversion_text());
        assert_eq!("", context.auxiliary_text());
        assert!(!context.has_candidate(0));
    }

    #[test]
    fn commit_without_selection_emits_raw() {
        let (observer, mut context) = session(InputType::FullPinyin);
        insert_keys(&mut context, "nihao");
        context.commit(CommitType::Converted);
        assert_eq!("nihao", observer.committed());
        assert_eq!("", context.input_text());
        assert!(!context.has_candidate(0));
    }

    #[test]
    fn select_candidate_commits_when_everything_is_consumed() {
        let (observer, mut context) = session(InputType::FullPinyin);
        insert_keys(&mut context, "nihao");
        assert!(context.select_candidate(0));
        assert_eq!("你好", observer.committed());
        assert_eq!("", context.input_text());
        assert_eq!(0, context.cursor());
    }

    #[test]
    fn special_phrase_overlays_the_conversion() {
        let (observer, mut context) = session(InputType::FullPinyin);
        insert_keys(&mut context, "aazhi");
        assert_eq!("AA制", context.conversion_text());
        assert_eq!("aazhi|", context.auxiliary_text());
        let candidate = context.get_candidate(0).unwrap();
        assert_eq!("AA制", candidate.text);
        assert_eq!(CandidateType::SpecialPhrase, candidate.kind);

        assert!(context.select_candidate(0));
        assert_eq!("AA制", observer.committed());
        assert_eq!("", context.input_text());
    }

    #[test]
    fn focus_select_and_unselect() {
        let (observer, mut context) = session(InputType::FullPinyin);
        insert_keys(&mut context, "aazhi");

        assert!(context.focus_candidate(1));
        assert_eq!("啊啊之", context.conversion_text());
        assert_eq!("aazhi|", context.auxiliary_text());

        // Candidate 4 is the single 阿.
        assert_eq!("阿", context.get_candidate(4).unwrap().text);
        assert!(context.select_candidate(4));
        assert_eq!("阿", context.selected_text());
        assert_eq!("阿紫", context.conversion_text());
        assert_eq!("a zhi|", context.auxiliary_text());
        assert_eq!("", observer.committed());

        assert!(context.unselect_candidates());
        assert_eq!("", context.selected_text());
        assert_eq!("AA制", context.conversion_text());
        assert_eq!("aazhi|", context.auxiliary_text());
    }

    #[test]
    fn editing_in_the_middle_echoes_syllables() {
        let (_observer, mut context) = session(InputType::FullPinyin);
        insert_keys(&mut context, "aazhi");

        assert!(context.move_cursor_left());
        assert_eq!(4, context.cursor());
        assert_eq!("a a zh|i", context.conversion_text());
        assert_eq!("a a zh|i", context.auxiliary_text());
        assert_eq!("", context.rest_text());

        context.insert('i');
        assert_eq!("aazhii", context.input_text());
        assert_eq!(5, context.cursor());
        assert_eq!("AA制", context.conversion_text());
        assert_eq!("i", context.rest_text());
        assert_eq!("aazhi|i", context.auxiliary_text());

        assert!(context.remove_char_before());
        assert_eq!("aazhi", context.input_text());
        assert_eq!("a a zh|i", context.conversion_text());

        assert!(context.move_cursor_right());
        assert_eq!("AA制", context.conversion_text());
        assert_eq!("aazhi|", context.auxiliary_text());
    }

    #[test]
    fn remove_word_drops_the_last_syllable() {
        let (observer, mut context) = session(InputType::FullPinyin);
        insert_keys(&mut context, "aazhi");
        assert!(context.remove_word_before());
        assert_eq!("aa", context.input_text());
        assert_eq!(2, context.cursor());
        assert_eq!("啊啊", context.conversion_text());
        assert_eq!("a a|", context.auxiliary_text());

        insert_keys(&mut context, "nihao");
        assert_eq!("aanihao", context.input_text());
        assert_eq!("啊啊你好", context.conversion_text());
        assert_eq!("a a ni hao|", context.auxiliary_text());

        // Candidate 1 is 啊啊; the rest stays raw on commit.
        assert!(context.select_candidate(1));
        assert_eq!("啊啊", context.selected_text());
        assert_eq!("你好", context.conversion_text());
        assert_eq!("ni hao|", context.auxiliary_text());
        context.commit(CommitType::Converted);
        assert_eq!("啊啊nihao", observer.committed());
    }

    #[test]
    fn special_phrase_with_tail_commits_the_tail_raw() {
        let (observer, mut context) = session(InputType::FullPinyin);
        insert_keys(&mut context, "aazhii");
        assert_eq!(6, context.cursor());
        assert_eq!("啊啊之", context.conversion_text());
        assert_eq!("i", context.rest_text());
        assert_eq!("a a zhi i|", context.auxiliary_text());

        assert!(context.move_cursor_left());
        assert_eq!("AA制", context.conversion_text());
        assert_eq!("i", context.rest_text());
        assert_eq!("aazhi|i", context.auxiliary_text());

        assert!(context.select_candidate(0));
        assert_eq!("AA制", context.selected_text());
        assert_eq!("", context.conversion_text());
        assert_eq!("i", context.rest_text());
        assert_eq!("", context.auxiliary_text());
        assert!(!context.has_candidate(0));
        assert_eq!("", observer.committed());

        context.commit(CommitType::Converted);
        assert_eq!("AA制i", observer.committed());
    }

    #[test]
    fn double_pinyin_basic_conversion() {
        let (observer, mut context) = session(InputType::DoublePinyin);
        insert_keys(&mut context, "nihk");
        assert_eq!(4, context.cursor());
        assert_eq!("nihk", context.input_text());
        assert_eq!("你好", context.conversion_text());
        assert_eq!("ni hao|", context.auxiliary_text());

        assert!(context.select_candidate(0));
        assert_eq!("你好", observer.committed());
    }

    #[test]
    fn double_pinyin_special_phrase_round_trip() {
        let (observer, mut context) = session(InputType::DoublePinyin);
        insert_keys(&mut context, "aazhii");
        assert_eq!("啊展翅", context.conversion_text());
        assert_eq!("a zang chi|", context.auxiliary_text());

        assert!(context.move_cursor_left());
        assert_eq!(5, context.cursor());
        assert_eq!("AA制", context.conversion_text());
        assert_eq!("i", context.rest_text());
        assert_eq!("aazhi|i", context.auxiliary_text());

        assert!(context.select_candidate(0));
        assert_eq!("AA制", context.selected_text());
        context.commit(CommitType::Converted);
        assert_eq!("AA制i", observer.committed());
    }

    #[test]
    fn double_pinyin_rejects_bad_leading_keys() {
        let (_observer, mut context) = session(InputType::DoublePinyin);
        assert!(!context.insert(';'));
        assert!(!context.insert('1'));
        assert_eq!("", context.input_text());

        // `;` is also rejected when it cannot pair up.
        insert_keys(&mut context, "ni");
        assert!(!context.insert(';'));
        assert_eq!("ni", context.input_text());
    }

    #[test]
    fn raw_commit_round_trips_the_buffer() {
        let (observer, mut context) = session(InputType::FullPinyin);
        insert_keys(&mut context, "woshi");
        context.commit(CommitType::Raw);
        assert_eq!("woshi", observer.committed());

        insert_keys(&mut context, "nihao");
        context.commit(CommitType::Phonetic);
        assert_eq!("nihao", observer.committed());
    }

    #[test]
    fn buffer_full_rejects_input() {
        let (_observer, mut context) = session(InputType::FullPinyin);
        for _ in 0..crate::MAX_PINYIN_LEN {
            assert!(context.insert('a'));
        }
        assert!(!context.insert('a'));
        assert_eq!(crate::MAX_PINYIN_LEN, context.input_text().len());
    }

    #[test]
    fn focus_motion_is_bounded() {
        let (_observer, mut context) = session(InputType::FullPinyin);
        insert_keys(&mut context, "nihao");
        assert!(!context.focus_candidate_previous());
        assert!(context.focus_candidate_next());
        assert_eq!(1, context.focused_candidate());
        assert!(context.focus_candidate_previous());
        assert_eq!(0, context.focused_candidate());
        assert!(!context.focus_candidate(9999));
    }

    #[test]
    fn reset_candidate_rejects_special_phrases() {
        let (_observer, mut context) = session(InputType::FullPinyin);
        insert_keys(&mut context, "aazhi");
        assert!(!context.reset_candidate(0));
        assert!(context.reset_candidate(1));
        assert!(!context.reset_candidate(9999));
    }

    #[test]
    fn selections_are_learned_as_user_phrases() {
        let (observer, mut context) = session(InputType::FullPinyin);
        insert_keys(&mut context, "aazhi");
        // 阿 then the 阿紫 default: committing teaches 阿阿紫.
        assert!(context.select_candidate(4));
        assert!(context.select_candidate(0));
        assert_eq!("阿阿紫", observer.committed());

        insert_keys(&mut context, "aazhi");
        // The special phrase still leads, but the learned concatenation
        // now beats the lexicon's 啊啊之.
        assert_eq!("AA制", context.conversion_text());
        let learned = context.get_candidate(1).unwrap();
        assert_eq!("阿阿紫", learned.text);
        assert_eq!(CandidateType::UserPhrase, learned.kind);
    }

    #[test]
    fn traditional_mode_converts_emitted_text() {
        let (observer, mut context) = session(InputType::FullPinyin);
        assert!(context.set_property(PropertyName::ModeSimp, PropertyValue::Bool(false)));
        insert_keys(&mut context, "mama");
        assert_eq!("媽媽", context.conversion_text());
        assert_eq!("媽媽", context.get_candidate(0).unwrap().text);
        assert!(context.select_candidate(0));
        assert_eq!("媽媽", observer.committed());
    }

    #[test]
    fn properties_are_typed_and_scoped() {
        let (_observer, mut context) = session(InputType::FullPinyin);
        assert_eq!(
            PropertyValue::U32(crate::Options::default().bits()),
            context.get_property(PropertyName::ConversionOption)
        );
        assert_eq!(
            PropertyValue::Null,
            context.get_property(PropertyName::DoublePinyinSchema)
        );
        assert!(!context.set_property(PropertyName::ModeSimp, PropertyValue::U32(1)));
        assert!(!context.set_property(PropertyName::DoublePinyinSchema, PropertyValue::U32(0)));

        let (_observer, mut double) = session(InputType::DoublePinyin);
        assert_eq!(
            PropertyValue::U32(0),
            double.get_property(PropertyName::DoublePinyinSchema)
        );
        assert!(double.set_property(PropertyName::DoublePinyinSchema, PropertyValue::U32(5)));
        assert!(!double.set_property(PropertyName::DoublePinyinSchema, PropertyValue::U32(6)));
    }

    #[test]
    fn reset_is_idempotent() {
        let (_observer, mut context) = session(InputType::FullPinyin);
        insert_keys(&mut context, "nihao");
        context.reset();
        let cursor = context.cursor();
        let input = context.input_text().to_string();
        context.reset();
        assert_eq!(cursor, context.cursor());
        assert_eq!(input, context.input_text());
        assert_eq!("", context.auxiliary_text());
    }

    #[test]
    fn incomplete_input_reaches_phrases() {
        let (_observer, mut context) = session(InputType::FullPinyin);
        insert_keys(&mut context, "aazh");
        assert_eq!("a a zh|", context.auxiliary_text());
        assert_eq!("啊啊之", context.conversion_text());
    }
}
