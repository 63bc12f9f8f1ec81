//! The pinzhu (拼注) Chinese phonetic conversion engine.
//!
//! Pinzhu converts streams of ASCII keystrokes that stand for Mandarin
//! phonetic input into Chinese phrases. Three input styles are supported:
//! full Hanyu Pinyin, double pinyin (six keyboard schemas), and Bopomofo
//! (four keyboard layouts). Keystrokes are segmented into syllables,
//! syllable sequences are converted to ranked phrase candidates from a
//! frequency lexicon, and selected phrases are remembered in a per-user
//! frequency store.
//!
//! The entry point is [`Ime`]: open it once with the user's cache and
//! config directories, then create one [`Context`] per editing session.
//! A context owns the raw input buffer, the parsed syllables, the preedit
//! view model and the candidate window; the host receives change
//! notifications through a [`ContextObserver`].
//!
//! ```no_run
//! # use std::sync::Arc;
//! use pinzhu::{Ime, InputType, ContextObserver, Context};
//!
//! struct Host;
//! impl ContextObserver for Host {
//!     fn commit_text(&self, _context: &Context, text: &str) {
//!         println!("commit: {text}");
//!     }
//! }
//!
//! # fn main() -> Result<(), pinzhu::ime::ImeError> {
//! let ime = Ime::open_default()?;
//! let host = Arc::new(Host);
//! let mut context = ime.create_context(InputType::FullPinyin, &host);
//! for ch in "nihao".chars() {
//!     context.insert(ch);
//! }
//! context.select_candidate(0);
//! # Ok(())
//! # }
//! ```

pub mod context;
pub mod dictionary;
pub mod editor;
pub mod ime;
pub mod parser;
pub mod simptrad;
pub mod special;
pub mod syllable;

pub use context::{
    Candidate, CandidateType, CommitType, Context, ContextObserver, InputType, PropertyName,
    PropertyValue,
};
pub use ime::Ime;
pub use parser::Options;

/// Upper bound on the raw ASCII input buffer of one session.
pub const MAX_PINYIN_LEN: usize = 64;

/// Upper bound on the number of syllables in one conversion unit.
pub const MAX_PHRASE_LEN: usize = 16;
