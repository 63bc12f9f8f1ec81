//! The process-wide phrase store.
//!
//! One [`PhraseStore`] is shared by every session. It layers the learned
//! per-user frequencies over the system lexicon, serves ranked candidate
//! queries through a restartable [`Query`] cursor, and persists the user
//! layer to sqlite from a background thread, debounced so that a burst of
//! commits costs one write.

use std::collections::HashMap;
use std::path::Path;
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex, MutexGuard, Weak};
use std::thread::JoinHandle;
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, warn};

use crate::parser::Options;
use crate::syllable::{SyllableKey, SyllableToken};
use crate::MAX_PHRASE_LEN;

use super::sqlite::{UserDictionary, UserDictionaryError};
use super::{Dictionary, Lexicon, Phrase, SyllablePattern};

/// Quiet period after the last commit before the user layer is written
/// out.
const FLUSH_DELAY: Duration = Duration::from_secs(5);

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to start the store flush thread")]
    Spawn(#[from] std::io::Error),
}

enum Signal {
    Touch,
    Shutdown,
}

type UserKey = (Vec<SyllableKey>, String);

struct StoreInner {
    lexicon: Lexicon,
    user: UserDictionary,
    user_freqs: HashMap<UserKey, u32>,
    dirty: bool,
}

pub struct PhraseStore {
    inner: Mutex<StoreInner>,
    flush_tx: Mutex<Option<Sender<Signal>>>,
    flusher: Mutex<Option<JoinHandle<()>>>,
}

impl PhraseStore {
    /// Opens the store over a system lexicon and the user dictionary at
    /// `path`. Unreadable user data degrades to an empty in-memory layer
    /// with a warning; the engine keeps working without persistence.
    pub fn open(lexicon: Lexicon, path: Option<&Path>) -> Result<Arc<PhraseStore>, StoreError> {
        let user = match path {
            Some(path) => UserDictionary::open(path).unwrap_or_else(|err| {
                warn!("cannot open user dictionary {}: {err}", path.display());
                in_memory_user()
            }),
            None => in_memory_user(),
        };
        let mut user_freqs = HashMap::new();
        match user.load_all() {
            Ok(phrases) => {
                for phrase in phrases {
                    user_freqs.insert((phrase.keys, phrase.text), phrase.user_freq);
                }
            }
            Err(err) => warn!("cannot load user dictionary: {err}"),
        }

        let store = Arc::new(PhraseStore {
            inner: Mutex::new(StoreInner {
                lexicon,
                user,
                user_freqs,
                dirty: false,
            }),
            flush_tx: Mutex::new(None),
            flusher: Mutex::new(None),
        });

        let (tx, rx) = mpsc::channel();
        let weak = Arc::downgrade(&store);
        let handle = std::thread::Builder::new()
            .name("pinzhu-userdb".into())
            .spawn(move || flusher_loop(weak, rx))?;
        *lock(&store.flush_tx) = Some(tx);
        *lock(&store.flusher) = Some(handle);
        Ok(store)
    }

    /// Phrases of exactly `patterns.len()` syllables, ranked by
    /// `(user_freq, freq)` descending, with `offset` leading entries
    /// skipped.
    fn lookup_ranked(&self, patterns: &[SyllablePattern], offset: usize, limit: usize) -> Vec<Phrase> {
        let inner = lock(&self.inner);
        let mut hits = inner.lexicon.lookup(patterns);
        for hit in &mut hits {
            let key = (hit.keys.clone(), hit.text.clone());
            hit.user_freq = inner.user_freqs.get(&key).copied().unwrap_or(0);
        }
        for ((keys, text), &user_freq) in &inner.user_freqs {
            if user_freq == 0 || !super::matches_pattern(patterns, keys) {
                continue;
            }
            if hits.iter().any(|hit| hit.text == *text && hit.keys == *keys) {
                continue;
            }
            hits.push(Phrase {
                text: text.clone(),
                keys: keys.clone(),
                freq: 0,
                user_freq,
            });
        }
        hits.sort_by(|a, b| {
            (b.user_freq, b.freq)
                .cmp(&(a.user_freq, a.freq))
                .then_with(|| a.text.cmp(&b.text))
        });
        hits.into_iter().skip(offset).take(limit).collect()
    }

    /// Remembers a committed selection: every phrase gains one use, and a
    /// multi-phrase selection also teaches its concatenation.
    pub fn commit(&self, phrases: &[Phrase]) {
        if phrases.is_empty() {
            return;
        }
        {
            let mut inner = lock(&self.inner);
            for phrase in phrases {
                let key = (phrase.keys.clone(), phrase.text.clone());
                *inner.user_freqs.entry(key).or_insert(0) += 1;
            }
            if phrases.len() > 1 {
                let mut joined = phrases[0].clone();
                for phrase in &phrases[1..] {
                    joined.push(phrase);
                }
                if joined.len() <= MAX_PHRASE_LEN {
                    *inner
                        .user_freqs
                        .entry((joined.keys, joined.text))
                        .or_insert(0) += 1;
                }
            }
            inner.dirty = true;
        }
        self.touch();
    }

    /// Forgets a learned phrase; it falls back to lexicon-only ranking.
    pub fn remove(&self, phrase: &Phrase) {
        {
            let mut inner = lock(&self.inner);
            let key = (phrase.keys.clone(), phrase.text.clone());
            if inner.user_freqs.remove(&key).is_none() {
                return;
            }
            inner.dirty = true;
        }
        self.touch();
    }

    fn touch(&self) {
        if let Some(tx) = lock(&self.flush_tx).as_ref() {
            let _ = tx.send(Signal::Touch);
        }
    }

    /// Writes the user layer out if it changed since the last flush.
    pub fn flush(&self) -> Result<(), UserDictionaryError> {
        let mut inner = lock(&self.inner);
        if !inner.dirty {
            return Ok(());
        }
        let entries: Vec<(Vec<SyllableKey>, String, u32)> = inner
            .user_freqs
            .iter()
            .map(|((keys, text), &freq)| (keys.clone(), text.clone(), freq))
            .collect();
        inner.user.replace_all(
            entries
                .iter()
                .map(|(keys, text, freq)| (keys.as_slice(), text.as_str(), *freq)),
        )?;
        inner.dirty = false;
        debug!("flushed {} user phrases", entries.len());
        Ok(())
    }

    /// Flushes and stops the background thread. Called once at teardown.
    pub fn shutdown(&self) {
        let tx = lock(&self.flush_tx).take();
        if let Some(tx) = tx {
            let _ = tx.send(Signal::Shutdown);
        }
        let handle = lock(&self.flusher).take();
        if let Some(handle) = handle {
            let _ = handle.join();
        }
        if let Err(err) = self.flush() {
            warn!("final user dictionary flush failed: {err}");
        }
    }
}

fn in_memory_user() -> UserDictionary {
    // The fallback cannot fail: an in-memory database needs no I/O.
    UserDictionary::open_in_memory().expect("in-memory sqlite")
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn flusher_loop(store: Weak<PhraseStore>, rx: mpsc::Receiver<Signal>) {
    let flush = |store: &Weak<PhraseStore>| {
        if let Some(store) = store.upgrade() {
            if let Err(err) = store.flush() {
                warn!("user dictionary flush failed: {err}");
            }
        }
    };
    loop {
        match rx.recv() {
            Ok(Signal::Touch) => loop {
                match rx.recv_timeout(FLUSH_DELAY) {
                    Ok(Signal::Touch) => continue,
                    Ok(Signal::Shutdown) => {
                        flush(&store);
                        return;
                    }
                    Err(RecvTimeoutError::Timeout) => {
                        flush(&store);
                        break;
                    }
                    Err(RecvTimeoutError::Disconnected) => {
                        flush(&store);
                        return;
                    }
                }
            },
            Ok(Signal::Shutdown) | Err(_) => {
                flush(&store);
                return;
            }
        }
    }
}

/// A restartable cursor over one candidate query.
///
/// `fill` hands out phrases longest-first: all matches covering the full
/// pattern, then all matches one syllable shorter, down to single
/// syllables. Within one length the store's ranking applies. The cursor
/// is exhausted once `fill` returns less than asked for.
pub struct Query {
    store: Arc<PhraseStore>,
    patterns: Vec<SyllablePattern>,
    remaining: usize,
    offset: usize,
}

impl Query {
    /// Starts a query over `tokens[begin..begin + len]`.
    pub fn new(
        store: Arc<PhraseStore>,
        tokens: &[SyllableToken],
        begin: usize,
        len: usize,
        options: Options,
    ) -> Query {
        let patterns = tokens[begin..begin + len]
            .iter()
            .map(|token| SyllablePattern::from_token(token, options))
            .collect::<Vec<_>>();
        let remaining = patterns.len().min(MAX_PHRASE_LEN);
        Query {
            store,
            patterns,
            remaining,
            offset: 0,
        }
    }

    /// Appends up to `count` more phrases to `out`; returns how many were
    /// added.
    pub fn fill(&mut self, out: &mut Vec<Phrase>, count: usize) -> usize {
        let mut filled = 0;
        while filled < count && self.remaining > 0 {
            let want = count - filled;
            let batch = self
                .store
                .lookup_ranked(&self.patterns[..self.remaining], self.offset, want);
            let got = batch.len();
            out.extend(batch);
            filled += got;
            if got < want {
                self.remaining -= 1;
                self.offset = 0;
            } else {
                self.offset += got;
            }
        }
        filled
    }
}
