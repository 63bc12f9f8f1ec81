//! Engine lifecycle.
//!
//! An [`Ime`] owns the process-wide resources every session shares: the
//! phrase store (system lexicon plus the learned user layer) and the
//! special phrase table. Open it once, hand out contexts, and drop or
//! [`finalize`](Ime::finalize) it at shutdown to flush the user layer.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Weak};

use thiserror::Error;
use tracing::warn;

use crate::context::{Context, ContextObserver, InputType};
use crate::dictionary::store::{PhraseStore, StoreError};
use crate::dictionary::{Lexicon, LexiconError};
use crate::special::SpecialPhraseTable;

/// The packaged starter lexicon.
const DEFAULT_LEXICON: &str = include_str!("../data/lexicon.tsv");
/// Learned phrase frequencies, in the user cache directory.
const USER_DB_FILE: &str = "user-phrases.db";
/// Optional user lexicon, in the user config directory.
const USER_LEXICON_FILE: &str = "lexicon.tsv";

/// The error type returned when the engine cannot be opened.
#[derive(Debug, Error)]
pub enum ImeError {
    #[error("cannot create {}", path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("packaged lexicon is invalid")]
    Lexicon(#[from] LexiconError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("no user cache or config directory on this system")]
    NoUserDirs,
}

pub struct Ime {
    store: Arc<PhraseStore>,
    specials: Arc<SpecialPhraseTable>,
}

impl Ime {
    /// Opens the engine. `user_cache_dir` receives the learned phrase
    /// store; `user_config_dir` may hold a `phrases.txt` and a
    /// `lexicon.tsv` that extend the packaged data. Both directories are
    /// created when missing.
    pub fn open(user_cache_dir: &Path, user_config_dir: &Path) -> Result<Ime, ImeError> {
        for path in [user_cache_dir, user_config_dir] {
            std::fs::create_dir_all(path).map_err(|source| ImeError::CreateDir {
                path: path.to_path_buf(),
                source,
            })?;
        }

        let mut lexicon = Lexicon::parse(DEFAULT_LEXICON)?;
        let user_lexicon = user_config_dir.join(USER_LEXICON_FILE);
        if user_lexicon.is_file() {
            match std::fs::read_to_string(&user_lexicon) {
                Ok(source) => match Lexicon::parse(&source) {
                    Ok(extra) => lexicon.merge(extra),
                    Err(err) => warn!("ignoring {}: {err}", user_lexicon.display()),
                },
                Err(err) => warn!("cannot read {}: {err}", user_lexicon.display()),
            }
        }

        let store = PhraseStore::open(lexicon, Some(&user_cache_dir.join(USER_DB_FILE)))?;
        let specials = Arc::new(SpecialPhraseTable::load(user_config_dir));
        Ok(Ime { store, specials })
    }

    /// Opens the engine under the platform's user cache and config
    /// directories.
    pub fn open_default() -> Result<Ime, ImeError> {
        let cache_dir = dirs_next::cache_dir()
            .ok_or(ImeError::NoUserDirs)?
            .join("pinzhu");
        let config_dir = dirs_next::config_dir()
            .ok_or(ImeError::NoUserDirs)?
            .join("pinzhu");
        Ime::open(&cache_dir, &config_dir)
    }

    /// Creates an editing session. The session holds the observer
    /// weakly; keep the `Arc` alive as long as the session runs.
    pub fn create_context<O>(&self, kind: InputType, observer: &Arc<O>) -> Context
    where
        O: ContextObserver + 'static,
    {
        let observer: Arc<dyn ContextObserver> = observer.clone();
        let observer: Weak<dyn ContextObserver> = Arc::downgrade(&observer);
        Context::new(
            kind,
            observer,
            Arc::clone(&self.store),
            Arc::clone(&self.specials),
        )
    }

    /// Flushes the user layer and stops the background writer. Dropping
    /// the engine does the same.
    pub fn finalize(self) {}
}

impl Drop for Ime {
    fn drop(&mut self) {
        self.store.shutdown();
    }
}
