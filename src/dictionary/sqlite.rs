//! The sqlite-backed user phrase dictionary.
//!
//! Learned frequencies live in a single `user_phrase_v1` table keyed by
//! the encoded syllable sequence and the phrase text. The store keeps the
//! working copy in memory and rewrites the table wholesale on flush; user
//! dictionaries stay small, and one transaction per flush keeps the file
//! consistent under crashes.

use std::path::Path;

use rusqlite::{params, Connection, Error as RusqliteError};
use thiserror::Error;

use crate::syllable::SyllableKey;

use super::Phrase;

#[derive(Debug, Error)]
pub enum UserDictionaryError {
    #[error("sqlite error")]
    Sqlite {
        #[from]
        source: RusqliteError,
    },
    #[error("corrupt syllable key in user dictionary")]
    CorruptKey,
}

pub struct UserDictionary {
    conn: Connection,
}

impl UserDictionary {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<UserDictionary, UserDictionaryError> {
        let conn = Connection::open(path)?;
        Self::initialize_tables(&conn)?;
        Ok(UserDictionary { conn })
    }

    pub fn open_in_memory() -> Result<UserDictionary, UserDictionaryError> {
        let conn = Connection::open_in_memory()?;
        Self::initialize_tables(&conn)?;
        Ok(UserDictionary { conn })
    }

    fn initialize_tables(conn: &Connection) -> Result<(), UserDictionaryError> {
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS user_phrase_v1 (
                syllables BLOB NOT NULL,
                phrase TEXT NOT NULL,
                user_freq INTEGER NOT NULL,
                PRIMARY KEY (syllables, phrase)
            ) WITHOUT ROWID",
            [],
        )?;
        Ok(())
    }

    /// Reads every learned phrase back into memory.
    pub fn load_all(&self) -> Result<Vec<Phrase>, UserDictionaryError> {
        let mut stmt = self
            .conn
            .prepare("SELECT syllables, phrase, user_freq FROM user_phrase_v1")?;
        let mut rows = stmt.query([])?;
        let mut phrases = Vec::new();
        while let Some(row) = rows.next()? {
            let blob: Vec<u8> = row.get(0)?;
            let text: String = row.get(1)?;
            let user_freq: u32 = row.get(2)?;
            let keys = decode_keys(&blob)?;
            phrases.push(Phrase {
                text,
                keys,
                freq: 0,
                user_freq,
            });
        }
        Ok(phrases)
    }

    /// Replaces the stored table with the given entries, atomically.
    pub fn replace_all<'a, I>(&mut self, entries: I) -> Result<(), UserDictionaryError>
    where
        I: IntoIterator<Item = (&'a [SyllableKey], &'a str, u32)>,
    {
        let tx = self.conn.transaction()?;
        {
            tx.execute("DELETE FROM user_phrase_v1", [])?;
            let mut stmt = tx.prepare_cached(
                "INSERT INTO user_phrase_v1 (syllables, phrase, user_freq) VALUES (?, ?, ?)",
            )?;
            for (keys, text, user_freq) in entries {
                stmt.execute(params![encode_keys(keys), text, user_freq])?;
            }
        }
        tx.commit()?;
        Ok(())
    }
}

pub(crate) fn encode_keys(keys: &[SyllableKey]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(keys.len() * 2);
    for key in keys {
        bytes.extend_from_slice(&key.encode());
    }
    bytes
}

fn decode_keys(bytes: &[u8]) -> Result<Vec<SyllableKey>, UserDictionaryError> {
    if bytes.len() % 2 != 0 {
        return Err(UserDictionaryError::CorruptKey);
    }
    bytes
        .chunks_exact(2)
        .map(|pair| {
            SyllableKey::decode([pair[0], pair[1]])
                .map_err(|_| UserDictionaryError::CorruptKey)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use tempfile::NamedTempFile;

    use crate::syllable::Syllable;

    use super::UserDictionary;

    fn keys(spelled: &[&str]) -> Vec<crate::syllable::SyllableKey> {
        spelled
            .iter()
            .map(|name| Syllable::from_text(name).unwrap().key())
            .collect()
    }

    #[test]
    fn roundtrips_through_a_file() {
        let temp_path = NamedTempFile::new()
            .expect("unable to create tempfile")
            .into_temp_path();

        let ni_hao = keys(&["ni", "hao"]);
        let zai = keys(&["zai"]);
        {
            let mut dict = UserDictionary::open(&temp_path).expect("unable to open database");
            dict.replace_all([
                (ni_hao.as_slice(), "你好", 3),
                (zai.as_slice(), "在", 1),
            ])
            .expect("write failed");
        }

        let dict = UserDictionary::open(&temp_path).expect("unable to reopen database");
        let mut loaded = dict.load_all().expect("load failed");
        loaded.sort_by(|a, b| a.text.cmp(&b.text));
        assert_eq!(2, loaded.len());
        assert_eq!("你好", loaded[0].text);
        assert_eq!(ni_hao, loaded[0].keys);
        assert_eq!(3, loaded[0].user_freq);
        assert_eq!(0, loaded[0].freq);
    }

    #[test]
    fn replace_all_is_destructive() {
        let mut dict = UserDictionary::open_in_memory().unwrap();
        let ni = keys(&["ni"]);
        dict.replace_all([(ni.as_slice(), "你", 5)]).unwrap();
        dict.replace_all([(ni.as_slice(), "泥", 1)]).unwrap();
        let loaded = dict.load_all().unwrap();
        assert_eq!(1, loaded.len());
        assert_eq!("泥", loaded[0].text);
    }
}
