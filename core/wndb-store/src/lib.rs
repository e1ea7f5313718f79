//! Key → line index over the flat files of the lexical database.
//!
//! A store is built in one pass and is read-only afterwards, so a loaded
//! store can be shared between readers without locking.

pub mod error;
pub mod key;

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt::Display;
use std::fs::File;
use std::hash::Hash;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, trace};

pub use error::StoreError;
pub use key::{LineKey, LineKind};

#[derive(Debug, Clone)]
pub struct IndexedLineStore<K: LineKey> {
    lines: Vec<String>,
    index: HashMap<K, usize>,
}

impl<K: LineKey> IndexedLineStore<K> {
    /// Builds the index from raw lines. Lines that do not start with a key
    /// (license header, blank lines) are skipped.
    pub fn load<I, S>(lines: I) -> Result<Self, StoreError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut store = Self {
            lines: Vec::new(),
            index: HashMap::new(),
        };
        let mut skipped = 0usize;

        for (line_number, line) in lines.into_iter().enumerate() {
            if !store.insert(line.into(), line_number + 1)? {
                skipped += 1;
            }
        }

        debug!(records = store.lines.len(), skipped, "line store loaded");
        Ok(store)
    }

    /// Same as [`IndexedLineStore::load`], reading lines from `reader`.
    /// I/O failures are returned as they are.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, StoreError> {
        let mut store = Self {
            lines: Vec::new(),
            index: HashMap::new(),
        };
        let mut skipped = 0usize;

        for (line_number, line) in reader.lines().enumerate() {
            if !store.insert(line?, line_number + 1)? {
                skipped += 1;
            }
        }

        debug!(records = store.lines.len(), skipped, "line store loaded");
        Ok(store)
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "opening line store");
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Returns `Ok(false)` for filler lines.
    fn insert(&mut self, line: String, line_number: usize) -> Result<bool, StoreError> {
        let key = match K::classify(&line) {
            LineKind::Record(key) => key,
            LineKind::Filler => {
                trace!(line_number, "skipping filler line");
                return Ok(false);
            }
            LineKind::InvalidKey(key) => {
                return Err(StoreError::InvalidKey {
                    key,
                    line: line_number,
                });
            }
        };

        if self.index.contains_key(&key) {
            return Err(StoreError::DuplicateKey {
                key: key.to_string(),
                line: line_number,
            });
        }

        self.index.insert(key, self.lines.len());
        self.lines.push(line);
        Ok(true)
    }

    /// The raw line stored under `key`.
    pub fn lookup<Q>(&self, key: &Q) -> Result<&str, StoreError>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + Display + ?Sized,
    {
        self.get(key).ok_or_else(|| StoreError::UnknownKey {
            key: key.to_string(),
        })
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&str>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(key).map(|&i| self.lines[i].as_str())
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Record lines in file order.
    pub fn lines(&self) -> impl Iterator<Item = &str> + '_ {
        self.lines.iter().map(String::as_str)
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.index.keys()
    }
}

/// Store over a `data.*` file.
pub type SynsetLineStore = IndexedLineStore<wndb_protocol::SynsetOffset>;

/// Store over an `index.*` file.
pub type LemmaLineStore = IndexedLineStore<String>;
