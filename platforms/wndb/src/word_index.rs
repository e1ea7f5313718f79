//! Lemma → [`WordIndex`] lookups with an explicit release contract.
//!
//! Every successful [`WordIndexRepository::find_word_index`] hands out a
//! [`WordIndexLease`]. Parsed entries stay pooled while at least one lease is
//! alive; [`WordIndexRepository::dispose`] releases a lease explicitly and
//! dropping it releases it on every other path.

use std::collections::HashMap;
use std::io;
use std::ops::Deref;
use std::path::Path;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::trace;
use wndb_assembler::{SynsetDataMapper, WordNetMapper};
use wndb_parser::parse_index_line;
use wndb_protocol::{PartOfSpeech, RelationSet, SynsetOffset, WordIndex};
use wndb_store::LemmaLineStore;

use crate::error::{Result, WordNetError};

/// Source of raw `index.*` lines.
pub trait WordIndexLoader {
    /// `Ok(None)` when the lemma is not in the index.
    fn find_lemma_index_data(&self, lemma: &str) -> io::Result<Option<String>>;
}

/// Loader over an `index.*` file held in memory.
#[derive(Debug, Clone)]
pub struct StoreWordIndexLoader {
    store: LemmaLineStore,
}

impl StoreWordIndexLoader {
    pub fn new(store: LemmaLineStore) -> Self {
        Self { store }
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(LemmaLineStore::open(path)?))
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

impl WordIndexLoader for StoreWordIndexLoader {
    fn find_lemma_index_data(&self, lemma: &str) -> io::Result<Option<String>> {
        Ok(self.store.get(lemma).map(str::to_owned))
    }
}

/// Index files store lemmas lowercase with `_` for spaces.
pub fn normalize_lemma(lemma: &str) -> String {
    lemma
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .to_lowercase()
}

struct PooledEntry {
    index: Arc<WordIndex>,
    leases: usize,
}

type Pool = Mutex<HashMap<String, PooledEntry>>;

pub struct WordIndexRepository<L = StoreWordIndexLoader> {
    part_of_speech: PartOfSpeech,
    loader: L,
    mapper: WordNetMapper,
    pool: Pool,
}

impl<L: WordIndexLoader> WordIndexRepository<L> {
    pub fn new(part_of_speech: PartOfSpeech, loader: L) -> Self {
        Self {
            part_of_speech,
            loader,
            mapper: WordNetMapper,
            pool: Mutex::new(HashMap::new()),
        }
    }

    pub fn part_of_speech(&self) -> PartOfSpeech {
        self.part_of_speech
    }

    /// `Ok(None)` when the lemma is absent. Loader failures are returned as
    /// [`WordNetError::Io`].
    pub fn find_word_index(&self, lemma: &str) -> Result<Option<WordIndexLease<'_>>> {
        let key = normalize_lemma(lemma);

        if let Some(entry) = self.pool.lock().get_mut(&key) {
            entry.leases += 1;
            return Ok(Some(WordIndexLease {
                pool: &self.pool,
                index: Arc::clone(&entry.index),
                key,
            }));
        }

        let Some(line) = self.loader.find_lemma_index_data(&key)? else {
            return Ok(None);
        };
        let index = Arc::new(self.parse_entry(&line)?);

        let mut pool = self.pool.lock();
        let entry = pool.entry(key.clone()).or_insert(PooledEntry { index, leases: 0 });
        entry.leases += 1;
        trace!(lemma = %key, leases = entry.leases, "word index leased");

        Ok(Some(WordIndexLease {
            pool: &self.pool,
            index: Arc::clone(&entry.index),
            key,
        }))
    }

    /// Releases a lease obtained from this repository. The lease cannot be
    /// used afterwards.
    pub fn dispose(&self, lease: WordIndexLease<'_>) {
        debug_assert!(std::ptr::eq(lease.pool, &self.pool), "lease from another repository");
        drop(lease);
    }

    /// Number of entries currently held for outstanding leases.
    pub fn pooled(&self) -> usize {
        self.pool.lock().len()
    }

    fn parse_entry(&self, line: &str) -> Result<WordIndex> {
        let parsed = parse_index_line(line)?;
        let part_of_speech = self.mapper.map_part_of_speech(parsed.part_of_speech)?;
        if part_of_speech != self.part_of_speech {
            return Err(WordNetError::IndexCategoryMismatch {
                lemma: parsed.lemma,
                expected: self.part_of_speech,
                found: part_of_speech,
            });
        }

        let mut relations = RelationSet::empty();
        for symbol in &parsed.pointer_symbols {
            relations |= self
                .mapper
                .map_relation_pointer_type(symbol, part_of_speech)?
                .flag();
        }

        Ok(WordIndex {
            lemma: parsed.lemma,
            part_of_speech,
            relations,
            tagged_sense_count: parsed.tagged_sense_count,
            synset_offsets: parsed.synset_offsets.into_iter().map(SynsetOffset::new).collect(),
        })
    }
}

/// Handle on a pooled [`WordIndex`]; releases its pool slot when dropped.
pub struct WordIndexLease<'r> {
    pool: &'r Pool,
    key: String,
    index: Arc<WordIndex>,
}

impl Deref for WordIndexLease<'_> {
    type Target = WordIndex;

    fn deref(&self) -> &WordIndex {
        &self.index
    }
}

impl std::fmt::Debug for WordIndexLease<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WordIndexLease")
            .field("key", &self.key)
            .field("index", &self.index)
            .finish()
    }
}

impl Drop for WordIndexLease<'_> {
    fn drop(&mut self) {
        let mut pool = self.pool.lock();
        if let Some(entry) = pool.get_mut(&self.key) {
            entry.leases -= 1;
            if entry.leases == 0 {
                pool.remove(&self.key);
                trace!(lemma = %self.key, "word index evicted");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repository() -> WordIndexRepository {
        let store = LemmaLineStore::load([
            "  1 This software and database is being provided to you",
            "entity n 1 1 ~ 1 1 00000030  ",
            "physical_entity n 1 2 @ + 1 0 00000218  ",
            "bogus n 1 1 & 1 0 00000999",
        ])
        .unwrap();
        WordIndexRepository::new(PartOfSpeech::Noun, StoreWordIndexLoader::new(store))
    }

    #[test]
    fn test_find_and_dispose() {
        let repo = repository();

        let entry = repo.find_word_index("Physical Entity").unwrap().unwrap();
        assert_eq!(entry.lemma, "physical_entity");
        assert_eq!(entry.part_of_speech, PartOfSpeech::Noun);
        assert_eq!(entry.relations, RelationSet::HYPERNYM | RelationSet::DERIVATIONALLY_RELATED);
        assert_eq!(entry.synset_offsets, vec![SynsetOffset::new(218)]);
        assert_eq!(entry.sense_count(), 1);
        assert_eq!(repo.pooled(), 1);

        repo.dispose(entry);
        assert_eq!(repo.pooled(), 0);
    }

    #[test]
    fn test_entries_are_shared_while_leased() {
        let repo = repository();

        let first = repo.find_word_index("entity").unwrap().unwrap();
        let second = repo.find_word_index("ENTITY").unwrap().unwrap();
        assert!(Arc::ptr_eq(&first.index, &second.index));
        assert_eq!(repo.pooled(), 1);

        repo.dispose(first);
        assert_eq!(repo.pooled(), 1);
        assert_eq!(second.synset_offsets, vec![SynsetOffset::new(30)]);

        // Dropping releases like dispose does
        drop(second);
        assert_eq!(repo.pooled(), 0);
    }

    #[test]
    fn test_absent_lemma() {
        let repo = repository();
        assert!(repo.find_word_index("unicorn").unwrap().is_none());
        assert_eq!(repo.pooled(), 0);
    }

    #[test]
    fn test_entry_from_another_category() {
        let store = LemmaLineStore::load(["breathe v 1 1 * 1 1 00001740"]).unwrap();
        let repo = WordIndexRepository::new(PartOfSpeech::Noun, StoreWordIndexLoader::new(store));

        match repo.find_word_index("breathe").unwrap_err() {
            WordNetError::IndexCategoryMismatch {
                lemma,
                expected,
                found,
            } => {
                assert_eq!(lemma, "breathe");
                assert_eq!(expected, PartOfSpeech::Noun);
                assert_eq!(found, PartOfSpeech::Verb);
            }
            other => panic!("Expected an index category mismatch, got {other:?}"),
        }
        assert_eq!(repo.pooled(), 0);
    }

    #[test]
    fn test_bad_entry_is_an_error() {
        let repo = repository();
        let err = repo.find_word_index("bogus").unwrap_err();
        assert!(matches!(err, WordNetError::Mapping(_)));
        assert_eq!(repo.pooled(), 0);
    }

    struct Unreadable;

    impl WordIndexLoader for Unreadable {
        fn find_lemma_index_data(&self, _lemma: &str) -> io::Result<Option<String>> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "index.noun"))
        }
    }

    #[test]
    fn test_loader_failure_propagates() {
        let repo = WordIndexRepository::new(PartOfSpeech::Noun, Unreadable);
        let err = repo.find_word_index("entity").unwrap_err();

        match err {
            WordNetError::Io(io) => assert_eq!(io.kind(), io::ErrorKind::PermissionDenied),
            other => panic!("Expected an I/O error, got {other:?}"),
        }
    }

    #[test]
    fn test_normalize_lemma() {
        assert_eq!(normalize_lemma("  Physical   Entity "), "physical_entity");
        assert_eq!(normalize_lemma("entity"), "entity");
    }
}
