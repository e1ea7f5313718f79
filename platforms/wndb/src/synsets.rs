use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, warn};
use wndb_assembler::{SynsetAssembler, SynsetDataMapper, WordNetMapper};
use wndb_parser::parse_synset_line;
use wndb_protocol::{PartOfSpeech, Synset, SynsetOffset};
use wndb_store::SynsetLineStore;

use crate::error::{Result, WordNetError};

/// Synsets of one `data.*` file, assembled on first access and kept after.
pub struct SynsetRepository<M = WordNetMapper> {
    part_of_speech: PartOfSpeech,
    store: SynsetLineStore,
    assembler: SynsetAssembler<M>,
    cache: Mutex<HashMap<SynsetOffset, Arc<Synset>>>,
}

impl SynsetRepository<WordNetMapper> {
    pub fn new(part_of_speech: PartOfSpeech, store: SynsetLineStore) -> Self {
        Self::with_assembler(part_of_speech, store, SynsetAssembler::new())
    }

    pub fn open(part_of_speech: PartOfSpeech, path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(part_of_speech, SynsetLineStore::open(path)?))
    }
}

impl<M: SynsetDataMapper> SynsetRepository<M> {
    pub fn with_assembler(
        part_of_speech: PartOfSpeech,
        store: SynsetLineStore,
        assembler: SynsetAssembler<M>,
    ) -> Self {
        Self {
            part_of_speech,
            store,
            assembler,
            cache: Mutex::new(HashMap::new()),
        }
    }

    pub fn part_of_speech(&self) -> PartOfSpeech {
        self.part_of_speech
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn offsets(&self) -> impl Iterator<Item = SynsetOffset> + '_ {
        self.store.keys().copied()
    }

    pub fn find_synset(&self, offset: SynsetOffset) -> Result<Arc<Synset>> {
        if let Some(synset) = self.cache.lock().get(&offset) {
            return Ok(Arc::clone(synset));
        }

        let synset = Arc::new(self.assemble(offset)?);
        let mut cache = self.cache.lock();
        Ok(Arc::clone(cache.entry(offset).or_insert(synset)))
    }

    /// Assembles every record of the file, ordered by offset.
    ///
    /// With `skip_invalid` set, records that fail to assemble are logged and
    /// left out. Otherwise the first failure is returned.
    pub fn load_all(&self, skip_invalid: bool) -> Result<BTreeMap<SynsetOffset, Arc<Synset>>> {
        let mut synsets = BTreeMap::new();
        let mut skipped = 0usize;

        for offset in self.offsets() {
            match self.find_synset(offset) {
                Ok(synset) => {
                    synsets.insert(offset, synset);
                }
                Err(err) if skip_invalid => {
                    warn!(%offset, part_of_speech = %self.part_of_speech, error = %err, "skipping invalid synset");
                    skipped += 1;
                }
                Err(err) => return Err(err),
            }
        }

        debug!(
            part_of_speech = %self.part_of_speech,
            loaded = synsets.len(),
            skipped,
            "synsets loaded"
        );
        Ok(synsets)
    }

    fn assemble(&self, offset: SynsetOffset) -> Result<Synset> {
        let line = self.store.lookup(&offset)?;
        let record = parse_synset_line(line)?;
        let synset = self.assembler.assemble(&record)?;

        // Satellites ('s') are filed with adjectives
        if synset.part_of_speech() != self.part_of_speech {
            return Err(WordNetError::CategoryMismatch {
                offset,
                expected: self.part_of_speech,
                found: synset.part_of_speech(),
            });
        }
        Ok(synset)
    }
}

#[cfg(test)]
mod tests {
    use wndb_protocol::{NounCategory, SynsetCategory};
    use wndb_store::StoreError;

    use super::*;

    const ENTITY: &str = "00000030 03 n 01 entity 0 003 ~ 00001740 n 0000 ~ 00002137 n 0000 ~ 04431553 n 0000 | that which is perceived or known or inferred to have its own distinct existence (living or nonliving)  ";
    const PHYSICAL_ENTITY: &str = "00000218 03 n 01 physical_entity 0 002 @ 00000030 n 0000 + 00001740 n 0101 | an entity that has physical existence  ";
    const BROKEN: &str = "00000500 03 n 01 broken 0 001 @ 00000030 n 0300 | points past the only word  ";
    const VERB: &str = "00000700 42 v 01 exist 0 000 01 + 02 00 | have an existence, be extant  ";

    fn repository(lines: &[&str]) -> SynsetRepository {
        let store = SynsetLineStore::load(lines.iter().copied()).unwrap();
        SynsetRepository::new(PartOfSpeech::Noun, store)
    }

    #[test]
    fn test_find_synset_is_cached() {
        let repo = repository(&[ENTITY, PHYSICAL_ENTITY]);

        let first = repo.find_synset(SynsetOffset::new(218)).unwrap();
        assert_eq!(first.gloss(), "an entity that has physical existence");
        assert_eq!(first.category(), SynsetCategory::Noun(NounCategory::Tops));
        assert_eq!(first.word(0).unwrap().lemma, "physical_entity");

        let second = repo.find_synset(SynsetOffset::new(218)).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_unknown_offset() {
        let repo = repository(&[ENTITY]);
        let err = repo.find_synset(SynsetOffset::new(31)).unwrap_err();
        assert!(matches!(err, WordNetError::Store(StoreError::UnknownKey { .. })));
    }

    #[test]
    fn test_category_mismatch() {
        let repo = repository(&[ENTITY, VERB]);
        let err = repo.find_synset(SynsetOffset::new(700)).unwrap_err();

        match err {
            WordNetError::CategoryMismatch { expected, found, .. } => {
                assert_eq!(expected, PartOfSpeech::Noun);
                assert_eq!(found, PartOfSpeech::Verb);
            }
            other => panic!("Expected a category mismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_load_all_skips_invalid() {
        let repo = repository(&["  1 license header", PHYSICAL_ENTITY, BROKEN, ENTITY]);

        let synsets = repo.load_all(true).unwrap();
        let offsets: Vec<u32> = synsets.keys().map(|o| o.get()).collect();
        assert_eq!(offsets, vec![30, 218]);
    }

    #[test]
    fn test_load_all_strict() {
        let repo = repository(&[ENTITY, BROKEN]);
        let err = repo.load_all(false).unwrap_err();

        match err {
            WordNetError::Synset(err) => assert_eq!(err.offset, SynsetOffset::new(500)),
            other => panic!("Expected a synset error, got {other:?}"),
        }
    }
}
