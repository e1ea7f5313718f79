//! Read-only access to a lexical database shipped as `data.*` / `index.*`
//! files: lemma lookups, synset assembly and pointer resolution.

pub mod config;
pub mod error;
pub mod synsets;
pub mod word_index;

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use tracing::info;
use wndb_protocol::{PartOfSpeech, RelationPointer, Synset, SynsetOffset, Word};

pub use config::WordNetConfig;
pub use error::{Result, WordNetError};
pub use synsets::SynsetRepository;
pub use word_index::{
    normalize_lemma, StoreWordIndexLoader, WordIndexLease, WordIndexLoader, WordIndexRepository,
};

/// Target of a [`RelationPointer`], looked up in its synset.
#[derive(Debug, Clone)]
pub struct ResolvedPointer {
    pub synset: Arc<Synset>,
    /// 0-based word of `synset`, `None` when the pointer targets all of it.
    pub word_index: Option<usize>,
}

impl ResolvedPointer {
    pub fn word(&self) -> Option<&Word> {
        self.word_index.and_then(|index| self.synset.word(index))
    }
}

/// One sense of a searched lemma.
#[derive(Debug, Clone)]
pub struct Sense {
    pub part_of_speech: PartOfSpeech,
    pub synset: Arc<Synset>,
}

pub struct WordNet {
    config: WordNetConfig,
    synsets: HashMap<PartOfSpeech, SynsetRepository>,
    word_indexes: HashMap<PartOfSpeech, WordIndexRepository>,
}

impl WordNet {
    /// Reads the data and index files of every configured category.
    pub fn open(config: WordNetConfig) -> Result<Self> {
        let mut synsets = HashMap::new();
        let mut word_indexes = HashMap::new();

        for &part_of_speech in &config.parts_of_speech {
            let data = SynsetRepository::open(part_of_speech, config.data_path(part_of_speech))?;
            let index = StoreWordIndexLoader::open(config.index_path(part_of_speech))?;
            info!(
                %part_of_speech,
                synsets = data.len(),
                lemmas = index.len(),
                "category opened"
            );

            synsets.insert(part_of_speech, data);
            word_indexes.insert(
                part_of_speech,
                WordIndexRepository::new(part_of_speech, index),
            );
        }

        Ok(Self {
            config,
            synsets,
            word_indexes,
        })
    }

    pub fn config(&self) -> &WordNetConfig {
        &self.config
    }

    pub fn synsets(&self, part_of_speech: PartOfSpeech) -> Result<&SynsetRepository> {
        self.synsets
            .get(&part_of_speech)
            .ok_or(WordNetError::MissingCategory(part_of_speech))
    }

    pub fn word_indexes(&self, part_of_speech: PartOfSpeech) -> Result<&WordIndexRepository> {
        self.word_indexes
            .get(&part_of_speech)
            .ok_or(WordNetError::MissingCategory(part_of_speech))
    }

    pub fn find_synset(&self, part_of_speech: PartOfSpeech, offset: SynsetOffset) -> Result<Arc<Synset>> {
        self.synsets(part_of_speech)?.find_synset(offset)
    }

    /// Every synset of a category; invalid records follow
    /// [`WordNetConfig::skip_invalid_records`].
    pub fn load_all(&self, part_of_speech: PartOfSpeech) -> Result<BTreeMap<SynsetOffset, Arc<Synset>>> {
        self.synsets(part_of_speech)?
            .load_all(self.config.skip_invalid_records)
    }

    pub fn resolve(&self, pointer: &RelationPointer) -> Result<ResolvedPointer> {
        let synset = self.find_synset(pointer.target_part_of_speech, pointer.target_offset)?;
        let word_index = pointer.target_word_index();

        if let (Some(index), Some(number)) = (word_index, pointer.target_word_number) {
            if index >= synset.len() {
                return Err(WordNetError::UnknownTargetWord {
                    offset: pointer.target_offset,
                    number,
                });
            }
        }

        Ok(ResolvedPointer { synset, word_index })
    }

    /// Senses of `lemma` in every opened category, in configuration order
    /// and most frequent first within a category.
    pub fn search(&self, lemma: &str) -> Result<Vec<Sense>> {
        let mut senses = Vec::new();

        for &part_of_speech in &self.config.parts_of_speech {
            let repository = self.word_indexes(part_of_speech)?;
            let Some(entry) = repository.find_word_index(lemma)? else {
                continue;
            };

            let found: Result<Vec<_>> = entry
                .synset_offsets
                .iter()
                .map(|&offset| self.find_synset(part_of_speech, offset))
                .collect();
            repository.dispose(entry);

            senses.extend(found?.into_iter().map(|synset| Sense {
                part_of_speech,
                synset,
            }));
        }

        Ok(senses)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use tempfile::TempDir;
    use wndb_protocol::{NounCategory, RelationPointerType, SynsetCategory, VerbCategory};
    use wndb_store::StoreError;

    use super::*;

    const LICENSE: &str = "  1 This software and database is being provided to you, the LICENSEE, by\n  2 Princeton University under the following license.\n";

    const DATA_NOUN: &str = "\
00000030 03 n 01 entity 0 001 ~ 00000218 n 0000 | that which is perceived or known or inferred to have its own distinct existence  
00000218 03 n 01 physical_entity 0 002 @ 00000030 n 0000 @ 00000030 n 0102 | an entity that has physical existence  
00000500 03 n 01 broken 0 001 @ 00000030 n 0300 | points past the only word  
";

    const INDEX_NOUN: &str = "\
entity n 1 1 ~ 1 1 00000030  
physical_entity n 1 1 @ 1 0 00000218  
broken n 1 1 @ 1 0 00000500  
";

    const DATA_VERB: &str = "\
00000400 42 v 02 exist 0 be 0 001 + 00000030 n 0101 02 + 02 00 + 04 02 | have an existence, be extant  
";

    const INDEX_VERB: &str = "\
exist v 1 1 + 1 1 00000400  
be v 1 1 + 1 1 00000400  
";

    fn write(dir: &Path, name: &str, body: &str) {
        fs::write(dir.join(name), format!("{LICENSE}{body}")).unwrap();
    }

    fn fixture() -> TempDir {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "data.noun", DATA_NOUN);
        write(dir.path(), "index.noun", INDEX_NOUN);
        write(dir.path(), "data.verb", DATA_VERB);
        write(dir.path(), "index.verb", INDEX_VERB);
        dir
    }

    fn open(dir: &TempDir) -> WordNet {
        let config = WordNetConfig::new(dir.path())
            .with_parts_of_speech([PartOfSpeech::Noun, PartOfSpeech::Verb]);
        WordNet::open(config).unwrap()
    }

    #[test]
    fn test_search() {
        let dir = fixture();
        let wordnet = open(&dir);

        let senses = wordnet.search("Physical Entity").unwrap();
        assert_eq!(senses.len(), 1);
        assert_eq!(senses[0].part_of_speech, PartOfSpeech::Noun);
        assert_eq!(senses[0].synset.offset(), SynsetOffset::new(218));
        assert_eq!(
            senses[0].synset.category(),
            SynsetCategory::Noun(NounCategory::Tops)
        );

        // Leases are handed back once the senses are collected
        assert_eq!(wordnet.word_indexes(PartOfSpeech::Noun).unwrap().pooled(), 0);
    }

    #[test]
    fn test_search_across_categories() {
        let dir = fixture();
        let wordnet = open(&dir);

        let senses = wordnet.search("be").unwrap();
        assert_eq!(senses.len(), 1);
        assert_eq!(senses[0].part_of_speech, PartOfSpeech::Verb);

        let verb = &senses[0].synset;
        assert_eq!(verb.category(), SynsetCategory::Verb(VerbCategory::Stative));
        assert_eq!(verb.len(), 2);
        match verb.as_ref() {
            Synset::Verb(synset) => {
                let frames: Vec<Vec<u8>> = synset
                    .verbs()
                    .iter()
                    .map(|v| v.frames.iter().map(|f| f.get()).collect())
                    .collect();
                assert_eq!(frames, vec![vec![2], vec![2, 4]]);
            }
            other => panic!("Expected a verb synset, got {other:?}"),
        }

        assert!(wordnet.search("unicorn").unwrap().is_empty());
    }

    #[test]
    fn test_resolve() {
        let dir = fixture();
        let wordnet = open(&dir);

        let physical = wordnet
            .find_synset(PartOfSpeech::Noun, SynsetOffset::new(218))
            .unwrap();
        let pointers = physical.word(0).unwrap().relations.clone();
        assert_eq!(pointers.len(), 2);

        let whole = wordnet.resolve(&pointers.as_slice()[0]).unwrap();
        assert_eq!(whole.synset.offset(), SynsetOffset::new(30));
        assert!(whole.word().is_none());

        // Word 2 of a one-word synset
        let err = wordnet.resolve(&pointers.as_slice()[1]).unwrap_err();
        assert!(matches!(
            err,
            WordNetError::UnknownTargetWord { number: 2, .. }
        ));
    }

    #[test]
    fn test_resolve_lexical_pointer() {
        let dir = fixture();
        let wordnet = open(&dir);

        let exist = wordnet
            .find_synset(PartOfSpeech::Verb, SynsetOffset::new(400))
            .unwrap();
        let derived = exist.word(0).unwrap().relations.clone();
        let pointer = derived
            .of_type(RelationPointerType::DerivationallyRelated)
            .next()
            .unwrap();

        let resolved = wordnet.resolve(pointer).unwrap();
        assert_eq!(resolved.word().unwrap().lemma, "entity");
    }

    #[test]
    fn test_load_all_follows_config() {
        let dir = fixture();

        let lenient = open(&dir);
        let loaded = lenient.load_all(PartOfSpeech::Noun).unwrap();
        assert_eq!(loaded.len(), 2);

        let strict = WordNet::open(
            WordNetConfig::new(dir.path())
                .with_parts_of_speech([PartOfSpeech::Noun])
                .with_skip_invalid_records(false),
        )
        .unwrap();
        assert!(matches!(
            strict.load_all(PartOfSpeech::Noun),
            Err(WordNetError::Synset(_))
        ));
    }

    #[test]
    fn test_missing_category() {
        let dir = fixture();
        let wordnet = open(&dir);

        assert!(matches!(
            wordnet.find_synset(PartOfSpeech::Adverb, SynsetOffset::new(30)),
            Err(WordNetError::MissingCategory(PartOfSpeech::Adverb))
        ));
    }

    #[test]
    fn test_open_missing_files() {
        let dir = fixture();
        let config = WordNetConfig::new(dir.path()).with_parts_of_speech([PartOfSpeech::Adjective]);
        match WordNet::open(config) {
            Err(WordNetError::Io(io)) => assert_eq!(io.kind(), std::io::ErrorKind::NotFound),
            Err(other) => panic!("Expected an I/O error, got {other:?}"),
            Ok(_) => panic!("Expected an I/O error"),
        }
    }

    #[test]
    fn test_corrupt_data_file() {
        let dir = fixture();
        write(dir.path(), "data.noun", "4294967296 03 n 01 x 0 000 | g\n");
        let config = WordNetConfig::new(dir.path()).with_parts_of_speech([PartOfSpeech::Noun]);

        assert!(matches!(
            WordNet::open(config),
            Err(WordNetError::Store(StoreError::InvalidKey { .. }))
        ));
    }
}
