use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use rkyv::{Archive, Deserialize, Serialize};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

use crate::category::{
    AdjectiveCategory, AdjectivePosition, AdverbCategory, NounCategory, PartOfSpeech, VerbCategory,
};
use crate::ids::{FrameNumber, LexId, SynsetOffset};
use crate::relation::{RelationSet, Relations};

/// Fields shared by every word variant.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct Word {
    /// Lemma as stored in the data files (spaces written as `_`).
    pub lemma: String,
    pub lex_id: LexId,
    pub relations: Relations,
}

impl Word {
    pub fn new(lemma: impl Into<String>, lex_id: LexId, relations: Relations) -> Self {
        Self {
            lemma: lemma.into(),
            lex_id,
            relations,
        }
    }

    /// Lemma with `_` turned back into spaces.
    pub fn display_lemma(&self) -> String {
        self.lemma.replace('_', " ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct Adjective {
    pub word: Word,
    pub position: Option<AdjectivePosition>,
}

#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct Adverb {
    pub word: Word,
}

#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct Noun {
    pub word: Word,
}

#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct Verb {
    pub word: Word,
    /// Generic sentence frames this sense can appear in, in record order.
    pub frames: Vec<FrameNumber>,
}

/// Access to the common part of a category-specific word.
pub trait AsWord {
    fn as_word(&self) -> &Word;
}

macro_rules! impl_as_word {
    ($($ty:ident),+) => {
        $(impl AsWord for $ty {
            fn as_word(&self) -> &Word {
                &self.word
            }
        })+
    };
}

impl_as_word!(Adjective, Adverb, Noun, Verb);

macro_rules! define_synset {
    ($name:ident, $word:ident, $words_fn:ident, $category:ident, $pos:expr, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
        #[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
        #[archive(check_bytes)]
        pub struct $name {
            offset: SynsetOffset,
            gloss: String,
            words: Vec<$word>,
            category: $category,
        }

        impl $name {
            pub fn new(offset: SynsetOffset, gloss: impl Into<String>, words: Vec<$word>, category: $category) -> Self {
                Self {
                    offset,
                    gloss: gloss.into(),
                    words,
                    category,
                }
            }

            pub fn offset(&self) -> SynsetOffset {
                self.offset
            }

            pub fn gloss(&self) -> &str {
                &self.gloss
            }

            pub fn part_of_speech(&self) -> PartOfSpeech {
                $pos
            }

            pub fn $words_fn(&self) -> &[$word] {
                &self.words
            }

            pub fn category(&self) -> $category {
                self.category
            }
        }
    };
}

define_synset!(AdjectiveSynset, Adjective, adjectives, AdjectiveCategory, PartOfSpeech::Adjective, "Synonym set of adjectives.");
define_synset!(AdverbSynset, Adverb, adverbs, AdverbCategory, PartOfSpeech::Adverb, "Synonym set of adverbs.");
define_synset!(NounSynset, Noun, nouns, NounCategory, PartOfSpeech::Noun, "Synonym set of nouns.");
define_synset!(VerbSynset, Verb, verbs, VerbCategory, PartOfSpeech::Verb, "Synonym set of verbs.");

/// Lexicographer classification of a synonym set, tagged by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SynsetCategory {
    Adjective(AdjectiveCategory),
    Adverb(AdverbCategory),
    Noun(NounCategory),
    Verb(VerbCategory),
}

impl SynsetCategory {
    pub fn part_of_speech(self) -> PartOfSpeech {
        match self {
            SynsetCategory::Adjective(_) => PartOfSpeech::Adjective,
            SynsetCategory::Adverb(_) => PartOfSpeech::Adverb,
            SynsetCategory::Noun(_) => PartOfSpeech::Noun,
            SynsetCategory::Verb(_) => PartOfSpeech::Verb,
        }
    }

    pub fn file_name(self) -> &'static str {
        match self {
            SynsetCategory::Adjective(c) => c.file_name(),
            SynsetCategory::Adverb(c) => c.file_name(),
            SynsetCategory::Noun(c) => c.file_name(),
            SynsetCategory::Verb(c) => c.file_name(),
        }
    }
}

/// A synonym set of any grammatical category.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(tag = "part_of_speech", rename_all = "lowercase"))]
#[archive(check_bytes)]
pub enum Synset {
    Adjective(AdjectiveSynset),
    Adverb(AdverbSynset),
    Noun(NounSynset),
    Verb(VerbSynset),
}

impl Synset {
    pub fn offset(&self) -> SynsetOffset {
        match self {
            Synset::Adjective(s) => s.offset(),
            Synset::Adverb(s) => s.offset(),
            Synset::Noun(s) => s.offset(),
            Synset::Verb(s) => s.offset(),
        }
    }

    pub fn gloss(&self) -> &str {
        match self {
            Synset::Adjective(s) => s.gloss(),
            Synset::Adverb(s) => s.gloss(),
            Synset::Noun(s) => s.gloss(),
            Synset::Verb(s) => s.gloss(),
        }
    }

    pub fn part_of_speech(&self) -> PartOfSpeech {
        match self {
            Synset::Adjective(_) => PartOfSpeech::Adjective,
            Synset::Adverb(_) => PartOfSpeech::Adverb,
            Synset::Noun(_) => PartOfSpeech::Noun,
            Synset::Verb(_) => PartOfSpeech::Verb,
        }
    }

    pub fn category(&self) -> SynsetCategory {
        match self {
            Synset::Adjective(s) => SynsetCategory::Adjective(s.category()),
            Synset::Adverb(s) => SynsetCategory::Adverb(s.category()),
            Synset::Noun(s) => SynsetCategory::Noun(s.category()),
            Synset::Verb(s) => SynsetCategory::Verb(s.category()),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Synset::Adjective(s) => s.adjectives().len(),
            Synset::Adverb(s) => s.adverbs().len(),
            Synset::Noun(s) => s.nouns().len(),
            Synset::Verb(s) => s.verbs().len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Member words in definition order.
    pub fn words(&self) -> Box<dyn Iterator<Item = &Word> + '_> {
        match self {
            Synset::Adjective(s) => Box::new(s.adjectives().iter().map(AsWord::as_word)),
            Synset::Adverb(s) => Box::new(s.adverbs().iter().map(AsWord::as_word)),
            Synset::Noun(s) => Box::new(s.nouns().iter().map(AsWord::as_word)),
            Synset::Verb(s) => Box::new(s.verbs().iter().map(AsWord::as_word)),
        }
    }

    pub fn word(&self, index: usize) -> Option<&Word> {
        match self {
            Synset::Adjective(s) => s.adjectives().get(index).map(AsWord::as_word),
            Synset::Adverb(s) => s.adverbs().get(index).map(AsWord::as_word),
            Synset::Noun(s) => s.nouns().get(index).map(AsWord::as_word),
            Synset::Verb(s) => s.verbs().get(index).map(AsWord::as_word),
        }
    }

    /// Every relation kind used by any member word.
    pub fn relation_kinds(&self) -> RelationSet {
        self.words()
            .fold(RelationSet::empty(), |set, word| set | word.relations.kinds())
    }
}

/// Entry of an `index.*` file: which synonym sets a lemma belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct WordIndex {
    pub lemma: String,
    pub part_of_speech: PartOfSpeech,
    pub relations: RelationSet,
    pub tagged_sense_count: u32,
    /// Ordered by sense frequency, most frequent first.
    pub synset_offsets: Vec<SynsetOffset>,
}

impl WordIndex {
    pub fn sense_count(&self) -> usize {
        self.synset_offsets.len()
    }
}
