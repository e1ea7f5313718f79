use alloc::vec::Vec;

use bitflags::bitflags;
use rkyv::{Archive, Deserialize, Serialize};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

use crate::category::PartOfSpeech;
use crate::ids::SynsetOffset;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum RelationPointerType {
    Antonym = 0,
    Hypernym = 1,
    InstanceHypernym = 2,
    Hyponym = 3,
    InstanceHyponym = 4,
    MemberHolonym = 5,
    SubstanceHolonym = 6,
    PartHolonym = 7,
    MemberMeronym = 8,
    SubstanceMeronym = 9,
    PartMeronym = 10,
    Attribute = 11,
    DerivationallyRelated = 12,
    DomainTopic = 13,
    MemberOfDomainTopic = 14,
    DomainRegion = 15,
    MemberOfDomainRegion = 16,
    DomainUsage = 17,
    MemberOfDomainUsage = 18,
    Entailment = 19,
    Cause = 20,
    AlsoSee = 21,
    VerbGroup = 22,
    SimilarTo = 23,
    ParticipleOfVerb = 24,
    Pertainym = 25,
    DerivedFromAdjective = 26,
}

impl RelationPointerType {
    /// Maps a pointer symbol as written in the files of `source`.
    /// The same symbol may carry a different relation per category (`\`).
    pub fn from_symbol(symbol: &str, source: PartOfSpeech) -> Option<Self> {
        use PartOfSpeech::*;
        use RelationPointerType::*;

        let shared = match symbol {
            "!" => Some(Antonym),
            ";c" => Some(DomainTopic),
            ";r" => Some(DomainRegion),
            ";u" => Some(DomainUsage),
            _ => None,
        };
        if shared.is_some() {
            return shared;
        }

        match (source, symbol) {
            (Noun, "@") | (Verb, "@") => Some(Hypernym),
            (Noun, "~") | (Verb, "~") => Some(Hyponym),
            (Noun, "+") | (Verb, "+") | (Adjective, "+") => Some(DerivationallyRelated),
            (Noun, "=") | (Adjective, "=") => Some(Attribute),
            (Noun, "@i") => Some(InstanceHypernym),
            (Noun, "~i") => Some(InstanceHyponym),
            (Noun, "#m") => Some(MemberHolonym),
            (Noun, "#s") => Some(SubstanceHolonym),
            (Noun, "#p") => Some(PartHolonym),
            (Noun, "%m") => Some(MemberMeronym),
            (Noun, "%s") => Some(SubstanceMeronym),
            (Noun, "%p") => Some(PartMeronym),
            (Noun, "-c") => Some(MemberOfDomainTopic),
            (Noun, "-r") => Some(MemberOfDomainRegion),
            (Noun, "-u") => Some(MemberOfDomainUsage),
            (Verb, "*") => Some(Entailment),
            (Verb, ">") => Some(Cause),
            (Verb, "^") | (Adjective, "^") => Some(AlsoSee),
            (Verb, "$") => Some(VerbGroup),
            (Adjective, "&") => Some(SimilarTo),
            (Adjective, "<") => Some(ParticipleOfVerb),
            (Adjective, "\\") => Some(Pertainym),
            (Adverb, "\\") => Some(DerivedFromAdjective),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        use RelationPointerType::*;

        match self {
            Antonym => "!",
            Hypernym => "@",
            InstanceHypernym => "@i",
            Hyponym => "~",
            InstanceHyponym => "~i",
            MemberHolonym => "#m",
            SubstanceHolonym => "#s",
            PartHolonym => "#p",
            MemberMeronym => "%m",
            SubstanceMeronym => "%s",
            PartMeronym => "%p",
            Attribute => "=",
            DerivationallyRelated => "+",
            DomainTopic => ";c",
            MemberOfDomainTopic => "-c",
            DomainRegion => ";r",
            MemberOfDomainRegion => "-r",
            DomainUsage => ";u",
            MemberOfDomainUsage => "-u",
            Entailment => "*",
            Cause => ">",
            AlsoSee => "^",
            VerbGroup => "$",
            SimilarTo => "&",
            ParticipleOfVerb => "<",
            Pertainym | DerivedFromAdjective => "\\",
        }
    }

    pub fn flag(self) -> RelationSet {
        RelationSet::from_bits_truncate(1 << (self as u8))
    }
}

bitflags! {
    /// Set of relation kinds, one bit per [`RelationPointerType`] discriminant.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    #[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
    pub struct RelationSet: u32 {
        const ANTONYM = 1 << 0;
        const HYPERNYM = 1 << 1;
        const INSTANCE_HYPERNYM = 1 << 2;
        const HYPONYM = 1 << 3;
        const INSTANCE_HYPONYM = 1 << 4;
        const MEMBER_HOLONYM = 1 << 5;
        const SUBSTANCE_HOLONYM = 1 << 6;
        const PART_HOLONYM = 1 << 7;
        const MEMBER_MERONYM = 1 << 8;
        const SUBSTANCE_MERONYM = 1 << 9;
        const PART_MERONYM = 1 << 10;
        const ATTRIBUTE = 1 << 11;
        const DERIVATIONALLY_RELATED = 1 << 12;
        const DOMAIN_TOPIC = 1 << 13;
        const MEMBER_OF_DOMAIN_TOPIC = 1 << 14;
        const DOMAIN_REGION = 1 << 15;
        const MEMBER_OF_DOMAIN_REGION = 1 << 16;
        const DOMAIN_USAGE = 1 << 17;
        const MEMBER_OF_DOMAIN_USAGE = 1 << 18;
        const ENTAILMENT = 1 << 19;
        const CAUSE = 1 << 20;
        const ALSO_SEE = 1 << 21;
        const VERB_GROUP = 1 << 22;
        const SIMILAR_TO = 1 << 23;
        const PARTICIPLE_OF_VERB = 1 << 24;
        const PERTAINYM = 1 << 25;
        const DERIVED_FROM_ADJECTIVE = 1 << 26;
    }
}

// rkyv support for RelationSet: archived as its raw bits
impl Archive for RelationSet {
    type Archived = u32;
    type Resolver = ();

    unsafe fn resolve(&self, _pos: usize, _resolver: Self::Resolver, out: *mut Self::Archived) {
        out.write(self.bits());
    }
}

impl<S: rkyv::Fallible + ?Sized> Serialize<S> for RelationSet {
    fn serialize(&self, _serializer: &mut S) -> Result<Self::Resolver, S::Error> {
        Ok(())
    }
}

impl<D: rkyv::Fallible + ?Sized> Deserialize<RelationSet, D> for u32 {
    fn deserialize(&self, _deserializer: &mut D) -> Result<RelationSet, D::Error> {
        Ok(RelationSet::from_bits_truncate(*self))
    }
}

/// One directed, typed edge towards another synonym set. The target is kept
/// as coordinates only; resolving it is up to whoever holds the target index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct RelationPointer {
    pub pointer_type: RelationPointerType,
    pub target_part_of_speech: PartOfSpeech,
    pub target_offset: SynsetOffset,
    /// 1-based word number inside the target set; `None` targets the whole set.
    pub target_word_number: Option<u8>,
}

impl RelationPointer {
    pub fn new(
        pointer_type: RelationPointerType,
        target_part_of_speech: PartOfSpeech,
        target_offset: SynsetOffset,
        target_word_number: Option<u8>,
    ) -> Self {
        Self {
            pointer_type,
            target_part_of_speech,
            target_offset,
            target_word_number,
        }
    }

    /// 0-based position of the targeted word, if the pointer is lexical.
    pub fn target_word_index(&self) -> Option<usize> {
        self.target_word_number
            .filter(|n| *n > 0)
            .map(|n| usize::from(n) - 1)
    }

    pub fn is_lexical(&self) -> bool {
        self.target_word_number.is_some()
    }
}

/// Ordered relation pointers of a single word. Order follows the source record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[archive(check_bytes)]
pub struct Relations {
    pointers: Vec<RelationPointer>,
}

impl Relations {
    pub fn new(pointers: Vec<RelationPointer>) -> Self {
        Self { pointers }
    }

    pub fn len(&self) -> usize {
        self.pointers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pointers.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, RelationPointer> {
        self.pointers.iter()
    }

    pub fn as_slice(&self) -> &[RelationPointer] {
        &self.pointers
    }

    pub fn of_type(&self, pointer_type: RelationPointerType) -> impl Iterator<Item = &RelationPointer> + '_ {
        self.pointers
            .iter()
            .filter(move |pointer| pointer.pointer_type == pointer_type)
    }

    /// Kinds of relation present in this collection.
    pub fn kinds(&self) -> RelationSet {
        self.pointers
            .iter()
            .fold(RelationSet::empty(), |set, pointer| set | pointer.pointer_type.flag())
    }
}

impl From<Vec<RelationPointer>> for Relations {
    fn from(pointers: Vec<RelationPointer>) -> Self {
        Self::new(pointers)
    }
}

impl<'a> IntoIterator for &'a Relations {
    type Item = &'a RelationPointer;
    type IntoIter = core::slice::Iter<'a, RelationPointer>;

    fn into_iter(self) -> Self::IntoIter {
        self.pointers.iter()
    }
}
