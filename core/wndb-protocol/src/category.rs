use rkyv::{Archive, Deserialize, Serialize};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum PartOfSpeech {
    Adjective = 0,
    Adverb = 1,
    Noun = 2,
    Verb = 3,
}

impl PartOfSpeech {
    pub const ALL: [PartOfSpeech; 4] = [
        PartOfSpeech::Noun,
        PartOfSpeech::Verb,
        PartOfSpeech::Adjective,
        PartOfSpeech::Adverb,
    ];

    /// Maps the `ss_type`/`pos` code of the data and index files.
    /// Adjective satellites (`s`) are folded into adjectives.
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'n' => Some(PartOfSpeech::Noun),
            'v' => Some(PartOfSpeech::Verb),
            'a' | 's' => Some(PartOfSpeech::Adjective),
            'r' => Some(PartOfSpeech::Adverb),
            _ => None,
        }
    }

    pub fn code(self) -> char {
        match self {
            PartOfSpeech::Noun => 'n',
            PartOfSpeech::Verb => 'v',
            PartOfSpeech::Adjective => 'a',
            PartOfSpeech::Adverb => 'r',
        }
    }

    /// Suffix of the `data.*` / `index.*` files holding this category.
    pub fn file_suffix(self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Adjective => "adj",
            PartOfSpeech::Adverb => "adv",
        }
    }

    pub fn from_file_suffix(suffix: &str) -> Option<Self> {
        PartOfSpeech::ALL.into_iter().find(|pos| pos.file_suffix() == suffix)
    }
}

impl core::fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.file_suffix())
    }
}

/// Declares a lexicographer-file classification. Discriminants are the
/// `lex_filenum` values used by the data files.
macro_rules! lex_categories {
    ($(#[$meta:meta])* $name:ident { $($variant:ident = $num:literal => $file:literal,)+ }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Archive, Serialize, Deserialize)]
        #[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
        #[archive(check_bytes)]
        #[repr(u8)]
        pub enum $name {
            $($variant = $num,)+
        }

        impl $name {
            pub fn from_lex_file(number: u8) -> Option<Self> {
                match number {
                    $($num => Some($name::$variant),)+
                    _ => None,
                }
            }

            pub fn lex_file_number(self) -> u8 {
                self as u8
            }

            pub fn file_name(self) -> &'static str {
                match self {
                    $($name::$variant => $file,)+
                }
            }
        }
    };
}

lex_categories!(
    /// Adjective classes (head/satellite, pertainyms, participles).
    AdjectiveCategory {
        All = 0 => "adj.all",
        Pertainyms = 1 => "adj.pert",
        Participles = 44 => "adj.ppl",
    }
);

lex_categories!(
    AdverbCategory {
        All = 2 => "adv.all",
    }
);

lex_categories!(
    NounCategory {
        Tops = 3 => "noun.Tops",
        Act = 4 => "noun.act",
        Animal = 5 => "noun.animal",
        Artifact = 6 => "noun.artifact",
        Attribute = 7 => "noun.attribute",
        Body = 8 => "noun.body",
        Cognition = 9 => "noun.cognition",
        Communication = 10 => "noun.communication",
        Event = 11 => "noun.event",
        Feeling = 12 => "noun.feeling",
        Food = 13 => "noun.food",
        Group = 14 => "noun.group",
        Location = 15 => "noun.location",
        Motive = 16 => "noun.motive",
        Object = 17 => "noun.object",
        Person = 18 => "noun.person",
        Phenomenon = 19 => "noun.phenomenon",
        Plant = 20 => "noun.plant",
        Possession = 21 => "noun.possession",
        Process = 22 => "noun.process",
        Quantity = 23 => "noun.quantity",
        Relation = 24 => "noun.relation",
        Shape = 25 => "noun.shape",
        State = 26 => "noun.state",
        Substance = 27 => "noun.substance",
        Time = 28 => "noun.time",
    }
);

lex_categories!(
    VerbCategory {
        Body = 29 => "verb.body",
        Change = 30 => "verb.change",
        Cognition = 31 => "verb.cognition",
        Communication = 32 => "verb.communication",
        Competition = 33 => "verb.competition",
        Consumption = 34 => "verb.consumption",
        Contact = 35 => "verb.contact",
        Creation = 36 => "verb.creation",
        Emotion = 37 => "verb.emotion",
        Motion = 38 => "verb.motion",
        Perception = 39 => "verb.perception",
        Possession = 40 => "verb.possession",
        Social = 41 => "verb.social",
        Stative = 42 => "verb.stative",
        Weather = 43 => "verb.weather",
    }
);

/// Syntactic position restriction written as a lemma suffix in `data.adj`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum AdjectivePosition {
    /// `(a)`
    Prenominal = 0,
    /// `(p)`
    Predicative = 1,
    /// `(ip)`
    Postnominal = 2,
}

impl AdjectivePosition {
    pub fn from_marker(marker: &str) -> Option<Self> {
        match marker {
            "a" => Some(AdjectivePosition::Prenominal),
            "p" => Some(AdjectivePosition::Predicative),
            "ip" => Some(AdjectivePosition::Postnominal),
            _ => None,
        }
    }

    pub fn marker(self) -> &'static str {
        match self {
            AdjectivePosition::Prenominal => "a",
            AdjectivePosition::Predicative => "p",
            AdjectivePosition::Postnominal => "ip",
        }
    }
}
