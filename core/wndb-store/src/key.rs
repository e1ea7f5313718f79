use std::fmt::Display;
use std::hash::Hash;

use wndb_protocol::SynsetOffset;

/// How a raw line of a database file is treated while indexing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<K> {
    /// License header, blank or otherwise not a record.
    Filler,
    Record(K),
    /// Shaped like a record, but its leading field is not a usable key.
    InvalidKey(String),
}

/// Key taken from the leading field of a record line.
pub trait LineKey: Eq + Hash + Display + Sized {
    fn classify(line: &str) -> LineKind<Self>;
}

/// Records start at the first column; header lines are indented.
fn fields(line: &str) -> Option<std::str::SplitWhitespace<'_>> {
    if line.starts_with(char::is_whitespace) {
        return None;
    }
    Some(line.split_whitespace())
}

impl LineKey for SynsetOffset {
    fn classify(line: &str) -> LineKind<Self> {
        let Some(field) = fields(line).and_then(|mut fields| fields.next()) else {
            return LineKind::Filler;
        };
        if !field.bytes().all(|b| b.is_ascii_digit()) {
            return LineKind::Filler;
        }
        match field.parse() {
            Ok(offset) => LineKind::Record(SynsetOffset::new(offset)),
            Err(_) => LineKind::InvalidKey(field.to_owned()),
        }
    }
}

/// A lemma line carries a part-of-speech code and a decimal synset count
/// after the lemma; anything else is filler.
impl LineKey for String {
    fn classify(line: &str) -> LineKind<Self> {
        let Some(mut fields) = fields(line) else {
            return LineKind::Filler;
        };
        let (Some(lemma), Some(part_of_speech), Some(synset_count)) =
            (fields.next(), fields.next(), fields.next())
        else {
            return LineKind::Filler;
        };

        let is_code = matches!(part_of_speech, "n" | "v" | "a" | "s" | "r");
        let is_count = synset_count.bytes().all(|b| b.is_ascii_digit());
        if is_code && is_count {
            LineKind::Record(lemma.to_owned())
        } else {
            LineKind::Filler
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_keys() {
        assert_eq!(
            SynsetOffset::classify("00000030 03 n"),
            LineKind::Record(SynsetOffset::new(30))
        );
        assert_eq!(SynsetOffset::classify("  1 This software"), LineKind::Filler);
        assert_eq!(SynsetOffset::classify("header1"), LineKind::Filler);
        assert_eq!(SynsetOffset::classify(""), LineKind::Filler);
    }

    #[test]
    fn test_offset_overflow_is_invalid() {
        assert_eq!(
            SynsetOffset::classify("4294967296 03 n 01 x 0 000 | g"),
            LineKind::InvalidKey("4294967296".to_string())
        );
        assert_eq!(
            SynsetOffset::classify("4294967295 03 n"),
            LineKind::Record(SynsetOffset::new(u32::MAX))
        );
    }

    #[test]
    fn test_lemma_keys() {
        assert_eq!(
            String::classify("entity n 1 1 ~ 1 1 00001740"),
            LineKind::Record("entity".to_string())
        );
        assert_eq!(String::classify("  2 license"), LineKind::Filler);
        assert_eq!(String::classify(""), LineKind::Filler);
    }

    #[test]
    fn test_unindented_headers_are_not_lemmas() {
        assert_eq!(String::classify("header1"), LineKind::Filler);
        assert_eq!(String::classify("header2 of the file"), LineKind::Filler);
        assert_eq!(String::classify("entity x 1"), LineKind::Filler);
    }
}
