use nom::{
    character::complete::{space0, space1},
    combinator::all_consuming,
    multi::count,
    sequence::{preceded, terminated},
    Finish, IResult,
};

use crate::error::ParseError;
use crate::fields::{code, decimal, field};
use crate::record::ParsedWordIndex;

/// Tokenizes one line of an `index.*` file.
pub fn parse_index_line(line: &str) -> Result<ParsedWordIndex, ParseError> {
    let (_, record) = all_consuming(terminated(index_record, space0))(line)
        .finish()
        .map_err(|e| ParseError::malformed(line, e))?;

    if record.sense_count as usize != record.synset_offsets.len() {
        return Err(ParseError::CountMismatch {
            line: line.to_string(),
            field: "sense_cnt",
            declared: record.sense_count as usize,
            found: record.synset_offsets.len(),
        });
    }

    Ok(record)
}

fn index_record(input: &str) -> IResult<&str, ParsedWordIndex> {
    let (input, lemma) = field(input)?;
    let (input, part_of_speech) = preceded(space1, code)(input)?;
    let (input, synset_count) = preceded(space1, decimal::<usize>)(input)?;
    let (input, pointer_count) = preceded(space1, decimal::<usize>)(input)?;
    let (input, pointer_symbols) = count(preceded(space1, field), pointer_count)(input)?;
    let (input, sense_count) = preceded(space1, decimal::<u32>)(input)?;
    let (input, tagged_sense_count) = preceded(space1, decimal::<u32>)(input)?;
    let (input, synset_offsets) = count(preceded(space1, decimal::<u32>), synset_count)(input)?;

    Ok((
        input,
        ParsedWordIndex {
            lemma: lemma.to_string(),
            part_of_speech,
            pointer_symbols: pointer_symbols.into_iter().map(str::to_string).collect(),
            sense_count,
            tagged_sense_count,
            synset_offsets,
        },
    ))
}
