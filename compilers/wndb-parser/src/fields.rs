use std::str::FromStr;

use nom::{
    bytes::complete::{take_till1, take_while_m_n},
    character::complete::{digit1, hex_digit1, satisfy},
    combinator::map_res,
    IResult,
};

/// A whitespace-delimited field.
pub(crate) fn field(input: &str) -> IResult<&str, &str> {
    take_till1(char::is_whitespace)(input)
}

/// A single-character code such as `n` or `s`.
pub(crate) fn code(input: &str) -> IResult<&str, char> {
    satisfy(|c| !c.is_whitespace())(input)
}

pub(crate) fn decimal<T: FromStr>(input: &str) -> IResult<&str, T> {
    map_res(digit1, str::parse::<T>)(input)
}

pub(crate) fn hex_u8(input: &str) -> IResult<&str, u8> {
    map_res(hex_digit1, |s: &str| u8::from_str_radix(s, 16))(input)
}

/// Exactly two hex digits, as in the `source/target` field of a pointer.
pub(crate) fn hex_pair(input: &str) -> IResult<&str, u8> {
    map_res(
        take_while_m_n(2, 2, |c: char| c.is_ascii_hexdigit()),
        |s: &str| u8::from_str_radix(s, 16),
    )(input)
}
