use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("malformed line at '{near}' ({kind}): {line}")]
    Malformed {
        line: String,
        near: String,
        kind: String,
    },

    #[error("{field} says {declared} but {found} were listed: {line}")]
    CountMismatch {
        line: String,
        field: &'static str,
        declared: usize,
        found: usize,
    },
}

impl ParseError {
    pub(crate) fn malformed(line: &str, err: nom::error::Error<&str>) -> Self {
        ParseError::Malformed {
            line: line.to_string(),
            near: err.input.chars().take(24).collect(),
            kind: format!("{:?}", err.code),
        }
    }
}
