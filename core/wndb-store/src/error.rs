use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The requested offset or lemma is not in the file.
    #[error("unknown key '{key}'")]
    UnknownKey { key: String },

    /// Two records share a key; the source file is corrupt.
    #[error("duplicate key '{key}' at line {line}")]
    DuplicateKey { key: String, line: usize },

    /// A record line whose leading field cannot be a key.
    #[error("invalid key '{key}' at line {line}")]
    InvalidKey { key: String, line: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
