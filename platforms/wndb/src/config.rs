use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use wndb_protocol::PartOfSpeech;

use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordNetConfig {
    /// Directory holding the `data.*` and `index.*` files.
    pub dict_dir: PathBuf,
    /// Categories to open, also the order in which lemma searches visit them.
    pub parts_of_speech: Vec<PartOfSpeech>,
    /// Bulk loading logs and skips malformed records instead of failing.
    pub skip_invalid_records: bool,
}

impl Default for WordNetConfig {
    fn default() -> Self {
        Self {
            dict_dir: PathBuf::from("dict"),
            parts_of_speech: PartOfSpeech::ALL.to_vec(),
            skip_invalid_records: true,
        }
    }
}

impl WordNetConfig {
    pub fn new(dict_dir: impl Into<PathBuf>) -> Self {
        Self {
            dict_dir: dict_dir.into(),
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn with_dict_dir(mut self, dict_dir: impl Into<PathBuf>) -> Self {
        self.dict_dir = dict_dir.into();
        self
    }

    pub fn with_parts_of_speech(mut self, parts_of_speech: impl IntoIterator<Item = PartOfSpeech>) -> Self {
        self.parts_of_speech = parts_of_speech.into_iter().collect();
        self
    }

    pub fn with_skip_invalid_records(mut self, skip: bool) -> Self {
        self.skip_invalid_records = skip;
        self
    }

    pub fn data_path(&self, part_of_speech: PartOfSpeech) -> PathBuf {
        self.dict_dir.join(format!("data.{}", part_of_speech.file_suffix()))
    }

    pub fn index_path(&self, part_of_speech: PartOfSpeech) -> PathBuf {
        self.dict_dir.join(format!("index.{}", part_of_speech.file_suffix()))
    }
}
