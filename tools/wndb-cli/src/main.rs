use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use rkyv::ser::{serializers::AllocSerializer, Serializer};
use serde_json::json;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wndb::{WordNet, WordNetConfig};
use wndb_protocol::{PartOfSpeech, Synset, SynsetOffset};

#[derive(Parser)]
#[command(author, version, about = "Query and snapshot a lexical database")]
struct Cli {
    /// Directory holding the data.* and index.* files
    #[arg(short, long, value_name = "DIR", env = "WNDB_DICT")]
    dict: Option<PathBuf>,

    /// JSON configuration; --dict overrides its dict_dir
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print every sense of a lemma as JSON
    Lookup { lemma: String },

    /// Print one synset as JSON
    Synset {
        #[arg(short, long, value_parser = parse_part_of_speech)]
        pos: PartOfSpeech,
        offset: u32,
    },

    /// Write all synsets of a category as an rkyv archive
    Compile {
        #[arg(short, long, value_parser = parse_part_of_speech)]
        pos: PartOfSpeech,

        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,
    },

    /// Validate an archive written by `compile`
    Inspect { file: PathBuf },
}

fn parse_part_of_speech(value: &str) -> Result<PartOfSpeech, String> {
    let mut chars = value.chars();
    let by_code = match (chars.next(), chars.next()) {
        (Some(code), None) => PartOfSpeech::from_code(code),
        _ => None,
    };
    by_code
        .or_else(|| PartOfSpeech::from_file_suffix(value))
        .ok_or_else(|| format!("unknown part of speech '{value}' (expected n, v, a, r or noun, verb, adj, adv)"))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Command::Lookup { lemma } => {
            let wordnet = open(&cli)?;
            let senses: Vec<_> = wordnet
                .search(lemma)?
                .into_iter()
                .map(|sense| json!({ "part_of_speech": sense.part_of_speech, "synset": sense.synset.as_ref() }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&senses)?);
        }
        Command::Synset { pos, offset } => {
            let synset = open(&cli)?.find_synset(*pos, SynsetOffset::new(*offset))?;
            println!("{}", serde_json::to_string_pretty(synset.as_ref())?);
        }
        Command::Compile { pos, output } => compile(&open(&cli)?, *pos, output)?,
        Command::Inspect { file } => inspect(file)?,
    }

    Ok(())
}

fn open(cli: &Cli) -> anyhow::Result<WordNet> {
    let mut config = match &cli.config {
        Some(path) => WordNetConfig::from_json_file(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => WordNetConfig::default(),
    };
    if let Some(dict) = &cli.dict {
        config = config.with_dict_dir(dict);
    }

    WordNet::open(config).context("opening the dictionary")
}

fn compile(wordnet: &WordNet, pos: PartOfSpeech, output: &Path) -> anyhow::Result<()> {
    let synsets: Vec<Synset> = wordnet
        .load_all(pos)?
        .into_values()
        .map(|synset| synset.as_ref().clone())
        .collect();
    info!(part_of_speech = %pos, count = synsets.len(), "compiling");

    let mut serializer = AllocSerializer::<256>::default();
    serializer
        .serialize_value(&synsets)
        .map_err(|e| anyhow!("rkyv serialization failed: {e:?}"))?;
    let bytes = serializer.into_serializer().into_inner();

    fs::write(output, &bytes).with_context(|| format!("writing {}", output.display()))?;
    eprintln!("✅ {} {} synsets written to {:?}", synsets.len(), pos, output);
    Ok(())
}

fn inspect(file: &Path) -> anyhow::Result<()> {
    let bytes = fs::read(file).with_context(|| format!("reading {}", file.display()))?;
    let archived = rkyv::check_archived_root::<Vec<Synset>>(&bytes)
        .map_err(|e| anyhow!("invalid archive {}: {e:?}", file.display()))?;

    println!("{} synsets", archived.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_of_speech_argument() {
        assert_eq!(parse_part_of_speech("n"), Ok(PartOfSpeech::Noun));
        assert_eq!(parse_part_of_speech("s"), Ok(PartOfSpeech::Adjective));
        assert_eq!(parse_part_of_speech("adv"), Ok(PartOfSpeech::Adverb));
        assert!(parse_part_of_speech("nn").is_err());
    }

    #[test]
    fn test_cli_shape() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
