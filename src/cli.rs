use clap::{Args, Parser, Subcommand, ValueHint};
use std::path::PathBuf;

use crate::config::{Generation, PipelineConfig, DEFAULT_LANGUAGE_ID, DEFAULT_PAGE_SIZE};

/// Pokédex data pipeline: CSV tables in, static-site JSON documents out
#[derive(Parser, Debug)]
#[command(name = "pokedata", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build every list, detail, type and index document
    Build(BuildArgs),

    /// Reshape a raw trading-card corpus into the slim card list
    Cards(CardsArgs),

    /// Dump every source CSV table as a JSON array
    Tables(TablesArgs),
}

#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Directory holding the source CSV tables
    #[arg(value_hint = ValueHint::DirPath)]
    pub data: PathBuf,

    /// Output location (directory)
    #[arg(value_hint = ValueHint::DirPath)]
    pub out: PathBuf,

    /// Generation whose last Pokémon is the cutoff
    #[arg(short, long, value_enum, default_value_t = Generation::default(), conflicts_with = "max_id")]
    pub generation: Generation,

    /// Explicit cutoff id, overriding --generation
    #[arg(long)]
    pub max_id: Option<u32>,

    /// Pokémon per list page
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE, value_parser = parse_page_size)]
    pub page_size: usize,

    /// Color palette JSON, keyed or indexed by Pokémon id
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub palettes: Option<PathBuf>,

    /// Directory of trading-card JSON files
    #[arg(long, value_hint = ValueHint::DirPath)]
    pub cards: Option<PathBuf>,

    /// Flavor text language id (9 = English)
    #[arg(long, default_value_t = DEFAULT_LANGUAGE_ID)]
    pub language_id: u32,

    /// Write into a non-empty output directory
    #[arg(long)]
    pub force: bool,
}

impl BuildArgs {
    pub fn config(&self) -> PipelineConfig {
        let max_pokemon_id = self.max_id.unwrap_or_else(|| self.generation.max_pokemon_id());
        PipelineConfig::new(max_pokemon_id, self.page_size).with_language(Some(self.language_id))
    }
}

fn parse_page_size(raw: &str) -> Result<usize, String> {
    match raw.parse::<usize>() {
        Ok(0) => Err("page size must be at least 1".into()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

#[derive(Args, Debug)]
pub struct CardsArgs {
    /// Directory of raw trading-card JSON files
    #[arg(value_hint = ValueHint::DirPath)]
    pub cards: PathBuf,

    /// Output file (must be a file path; "-" is rejected)
    #[arg(value_hint = ValueHint::FilePath)]
    pub out: PathBuf,

    /// Overwrite if the file exists
    #[arg(long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct TablesArgs {
    /// Directory holding the source CSV tables
    #[arg(value_hint = ValueHint::DirPath)]
    pub data: PathBuf,

    /// Output location (directory)
    #[arg(value_hint = ValueHint::DirPath)]
    pub out: PathBuf,
}
