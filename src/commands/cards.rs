use std::fs;

use anyhow::{bail, Context, Result};
use tracing::info;

use crate::cli::{CardsArgs, Cli};
use crate::derive::slim_cards;
use crate::io::{ensure_dir_exists, read_cards, require_dir_exists};

pub fn run(cli: &Cli, args: &CardsArgs) -> Result<()> {
    if args.out == std::path::Path::new("-") { bail!("stdout is not supported."); }
    if !args.force && args.out.exists() {
        bail!("Refusing to overwrite existing file: {} (use --force)", args.out.display());
    }

    if cli.verbose > 0 {
        eprintln!("[cards] {} -> {}", args.cards.display(), args.out.display());
    }

    require_dir_exists(&args.cards)?;
    let raw = read_cards(&args.cards)?;
    let slim = slim_cards(&raw);
    info!("[cards] kept {} of {} cards", slim.len(), raw.len());

    if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir_exists(parent)?;
    }
    let bytes = serde_json::to_vec(&slim).context("Failed to serialize slim cards")?;
    fs::write(&args.out, bytes)
        .with_context(|| format!("Failed to write {}", args.out.display()))?;
    Ok(())
}
