use anyhow::{bail, Result};
use tracing::{error, info};

use crate::cli::{BuildArgs, Cli};
use crate::emit::DiskSink;
use crate::io::{check_output_dir, load_row_store};
use crate::pipeline;

pub fn run(cli: &Cli, args: &BuildArgs) -> Result<()> {
    let config = args.config();
    if cli.verbose > 0 {
        eprintln!(
            "[build] data={} -> {} (max id {}, page size {})",
            args.data.display(), args.out.display(), config.max_pokemon_id, config.page_size,
        );
    }

    check_output_dir(&args.out, args.force)?;
    let store = load_row_store(&args.data, args.palettes.as_deref(), args.cards.as_deref())?;
    info!(counts = ?store.counts(), "[build] tables loaded");

    let mut sink = DiskSink::new(&args.out);
    let report = pipeline::run(&store, &config, &mut sink)?;

    eprintln!("{report}");
    if !report.is_success() {
        error!(failed = report.failed(), "[build] finished with failures");
        bail!("{} of {} documents failed", report.failed(), report.failed() + report.succeeded);
    }
    info!("[build] wrote {} documents to {}", report.succeeded, args.out.display());
    Ok(())
}
