use anyhow::Result;
use tracing::info;

use crate::cli::{Cli, TablesArgs};
use crate::io::{ensure_dir_exists, read_csv, require_dir_exists, write_to_json_file, ALL_TABLES};

pub fn run(cli: &Cli, args: &TablesArgs) -> Result<()> {
    if cli.verbose > 0 {
        eprintln!("[tables] {} -> {}", args.data.display(), args.out.display());
    }

    require_dir_exists(&args.data)?;
    ensure_dir_exists(&args.out)?;

    for name in ALL_TABLES {
        let df = read_csv(&args.data.join(name))?;
        let out = args.out.join(name).with_extension("json");
        write_to_json_file(&out, &df)?;
        info!("[tables] {name}: {} rows -> {}", df.height(), out.display());
    }
    Ok(())
}
