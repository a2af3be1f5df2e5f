use std::io::BufWriter;

use segcat_core::error::Result;
use segcat_core::{ConcatRunner, Config, ExitOutcome, IndexRange, Mode};

use crate::presentation::cli::Cli;

fn config_from_args(cli: &Cli) -> Result<Config> {
    let mut cfg = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(dir) = &cli.dir {
        cfg.dir = dir.clone();
    }
    if let Some(digits) = cli.digits {
        cfg.digits = digits;
    }
    if let Some(prefix) = &cli.prefix {
        cfg.prefix = prefix.clone();
    }
    if let Some(ext) = &cli.extension {
        cfg.extension = ext.trim_start_matches('.').to_string();
    }
    if let Some(log_file) = &cli.log_file {
        cfg.log_file = log_file.clone();
    }
    Ok(cfg)
}

pub fn handle_concat(cli: Cli) -> ExitOutcome {
    let runner = match config_from_args(&cli).and_then(ConcatRunner::new) {
        Ok(r) => r,
        Err(e) => return ExitOutcome::Fatal(e),
    };
    let mode = if cli.list { Mode::List } else { Mode::Stream };
    let range = IndexRange::from_args(cli.min.as_deref(), cli.max.as_deref());
    tracing::debug!(?range, ?mode, dir = %runner.config().dir.display(), "starting");

    let mut out = BufWriter::with_capacity(256 * 1024, std::io::stdout().lock());
    runner.with_mode(mode).run(range, &mut out)
}
