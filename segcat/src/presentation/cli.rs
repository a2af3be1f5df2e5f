use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Concatenate a numbered range of segment files to stdout",
    long_about = None,
    allow_negative_numbers = true,
    args_override_self = true
)]
pub struct Cli {
    /// First segment index (non-numeric input counts as 0)
    pub min: Option<String>,

    /// Last segment index, inclusive; omit to run through the last segment
    pub max: Option<String>,

    /// JSON file with deployment settings; flags below override it
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory holding the segments
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Digits in the zero-padded index (e.g. out-0001.ts => 4)
    #[arg(long)]
    pub digits: Option<usize>,

    /// Text before the index (e.g. out-0001.ts => "out-")
    #[arg(long)]
    pub prefix: Option<String>,

    /// Segment extension without the dot
    #[arg(long = "ext")]
    pub extension: Option<String>,

    /// Append-only run log
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Print the selected segment names instead of their bytes
    #[arg(long)]
    pub list: bool,

    /// Debug diagnostics on stderr (RUST_LOG overrides)
    #[arg(short, long)]
    pub verbose: bool,
}
