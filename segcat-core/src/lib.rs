#![forbid(unsafe_code)]

pub mod args;
pub mod config;
pub mod emit;
pub mod error;
pub mod listing;
pub mod naming;
pub mod runlog;
pub mod runner;
pub mod select;

// Re-exports: stable API surface
pub use args::{IndexRange, parse_index};
pub use config::Config;
pub use emit::{EmitOutcome, emit};
pub use naming::{ChunkNaming, format as chunk_name};
pub use runner::{ConcatRunner, ExitOutcome, Mode, RunReport};
pub use select::{Boundary, select};
