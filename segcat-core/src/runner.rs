use crate::args::IndexRange;
use crate::config::Config;
use crate::emit::{EmitOutcome, emit};
use crate::error::{Result, SegcatError};
use crate::listing::read_names;
use crate::naming::ChunkNaming;
use crate::runlog::RunLog;
use crate::select::{Boundary, select};
use std::io::Write;

pub const NO_FILES: &str = "No file to concat";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Concatenate segment bytes onto the sink.
    #[default]
    Stream,
    /// Write the selected names, one per line, instead of their bytes.
    List,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunReport {
    pub streamed: usize,
    pub skipped: usize,
    pub bytes: u64,
    /// Names written in list mode; nothing is streamed then.
    pub listed: usize,
}

#[derive(Debug)]
pub enum ExitOutcome {
    Done(RunReport),
    /// Nothing matched the start boundary.
    NoOp,
    Fatal(SegcatError),
}

impl ExitOutcome {
    pub fn code(&self) -> u8 {
        match self {
            ExitOutcome::Done(_) => 0,
            ExitOutcome::NoOp => 1,
            ExitOutcome::Fatal(_) => 2,
        }
    }

    pub fn message(&self) -> Option<String> {
        match self {
            ExitOutcome::Done(_) => None,
            ExitOutcome::NoOp => Some(NO_FILES.to_string()),
            ExitOutcome::Fatal(e) => Some(e.to_string()),
        }
    }
}

pub struct ConcatRunner {
    cfg: Config,
    naming: ChunkNaming,
    mode: Mode,
}

impl ConcatRunner {
    pub fn new(cfg: Config) -> Result<Self> {
        cfg.validate()?;
        let naming = ChunkNaming::from_config(&cfg);
        Ok(Self {
            cfg,
            naming,
            mode: Mode::Stream,
        })
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    /// Boundary names for `range`. Indices wider than the digit width are
    /// refused since their names would no longer sort numerically.
    pub fn boundary(&self, range: IndexRange) -> Result<Boundary> {
        for index in std::iter::once(range.min).chain(range.max) {
            if !self.naming.fits(index) {
                return Err(SegcatError::IndexTooWide {
                    index,
                    digits: self.naming.digits,
                });
            }
        }
        if let Some(max) = range.max {
            if max < range.min {
                tracing::warn!(min = range.min, max, "end index precedes start index");
            }
        }
        Ok(Boundary::new(
            self.naming.name(range.min),
            range.max.map(|i| self.naming.name(i)),
        ))
    }

    /// Runs one concatenation. Every non-success outcome is written to the
    /// log before it is returned.
    pub fn run(&self, range: IndexRange, sink: &mut dyn Write) -> ExitOutcome {
        let mut log = match RunLog::open(&self.cfg.log_file) {
            Ok(l) => l,
            Err(e) => return ExitOutcome::Fatal(e),
        };

        let outcome = match self.execute(&mut log, range, sink) {
            Ok(Some(report)) => ExitOutcome::Done(report),
            Ok(None) => ExitOutcome::NoOp,
            Err(e) => ExitOutcome::Fatal(e),
        };

        if let Some(msg) = outcome.message() {
            tracing::error!(code = outcome.code(), "{msg}");
            // the log may be the thing that failed; the caller still reports it
            let _ = log.line(&format!("EXIT with code {} : {msg}", outcome.code()));
        }
        outcome
    }

    fn execute(
        &self,
        log: &mut RunLog,
        range: IndexRange,
        sink: &mut dyn Write,
    ) -> Result<Option<RunReport>> {
        let boundary = self.boundary(range)?;
        tracing::info!(start = %boundary.start, end = ?boundary.end, "boundaries");

        let listing = read_names(&self.cfg.dir)?;

        log.stamp()?;
        log.line("Starting new concat")?;
        let picked = select(listing, &boundary);
        if picked.is_empty() {
            return Ok(None);
        }
        tracing::info!(count = picked.len(), "segments selected");

        let mut report = RunReport::default();
        for name in &picked {
            match self.mode {
                Mode::Stream => match emit(&self.cfg.dir, name, sink, log)? {
                    EmitOutcome::Streamed(n) => {
                        report.streamed += 1;
                        report.bytes += n;
                    }
                    EmitOutcome::Skipped => report.skipped += 1,
                },
                Mode::List => {
                    writeln!(sink, "{name}")
                        .map_err(|source| SegcatError::SinkWrite { source })?;
                    report.listed += 1;
                }
            }
        }
        sink.flush()
            .map_err(|source| SegcatError::SinkWrite { source })?;

        let summary = match self.mode {
            Mode::Stream => format!(
                "Done: {} streamed, {} skipped, {} bytes",
                report.streamed, report.skipped, report.bytes
            ),
            Mode::List => format!("Listed: {}", report.listed),
        };
        log.line(&summary)?;
        log.stamp()?;
        Ok(Some(report))
    }
}
