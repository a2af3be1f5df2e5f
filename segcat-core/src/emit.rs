use crate::error::{Result, SegcatError};
use crate::runlog::RunLog;
use std::fs::File;
use std::io::{ErrorKind, Read, Write};
use std::path::Path;

const COPY_BUF: usize = 64 * 1024;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmitOutcome {
    /// Whole file copied; carries the byte count.
    Streamed(u64),
    /// Not a regular file; nothing written.
    Skipped,
}

/// Streams `dir/name` into `sink`.
///
/// The candidate path is logged before it is touched. Anything that is not a
/// regular file is logged as invalid and skipped. Once a file is opened, a
/// read or write failure aborts with an error; the sink may already hold a
/// prefix of the file.
pub fn emit(
    dir: &Path,
    name: &str,
    sink: &mut dyn Write,
    log: &mut RunLog,
) -> Result<EmitOutcome> {
    let path = dir.join(name);
    log.line(&path.display().to_string())?;

    let is_file = std::fs::metadata(&path).map(|md| md.is_file()).unwrap_or(false);
    if !is_file {
        tracing::warn!(path = %path.display(), "skipping invalid segment");
        log.line(&format!("ERROR ! Invalid path {}", path.display()))?;
        return Ok(EmitOutcome::Skipped);
    }

    let mut f = File::open(&path).map_err(|source| SegcatError::StreamRead {
        path: path.clone(),
        source,
    })?;
    let total = copy_segment(&path, &mut f, sink)?;
    tracing::debug!(path = %path.display(), bytes = total, "segment streamed");
    Ok(EmitOutcome::Streamed(total))
}

/// Copies `src` to `sink` in fixed-size chunks. Read failures are reported
/// against `path`.
fn copy_segment(path: &Path, src: &mut dyn Read, sink: &mut dyn Write) -> Result<u64> {
    let mut buf = [0u8; COPY_BUF];
    let mut total = 0u64;
    loop {
        let n = match src.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(source) => {
                return Err(SegcatError::StreamRead {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        sink.write_all(&buf[..n])
            .map_err(|source| SegcatError::SinkWrite { source })?;
        total += n as u64;
    }
    Ok(total)
}
