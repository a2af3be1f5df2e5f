use crate::error::{Result, SegcatError};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use time::OffsetDateTime;
use time::macros::format_description;

/// Append-only plain-text log. One line per call, flushed immediately so a
/// crash leaves every earlier line on disk.
pub struct RunLog {
    f: File,
    path: PathBuf,
}

impl RunLog {
    pub fn open(path: &Path) -> Result<Self> {
        let f = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| SegcatError::Log {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self {
            f,
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn line(&mut self, text: &str) -> Result<()> {
        tracing::trace!(log = %self.path.display(), "{text}");
        let mut buf = Vec::with_capacity(text.len() + 1);
        buf.extend_from_slice(text.as_bytes());
        buf.push(b'\n');
        self.f
            .write_all(&buf)
            .and_then(|_| self.f.flush())
            .map_err(|source| SegcatError::Log {
                path: self.path.clone(),
                source,
            })
    }

    /// `---- yy-mm-dd HH:MM:SS ----` in local time (UTC if the offset is unknown).
    pub fn stamp(&mut self) -> Result<()> {
        let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
        let text = now
            .format(format_description!(
                "[year repr:last_two]-[month]-[day] [hour]:[minute]:[second]"
            ))
            .map_err(|e| SegcatError::Log {
                path: self.path.clone(),
                source: std::io::Error::new(std::io::ErrorKind::Other, e),
            })?;
        self.line(&format!("---- {text} ----"))
    }
}
