//! Daily-rotating file backed by `tracing-appender`
//!
//! `logs/app.log` becomes `logs/app.<YYYY-MM-DD>.log`, with a new file at
//! every UTC midnight.
//!
//! The date in the file name is the UTC date, while the text renderers stamp
//! records in local time. Away from UTC a file can hold records whose printed
//! date differs from the one in its name.

use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};

use super::file::ensure_parent;
use super::Destination;
use crate::error::{LogkitError, Result};

const DATE_SUFFIX: &str = "%Y-%m-%d";

pub struct TimeRotatingFile {
    appender: Mutex<RollingFileAppender>,
    dir: PathBuf,
    prefix: String,
    suffix: Option<String>,
}

impl TimeRotatingFile {
    /// Keeps the active file plus `backup_count` older ones.
    pub fn open(path: impl AsRef<Path>, backup_count: usize, overwrite: bool) -> Result<Self> {
        let path = path.as_ref();
        ensure_parent(path)?;

        let prefix = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .ok_or_else(|| LogkitError::InvalidPath(path.to_path_buf()))?;
        let suffix = path
            .extension()
            .map(|s| s.to_string_lossy().into_owned());
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        if overwrite {
            let current = dated_path(&dir, &prefix, suffix.as_deref());
            truncate(&current).map_err(|source| LogkitError::OpenFile {
                path: current,
                source,
            })?;
        }

        let mut builder = RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .filename_prefix(&prefix)
            .max_log_files(backup_count.saturating_add(1));
        if let Some(suffix) = &suffix {
            builder = builder.filename_suffix(suffix);
        }
        let appender = builder.build(&dir)?;

        Ok(Self {
            appender: Mutex::new(appender),
            dir,
            prefix,
            suffix,
        })
    }

    /// File receiving today's records
    pub fn current_path(&self) -> PathBuf {
        dated_path(&self.dir, &self.prefix, self.suffix.as_deref())
    }
}

impl Destination for TimeRotatingFile {
    fn write_line(&self, line: &str) -> io::Result<()> {
        let mut buf = Vec::with_capacity(line.len() + 1);
        buf.extend_from_slice(line.as_bytes());
        buf.push(b'\n');
        let mut appender = self.appender.lock();
        appender.write_all(&buf)?;
        appender.flush()
    }

    fn flush(&self) -> io::Result<()> {
        self.appender.lock().flush()
    }
}

fn dated_path(dir: &Path, prefix: &str, suffix: Option<&str>) -> PathBuf {
    let date = chrono::Utc::now().format(DATE_SUFFIX);
    let name = match suffix {
        Some(suffix) => format!("{}.{}.{}", prefix, date, suffix),
        None => format!("{}.{}", prefix, date),
    };
    dir.join(name)
}

fn truncate(path: &Path) -> io::Result<File> {
    OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
}
