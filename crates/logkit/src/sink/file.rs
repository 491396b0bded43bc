//! Size-rotating file
//!
//! `app.log` rotates to `app.log.1`, which shifts to `app.log.2`, and so on up
//! to `backup_count`. The oldest backup is dropped.

use parking_lot::Mutex;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

use super::Destination;
use crate::error::{LogkitError, Result};

pub struct SizeRotatingFile {
    state: Mutex<RotatingState>,
}

struct RotatingState {
    path: PathBuf,
    file: File,
    current_size: u64,
    max_bytes: u64,
    backup_count: usize,
}

impl SizeRotatingFile {
    /// Open `path` for appending, creating missing parent directories.
    ///
    /// `max_bytes == 0` disables rotation. With `overwrite` the file is
    /// truncated first.
    pub fn open(
        path: impl Into<PathBuf>,
        max_bytes: u64,
        backup_count: usize,
        overwrite: bool,
    ) -> Result<Self> {
        let path = path.into();
        ensure_parent(&path)?;
        let file = open_file(&path, overwrite).map_err(|source| LogkitError::OpenFile {
            path: path.clone(),
            source,
        })?;
        let current_size = file
            .metadata()
            .map_err(|source| LogkitError::OpenFile {
                path: path.clone(),
                source,
            })?
            .len();

        Ok(Self {
            state: Mutex::new(RotatingState {
                path,
                file,
                current_size,
                max_bytes,
                backup_count,
            }),
        })
    }

    pub fn path(&self) -> PathBuf {
        self.state.lock().path.clone()
    }
}

impl Destination for SizeRotatingFile {
    fn write_line(&self, line: &str) -> io::Result<()> {
        self.state.lock().write(line)
    }

    fn flush(&self) -> io::Result<()> {
        self.state.lock().file.flush()
    }
}

impl RotatingState {
    fn write(&mut self, line: &str) -> io::Result<()> {
        let line_len = line.len() as u64 + 1;

        if self.max_bytes > 0
            && self.current_size > 0
            && self.current_size + line_len > self.max_bytes
        {
            self.rotate()?;
        }

        let mut buf = Vec::with_capacity(line.len() + 1);
        buf.extend_from_slice(line.as_bytes());
        buf.push(b'\n');
        self.file.write_all(&buf)?;
        self.file.flush()?;
        self.current_size += line_len;
        Ok(())
    }

    fn rotate(&mut self) -> io::Result<()> {
        debug!(target: "logkit::rotation", path = ?self.path, "Rotating log file");
        self.file.flush()?;

        if self.backup_count > 0 {
            let oldest = backup_path(&self.path, self.backup_count);
            if oldest.exists() {
                fs::remove_file(&oldest)?;
            }
            for index in (1..self.backup_count).rev() {
                let from = backup_path(&self.path, index);
                if from.exists() {
                    fs::rename(&from, backup_path(&self.path, index + 1))?;
                }
            }
            fs::rename(&self.path, backup_path(&self.path, 1))?;
        }

        self.file = open_file(&self.path, true)?;
        self.current_size = 0;
        Ok(())
    }
}

/// `app.log` + 2 -> `app.log.2`
pub(crate) fn backup_path(path: &Path, index: usize) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(format!(".{}", index));
    PathBuf::from(name)
}

pub(crate) fn ensure_parent(path: &Path) -> Result<()> {
    if path.file_name().is_none() {
        return Err(LogkitError::InvalidPath(path.to_path_buf()));
    }
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).map_err(|source| LogkitError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })
        }
        _ => Ok(()),
    }
}

fn open_file(path: &Path, truncate: bool) -> io::Result<File> {
    let mut options = OpenOptions::new();
    options.create(true);
    if truncate {
        options.write(true).truncate(true);
    } else {
        options.append(true);
    }
    options.open(path)
}
