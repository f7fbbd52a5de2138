//! Flat-file backed line store.
//!
//! # Responsibility
//! - Load every line of the backing file on open.
//! - Provide positional access to the in-memory line sequence.
//! - Rewrite the whole file after every mutation.
//!
//! # Invariants
//! - Indices are zero-based and contiguous.
//! - Existing-line access (`get`, `remove_at`, `set_at`) requires
//!   `index < len`; `insert_at` accepts `index <= len`.
//! - A failed rewrite leaves the in-memory mutation applied. Callers must
//!   treat `StoreError::Write` as an inconsistency, not retry it.

use super::{StoreError, StoreResult};
use log::{debug, error, info};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Ordered record lines mirrored to one flat file.
#[derive(Debug)]
pub struct LineStore {
    path: PathBuf,
    lines: Vec<String>,
}

impl LineStore {
    /// Opens (creating if absent) the backing file and loads its lines.
    ///
    /// # Side effects
    /// - Creates missing parent directories and an empty file.
    /// - Emits `store_open` logging events with duration and status.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let started_at = Instant::now();
        let path = path.as_ref().to_path_buf();
        info!("event=store_open module=store status=start");

        let mut store = Self {
            path,
            lines: Vec::new(),
        };
        match store.ensure_file().and_then(|()| store.reload()) {
            Ok(()) => {
                info!(
                    "event=store_open module=store status=ok duration_ms={} lines={}",
                    started_at.elapsed().as_millis(),
                    store.lines.len()
                );
                Ok(store)
            }
            Err(err) => {
                error!(
                    "event=store_open module=store status=error duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }

    /// Discards in-memory lines and re-reads the backing file.
    pub fn reload(&mut self) -> StoreResult<()> {
        let content = fs::read_to_string(&self.path).map_err(|source| StoreError::Read {
            path: self.path.clone(),
            source,
        })?;
        self.lines = content.lines().map(str::to_string).collect();
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns all lines in storage order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Returns the line at `index`, or `None` outside `[0, len)`.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    pub fn append_line(&mut self, line: impl Into<String>) -> StoreResult<()> {
        self.lines.push(line.into());
        self.persist("append")
    }

    pub fn insert_at(&mut self, index: usize, line: impl Into<String>) -> StoreResult<()> {
        if index > self.lines.len() {
            return Err(self.out_of_range(index));
        }
        self.lines.insert(index, line.into());
        self.persist("insert")?;
        Ok(())
    }

    /// Removes and returns the line at `index`.
    pub fn remove_at(&mut self, index: usize) -> StoreResult<String> {
        self.check_existing(index)?;
        let removed = self.lines.remove(index);
        self.persist("remove")?;
        Ok(removed)
    }

    /// Replaces the line at `index` and returns the previous line.
    pub fn set_at(&mut self, index: usize, line: impl Into<String>) -> StoreResult<String> {
        self.check_existing(index)?;
        let previous = std::mem::replace(&mut self.lines[index], line.into());
        self.persist("set")?;
        Ok(previous)
    }

    /// Removes and returns the last line.
    pub fn remove_last(&mut self) -> StoreResult<String> {
        let removed = self.lines.pop().ok_or(StoreError::Empty)?;
        self.persist("remove_last")?;
        Ok(removed)
    }

    fn check_existing(&self, index: usize) -> StoreResult<()> {
        if index < self.lines.len() {
            Ok(())
        } else {
            Err(self.out_of_range(index))
        }
    }

    fn out_of_range(&self, index: usize) -> StoreError {
        StoreError::OutOfRange {
            index,
            len: self.lines.len(),
        }
    }

    fn ensure_file(&self) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| StoreError::Create {
                    path: self.path.clone(),
                    source,
                })?;
            }
        }

        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map(|_| ())
            .map_err(|source| StoreError::Create {
                path: self.path.clone(),
                source,
            })
    }

    fn persist(&self, op: &'static str) -> StoreResult<()> {
        let started_at = Instant::now();
        let mut content = String::new();
        for line in &self.lines {
            content.push_str(line);
            content.push('\n');
        }

        match fs::write(&self.path, content) {
            Ok(()) => {
                debug!(
                    "event=store_write module=store status=ok op={} duration_ms={} lines={}",
                    op,
                    started_at.elapsed().as_millis(),
                    self.lines.len()
                );
                Ok(())
            }
            Err(source) => {
                error!(
                    "event=store_write module=store status=error op={} duration_ms={} error={}",
                    op,
                    started_at.elapsed().as_millis(),
                    source
                );
                Err(StoreError::Write {
                    path: self.path.clone(),
                    source,
                })
            }
        }
    }
}
