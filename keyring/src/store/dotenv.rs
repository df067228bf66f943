//! `.env`-style file store

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use super::{KeyStore, OverwritePolicy, StoreError, StoreResult, check_name};

/// A flat file of `NAME=value` lines.
///
/// Entries are write-once: `set` of a name already in the file fails with
/// [`StoreError::AlreadyExists`], new names are appended as one line.
/// Every write replaces the file through a temporary file in the same
/// directory, so readers never see a half-written file. Lines the store
/// did not write (comments, blank lines, other variables) are kept as they
/// are. `remove` drops only the matching lines and deletes the file once
/// nothing but whitespace is left.
///
/// Blank lines and lines starting with `#` are ignored. Values are taken
/// verbatim after the first `=`; no quoting or escaping is applied.
#[derive(Clone, Debug)]
pub struct DotenvStore {
    path: PathBuf,
}

impl DotenvStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File content, or `None` if the file does not exist.
    fn read_content(&self) -> StoreResult<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Parses line `number` (1-based); `None` for blank and comment lines.
    fn parse_line<'a>(&self, line: &'a str, number: usize) -> StoreResult<Option<(&'a str, &'a str)>> {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.trim().is_empty() || line.trim_start().starts_with('#') {
            return Ok(None);
        }
        let (name, value) = line.split_once('=').ok_or_else(|| StoreError::Malformed {
            path: self.path.display().to_string(),
            line: number,
        })?;
        Ok(Some((name.trim(), value)))
    }

    fn find(&self, name: &str) -> StoreResult<Option<String>> {
        let Some(content) = self.read_content()? else {
            return Ok(None);
        };
        let mut found = None;
        for (i, line) in content.lines().enumerate() {
            if let Some((n, value)) = self.parse_line(line, i + 1)? {
                if n == name && found.is_none() {
                    found = Some(value.to_string());
                }
            }
        }
        Ok(found)
    }

    fn write_content(&self, content: &str) -> StoreResult<()> {
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;

        debug!(path = %self.path.display(), bytes = content.len(), "rewrote key file");
        Ok(())
    }
}

impl KeyStore for DotenvStore {
    fn overwrite_policy(&self) -> OverwritePolicy {
        OverwritePolicy::Refuse
    }

    fn exists(&self, name: &str) -> StoreResult<bool> {
        Ok(self.find(name)?.is_some())
    }

    fn get(&self, name: &str) -> StoreResult<String> {
        self.find(name)?
            .ok_or_else(|| StoreError::NotFound(name.to_string()))
    }

    fn set(&mut self, name: &str, value: &str) -> StoreResult<()> {
        check_name(name)?;
        if value.contains(['\n', '\r']) {
            return Err(StoreError::InvalidEntry {
                name: name.to_string(),
                reason: "value contains a line break",
            });
        }
        if self.find(name)?.is_some() {
            return Err(StoreError::AlreadyExists(name.to_string()));
        }

        let mut content = self.read_content()?.unwrap_or_default();
        if !content.is_empty() && !content.ends_with('\n') {
            content.push('\n');
        }
        content.push_str(name);
        content.push('=');
        content.push_str(value);
        content.push('\n');
        self.write_content(&content)
    }

    fn remove(&mut self, name: &str) -> StoreResult<()> {
        let Some(content) = self.read_content()? else {
            return Ok(());
        };

        let mut kept = String::with_capacity(content.len());
        let mut removed = false;
        for (i, raw) in content.split_inclusive('\n').enumerate() {
            let line = raw.strip_suffix('\n').unwrap_or(raw);
            match self.parse_line(line, i + 1)? {
                Some((n, _)) if n == name => removed = true,
                _ => kept.push_str(raw),
            }
        }
        if !removed {
            return Ok(());
        }

        if kept.trim().is_empty() {
            debug!(path = %self.path.display(), "key file left empty, deleting");
            return match fs::remove_file(&self.path) {
                Ok(()) => Ok(()),
                Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
                Err(e) => Err(e.into()),
            };
        }
        self.write_content(&kept)
    }
}
