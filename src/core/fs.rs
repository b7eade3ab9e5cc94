//! Filesystem adapter for perch.
//!
//! Provides the [DirEntry] record used throughout perch and the file
//! operations driven by the message dispatcher: directory listing,
//! directory resolution, file creation and deletion.
//!
//! The process-global working directory is never touched; every path is
//! resolved against the directory held by the application state.

use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors surfaced by the filesystem adapter.
///
/// All variants are recoverable at the UI level: the dispatcher turns
/// them into a status message and keeps running.
#[derive(Debug, Error)]
pub enum FsError {
    #[error("'{0}' already exists")]
    AlreadyExists(String),
    #[error("{0}")]
    Io(#[from] io::Error),
}

/// Classification of a directory entry. Entries that are neither a
/// regular file nor a directory (after following symlinks) are not listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// A single entry of a directory listing. Immutable once read; the whole
/// listing is rebuilt on every scan.
#[derive(Debug, Clone)]
pub struct DirEntry {
    name: Box<OsStr>,
    kind: EntryKind,
}

impl DirEntry {
    pub fn new(name: OsString, kind: EntryKind) -> Self {
        DirEntry {
            name: name.into_boxed_os_str(),
            kind,
        }
    }

    #[inline]
    pub fn name(&self) -> &OsStr {
        &self.name
    }

    #[inline]
    pub fn name_str(&self) -> Cow<'_, str> {
        self.name.to_string_lossy()
    }

    #[inline]
    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    #[inline]
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// A hidden entry is one whose name begins with a dot.
pub fn is_hidden_name(name: &OsStr) -> bool {
    name.to_string_lossy().starts_with('.')
}

/// Reads the contents of the provided directory in OS enumeration order.
///
/// Hidden entries are included only when `show_hidden` is set. Symlinks
/// are classified by the kind of their target; broken symlinks and
/// special files (fifos, sockets, devices) are skipped.
pub fn list_dir(path: &Path, show_hidden: bool) -> Result<Vec<DirEntry>, FsError> {
    let mut entries = Vec::with_capacity(64);

    for entry in fs::read_dir(path)? {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };

        let name = entry.file_name();
        if !show_hidden && is_hidden_name(&name) {
            continue;
        }

        let ft = match entry.file_type() {
            Ok(ft) => ft,
            Err(_) => continue,
        };

        let kind = if ft.is_dir() {
            EntryKind::Directory
        } else if ft.is_file() {
            EntryKind::File
        } else if ft.is_symlink() {
            match fs::metadata(entry.path()) {
                Ok(md) if md.is_dir() => EntryKind::Directory,
                Ok(md) if md.is_file() => EntryKind::File,
                _ => continue,
            }
        } else {
            continue;
        };

        entries.push(DirEntry::new(name, kind));
    }
    Ok(entries)
}

/// Resolves `target` (absolute, or relative to `base`, including `..`)
/// and verifies that the result is a traversable directory.
pub fn resolve_dir(base: &Path, target: &Path) -> Result<PathBuf, FsError> {
    let joined = if target.is_absolute() {
        target.to_path_buf()
    } else {
        base.join(target)
    };

    let resolved = joined.canonicalize()?;
    // permission probe: a directory we cannot read is not entered
    fs::read_dir(&resolved)?;
    Ok(resolved)
}

/// Creates an empty file at `path`. Fails with [FsError::AlreadyExists]
/// if any filesystem object is already present there.
pub fn create_file(path: &Path) -> Result<(), FsError> {
    if path.symlink_metadata().is_ok() {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        return Err(FsError::AlreadyExists(name));
    }
    fs::File::create(path)?;
    Ok(())
}

/// Removes the file at `path`. Errors are reported, never swallowed.
pub fn delete_file(path: &Path) -> Result<(), FsError> {
    fs::remove_file(path)?;
    Ok(())
}
