//! # Entry Collector
//!
//! Enumerates one directory (not recursively), stats every entry and turns
//! the raw metadata into immutable `DirectoryEntry` values ready for display.
//!
//! `.` and `..` are part of the listing like on any POSIX system; they are
//! added explicitly because `std::fs::read_dir` never yields them.

use std::ffi::{OsStr, OsString};
use std::fs;
use std::os::unix::fs::MetadataExt;
use std::path::{Path, PathBuf};

use crate::date;
use crate::error::{Error, Result};
use crate::identity;
use crate::mode::{self, FileType};

/// One filesystem object found in a listed directory.
#[derive(Debug, Clone)]
pub struct DirectoryEntry {
    /// Raw name as returned by the directory enumeration.
    pub file_name: OsString,
    /// Lossy UTF-8 rendering of `file_name`.
    pub name: String,
    pub file_type: FileType,
    pub permissions: String,
    pub hard_links: u64,
    pub owner: String,
    pub group: String,
    pub size: u64,
    /// Allocated 512-byte blocks.
    pub blocks: u64,
    pub date: String,
    /// Seconds since the epoch, used for ordering only.
    pub modification_time: i64,
    pub device: u64,
    pub inode: u64,
}

impl DirectoryEntry {
    pub fn from_metadata(file_name: &OsStr, metadata: &fs::Metadata) -> DirectoryEntry {
        let st_mode = metadata.mode();
        DirectoryEntry {
            file_name: file_name.to_os_string(),
            name: file_name.to_string_lossy().into_owned(),
            file_type: FileType::from_mode(st_mode),
            permissions: mode::permission_string(st_mode),
            hard_links: metadata.nlink(),
            owner: identity::user_name(metadata.uid()),
            group: identity::group_name(metadata.gid()),
            size: metadata.size(),
            blocks: metadata.blocks(),
            date: date::format_date(metadata.mtime()),
            modification_time: metadata.mtime(),
            device: metadata.dev(),
            inode: metadata.ino(),
        }
    }

    pub fn is_dir(&self) -> bool {
        self.file_type == FileType::Directory
    }

    pub fn is_dot_or_dotdot(&self) -> bool {
        self.file_name == "." || self.file_name == ".."
    }

    /// `(device, inode)` of the object the entry resolves to.
    pub fn identity(&self) -> (u64, u64) {
        (self.device, self.inode)
    }
}

fn is_hidden_name(name: &OsStr) -> bool {
    name.as_encoded_bytes().first() == Some(&b'.')
}

/// The entries of one directory, in enumeration order, together with the
/// failures that caused individual entries to be skipped.
#[derive(Debug, Default)]
pub struct Listing {
    pub entries: Vec<DirectoryEntry>,
    /// Sum of allocated blocks in 1024-byte units.
    pub block_total: u64,
    pub skipped: Vec<Error>,
}

/// Collects the entries of `dir`. Hidden entries are dropped before they are
/// stat'ed unless `show_hidden` is set. Only a failure to open `dir` itself
/// is returned as an error; per-entry failures end up in `Listing::skipped`.
pub fn collect(dir: &Path, show_hidden: bool) -> Result<Listing> {
    let read_dir = fs::read_dir(dir).map_err(|source| Error::OpenDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut names: Vec<OsString> = vec![OsString::from("."), OsString::from("..")];
    let mut listing = Listing::default();

    for dir_entry in read_dir {
        match dir_entry {
            Ok(dir_entry) => names.push(dir_entry.file_name()),
            Err(source) => listing.skipped.push(Error::ReadDir {
                path: dir.to_path_buf(),
                source,
            }),
        }
    }

    let mut blocks = 0u64;
    for name in names {
        if !show_hidden && is_hidden_name(&name) {
            continue;
        }
        let path: PathBuf = dir.join(&name);
        match fs::metadata(&path) {
            Ok(metadata) => {
                blocks += metadata.blocks();
                listing
                    .entries
                    .push(DirectoryEntry::from_metadata(&name, &metadata));
            }
            Err(source) => listing.skipped.push(Error::Stat { path, source }),
        }
    }
    listing.block_total = blocks / 2;

    crate::debug_eprintln!(
        "DEBUG: collected {} entries ({} skipped) from {}",
        listing.entries.len(),
        listing.skipped.len(),
        dir.display()
    );
    Ok(listing)
}

#[cfg(test)]
impl DirectoryEntry {
    pub(crate) fn fixture(name: &str, file_type: FileType, size: u64, modification_time: i64) -> DirectoryEntry {
        let st_mode = match file_type {
            FileType::Directory => libc::S_IFDIR as u32 | 0o755,
            _ => libc::S_IFREG as u32 | 0o644,
        };
        DirectoryEntry {
            file_name: OsString::from(name),
            name: name.to_string(),
            file_type,
            permissions: mode::permission_string(st_mode),
            hard_links: 1,
            owner: "root".to_string(),
            group: "root".to_string(),
            size,
            blocks: 0,
            date: "sty  5 07:09".to_string(),
            modification_time,
            device: 0,
            inode: 0,
        }
    }
}
