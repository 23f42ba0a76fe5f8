//! # Renderer and Recursor
//!
//! Prints one directory at a time (collect, sort, print) and, in recursive
//! mode, descends depth-first into every subdirectory other than `.` and
//! `..`. Each descent gets a fresh entry set; nothing is shared between
//! sibling directories.
//!
//! Failures to open a directory or stat an entry are reported on stderr and
//! the walk carries on. Only a failure to write to the output is returned.

use std::fs;
use std::io::Write;
use std::os::unix::fs::MetadataExt;
use std::path::Path;

use crate::entry::{self, DirectoryEntry};
use crate::error::{Error, Result};
use crate::options::{ListOptions, OutputMode};
use crate::order;
use crate::size;

/// Writes a single entry in the selected output mode.
pub fn write_entry<W: Write>(out: &mut W, entry: &DirectoryEntry, options: &ListOptions) -> Result<()> {
    match options.mode {
        OutputMode::Size => writeln!(out, "{} {}", entry.name, entry.size)?,
        OutputMode::Long => {
            write!(
                out,
                "{} {} {:<5} {:<5}",
                entry.permissions, entry.hard_links, entry.owner, entry.group
            )?;
            if options.human_readable {
                write!(out, " {:>5}", size::human_readable_size(entry.size))?;
            } else {
                write!(out, " {:>5}", entry.size)?;
            }
            writeln!(out, " {} {}", entry.date, entry.name)?;
        }
        OutputMode::Plain => write!(out, "{} ", entry.name)?,
    }
    Ok(())
}

/// Writes the already-sorted entries of one directory followed by the
/// trailing blank line. The `total` line is only part of long output.
pub fn write_listing<W: Write>(
    out: &mut W,
    entries: &[DirectoryEntry],
    block_total: u64,
    options: &ListOptions,
) -> Result<()> {
    if options.mode == OutputMode::Long {
        writeln!(out, "total {}", block_total)?;
    }
    for entry in entries {
        write_entry(out, entry, options)?;
    }
    writeln!(out)?;
    Ok(())
}

/// Drives the listing of a directory tree into an output sink.
pub struct Lister<W: Write> {
    out: W,
    // (device, inode) of every directory on the current descent path.
    ancestors: Vec<(u64, u64)>,
}

impl<W: Write> Lister<W> {
    pub fn new(out: W) -> Lister<W> {
        Lister {
            out,
            ancestors: Vec::new(),
        }
    }

    /// Lists `dir`, recursing into subdirectories when `options.recursive`
    /// is set.
    pub fn list(&mut self, dir: &Path, options: &ListOptions) -> Result<()> {
        self.ancestors.clear();
        if let Ok(metadata) = fs::metadata(dir) {
            self.ancestors.push((metadata.dev(), metadata.ino()));
        }
        self.list_directory(dir, options)
    }

    fn list_directory(&mut self, dir: &Path, options: &ListOptions) -> Result<()> {
        crate::debug_eprintln!("DEBUG: listing {} with {:?}", dir.display(), options);

        let listing = match entry::collect(dir, options.show_hidden) {
            Ok(listing) => listing,
            Err(err) => {
                eprintln!("{}", err);
                return Ok(());
            }
        };
        for err in &listing.skipped {
            eprintln!("{}", err);
        }

        let mut entries = listing.entries;
        order::sort_entries(&mut entries, options.sort);
        write_listing(&mut self.out, &entries, listing.block_total, options)?;

        if !options.recursive {
            return Ok(());
        }

        // Only the subdirectories outlive the rendering pass.
        let subdirectories: Vec<DirectoryEntry> = entries
            .into_iter()
            .filter(|e| e.is_dir() && !e.is_dot_or_dotdot())
            .collect();
        let child_options = options.for_subdirectory();

        for subdirectory in subdirectories {
            let path = dir.join(&subdirectory.file_name);
            if self.ancestors.contains(&subdirectory.identity()) {
                eprintln!("{}", Error::Cycle(path));
                continue;
            }

            write!(self.out, "\n{}:\n", path.display())?;
            self.ancestors.push(subdirectory.identity());
            let result = self.list_directory(&path, &child_options);
            self.ancestors.pop();
            result?;
        }
        Ok(())
    }

    /// Flushes and returns the output sink.
    pub fn finish(mut self) -> Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}
