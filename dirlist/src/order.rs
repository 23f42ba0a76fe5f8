use std::cmp::Ordering;

use crate::entry::DirectoryEntry;
use crate::options::SortOrder;

pub fn sort_entries(entries: &mut [DirectoryEntry], order: SortOrder) {
    match order {
        SortOrder::Name => entries.sort_by(compare_by_name),
        SortOrder::Time => entries.sort_by(compare_by_time),
    }
}

/// ASCII case-insensitive comparison of entry names.
pub fn compare_by_name(a: &DirectoryEntry, b: &DirectoryEntry) -> Ordering {
    let a = a.name.bytes().map(|c| c.to_ascii_lowercase());
    let b = b.name.bytes().map(|c| c.to_ascii_lowercase());
    a.cmp(b)
}

/// Newest first.
pub fn compare_by_time(a: &DirectoryEntry, b: &DirectoryEntry) -> Ordering {
    b.modification_time.cmp(&a.modification_time)
}
