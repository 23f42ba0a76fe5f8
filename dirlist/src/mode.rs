//! # File Mode
//!
//! Renders the `st_mode` of an entry as the ten symbol string shown by a long
//! listing: one file type symbol followed by the user, group and other
//! `rwx` triples.

const S_IFMT: u32 = libc::S_IFMT as u32;
const S_IFBLK: u32 = libc::S_IFBLK as u32;
const S_IFCHR: u32 = libc::S_IFCHR as u32;
const S_IFDIR: u32 = libc::S_IFDIR as u32;
const S_IFIFO: u32 = libc::S_IFIFO as u32;
const S_IFLNK: u32 = libc::S_IFLNK as u32;
const S_IFREG: u32 = libc::S_IFREG as u32;
const S_IFSOCK: u32 = libc::S_IFSOCK as u32;

/// Permission bits in display order, paired with the symbol shown when set.
const PERMISSION_BITS: [(u32, char); 9] = [
    (0o400, 'r'),
    (0o200, 'w'),
    (0o100, 'x'),
    (0o040, 'r'),
    (0o020, 'w'),
    (0o010, 'x'),
    (0o004, 'r'),
    (0o002, 'w'),
    (0o001, 'x'),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    BlockDevice,
    CharDevice,
    Directory,
    Fifo,
    Symlink,
    Regular,
    Socket,
    Unknown,
}

impl FileType {
    pub fn from_mode(mode: u32) -> FileType {
        match mode & S_IFMT {
            S_IFBLK => FileType::BlockDevice,
            S_IFCHR => FileType::CharDevice,
            S_IFDIR => FileType::Directory,
            S_IFIFO => FileType::Fifo,
            S_IFLNK => FileType::Symlink,
            S_IFREG => FileType::Regular,
            S_IFSOCK => FileType::Socket,
            _ => FileType::Unknown,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            FileType::BlockDevice => 'b',
            FileType::CharDevice => 'c',
            FileType::Directory => 'd',
            FileType::Fifo => 'p',
            FileType::Symlink => 'l',
            FileType::Regular => '-',
            FileType::Socket => 's',
            FileType::Unknown => '?',
        }
    }
}

/// Maps a file type and permission bits value to its ten symbol rendering,
/// e.g. `0o100644` becomes `-rw-r--r--`.
pub fn permission_string(mode: u32) -> String {
    let mut rendered = String::with_capacity(PERMISSION_BITS.len() + 1);
    rendered.push(FileType::from_mode(mode).symbol());
    for (bit, symbol) in PERMISSION_BITS {
        rendered.push(if mode & bit != 0 { symbol } else { '-' });
    }
    rendered
}
