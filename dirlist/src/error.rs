use std::fmt;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    /// The directory itself could not be opened for enumeration.
    OpenDir { path: PathBuf, source: std::io::Error },
    /// Enumeration of an already opened directory failed partway through.
    ReadDir { path: PathBuf, source: std::io::Error },
    /// Metadata for a single entry could not be read.
    Stat { path: PathBuf, source: std::io::Error },
    /// Descending into this directory would revisit one of its ancestors.
    Cycle(PathBuf),
    IoError(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::OpenDir { path, source } => {
                write!(f, "cannot open directory '{}': {}", path.display(), source)
            }
            Error::ReadDir { path, source } => {
                write!(f, "error reading directory '{}': {}", path.display(), source)
            }
            Error::Stat { path, source } => write!(f, "stat: {}: {}", path.display(), source),
            Error::Cycle(path) => write!(f, "skipping {}: directory cycle", path.display()),
            Error::IoError(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::OpenDir { source, .. }
            | Error::ReadDir { source, .. }
            | Error::Stat { source, .. } => Some(source),
            Error::IoError(err) => Some(err),
            Error::Cycle(_) => None,
        }
    }
}

impl std::convert::From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Error {
        Error::IoError(error)
    }
}
