use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    UnknownOption(char),
    CliInputError(String),
    ListError(dirlist::error::Error),
    IoError(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownOption(option) => write!(f, "Unknown option: {}", option),
            Error::CliInputError(msg) => write!(f, "{}", msg),
            Error::ListError(err) => write!(f, "{}", err),
            Error::IoError(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl Error {
    /// True when stdout was closed by the reader, e.g. `dls -R / | head -1`.
    pub fn is_broken_pipe(&self) -> bool {
        let io_error = match self {
            Error::IoError(err) | Error::ListError(dirlist::error::Error::IoError(err)) => err,
            _ => return false,
        };
        io_error.kind() == std::io::ErrorKind::BrokenPipe
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::ListError(err) => Some(err),
            Error::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl std::convert::From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Error {
        Error::IoError(error)
    }
}

impl std::convert::From<dirlist::error::Error> for Error {
    fn from(error: dirlist::error::Error) -> Error {
        Error::ListError(error)
    }
}
