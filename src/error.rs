use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    Op {
        op: &'static str,
        path: PathBuf,
        source: io::Error,
    },
    PathTooLong { path: String, max: usize },
    InvalidArgs(String),
}

impl Error {
    /// Wraps a failed open/read/close/enumerate on `path`.
    pub fn op(op: &'static str, path: &Path, source: io::Error) -> Self {
        Error::Op {
            op,
            path: path.to_path_buf(),
            source,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O error: {}", e),
            Error::Op { op, path, source } => {
                write!(f, "{} {} failed: {}", op, path.display(), source)
            }
            Error::PathTooLong { path, max } => {
                write!(f, "path too long ({} bytes, limit {}): {}", path.len(), max, path)
            }
            Error::InvalidArgs(msg) => write!(f, "invalid arguments: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}
