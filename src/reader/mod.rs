pub mod buffered;
pub mod raw;

use std::fs::File;
use std::io::{self, Write};
use std::os::unix::io::IntoRawFd;
use std::path::Path;

use crate::error::Error;

/// The two ways of streaming a file to an output sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadMethod {
    /// Unbuffered read(2) calls in fixed-size chunks.
    Raw,
    /// Buffered, line-oriented reads through `BufRead`.
    Buffered,
}

impl ReadMethod {
    pub fn heading(&self) -> &'static str {
        match self {
            ReadMethod::Raw => "Using System Calls",
            ReadMethod::Buffered => "Using Library Functions",
        }
    }

    /// Streams `path` to `out`, returning the number of bytes written.
    pub fn read(&self, path: &Path, out: &mut dyn Write) -> Result<u64, Error> {
        match self {
            ReadMethod::Raw => raw::read_raw(path, out),
            ReadMethod::Buffered => buffered::read_buffered(path, out),
        }
    }
}

/// Closes `file` with close(2) so that a failing close is reported.
pub fn close_file(file: File) -> io::Result<()> {
    let fd = file.into_raw_fd();
    if unsafe { libc::close(fd) } == -1 {
        return Err(io::Error::last_os_error());
    }
    Ok(())
}
