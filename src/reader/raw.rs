use std::ffi::CString;
use std::io::{self, Write};
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

use crate::error::Error;

/// Size of the chunk buffer; each read(2) asks for one byte less.
pub const RAW_CHUNK: usize = 1024;

/// A file descriptor owned for the duration of one raw read.
struct RawFile {
    fd: libc::c_int,
}

impl RawFile {
    fn open(path: &Path) -> Result<Self, Error> {
        let c_path = CString::new(path.as_os_str().as_bytes()).map_err(|_| {
            Error::InvalidArgs(format!("path contains a NUL byte: {}", path.display()))
        })?;
        let fd = unsafe { libc::open(c_path.as_ptr(), libc::O_RDONLY | libc::O_CLOEXEC) };
        if fd == -1 {
            return Err(Error::op("open", path, io::Error::last_os_error()));
        }
        Ok(RawFile { fd })
    }

    fn read(&self, buf: &mut [u8]) -> io::Result<usize> {
        loop {
            let n = unsafe {
                libc::read(self.fd, buf.as_mut_ptr() as *mut libc::c_void, buf.len())
            };
            if n >= 0 {
                return Ok(n as usize);
            }
            let err = io::Error::last_os_error();
            if err.kind() != io::ErrorKind::Interrupted {
                return Err(err);
            }
        }
    }

    /// Checked close; the descriptor is released whatever the outcome.
    fn close(self) -> io::Result<()> {
        let fd = self.fd;
        std::mem::forget(self);
        if unsafe { libc::close(fd) } == -1 {
            return Err(io::Error::last_os_error());
        }
        Ok(())
    }
}

impl Drop for RawFile {
    fn drop(&mut self) {
        unsafe {
            libc::close(self.fd);
        }
    }
}

/// Streams `path` to `out` with plain open/read/close system calls.
///
/// Every chunk is written by its exact length, so embedded NUL bytes (as in
/// `/proc/<pid>/cmdline`) pass through untouched. On a read error the
/// descriptor is closed before the error is returned.
pub fn read_raw(path: &Path, out: &mut dyn Write) -> Result<u64, Error> {
    let file = RawFile::open(path)?;
    let mut buf = [0u8; RAW_CHUNK];
    let mut total = 0u64;
    let mut calls = 0u32;

    loop {
        let n = match file.read(&mut buf[..RAW_CHUNK - 1]) {
            Ok(n) => n,
            Err(e) => {
                drop(file);
                return Err(Error::op("read", path, e));
            }
        };
        calls += 1;
        if n == 0 {
            break;
        }
        out.write_all(&buf[..n])?;
        total += n as u64;
    }

    file.close().map_err(|e| Error::op("close", path, e))?;
    log::debug!("raw read {}: {} bytes in {} read calls", path.display(), total, calls);
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn test_small_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"Name:\tbash\nState:\tS (sleeping)\n").unwrap();

        let mut out = Vec::new();
        let n = read_raw(f.path(), &mut out).unwrap();
        assert_eq!(n, 31);
        assert_eq!(out, b"Name:\tbash\nState:\tS (sleeping)\n");
    }

    #[test]
    fn test_spans_several_chunks() {
        let data: Vec<u8> = (0..5000u32).map(|i| (i % 251) as u8).collect();
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(&data).unwrap();

        let mut out = Vec::new();
        assert_eq!(read_raw(f.path(), &mut out).unwrap(), 5000);
        assert_eq!(out, data);
    }

    #[test]
    fn test_embedded_nul_bytes_preserved() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"/usr/bin/bash\0--login\0").unwrap();

        let mut out = Vec::new();
        read_raw(f.path(), &mut out).unwrap();
        assert_eq!(out, b"/usr/bin/bash\0--login\0");
    }

    #[test]
    fn test_empty_file() {
        let f = tempfile::NamedTempFile::new().unwrap();
        let mut out = Vec::new();
        assert_eq!(read_raw(f.path(), &mut out).unwrap(), 0);
        assert!(out.is_empty());
    }

    #[test]
    fn test_missing_file() {
        let mut out = Vec::new();
        let err = read_raw(Path::new("/nonexistent/procread/status"), &mut out).unwrap_err();
        match err {
            Error::Op { op, source, .. } => {
                assert_eq!(op, "open");
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {}", other),
        }
        assert!(out.is_empty());
    }

    #[test]
    fn test_directory_fails_on_read() {
        // open(2) succeeds on a directory, read(2) reports EISDIR
        let dir = tempfile::tempdir().unwrap();
        let mut out = Vec::new();
        let err = read_raw(dir.path(), &mut out).unwrap_err();
        assert!(matches!(err, Error::Op { op: "read", .. }));
    }

    #[test]
    fn test_nul_in_path_rejected() {
        let mut out = Vec::new();
        let path = Path::new(std::ffi::OsStr::from_bytes(b"/proc/\0/status"));
        assert!(matches!(
            read_raw(path, &mut out),
            Err(Error::InvalidArgs(_))
        ));
    }
}
