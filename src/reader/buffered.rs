use std::fs::File;
use std::io::{BufRead, BufReader, Read, Write};
use std::path::Path;

use crate::error::Error;

use super::close_file;

/// Line buffer capacity; a piece holds at most `LINE_CAP - 1` bytes.
pub const LINE_CAP: usize = 256;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LineCopy {
    pub lines: usize,
    pub bytes: u64,
}

/// Reads the next line piece into `line`: bytes up to and including the
/// first `\n`, cut at `LINE_CAP - 1` bytes. Longer lines come back over
/// several calls. Returns 0 at end of input.
fn read_piece<R: BufRead>(reader: &mut R, line: &mut Vec<u8>) -> std::io::Result<usize> {
    line.clear();
    reader
        .by_ref()
        .take((LINE_CAP - 1) as u64)
        .read_until(b'\n', line)
}

/// Copies line pieces from `reader` to `out`, stopping after `limit` pieces
/// when one is given. `path` only labels read errors.
pub fn copy_lines<R: BufRead>(
    reader: &mut R,
    path: &Path,
    out: &mut dyn Write,
    limit: Option<usize>,
) -> Result<LineCopy, Error> {
    let mut line = Vec::with_capacity(LINE_CAP);
    let mut copied = LineCopy::default();

    while limit.map_or(true, |max| copied.lines < max) {
        let n = read_piece(reader, &mut line).map_err(|e| Error::op("read", path, e))?;
        if n == 0 {
            break;
        }
        out.write_all(&line)?;
        copied.lines += 1;
        copied.bytes += n as u64;
    }

    Ok(copied)
}

/// Streams `path` to `out` line by line through a `BufReader`.
pub fn read_buffered(path: &Path, out: &mut dyn Write) -> Result<u64, Error> {
    let file = File::open(path).map_err(|e| Error::op("open", path, e))?;
    let mut reader = BufReader::new(file);
    let copied = copy_lines(&mut reader, path, out, None)?;
    close_file(reader.into_inner()).map_err(|e| Error::op("close", path, e))?;

    log::debug!(
        "buffered read {}: {} bytes in {} lines",
        path.display(),
        copied.bytes,
        copied.lines
    );
    Ok(copied.bytes)
}
