//! Enumerating process directories under the proc root.

use std::fs::{self, ReadDir};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::Error;

/// True when `name` is non-empty and made only of ASCII decimal digits.
pub fn is_numeric_name(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|b| b.is_ascii_digit())
}

/// One numeric entry of the proc root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessDir {
    pub name: String,
}

/// Lazy iterator over the process directories of a root, in the order the
/// directory stream yields them.
pub struct ProcessDirs {
    root: PathBuf,
    entries: ReadDir,
}

impl Iterator for ProcessDirs {
    type Item = Result<ProcessDir, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        for entry in self.entries.by_ref() {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => return Some(Err(Error::op("enumerate", &self.root, e))),
            };
            let name = entry.file_name();
            // Non-UTF-8 names cannot be all digits
            let Some(name) = name.to_str() else {
                continue;
            };
            if is_numeric_name(name) {
                return Some(Ok(ProcessDir {
                    name: name.to_string(),
                }));
            }
        }
        None
    }
}

pub fn process_dirs(root: &Path) -> Result<ProcessDirs, Error> {
    let entries = fs::read_dir(root).map_err(|e| Error::op("open", root, e))?;
    Ok(ProcessDirs {
        root: root.to_path_buf(),
        entries,
    })
}

/// Prints a PID table of `root` to `out` and returns how many process
/// directories it found.
pub fn list_process_directories(root: &Path, out: &mut dyn Write) -> Result<usize, Error> {
    let dirs = process_dirs(root)?;

    writeln!(out, "Process directories in {}:", root.display())?;
    writeln!(out, "{:<8} {:<20}", "PID", "Type")?;
    writeln!(out, "{:<8} {:<20}", "---", "----")?;

    let mut count = 0;
    for dir in dirs {
        let dir = dir?;
        writeln!(out, "{:<8} {:<20}", dir.name, "process")?;
        count += 1;
    }

    writeln!(out, "Found {} process directories", count)?;
    writeln!(out, "SUCCESS: Process directories listed!")?;
    log::debug!("listed {} process directories in {}", count, root.display());
    Ok(count)
}
