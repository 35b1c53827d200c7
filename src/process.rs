use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::reader::raw::read_raw;

/// Upper bound, in bytes, for a constructed per-process path.
pub const MAX_PATH_LEN: usize = 256;

/// Builds `<root>/<pid>/<file>`. The pid is used as given; an overlong
/// result is an error rather than a truncated path.
pub fn pid_path(root: &Path, pid: &str, file: &str) -> Result<PathBuf, Error> {
    let mut path = OsString::from(root.as_os_str());
    path.push("/");
    path.push(pid);
    path.push("/");
    path.push(file);

    if path.len() >= MAX_PATH_LEN {
        return Err(Error::PathTooLong {
            path: path.to_string_lossy().into_owned(),
            max: MAX_PATH_LEN,
        });
    }
    Ok(PathBuf::from(path))
}

/// Prints the status and command line pseudo-files of `pid`.
///
/// Stops at the first file that cannot be read; the command line is not
/// attempted when the status file fails.
pub fn read_process_info(root: &Path, pid: &str, out: &mut dyn Write) -> Result<(), Error> {
    let status = pid_path(root, pid, "status")?;
    writeln!(out, "\n--- Process Information for PID {} ---", pid)?;
    if let Err(e) = read_raw(&status, out) {
        log::warn!("failed to read status file {} for PID {}", status.display(), pid);
        return Err(e);
    }

    let cmdline = pid_path(root, pid, "cmdline")?;
    writeln!(out, "\n--- Command Line ---")?;
    if let Err(e) = read_raw(&cmdline, out) {
        log::warn!("failed to read cmdline {} for PID {}", cmdline.display(), pid);
        return Err(e);
    }

    writeln!(out, "\nSUCCESS: Process information read!")?;
    Ok(())
}
