use std::io::Write;
use std::path::Path;

use crate::error::Error;
use crate::reader::ReadMethod;

/// Streams `path` with the raw method and then the buffered one, under
/// section headers, so the two I/O patterns can be traced side by side.
///
/// Both methods always run; the first failure is returned.
pub fn compare_file_methods(path: &Path, out: &mut dyn Write) -> Result<(), Error> {
    writeln!(out, "Comparing file reading methods for: {}\n", path.display())?;

    let mut first_err = None;
    for (i, method) in [ReadMethod::Raw, ReadMethod::Buffered].iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "=== Method {}: {} ===", i + 1, method.heading())?;
        match method.read(path, out) {
            Ok(n) => log::info!("{:?} read of {}: {} bytes", method, path.display(), n),
            Err(e) => {
                log::warn!("{:?} read failed: {}", method, e);
                first_err.get_or_insert(e);
            }
        }
    }

    writeln!(out, "\nNOTE: Run this program with strace to see the difference!")?;
    writeln!(
        out,
        "Example: strace -e trace=openat,read,write,close procread compare"
    )?;

    match first_err {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn test_both_sections_carry_content() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "Linux version 6.1.0-13-amd64").unwrap();

        let mut out = Vec::new();
        compare_file_methods(f.path(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let raw_at = text.find("=== Method 1: Using System Calls ===\n").unwrap();
        let buf_at = text.find("\n=== Method 2: Using Library Functions ===\n").unwrap();
        assert!(raw_at < buf_at);
        assert_eq!(text.matches("Linux version 6.1.0-13-amd64\n").count(), 2);
        assert!(text.contains("NOTE: Run this program with strace"));
    }

    #[test]
    fn test_missing_path_reports_failure() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("version");

        let mut out = Vec::new();
        let err = compare_file_methods(&missing, &mut out).unwrap_err();
        assert!(matches!(err, Error::Op { op: "open", .. }));

        // Both methods were still attempted
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Method 1"));
        assert!(text.contains("Method 2"));
    }
}
