//! Source window extraction for the code preview pane.
//!
//! Reads only as far into the file as the requested range requires, so
//! previewing a function near the top of a very large file stays cheap.
//! Invalid UTF-8 is replaced rather than rejected.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// One source line with its original 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberedLine {
    pub number: usize,
    pub text: String,
}

/// Why a preview could not be produced. The `Display` text is shown in
/// place of the preview.
#[derive(Debug, Error)]
pub enum PreviewError {
    #[error("{}: no such file", path.display())]
    NotFound { path: PathBuf },

    #[error("{}: permission denied", path.display())]
    PermissionDenied { path: PathBuf },

    #[error("{}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl PreviewError {
    fn from_io(path: &Path, source: io::Error) -> Self {
        let path = path.to_path_buf();
        match source.kind() {
            io::ErrorKind::NotFound => PreviewError::NotFound { path },
            io::ErrorKind::PermissionDenied => PreviewError::PermissionDenied { path },
            _ => PreviewError::Read { path, source },
        }
    }
}

/// Extract lines `start_line..=end_line` (1-based, as lizard reports them).
///
/// The range is clipped to the file: `start_line` 0 behaves like 1 and an
/// `end_line` past the end stops at the last line.
pub fn extract_window(
    path: impl AsRef<Path>,
    start_line: usize,
    end_line: usize,
) -> Result<Vec<NumberedLine>, PreviewError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| PreviewError::from_io(path, e))?;
    read_window(BufReader::new(file), start_line, end_line)
        .map_err(|e| PreviewError::from_io(path, e))
}

fn read_window<R: BufRead>(
    mut reader: R,
    start_line: usize,
    end_line: usize,
) -> io::Result<Vec<NumberedLine>> {
    let start = start_line.saturating_sub(1);
    let mut lines = Vec::new();
    let mut buf = Vec::new();
    let mut index = 0usize;

    while index < end_line {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        if index >= start {
            let text = String::from_utf8_lossy(&buf);
            lines.push(NumberedLine {
                number: index + 1,
                text: text.trim_end().to_string(),
            });
        }
        index += 1;
    }

    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn numbers(lines: &[NumberedLine]) -> Vec<usize> {
        lines.iter().map(|l| l.number).collect()
    }

    #[test]
    fn test_window_inside_file() {
        let lines = read_window(Cursor::new("a\nb\nc\nd\n"), 2, 3).unwrap();
        assert_eq!(numbers(&lines), vec![2, 3]);
        assert_eq!(lines[0].text, "b");
        assert_eq!(lines[1].text, "c");
    }

    #[test]
    fn test_window_clipped_at_end() {
        let lines = read_window(Cursor::new("a\nb\nc"), 2, 1_000_000).unwrap();
        assert_eq!(numbers(&lines), vec![2, 3]);
        assert_eq!(lines[1].text, "c");
    }

    #[test]
    fn test_zero_start_behaves_like_one() {
        let lines = read_window(Cursor::new("a\nb\n"), 0, 1).unwrap();
        assert_eq!(numbers(&lines), vec![1]);
    }

    #[test]
    fn test_inverted_or_out_of_range_window_is_empty() {
        assert!(read_window(Cursor::new("a\nb\n"), 5, 2).unwrap().is_empty());
        assert!(read_window(Cursor::new("a\nb\n"), 10, 20).unwrap().is_empty());
    }

    #[test]
    fn test_crlf_and_trailing_whitespace_stripped() {
        let lines = read_window(Cursor::new("x = 1   \r\ny\r\n"), 1, 2).unwrap();
        assert_eq!(lines[0].text, "x = 1");
        assert_eq!(lines[1].text, "y");
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let bytes: &[u8] = b"ok\n\xff\xfebad\n";
        let lines = read_window(Cursor::new(bytes), 1, 2).unwrap();
        assert_eq!(lines[0].text, "ok");
        assert!(lines[1].text.contains('\u{FFFD}'));
        assert!(lines[1].text.ends_with("bad"));
    }

    #[test]
    fn test_missing_file_is_descriptor() {
        let err = extract_window("/definitely/not/here.py", 1, 3).unwrap_err();
        assert!(matches!(err, PreviewError::NotFound { .. }));
        assert!(err.to_string().contains("no such file"));
    }
}
