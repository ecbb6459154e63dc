//! tail.rs - Safe retrieval of the trailing portion of a log file.
//!
//! Log files are operational artifacts: crashed writers, rotated binary
//! content, and foreign encodings all leave invalid byte sequences
//! behind, and display must never fail because of them. [`contents`]
//! therefore never errors: a missing or empty file yields an empty
//! string, and any line containing invalid UTF-8 is dropped wholesale
//! (removed, not replaced with a placeholder; partial repair can itself
//! produce invalid output). The returned string is always well-formed
//! UTF-8.
//!
//! Raw tail extraction is delegated through the [`TailSource`] seam;
//! [`FileTail`] is the default implementation. Each call independently
//! opens, reads, and closes the file, so concurrent readers need no
//! coordination.
//!
//! License: MIT OR APACHE 2.0

use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::Path;

use lazy_static::lazy_static;
use log::{debug, warn};

lazy_static! {
    /// Gates whether raw dropped bytes may appear in debug logs.
    static ref RAW_DROP_DEBUG_ALLOWED: bool = {
        std::env::var("SCRUBLOG_ALLOW_DEBUG_RAW")
            .map(|s| s.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    };
}

/// Supplies the raw trailing bytes of a file.
///
/// The default implementation is [`FileTail`]; substituting another
/// source (an OS tail utility wrapper, a test double) changes where the
/// bytes come from without changing the decoding policy.
pub trait TailSource {
    /// Returns the trailing bytes of `path`, bounded by `max_lines`
    /// trailing lines when given, the whole file otherwise.
    fn raw_tail(&self, path: &Path, max_lines: Option<usize>) -> io::Result<Vec<u8>>;
}

/// Reads trailing bytes directly from the filesystem.
///
/// The file handle lives only for the duration of one call and is
/// released on every exit path.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileTail;

const SCAN_CHUNK: u64 = 8192;

impl TailSource for FileTail {
    fn raw_tail(&self, path: &Path, max_lines: Option<usize>) -> io::Result<Vec<u8>> {
        let mut file = File::open(path)?;
        let len = file.metadata()?.len();

        let Some(limit) = max_lines else {
            let mut buf = Vec::new();
            file.read_to_end(&mut buf)?;
            return Ok(buf);
        };
        if limit == 0 || len == 0 {
            return Ok(Vec::new());
        }

        // Scan backward in chunks for the newline that opens the
        // requested window. The newline terminating the file does not
        // count as a line boundary.
        let mut pos = len;
        let mut newlines = 0usize;
        let mut start = 0u64;
        'outer: while pos > 0 {
            let read_len = SCAN_CHUNK.min(pos);
            pos -= read_len;
            let mut chunk = vec![0u8; read_len as usize];
            file.seek(SeekFrom::Start(pos))?;
            file.read_exact(&mut chunk)?;
            for (i, byte) in chunk.iter().enumerate().rev() {
                if *byte != b'\n' {
                    continue;
                }
                let offset = pos + i as u64;
                if offset + 1 == len {
                    continue;
                }
                newlines += 1;
                if newlines == limit {
                    start = offset + 1;
                    break 'outer;
                }
            }
        }

        file.seek(SeekFrom::Start(start))?;
        let mut buf = Vec::with_capacity((len - start) as usize);
        file.read_to_end(&mut buf)?;
        Ok(buf)
    }
}

/// Returns a displayable slice of the end of a log file.
///
/// - Missing file, empty file, or empty raw tail: `""`.
/// - Lines containing invalid UTF-8 are dropped wholesale.
/// - `max_lines` bounds how many trailing lines are fetched.
/// - `max_width` clips each retained line to at most that many
///   characters (no wrapping).
///
/// Never errors on malformed input; the result is always valid UTF-8.
pub fn contents(
    path: impl AsRef<Path>,
    max_width: Option<usize>,
    max_lines: Option<usize>,
) -> String {
    contents_from(&FileTail, path, max_width, max_lines)
}

/// [`contents`] with an explicit [`TailSource`].
pub fn contents_from<S: TailSource>(
    source: &S,
    path: impl AsRef<Path>,
    max_width: Option<usize>,
    max_lines: Option<usize>,
) -> String {
    let path = path.as_ref();
    let raw = match source.raw_tail(path, max_lines) {
        Ok(raw) => raw,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return String::new(),
        Err(err) => {
            warn!("failed to read tail of '{}': {}", path.display(), err);
            return String::new();
        }
    };
    if raw.is_empty() {
        return String::new();
    }

    let mut dropped = 0usize;
    let mut retained: Vec<&str> = Vec::new();
    for line in raw.split(|byte| *byte == b'\n') {
        match std::str::from_utf8(line) {
            Ok(text) => retained.push(match max_width {
                Some(width) => clip_line(text, width),
                None => text,
            }),
            Err(_) => {
                dropped += 1;
                if *RAW_DROP_DEBUG_ALLOWED {
                    debug!(
                        "dropping line with invalid encoding from '{}': {:?}",
                        path.display(),
                        line
                    );
                }
            }
        }
    }
    if dropped > 0 {
        debug!(
            "dropped {} line(s) with invalid encoding from '{}'",
            dropped,
            path.display()
        );
    }

    retained.join("\n")
}

/// Clips a line to at most `max_width` characters; lines already within
/// the bound pass through unmodified.
pub fn clip_line(line: &str, max_width: usize) -> &str {
    match line.char_indices().nth(max_width) {
        Some((idx, _)) => &line[..idx],
        None => line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn file_with(bytes: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(bytes).expect("write");
        file
    }

    #[test]
    fn test_missing_file_is_empty_string() {
        assert_eq!(contents("/nonexistent/scrublog/test.log", None, None), "");
    }

    #[test]
    fn test_empty_file_is_empty_string() {
        let file = file_with(b"");
        assert_eq!(contents(file.path(), None, None), "");
    }

    #[test]
    fn test_whole_file_round_trips() {
        let file = file_with(b"alpha\nbeta\ngamma\n");
        assert_eq!(contents(file.path(), None, None), "alpha\nbeta\ngamma\n");
    }

    #[test]
    fn test_max_lines_keeps_trailing_window() {
        let file = file_with(b"one\ntwo\nthree\nfour\n");
        assert_eq!(contents(file.path(), None, Some(2)), "three\nfour\n");
        assert_eq!(contents(file.path(), None, Some(1)), "four\n");
        assert_eq!(
            contents(file.path(), None, Some(10)),
            "one\ntwo\nthree\nfour\n"
        );
    }

    #[test]
    fn test_max_lines_without_trailing_newline() {
        let file = file_with(b"one\ntwo\nthree");
        assert_eq!(contents(file.path(), None, Some(2)), "two\nthree");
    }

    #[test]
    fn test_zero_line_window_is_empty() {
        let file = file_with(b"one\ntwo\n");
        assert_eq!(contents(file.path(), None, Some(0)), "");
    }

    #[test]
    fn test_invalid_lines_are_dropped_wholesale() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(b"good line\n");
        bytes.extend_from_slice(b"bad \xff\xfe line\n");
        bytes.extend_from_slice(b"another good\n");
        let file = file_with(&bytes);
        let result = contents(file.path(), None, None);
        assert_eq!(result, "good line\nanother good\n");
        // Result re-validates as UTF-8 by construction of `String`, and
        // is a strict subset of the raw content.
        assert!(result.len() < bytes.len());
    }

    #[test]
    fn test_entirely_invalid_file_is_empty() {
        let file = file_with(&[0xff, 0xfe, 0xfd]);
        assert_eq!(contents(file.path(), None, None), "");
    }

    #[test]
    fn test_max_width_clips_characters() {
        let file = file_with("short\na much longer line\n\u{e9}\u{e9}\u{e9}\u{e9}\n".as_bytes());
        let result = contents(file.path(), Some(4), None);
        assert_eq!(result, "shor\na mu\n\u{e9}\u{e9}\u{e9}\u{e9}\n");
    }

    #[test]
    fn test_width_and_lines_compose() {
        let file = file_with(b"aaaaaa\nbbbbbb\ncccccc\n");
        let result = contents(file.path(), Some(3), Some(2));
        assert_eq!(result, "bbb\nccc\n");
        assert!(result.lines().count() <= 2);
    }

    #[test]
    fn test_backward_scan_spans_chunks() {
        // Lines larger than the scan chunk still resolve the window.
        let long = "x".repeat(9000);
        let data = format!("first\n{long}\nlast\n");
        let file = file_with(data.as_bytes());
        assert_eq!(contents(file.path(), None, Some(1)), "last\n");
        assert_eq!(contents(file.path(), None, Some(2)), format!("{long}\nlast\n"));
    }

    #[test]
    fn test_clip_line_bounds() {
        assert_eq!(clip_line("hello", 10), "hello");
        assert_eq!(clip_line("hello", 2), "he");
        assert_eq!(clip_line("héllo", 2), "hé");
        assert_eq!(clip_line("", 4), "");
    }

    struct FailingSource;

    impl TailSource for FailingSource {
        fn raw_tail(&self, _path: &Path, _max_lines: Option<usize>) -> io::Result<Vec<u8>> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
        }
    }

    #[test]
    fn test_source_errors_degrade_to_empty() {
        assert_eq!(contents_from(&FailingSource, "whatever.log", None, None), "");
    }
}
