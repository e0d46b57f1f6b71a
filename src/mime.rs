// MIME handling for uploads: sniff the type from the file's content and
// turn it into the form the upload endpoint expects in its query string.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Number of leading bytes inspected when sniffing a file.
const SNIFF_LEN: u64 = 8192;

pub const TEXT_PLAIN_UTF8: &str = "text/plain; charset=utf-8";
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Detect the MIME type of the file at `path` by looking at its content.
/// The file extension is never consulted.
pub fn detect_mime_type(path: &Path) -> Result<String> {
    let mut sample = Vec::new();
    File::open(path)
        .with_context(|| format!("Failed to open {}", path.display()))?
        .take(SNIFF_LEN)
        .read_to_end(&mut sample)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    Ok(sniff(&sample).to_string())
}

/// Classify a content sample: known magic numbers first, then plain text,
/// falling back to `application/octet-stream`.
pub fn sniff(sample: &[u8]) -> &'static str {
    if let Some(kind) = infer::get(sample) {
        return kind.mime_type();
    }
    if looks_like_text(sample) {
        TEXT_PLAIN_UTF8
    } else {
        OCTET_STREAM
    }
}

fn looks_like_text(sample: &[u8]) -> bool {
    let valid_utf8 = match std::str::from_utf8(sample) {
        Ok(_) => true,
        // A multi-byte character cut off by the sample boundary is fine
        Err(e) => e.error_len().is_none(),
    };
    valid_utf8
        && !sample
            .iter()
            .any(|&b| b < 0x20 && !matches!(b, b'\t' | b'\n' | b'\r' | 0x0c | 0x1b))
}

/// Make a MIME type safe for the upload query string: drop any
/// `;`-delimited parameters and escape the first `/`.
///
/// `"text/plain; charset=utf-8"` becomes `"text%2Fplain"`.
pub fn encode_mime_type(mime: &str) -> String {
    let essence = mime.split(';').next().unwrap_or_default().trim();
    essence.replacen('/', "%2F", 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn encode_strips_parameters() {
        assert_eq!(encode_mime_type("text/plain; charset=utf-8"), "text%2Fplain");
        assert_eq!(encode_mime_type("image/png"), "image%2Fpng");
        assert_eq!(encode_mime_type("application/vnd.a/b"), "application%2Fvnd.a/b");
        assert_eq!(encode_mime_type("nonsense"), "nonsense");
    }

    #[test]
    fn sniff_recognises_magic_numbers() {
        let png = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0];
        assert_eq!(sniff(&png), "image/png");
        assert_eq!(sniff(b"%PDF-1.7\n"), "application/pdf");
    }

    #[test]
    fn sniff_text_and_binary() {
        assert_eq!(sniff(b"hello world\n"), TEXT_PLAIN_UTF8);
        assert_eq!(sniff("héllo".as_bytes()), TEXT_PLAIN_UTF8);
        assert_eq!(sniff(b""), TEXT_PLAIN_UTF8);
        assert_eq!(sniff(&[0x00, 0x01, 0x02, 0xff]), OCTET_STREAM);
    }

    #[test]
    fn sniff_tolerates_truncated_utf8_tail() {
        let mut sample = b"abc".to_vec();
        sample.extend_from_slice(&"é".as_bytes()[..1]);
        assert_eq!(sniff(&sample), TEXT_PLAIN_UTF8);
    }

    #[test]
    fn detect_ignores_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.png");
        let mut f = File::create(&path).unwrap();
        f.write_all(b"just some text").unwrap();

        assert_eq!(detect_mime_type(&path).unwrap(), TEXT_PLAIN_UTF8);
    }

    #[test]
    fn detect_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(detect_mime_type(&dir.path().join("missing")).is_err());
    }
}
