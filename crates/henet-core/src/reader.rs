//! Line-oriented key batch reader.
//!
//! Reads one lookup key per line, validating each against the shape its
//! domain requires. The first malformed line aborts the whole batch.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::classify::{is_asn, is_ipv4, is_ipv6};
use crate::error::AppError;

#[allow(clippy::expect_used)]
static COMMENT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*#.*AS\d{1,12}").expect("comment regex is valid"));

/// The shape a lookup key must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyShape {
    /// `AS` followed by 1-12 digits.
    Asn,
    /// A dotted quad, or anything the loose IPv6 pattern accepts.
    Prefix,
    /// Free text.
    Word,
}

impl KeyShape {
    pub fn accepts(&self, key: &str) -> bool {
        match self {
            KeyShape::Asn => is_asn(key),
            KeyShape::Prefix => is_ipv4(key) || is_ipv6(key),
            KeyShape::Word => true,
        }
    }

    /// Human-readable name used in error messages.
    pub fn label(&self) -> &'static str {
        match self {
            KeyShape::Asn => "ASN",
            KeyShape::Prefix => "prefix",
            KeyShape::Word => "search word",
        }
    }

    /// Whether `# ... AS<digits>` comment lines are skipped for this shape.
    fn skips_comments(&self) -> bool {
        !matches!(self, KeyShape::Word)
    }
}

/// Reads and validates a batch of lookup keys.
#[derive(Debug, Clone, Copy)]
pub struct KeyReader {
    shape: KeyShape,
}

impl KeyReader {
    pub fn new(shape: KeyShape) -> Self {
        Self { shape }
    }

    pub fn shape(&self) -> KeyShape {
        self.shape
    }

    /// Read keys from any buffered source, preserving line order.
    ///
    /// Lines are trimmed (along with a leading byte order mark); blank lines
    /// and comment lines are skipped. A line that is not valid UTF-8 is
    /// malformed. An empty result is returned as-is; rejecting it is the
    /// caller's job.
    pub fn read_keys<R: BufRead>(&self, input: R) -> Result<Vec<String>, AppError> {
        let mut keys = Vec::new();

        for (idx, bytes) in input.split(b'\n').enumerate() {
            let mut bytes = bytes?;
            if bytes.last() == Some(&b'\r') {
                bytes.pop();
            }
            let line = String::from_utf8(bytes).map_err(|e| AppError::MalformedInput {
                line_number: idx + 1,
                line: String::from_utf8_lossy(e.as_bytes()).into_owned(),
            })?;
            let mut key = line.trim();
            if idx == 0 {
                key = key.trim_start_matches('\u{feff}').trim_start();
            }

            if key.is_empty() {
                continue;
            }
            if self.shape.skips_comments() && COMMENT_PATTERN.is_match(key) {
                tracing::debug!(line = idx + 1, "Skipping comment line");
                continue;
            }
            if !self.shape.accepts(key) {
                return Err(AppError::MalformedInput {
                    line_number: idx + 1,
                    line,
                });
            }

            keys.push(key.to_string());
        }

        Ok(keys)
    }

    /// Open `path` and read keys from it.
    pub fn read_file(&self, path: &Path) -> Result<Vec<String>, AppError> {
        let file = File::open(path).map_err(|e| {
            AppError::IoError(std::io::Error::new(
                e.kind(),
                format!("Failed to open key list {}: {e}", path.display()),
            ))
        })?;
        let keys = self.read_keys(BufReader::new(file))?;
        tracing::info!(path = %path.display(), count = keys.len(), "Read key list");
        Ok(keys)
    }
}
