//! Transcript file acceptance.
//!
//! Uploaded transcripts must be small UTF-8 text files with a `.txt` or `.md`
//! extension. The same policy runs when a file is first picked in the drop
//! zone and again when the form is submitted.

use axum::body::Bytes;

/// Default size ceiling for an uploaded transcript (1 MB).
pub const DEFAULT_MAX_BYTES: usize = 1_000_000;

/// Extensions accepted for transcript files.
const ALLOWED_EXTENSIONS: &[&str] = &["txt", "md"];

/// Content types accepted for transcript files.
const ALLOWED_CONTENT_TYPES: &[&str] = &["text/plain", "text/markdown", "text/x-markdown"];

/// Reasons a transcript file is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    /// Extension is not `.txt` or `.md`.
    #[error("Only .txt or .md files are allowed.")]
    UnsupportedExtension(String),

    /// Declared content type is not a text type we forward.
    #[error("File type must be .txt or .md")]
    UnsupportedContentType(String),

    /// File exceeds the size ceiling.
    #[error("File is larger than {max} bytes")]
    TooLarge { size: usize, max: usize },

    /// File is not valid UTF-8.
    #[error("File must be UTF-8 text")]
    NotUtf8,
}

/// Lowercased text after the last `.` in `name`, or an empty string.
#[must_use]
pub fn extension_of(name: &str) -> String {
    name.rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default()
}

/// A transcript file that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptFile {
    /// Original file name.
    pub name: String,
    /// Content type to forward upstream (always one of the allowed types).
    pub content_type: String,
    /// Raw file contents.
    pub bytes: Bytes,
}

impl TranscriptFile {
    /// Size in bytes.
    #[must_use]
    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// One-line summary shown under the drop zone.
    #[must_use]
    pub fn describe(&self) -> String {
        format!(
            "{} \u{2014} {} bytes \u{2014} {}",
            self.name,
            group_thousands(self.size()),
            self.content_type
        )
    }
}

/// Rules for accepting transcript files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadPolicy {
    max_bytes: usize,
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_BYTES)
    }
}

impl UploadPolicy {
    /// Create a policy with the given size ceiling.
    #[must_use]
    pub fn new(max_bytes: usize) -> Self {
        Self { max_bytes }
    }

    /// Size ceiling in bytes.
    #[must_use]
    pub fn max_bytes(&self) -> usize {
        self.max_bytes
    }

    /// Validate a candidate file.
    ///
    /// Checks run in order: extension, declared content type, size, encoding.
    /// A missing or `application/octet-stream` content type is replaced by a
    /// guess from the file name.
    pub fn validate(
        &self,
        name: &str,
        content_type: Option<&str>,
        bytes: impl Into<Bytes>,
    ) -> Result<TranscriptFile, UploadError> {
        let ext = extension_of(name);
        if !ALLOWED_EXTENSIONS.contains(&ext.as_str()) {
            return Err(UploadError::UnsupportedExtension(ext));
        }

        let content_type = match content_type.map(essence) {
            Some(ct) if !ct.is_empty() && ct != "application/octet-stream" => {
                if !ALLOWED_CONTENT_TYPES.contains(&ct.as_str()) {
                    return Err(UploadError::UnsupportedContentType(ct));
                }
                ct
            }
            _ => guess_content_type(name),
        };

        let bytes = bytes.into();
        if bytes.len() > self.max_bytes {
            return Err(UploadError::TooLarge {
                size: bytes.len(),
                max: self.max_bytes,
            });
        }

        if std::str::from_utf8(&bytes).is_err() {
            return Err(UploadError::NotUtf8);
        }

        Ok(TranscriptFile {
            name: name.to_string(),
            content_type,
            bytes,
        })
    }
}

/// Strip parameters (`; charset=utf-8`) and lowercase a content type.
fn essence(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

/// Guess an allowed content type from the file name.
fn guess_content_type(name: &str) -> String {
    let guessed = mime_guess::from_path(name)
        .first()
        .map(|m| m.essence_str().to_string());

    match guessed {
        Some(ct) if ct == "text/x-markdown" => "text/markdown".to_string(),
        Some(ct) if ALLOWED_CONTENT_TYPES.contains(&ct.as_str()) => ct,
        _ if extension_of(name) == "md" => "text/markdown".to_string(),
        _ => "text/plain".to_string(),
    }
}

/// Format a byte count with thousands separators.
fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
