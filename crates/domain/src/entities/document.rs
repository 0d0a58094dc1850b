//! Uploaded document entity

use bytes::Bytes;

/// Magic bytes every PDF header starts with
const PDF_MAGIC: &[u8] = b"%PDF-";

/// Readers accept the header anywhere in the first KiB
const PDF_HEADER_WINDOW: usize = 1024;

/// Raw bytes of an uploaded agreement
///
/// Owned by the caller for the duration of one request and never persisted.
/// Cloning is cheap, the bytes are reference counted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    bytes: Bytes,
    file_name: Option<String>,
}

impl Document {
    /// Wrap raw document bytes
    pub fn new(bytes: impl Into<Bytes>) -> Self {
        Self {
            bytes: bytes.into(),
            file_name: None,
        }
    }

    /// Attach the original file name (used for logging and display only)
    #[must_use]
    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    /// The full byte stream, starting at offset 0
    #[must_use]
    pub fn bytes(&self) -> &Bytes {
        &self.bytes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Cheap check for a PDF header near the start of the stream
    #[must_use]
    pub fn has_pdf_header(&self) -> bool {
        let window = &self.bytes[..self.bytes.len().min(PDF_HEADER_WINDOW)];
        window.windows(PDF_MAGIC.len()).any(|w| w == PDF_MAGIC)
    }
}
