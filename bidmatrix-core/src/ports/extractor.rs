// bidmatrix-core/src/ports/extractor.rs

use crate::error::BidMatrixError;
use std::path::Path;

/// An uploaded document: its name (used to pick a decoder) and raw bytes.
#[derive(Debug, Clone)]
pub struct Document {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl Document {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    pub fn read(path: &Path) -> Result<Self, BidMatrixError> {
        let bytes = std::fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self { name, bytes })
    }

    /// Lowercased extension, if the name has one.
    pub fn extension(&self) -> Option<String> {
        Path::new(&self.name)
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
    }
}

pub trait TextExtractor: Send + Sync {
    /// Returns the document's text, or an extraction failure with a reason.
    fn extract(&self, document: &Document) -> Result<String, BidMatrixError>;
}
