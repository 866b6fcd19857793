// bidmatrix-core/src/infrastructure/adapters/document.rs

use tracing::{debug, instrument};

use crate::error::BidMatrixError;
use crate::infrastructure::error::InfrastructureError;
use crate::ports::{Document, TextExtractor};

const PDF_MAGIC: &[u8] = b"%PDF";

/// Text-based PDFs through `pdf-extract`; `.txt` and `.md` as UTF-8.
#[derive(Debug, Default, Clone, Copy)]
pub struct DocumentTextExtractor;

fn extraction_failed(document: &Document, reason: impl Into<String>) -> BidMatrixError {
    BidMatrixError::Infrastructure(InfrastructureError::Extraction {
        document: document.name.clone(),
        reason: reason.into(),
    })
}

/// `pdf-extract` panics on some malformed inputs instead of returning an error.
fn contain_panic<E, F>(document: &Document, extract: F) -> Result<String, BidMatrixError>
where
    E: std::fmt::Display,
    F: FnOnce() -> Result<String, E>,
{
    match std::panic::catch_unwind(std::panic::AssertUnwindSafe(extract)) {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => Err(extraction_failed(document, e.to_string())),
        Err(_) => Err(extraction_failed(document, "PDF extraction panicked (malformed PDF)")),
    }
}

impl TextExtractor for DocumentTextExtractor {
    #[instrument(skip(self, document), fields(document = %document.name, bytes = document.bytes.len()))]
    fn extract(&self, document: &Document) -> Result<String, BidMatrixError> {
        let extension = document.extension();

        let text = if document.bytes.starts_with(PDF_MAGIC) || extension.as_deref() == Some("pdf") {
            contain_panic(document, || pdf_extract::extract_text_from_mem(&document.bytes))?
        } else {
            match extension.as_deref() {
                Some("txt" | "md" | "text") => std::str::from_utf8(&document.bytes)
                    .map(str::to_string)
                    .map_err(|e| extraction_failed(document, format!("not valid UTF-8: {e}")))?,
                other => {
                    return Err(extraction_failed(
                        document,
                        format!("unsupported document type '{}'", other.unwrap_or("none")),
                    ));
                }
            }
        };

        if text.trim().is_empty() {
            return Err(extraction_failed(
                document,
                "no extractable text (scanned or image-only document?)",
            ));
        }

        debug!(chars = text.chars().count(), "Extracted document text");
        Ok(text)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn extraction_reason(result: Result<String, BidMatrixError>) -> String {
        match result {
            Err(BidMatrixError::Infrastructure(InfrastructureError::Extraction { reason, .. })) => {
                reason
            }
            other => panic!("expected an extraction failure, got {other:?}"),
        }
    }

    #[test]
    fn test_plain_text_passes_through() {
        let doc = Document::new("rfp.txt", b"Vendors must support SSO.\n".to_vec());
        let text = DocumentTextExtractor.extract(&doc).unwrap();
        assert_eq!(text, "Vendors must support SSO.\n");
    }

    #[test]
    fn test_markdown_extension_is_case_insensitive() {
        let doc = Document::new("Proposal.MD", b"# Acme\nWe support SSO.".to_vec());
        assert!(DocumentTextExtractor.extract(&doc).is_ok());
    }

    #[test]
    fn test_blank_text_is_a_failure() {
        let doc = Document::new("empty.txt", b"   \n\t".to_vec());
        let reason = extraction_reason(DocumentTextExtractor.extract(&doc));
        assert!(reason.contains("no extractable text"));
    }

    #[test]
    fn test_unsupported_extension() {
        let doc = Document::new("proposal.docx", vec![0x50, 0x4b, 0x03, 0x04]);
        let reason = extraction_reason(DocumentTextExtractor.extract(&doc));
        assert!(reason.contains("docx"));
    }

    #[test]
    fn test_panicking_extraction_becomes_a_failure() {
        let doc = Document::new("broken.pdf", b"%PDF-1.7".to_vec());
        let result = contain_panic::<String, _>(&doc, || panic!("xref table out of bounds"));
        let reason = extraction_reason(result);
        assert_eq!(reason, "PDF extraction panicked (malformed PDF)");
    }

    #[test]
    fn test_truncated_pdf_is_a_failure_not_a_crash() {
        let doc = Document::new("truncated.pdf", b"%PDF-1.4\n1 0 obj\n<< /Type".to_vec());
        assert!(DocumentTextExtractor.extract(&doc).is_err());
    }

    #[test]
    fn test_invalid_utf8() {
        let doc = Document::new("rfp.txt", vec![0xff, 0xfe, 0x00]);
        let reason = extraction_reason(DocumentTextExtractor.extract(&doc));
        assert!(reason.contains("UTF-8"));
    }
}
