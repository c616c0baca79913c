use async_trait::async_trait;

/// Raw text of one PDF page, layout spacing preserved so that table rows
/// can still be reconstructed from column gaps.
#[derive(Debug, Clone, PartialEq)]
pub struct PageText {
    pub page_number: u32,
    pub text: String,
}

#[async_trait]
pub trait TextExtractor: Send + Sync {
    /// Per-page raw text of the document.
    async fn extract_pages(
        &self,
        data: &[u8],
        filename: &str,
    ) -> Result<Vec<PageText>, TextExtractorError>;

    /// Sanitized full text of the document.
    async fn extract_text(&self, data: &[u8], filename: &str)
        -> Result<String, TextExtractorError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TextExtractorError {
    #[error("unsupported content type: {0}")]
    UnsupportedContentType(String),
    #[error("extraction failed: {0}")]
    ExtractionFailed(String),
    #[error("no text found in document: {0}")]
    NoTextFound(String),
}
