use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{PageText, TextExtractor, TextExtractorError};

use super::text_sanitizer::sanitize_extracted_text;

const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

/// Text extraction for digital PDFs with an embedded text layer. Scanned
/// sheets without one come back empty and are reported as such.
#[derive(Default)]
pub struct PdfAdapter;

impl PdfAdapter {
    pub fn new() -> Self {
        Self
    }

    fn extract_pages_blocking(data: &[u8]) -> Result<Vec<PageText>, TextExtractorError> {
        let page_texts = pdf_extract::extract_text_from_mem_by_pages(data)
            .map_err(|e| TextExtractorError::ExtractionFailed(format!("failed to parse PDF: {e}")))?;

        let pages = page_texts
            .into_iter()
            .enumerate()
            .map(|(index, text)| PageText {
                page_number: (index + 1) as u32,
                text,
            })
            .filter(|page| !page.text.trim().is_empty())
            .collect();

        Ok(pages)
    }
}

#[async_trait]
impl TextExtractor for PdfAdapter {
    #[tracing::instrument(skip(self, data), fields(filename = %filename, bytes = data.len()))]
    async fn extract_pages(
        &self,
        data: &[u8],
        filename: &str,
    ) -> Result<Vec<PageText>, TextExtractorError> {
        let owned = data.to_vec();

        let pages = tokio::time::timeout(
            EXTRACTION_TIMEOUT,
            tokio::task::spawn_blocking(move || Self::extract_pages_blocking(&owned)),
        )
        .await
        .map_err(|_| TextExtractorError::ExtractionFailed("PDF extraction timed out".to_string()))?
        .map_err(|e| TextExtractorError::ExtractionFailed(format!("task join error: {e}")))??;

        tracing::info!(page_count = pages.len(), "PDF text extraction complete");

        if pages.is_empty() {
            return Err(TextExtractorError::NoTextFound(filename.to_string()));
        }

        Ok(pages)
    }

    async fn extract_text(
        &self,
        data: &[u8],
        filename: &str,
    ) -> Result<String, TextExtractorError> {
        let pages = self.extract_pages(data, filename).await?;

        let sanitized: Vec<String> = pages
            .iter()
            .map(|page| sanitize_extracted_text(&page.text))
            .filter(|text| !text.is_empty())
            .collect();

        if sanitized.is_empty() {
            return Err(TextExtractorError::NoTextFound(filename.to_string()));
        }

        Ok(sanitized.join("\n\n"))
    }
}
