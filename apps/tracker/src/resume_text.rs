//! Resume Text Provider: turns the configured resume document into plain text.
//!
//! Failures here are per-request errors; nothing in this module may take the
//! process down, including a panic inside the PDF parser.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ResumeTextError {
    #[error("resume file '{}' was not found", .0.display())]
    NotFound(PathBuf),

    #[error("failed to extract text from resume: {0}")]
    ExtractionFailed(String),
}

/// Extracts the text of the resume at `path`.
///
/// `.txt` and `.md` files are read as UTF-8; anything else is parsed as PDF.
pub async fn extract(path: &Path) -> Result<String, ResumeTextError> {
    if !tokio::fs::try_exists(path).await.unwrap_or(false) {
        return Err(ResumeTextError::NotFound(path.to_path_buf()));
    }

    let text = if is_plain_text(path) {
        tokio::fs::read_to_string(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ResumeTextError::NotFound(path.to_path_buf())
            } else {
                ResumeTextError::ExtractionFailed(e.to_string())
            }
        })?
    } else {
        extract_pdf(path.to_path_buf()).await?
    };

    if text.trim().is_empty() {
        return Err(ResumeTextError::ExtractionFailed(
            "no text found in document".to_string(),
        ));
    }

    debug!("Extracted {} characters from {}", text.len(), path.display());
    Ok(text)
}

fn is_plain_text(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| matches!(e.to_ascii_lowercase().as_str(), "txt" | "md"))
        .unwrap_or(false)
}

async fn extract_pdf(path: PathBuf) -> Result<String, ResumeTextError> {
    // pdf-extract is synchronous and panics on some malformed files.
    match tokio::task::spawn_blocking(move || pdf_extract::extract_text(&path)).await {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => Err(ResumeTextError::ExtractionFailed(e.to_string())),
        Err(e) => Err(ResumeTextError::ExtractionFailed(format!(
            "PDF parser aborted: {e}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_plain_text_resume_is_read_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.txt");
        std::fs::write(&path, "Jane Doe\nRust engineer, 6 years").unwrap();

        let text = extract(&path).await.unwrap();
        assert_eq!(text, "Jane Doe\nRust engineer, 6 years");
    }

    #[tokio::test]
    async fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.pdf");

        let err = extract(&path).await.unwrap_err();
        assert!(matches!(err, ResumeTextError::NotFound(p) if p == path));
    }

    #[tokio::test]
    async fn test_blank_document_fails_extraction() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.md");
        std::fs::write(&path, "   \n\t").unwrap();

        let err = extract(&path).await.unwrap_err();
        assert!(matches!(err, ResumeTextError::ExtractionFailed(_)));
    }

    #[tokio::test]
    async fn test_corrupt_pdf_fails_extraction_without_panicking() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.pdf");
        std::fs::write(&path, b"this is not a pdf").unwrap();

        let err = extract(&path).await.unwrap_err();
        assert!(matches!(err, ResumeTextError::ExtractionFailed(_)));
    }

    #[test]
    fn test_is_plain_text_by_extension() {
        assert!(is_plain_text(Path::new("cv.TXT")));
        assert!(is_plain_text(Path::new("cv.md")));
        assert!(!is_plain_text(Path::new("cv.pdf")));
        assert!(!is_plain_text(Path::new("cv")));
    }
}
