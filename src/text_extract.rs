use std::path::Path;

/// Outcome of extracting text from one file.
///
/// Extraction never errors outward: failures are tagged with a reason so the
/// corpus builder can log and drop them, keeping the observable
/// empty-text-on-failure contract without losing the cause.
#[derive(Debug, Clone)]
pub enum Extraction {
    Text(String),
    Failed(String),
}

impl Extraction {
    /// The extracted text, if extraction succeeded and produced any.
    pub fn into_text(self) -> Option<String> {
        match self {
            Extraction::Text(text) if !text.is_empty() => Some(text),
            _ => None,
        }
    }
}

/// Extract the full text of a document file.
///
/// Plain-text files are read as UTF-8; PDFs go through `pdf-extract` with
/// pages concatenated in read order. Any read or decode failure becomes
/// [`Extraction::Failed`], and whitespace-only content becomes empty text.
pub fn extract_text(path: &Path) -> Extraction {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
        .unwrap_or_default();

    let result = match extension.as_str() {
        "txt" => std::fs::read_to_string(path)
            .map_err(|e| format!("read failed: {e}")),
        "pdf" => pdf_extract::extract_text(path)
            .map_err(|e| format!("pdf decode failed: {e}")),
        other => Err(format!("unsupported extension: .{other}")),
    };

    match result {
        Ok(text) => Extraction::Text(text.trim().to_string()),
        Err(reason) => Extraction::Failed(reason),
    }
}
