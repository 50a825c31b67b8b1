use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::debug;

use crate::{
    error::{Error, Result},
    text_extract::{self, Extraction},
};

/// One ingested document: its filename and full extracted text.
///
/// Built once by [`build_corpus`]; documents with empty text never appear.
#[derive(Debug, Clone)]
pub struct DocumentText {
    pub filename: String,
    pub raw_text: String,
}

/// File extensions eligible for ingestion, matched case-insensitively.
const SUPPORTED_EXTENSIONS: &[&str] = &["pdf", "txt"];

/// Enumerate eligible files in `dir` (non-recursive) and extract their text.
///
/// Files whose extraction fails or yields empty text are silently dropped;
/// the reason is logged at debug level only. The only error is a missing or
/// unreadable input directory. Results follow the directory listing order.
pub fn build_corpus(dir: &Path) -> Result<Vec<DocumentText>> {
    if !dir.is_dir() {
        return Err(Error::InputDir(dir.to_path_buf()));
    }

    let mut candidates: Vec<PathBuf> = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type()?.is_file() && is_supported(&path) {
            candidates.push(path);
        }
    }

    // Extraction dominates the cost, so fan it out; collect preserves the
    // listing order.
    let corpus = candidates
        .par_iter()
        .filter_map(|path| {
            let filename = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())?;

            match text_extract::extract_text(path) {
                Extraction::Text(text) if !text.is_empty() => {
                    Some(DocumentText {
                        filename,
                        raw_text: text,
                    })
                }
                Extraction::Text(_) => {
                    debug!(file = %filename, "dropping empty document");
                    None
                }
                Extraction::Failed(reason) => {
                    debug!(file = %filename, %reason, "dropping document");
                    None
                }
            }
        })
        .collect();

    Ok(corpus)
}

fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS.contains(&ext.to_lowercase().as_str())
        })
}
