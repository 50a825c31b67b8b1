use std::collections::BTreeMap;

use crate::{
    classifier,
    corpus::DocumentText,
    error::Result,
    extractor::{self, StructuredRecord},
};

/// Classify and extract every document in the corpus.
///
/// Each document is processed independently; failures inside one document
/// (missed patterns, bad numbers) never affect the others. Returns one
/// record per document in corpus order.
pub fn process_documents(
    corpus: &[DocumentText],
) -> Vec<(String, StructuredRecord)> {
    corpus
        .iter()
        .map(|doc| {
            let label = classifier::classify(&doc.raw_text);
            let record = extractor::extract(label, &doc.raw_text);
            (doc.filename.clone(), record)
        })
        .collect()
}

/// Assemble the output artifact: filename → `{"class": ..., <fields>}`.
///
/// Keyed by filename; flat JSON-compatible values only (strings, numbers,
/// null).
pub fn to_artifact(
    results: &[(String, StructuredRecord)],
) -> serde_json::Value {
    let map: BTreeMap<String, serde_json::Value> = results
        .iter()
        .map(|(filename, record)| (filename.clone(), record.to_json()))
        .collect();
    serde_json::to_value(map).unwrap_or_default()
}

/// Serialize the artifact and write it to `path`.
pub fn write_artifact(
    results: &[(String, StructuredRecord)],
    path: &std::path::Path,
) -> Result<()> {
    let json = serde_json::to_string_pretty(&to_artifact(results))?;
    std::fs::write(path, json)?;
    Ok(())
}
