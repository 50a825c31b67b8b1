use serde::Serialize;

use crate::{
    corpus::DocumentText,
    embedding::Embedder,
    error::Result,
    vector_index::FlatIndex,
};

/// One retrieval result: the matched filename and its squared-L2 distance
/// from the query embedding (lower is more similar).
#[derive(Debug, Clone, Serialize)]
pub struct SearchHit {
    pub filename: String,
    pub distance: f32,
}

impl SearchHit {
    /// Display-only transform of distance into a 0..1 similarity score.
    pub fn similarity(&self) -> f32 {
        1.0 / (1.0 + self.distance)
    }
}

struct BuiltIndex {
    index: FlatIndex,
    // Position is the dense id assigned at build time.
    filenames: Vec<String>,
}

/// Semantic search index over a document corpus.
///
/// Two states: `Empty` (built from zero documents; every search returns no
/// hits) and `Built` (write-once; no update or delete transitions). The same
/// [`Embedder`] instance must be passed to [`RetrievalIndex::build`] and
/// [`RetrievalIndex::search`].
pub struct RetrievalIndex {
    inner: Option<BuiltIndex>,
}

impl RetrievalIndex {
    /// Embed every corpus document in one batch and load the vectors into a
    /// flat L2 index, assigning dense ids 0..n-1 in corpus order.
    ///
    /// An empty corpus produces the `Empty` state, not an error.
    pub fn build<E: Embedder>(
        corpus: &[DocumentText],
        embedder: &mut E,
    ) -> Result<Self> {
        if corpus.is_empty() {
            return Ok(Self { inner: None });
        }

        let texts: Vec<String> =
            corpus.iter().map(|doc| doc.raw_text.clone()).collect();
        let vectors = embedder.embed(&texts)?;

        let dimension = vectors.first().map(|v| v.len()).unwrap_or(0);
        let mut index = FlatIndex::new(dimension);
        index.add(vectors)?;

        let filenames =
            corpus.iter().map(|doc| doc.filename.clone()).collect();

        Ok(Self {
            inner: Some(BuiltIndex { index, filenames }),
        })
    }

    /// Number of indexed documents.
    pub fn len(&self) -> usize {
        self.inner.as_ref().map_or(0, |built| built.index.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Embed `query` and return up to `k` hits ascending by distance.
    ///
    /// Searching an `Empty` index returns no hits. A query whose embedding
    /// dimensionality disagrees with the index is an internal-consistency
    /// error; it cannot happen when the build-time embedder is reused.
    pub fn search<E: Embedder>(
        &self,
        query: &str,
        k: usize,
        embedder: &mut E,
    ) -> Result<Vec<SearchHit>> {
        let Some(built) = &self.inner else {
            return Ok(Vec::new());
        };

        let query_vectors = embedder.embed(&[query.to_string()])?;
        let query_vector = query_vectors.first().ok_or_else(|| {
            crate::error::Error::Embedding(
                "embedder returned no vector for query".to_string(),
            )
        })?;

        let neighbors = built.index.search(query_vector, k)?;

        Ok(neighbors
            .into_iter()
            .map(|(id, distance)| SearchHit {
                filename: built.filenames[id].clone(),
                distance,
            })
            .collect())
    }
}

/// Format hits for human-readable terminal output.
pub fn format_human(hits: &[SearchHit]) {
    if hits.is_empty() {
        println!("No documents found for this query.");
        return;
    }

    for (i, hit) in hits.iter().enumerate() {
        println!(
            "{:>3}. {} (similarity: {:.4})",
            i + 1,
            hit.filename,
            hit.similarity()
        );
    }
    println!("\n{} result(s)", hits.len());
}

/// Format hits as a JSON object on stdout.
pub fn format_json(hits: &[SearchHit], query: &str) -> Result<()> {
    let payload = serde_json::json!({
        "query": query,
        "result_count": hits.len(),
        "results": hits,
    });
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Deterministic embedder for tests: counts occurrences of three topic
    /// words, producing a 3-dimensional vector.
    struct KeywordEmbedder;

    impl Embedder for KeywordEmbedder {
        fn embed(&mut self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
            Ok(texts
                .iter()
                .map(|text| {
                    let lowered = text.to_lowercase();
                    ["payment", "rust", "garden"]
                        .iter()
                        .map(|w| lowered.matches(w).count() as f32)
                        .collect()
                })
                .collect())
        }
    }

    fn doc(filename: &str, text: &str) -> DocumentText {
        DocumentText {
            filename: filename.to_string(),
            raw_text: text.to_string(),
        }
    }

    fn sample_corpus() -> Vec<DocumentText> {
        vec![
            doc("invoice.txt", "payment payment payment due in January"),
            doc("rust.txt", "rust rust rust systems programming"),
            doc("garden.txt", "garden garden garden soil compost"),
            doc("mixed.txt", "payment for the rust garden tools"),
            doc("plain.txt", "nothing notable in here"),
        ]
    }

    #[test]
    fn search_returns_k_hits_sorted_by_distance() {
        let corpus = sample_corpus();
        let mut embedder = KeywordEmbedder;
        let index = RetrievalIndex::build(&corpus, &mut embedder).unwrap();
        assert_eq!(index.len(), 5);

        let hits = index
            .search("payment payment payment", 3, &mut embedder)
            .unwrap();
        assert_eq!(hits.len(), 3);
        assert_eq!(hits[0].filename, "invoice.txt");
        for window in hits.windows(2) {
            assert!(window[0].distance <= window[1].distance);
        }
    }

    #[test]
    fn k_beyond_corpus_returns_all_without_padding() {
        let corpus = sample_corpus();
        let mut embedder = KeywordEmbedder;
        let index = RetrievalIndex::build(&corpus, &mut embedder).unwrap();

        let hits = index.search("rust", 50, &mut embedder).unwrap();
        assert_eq!(hits.len(), 5);

        let mut names: Vec<_> =
            hits.iter().map(|h| h.filename.clone()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 5, "no duplicate or synthetic entries");
    }

    #[test]
    fn empty_corpus_index_always_returns_nothing() {
        let mut embedder = KeywordEmbedder;
        let index = RetrievalIndex::build(&[], &mut embedder).unwrap();
        assert!(index.is_empty());

        for k in [0, 1, 10] {
            let hits = index.search("anything", k, &mut embedder).unwrap();
            assert!(hits.is_empty());
        }
    }

    #[test]
    fn repeated_queries_are_deterministic() {
        let corpus = sample_corpus();
        let mut embedder = KeywordEmbedder;
        let index = RetrievalIndex::build(&corpus, &mut embedder).unwrap();

        let first = index.search("garden soil", 5, &mut embedder).unwrap();
        let second = index.search("garden soil", 5, &mut embedder).unwrap();

        let names = |hits: &[SearchHit]| {
            hits.iter().map(|h| h.filename.clone()).collect::<Vec<_>>()
        };
        assert_eq!(names(&first), names(&second));
    }

    #[test]
    fn similarity_is_inverse_of_distance() {
        let hit = SearchHit {
            filename: "a.txt".to_string(),
            distance: 3.0,
        };
        assert!((hit.similarity() - 0.25).abs() < 1e-6);
    }

    #[test]
    fn mismatched_query_dimension_is_an_error() {
        // Build with a 3-dimensional embedder, search with a different one.
        struct WideEmbedder;
        impl Embedder for WideEmbedder {
            fn embed(&mut self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
                Ok(texts.iter().map(|_| vec![0.0; 7]).collect())
            }
        }

        let corpus = sample_corpus();
        let mut embedder = KeywordEmbedder;
        let index = RetrievalIndex::build(&corpus, &mut embedder).unwrap();

        let mut wide = WideEmbedder;
        assert!(matches!(
            index.search("query", 1, &mut wide),
            Err(crate::error::Error::DimensionMismatch { .. })
        ));
    }
}
