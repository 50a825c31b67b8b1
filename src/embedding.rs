use crate::error::Result;

/// Maps texts to fixed-length embedding vectors.
///
/// One vector per input text, in input order, with a constant dimensionality
/// per instance. Implementations must be deterministic for identical input,
/// and batched encoding must be equivalent to encoding texts one at a time.
/// The same instance must serve both index build and query embedding so the
/// vectors live in one space.
pub trait Embedder {
    fn embed(&mut self, texts: &[String]) -> Result<Vec<Vec<f32>>>;
}
