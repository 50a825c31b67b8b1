use candle_core::Device;
use pylate_rs::ColBERT;

use crate::{
    embedding::Embedder,
    error::{Error, Result},
};

pub const DEFAULT_MODEL_ID: &str = "lightonai/GTE-ModernColBERT-v1";
pub const MODEL_ENV_VAR: &str = "DOCSIFT_MODEL";

/// Select the best available compute device.
///
/// Uses CUDA when compiled with the `cuda` feature, Metal when compiled with
/// the `metal` feature, and falls back to CPU otherwise.
fn default_device() -> Device {
    #[cfg(feature = "cuda")]
    {
        if let Ok(device) = Device::new_cuda(0) {
            return device;
        }
    }

    #[cfg(feature = "metal")]
    {
        if let Ok(device) = Device::new_metal(0) {
            return device;
        }
    }

    Device::Cpu
}

/// Manages the embedding model lifecycle, supporting lazy loading on first
/// use.
///
/// Token-level embeddings from the underlying ColBERT model are mean-pooled
/// into one fixed-length vector per text. Queries are encoded through the
/// same document path, so vectors produced at build time and at search time
/// are directly comparable.
pub struct ModelManager {
    model: Option<ColBERT>,
    model_id: String,
}

impl Default for ModelManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelManager {
    /// Creates a new `ModelManager`. The model ID is resolved from:
    /// 1. The `DOCSIFT_MODEL` environment variable, if set
    /// 2. Otherwise, the default model (`lightonai/GTE-ModernColBERT-v1`)
    ///
    /// The model is not loaded until the first encode call.
    pub fn new() -> Self {
        let model_id = std::env::var(MODEL_ENV_VAR)
            .unwrap_or_else(|_| DEFAULT_MODEL_ID.to_string());

        Self {
            model: None,
            model_id,
        }
    }

    /// Creates a `ModelManager` with an explicit model ID, bypassing
    /// environment variable resolution.
    pub fn with_model_id(model_id: String) -> Self {
        Self {
            model: None,
            model_id,
        }
    }

    /// Returns the model ID that will be (or has been) loaded.
    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    /// Returns `true` if the model has already been loaded into memory.
    pub fn is_loaded(&self) -> bool {
        self.model.is_some()
    }

    /// Ensures the model is loaded, downloading from HuggingFace Hub if
    /// needed.
    fn ensure_loaded(&mut self) -> Result<&mut ColBERT> {
        if self.model.is_none() {
            let device = default_device();
            let colbert: ColBERT = ColBERT::from(&self.model_id)
                .with_device(device)
                .try_into()
                .map_err(|e| Error::Embedding(format!("{e}")))?;
            self.model = Some(colbert);
        }

        Ok(self.model.as_mut().unwrap())
    }

    /// Encodes texts into fixed-length vectors by mean-pooling the model's
    /// per-token embeddings.
    fn encode_pooled(&mut self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        let model = self.ensure_loaded()?;

        // Token embeddings, shape [batch, tokens, dimension].
        let embeddings = model
            .encode(texts, false)
            .map_err(|e| Error::Embedding(format!("{e}")))?;

        let pooled = embeddings
            .mean(1)
            .map_err(|e| Error::Embedding(format!("mean pooling: {e}")))?;

        pooled
            .to_vec2::<f32>()
            .map_err(|e| Error::Embedding(format!("tensor to f32: {e}")))
    }
}

impl Embedder for ModelManager {
    fn embed(&mut self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }
        self.encode_pooled(texts)
    }
}
