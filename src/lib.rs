//! docsift - classify, extract, and semantically search a folder of documents.
//!
//! docsift ingests a directory of PDF and plain-text files, assigns each a
//! document type via fixed keyword rules, extracts typed structured fields
//! per type, and builds an in-memory embedding index so free-text queries
//! return the most relevant documents.
//!
//! # Quick start
//!
//! ```no_run
//! use docsift::{corpus, pipeline, retrieval::RetrievalIndex, ModelManager};
//!
//! let docs = corpus::build_corpus(std::path::Path::new("input_docs")).unwrap();
//!
//! // Structured extraction
//! let results = pipeline::process_documents(&docs);
//! println!("{}", pipeline::to_artifact(&results));
//!
//! // Semantic search
//! let mut model = ModelManager::new();
//! let index = RetrievalIndex::build(&docs, &mut model).unwrap();
//! for hit in index.search("payments due in January", 3, &mut model).unwrap() {
//!     println!("{} (similarity: {:.4})", hit.filename, hit.similarity());
//! }
//! ```

pub mod classifier;
pub mod cli;
pub mod corpus;
pub mod embedding;
pub mod error;
pub mod extractor;
pub mod model_manager;
pub mod pipeline;
pub mod retrieval;
pub mod schema;
pub mod text_extract;
pub mod vector_index;

pub use classifier::ClassificationLabel;
pub use corpus::DocumentText;
pub use embedding::Embedder;
pub use error::{Error, Result};
pub use extractor::{FieldValue, StructuredRecord};
pub use model_manager::ModelManager;
pub use retrieval::{RetrievalIndex, SearchHit};
