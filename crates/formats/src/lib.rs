//! Dataset IO for lexical quality scoring
//!
//! Streaming JSONL (JSON Lines) readers and writers with automatic gzip
//! handling, plus the `Record` type shared across the pipeline.

pub mod error;
pub mod jsonl;
pub mod record;
pub mod writer;

pub use error::{Error, Result};
pub use jsonl::JsonlReader;
pub use record::Record;
pub use writer::JsonlWriter;
