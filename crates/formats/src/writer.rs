//! Streaming JSONL writer with optional gzip compression

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use flate2::write::GzEncoder;
use flate2::Compression;
use serde_json::Value;
use tracing::debug;

use crate::{Record, Result};

/// Streaming JSONL writer, one JSON value per line
pub struct JsonlWriter {
    inner: Box<dyn Write>,
    records_written: usize,
}

impl JsonlWriter {
    /// Create an output file, gzip-compressing when the path ends in `.gz`
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path)?;

        let extension = path.extension().and_then(|e| e.to_str());
        let inner: Box<dyn Write> = match extension {
            Some("gz") => {
                debug!("Writing gzip-compressed JSONL file: {:?}", path);
                Box::new(BufWriter::new(GzEncoder::new(file, Compression::default())))
            }
            _ => {
                debug!("Writing plain JSONL file: {:?}", path);
                Box::new(BufWriter::new(file))
            }
        };

        Ok(Self {
            inner,
            records_written: 0,
        })
    }

    /// Writer over any `Write` sink (used by tests and stdout output)
    pub fn from_writer<W: Write + 'static>(writer: W) -> Self {
        Self {
            inner: Box::new(writer),
            records_written: 0,
        }
    }

    /// Append one JSON value as a line
    pub fn write_value(&mut self, value: &Value) -> Result<()> {
        serde_json::to_writer(&mut self.inner, value)?;
        self.inner.write_all(b"\n")?;
        self.records_written += 1;
        Ok(())
    }

    /// Append one record
    pub fn write_record(&mut self, record: &Record) -> Result<()> {
        self.write_value(&record.data)
    }

    /// Number of records written so far
    pub fn records_written(&self) -> usize {
        self.records_written
    }

    /// Flush and close the writer, returning the record count
    pub fn finish(mut self) -> Result<usize> {
        self.inner.flush()?;
        Ok(self.records_written)
    }
}
