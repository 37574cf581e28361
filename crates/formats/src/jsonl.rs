//! Streaming JSONL (JSON Lines) reader
//!
//! Memory-efficient line-by-line reading of JSONL files with automatic
//! gzip decompression based on the file extension.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use flate2::read::GzDecoder;
use serde_json::Value;
use tracing::{debug, warn};

use crate::{Error, Record, Result};

const DEFAULT_BUFFER_SIZE: usize = 64 * 1024;

/// Streaming JSONL reader that processes files line-by-line
pub struct JsonlReader<R: Read> {
    reader: BufReader<R>,
    line_number: usize,
    bytes_read: u64,
    total_bytes: Option<u64>,
}

impl JsonlReader<Box<dyn Read>> {
    /// Open a JSONL file, auto-detecting gzip compression by extension
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let total_bytes = file.metadata()?.len();

        let extension = path.extension().and_then(|e| e.to_str());

        match extension {
            Some("gz") => {
                debug!("Opening gzip-compressed JSONL file: {:?}", path);
                let reader: Box<dyn Read> = Box::new(GzDecoder::new(file));
                Ok(Self::with_total_bytes(reader, None))
            }
            _ => {
                debug!("Opening plain JSONL file: {:?}", path);
                let reader: Box<dyn Read> = Box::new(file);
                Ok(Self::with_total_bytes(reader, Some(total_bytes)))
            }
        }
    }
}

impl<R: Read> JsonlReader<R> {
    /// Create a new JSONL reader from any Read source
    pub fn new(reader: R) -> Self {
        Self::with_total_bytes(reader, None)
    }

    fn with_total_bytes(reader: R, total_bytes: Option<u64>) -> Self {
        Self {
            reader: BufReader::with_capacity(DEFAULT_BUFFER_SIZE, reader),
            line_number: 0,
            bytes_read: 0,
            total_bytes,
        }
    }

    /// Number of lines processed so far
    pub fn lines_processed(&self) -> usize {
        self.line_number
    }

    /// Number of (possibly compressed) bytes read so far
    pub fn bytes_processed(&self) -> u64 {
        self.bytes_read
    }

    /// Total file size if known (unknown for compressed input)
    pub fn total_bytes(&self) -> Option<u64> {
        self.total_bytes
    }
}

impl<R: Read> Iterator for JsonlReader<R> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut line = String::new();

        loop {
            line.clear();
            match self.reader.read_line(&mut line) {
                Ok(0) => return None, // EOF
                Ok(n) => {
                    self.bytes_read += n as u64;
                    self.line_number += 1;

                    let trimmed = line.trim();
                    if trimmed.is_empty() {
                        continue;
                    }

                    match serde_json::from_str::<Value>(trimmed) {
                        Ok(value) => {
                            return Some(Ok(Record::new(value, self.line_number)));
                        }
                        Err(e) => {
                            // Skip malformed lines and continue
                            warn!("Failed to parse JSON at line {}: {}", self.line_number, e);
                            continue;
                        }
                    }
                }
                Err(e) => {
                    return Some(Err(Error::Io(e)));
                }
            }
        }
    }
}
