// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]
//! CSV ingestion for the happiness dataset.
//!
//! The first row is the header; every following row becomes one
//! [`HappinessRecord`] with all header columns present as keys and
//! numeric-looking fields coerced to numbers. File order is load order.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use felicity_model::{coerce_field, HappinessRecord};
use serde_json::Map;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to read dataset file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed csv: {0}")]
    Csv(#[from] csv::Error),
}

/// Streaming reader yielding one coerced record per CSV data row.
pub struct RecordReader<R: Read> {
    headers: csv::StringRecord,
    rows: csv::StringRecordsIntoIter<R>,
}

impl RecordReader<File> {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, IngestError> {
        Self::from_reader(File::open(path)?)
    }
}

impl<R: Read> RecordReader<R> {
    pub fn from_reader(reader: R) -> Result<Self, IngestError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);
        let headers = csv_reader.headers()?.clone();
        Ok(Self {
            headers,
            rows: csv_reader.into_records(),
        })
    }

    #[must_use]
    pub fn headers(&self) -> &csv::StringRecord {
        &self.headers
    }
}

impl<R: Read> Iterator for RecordReader<R> {
    type Item = Result<HappinessRecord, IngestError>;

    fn next(&mut self) -> Option<Self::Item> {
        let row = match self.rows.next()? {
            Ok(row) => row,
            Err(e) => return Some(Err(e.into())),
        };
        let mut fields = Map::with_capacity(self.headers.len());
        for (header, raw) in self.headers.iter().zip(row.iter()) {
            fields.insert(header.to_string(), coerce_field(raw));
        }
        Some(Ok(HappinessRecord::new(fields)))
    }
}

/// Reads an entire CSV into memory, preserving row order.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<HappinessRecord>, IngestError> {
    RecordReader::from_reader(reader)?.collect()
}

pub fn load_path(path: impl AsRef<Path>) -> Result<Vec<HappinessRecord>, IngestError> {
    RecordReader::open(path)?.collect()
}

pub const CRATE_NAME: &str = "felicity-ingest";
