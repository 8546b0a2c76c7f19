// src/serializer/json.rs

//! JSON serialization for chunk runs and comparison reports.
//!
//! The report types already implement `Serialize`; this is a
//! convenience wrapper with formatting options.

use serde::Serialize;

use crate::error::Result;
use crate::metadata::Chunk;
use crate::quality::ComparisonReport;

/// Options for JSON serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JsonOptions {
    /// Pretty-print with indentation (default: true).
    pub pretty: bool,
}

impl Default for JsonOptions {
    fn default() -> Self {
        Self { pretty: true }
    }
}

/// JSON serializer for chunk runs and comparison reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct JsonSerializer {
    options: JsonOptions,
}

impl JsonSerializer {
    /// Create a serializer with default options (pretty-printed).
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn with_options(options: JsonOptions) -> Self {
        Self { options }
    }

    /// Serialize a chunk sequence.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn serialize_chunks(&self, chunks: &[Chunk]) -> Result<String> {
        self.serialize(&chunks)
    }

    /// Serialize a strategy comparison report.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn serialize_report(&self, report: &ComparisonReport) -> Result<String> {
        self.serialize(report)
    }

    fn serialize<T: Serialize>(&self, value: &T) -> Result<String> {
        let out = if self.options.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(out)
    }
}
