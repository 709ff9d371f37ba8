//! Response record produced by local processing.
//!
//! # Design
//! Four fixed fields plus one open-ended `data` object. Fields are private so
//! a record cannot change after construction; deserialization goes through
//! serde, which rejects a record missing `status`, `message` or `timestamp`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A JSON object. Keys keep insertion order.
pub type JsonMap = Map<String, Value>;

/// Outcome of a processing operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    status: String,
    message: String,
    #[serde(default)]
    data: JsonMap,
    timestamp: String,
}

impl ApiResponse {
    /// Build a record with an empty `data` object.
    pub fn new(
        status: impl Into<String>,
        message: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            status: status.into(),
            message: message.into(),
            data: JsonMap::new(),
            timestamp: timestamp.into(),
        }
    }

    pub fn with_data(mut self, data: JsonMap) -> Self {
        self.data = data;
        self
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn data(&self) -> &JsonMap {
        &self.data
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }
}
