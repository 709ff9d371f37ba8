//! The three operations the command line exposes.
//!
//! Remote calls go build → transport → parse; nothing is kept between calls.
//! `process_data` is pure apart from reading the clock for the timestamp.

use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::Value;
use tracing::{debug, info};

use crate::client::EchoClient;
use crate::error::ApiError;
use crate::transport::{Transport, UreqTransport};
use crate::types::{ApiResponse, JsonMap};

pub const PROCESS_STATUS: &str = "success";
pub const PROCESS_MESSAGE: &str = "Data processed successfully";

#[derive(Debug, Clone)]
pub struct SampleService<T = UreqTransport> {
    client: EchoClient,
    transport: T,
}

impl SampleService<UreqTransport> {
    pub fn new(base_url: &str) -> Self {
        Self::with_transport(base_url, UreqTransport)
    }
}

impl Default for SampleService<UreqTransport> {
    fn default() -> Self {
        Self {
            client: EchoClient::default(),
            transport: UreqTransport,
        }
    }
}

impl<T: Transport> SampleService<T> {
    pub fn with_transport(base_url: &str, transport: T) -> Self {
        Self {
            client: EchoClient::new(base_url),
            transport,
        }
    }

    /// `GET {base}/ip`, returning the decoded body.
    pub fn get_ip_info(&self) -> Result<JsonMap, ApiError> {
        let request = self.client.build_ip_info();
        info!(url = %request.url, "fetching ip info");
        let response = self.transport.execute(request)?;
        self.client.parse_ip_info(response)
    }

    /// `POST {base}/post` with `payload` as the JSON body, returning the
    /// decoded response unmodified.
    pub fn post_data(&self, payload: &Value) -> Result<JsonMap, ApiError> {
        let request = self.client.build_post_data(payload)?;
        info!(
            url = %request.url,
            bytes = request.body.as_ref().map_or(0, String::len),
            "posting data"
        );
        let response = self.transport.execute(request)?;
        self.client.parse_post_data(response)
    }
}

/// Summarise `input` into a success record: its keys in insertion order,
/// how many there are, and a `processed` flag.
pub fn process_data(input: &JsonMap) -> ApiResponse {
    let keys: Vec<Value> = input.keys().cloned().map(Value::String).collect();

    let mut data = JsonMap::new();
    data.insert("input_keys".to_string(), Value::Array(keys));
    data.insert("input_count".to_string(), Value::from(input.len()));
    data.insert("processed".to_string(), Value::Bool(true));

    debug!(count = input.len(), "processed input");

    ApiResponse::new(PROCESS_STATUS, PROCESS_MESSAGE, timestamp()).with_data(data)
}

/// Seconds since the Unix epoch with sub-second precision, e.g. `1760870400.123456`.
fn timestamp() -> String {
    let elapsed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:06}", elapsed.as_secs(), elapsed.subsec_micros())
}
