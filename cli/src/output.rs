use sample_core::{ApiError, ApiResponse, JsonMap};
use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;

fn pretty<T: Serialize + ?Sized>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string_pretty(value).map_err(|e| ApiError::SerializationError(e.to_string()))
}

pub fn render_ip_info(data: &JsonMap, format: OutputFormat) -> Result<String, ApiError> {
    match format {
        OutputFormat::Json => pretty(data),
        OutputFormat::Pretty => {
            let origin = match data.get("origin") {
                Some(Value::String(s)) => s.clone(),
                Some(other) => other.to_string(),
                None => "Unknown".to_string(),
            };
            Ok(format!("Your IP: {origin}"))
        }
    }
}

pub fn render_record(record: &ApiResponse, format: OutputFormat) -> Result<String, ApiError> {
    match format {
        OutputFormat::Json => pretty(record),
        OutputFormat::Pretty => {
            let count = record
                .data()
                .get("input_count")
                .and_then(Value::as_u64)
                .unwrap_or(0);
            Ok(format!(
                "Status: {}\nMessage: {}\nProcessed {count} items",
                record.status(),
                record.message()
            ))
        }
    }
}

/// The `json` field of a `/post` echo, or `{}` when the service left it out.
pub fn render_echo(response: &JsonMap) -> Result<String, ApiError> {
    let echoed = response
        .get("json")
        .cloned()
        .unwrap_or_else(|| Value::Object(JsonMap::new()));
    Ok(format!("Response received:\n{}", pretty(&echoed)?))
}
