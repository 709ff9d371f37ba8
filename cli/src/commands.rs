//! Command handlers.
//!
//! Every failure from the service is caught here and written to `err` as a
//! single `Error:` line; only write failures on the output streams escape.

use std::io::{self, Write};

use sample_core::{process_data, ApiError, JsonMap, SampleService, Transport};
use serde_json::Value;
use tracing::debug;

use crate::cli::{Cli, Commands, OutputFormat};
use crate::output::{render_echo, render_ip_info, render_record};

pub const INVALID_JSON_MESSAGE: &str = "Error: Invalid JSON data";

pub fn run(cli: Cli, out: &mut impl Write, err: &mut impl Write) -> io::Result<()> {
    let service = SampleService::new(&cli.base_url);
    match cli.command {
        Commands::Info { format } => info(&service, format, out, err),
        Commands::Process { key, format } => process(&key, format, out, err),
        Commands::Send { data } => send(&service, data.as_deref(), out, err),
    }
}

pub fn info<T: Transport>(
    service: &SampleService<T>,
    format: OutputFormat,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<()> {
    let result = service
        .get_ip_info()
        .and_then(|data| render_ip_info(&data, format));
    match result {
        Ok(text) => writeln!(out, "{text}"),
        Err(e) => report(err, &e),
    }
}

pub fn process(
    pairs: &[String],
    format: OutputFormat,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<()> {
    let mut input = parse_pairs(pairs);
    if input.is_empty() {
        input = default_process_input();
    }
    let record = process_data(&input);
    match render_record(&record, format) {
        Ok(text) => writeln!(out, "{text}"),
        Err(e) => report(err, &e),
    }
}

pub fn send<T: Transport>(
    service: &SampleService<T>,
    data: Option<&str>,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<()> {
    let result = parse_payload(data)
        .and_then(|payload| service.post_data(&payload))
        .and_then(|response| render_echo(&response));
    match result {
        Ok(text) => writeln!(out, "{text}"),
        Err(e) => report(err, &e),
    }
}

/// Build the input map from `key=value` arguments, splitting on the first
/// `=`. Arguments without `=` are ignored; a repeated key keeps its first
/// position and takes the last value.
pub fn parse_pairs(pairs: &[String]) -> JsonMap {
    let mut input = JsonMap::new();
    for pair in pairs {
        match pair.split_once('=') {
            Some((key, value)) => {
                input.insert(key.to_string(), Value::String(value.to_string()));
            }
            None => debug!(%pair, "ignoring argument without '='"),
        }
    }
    input
}

pub fn default_process_input() -> JsonMap {
    let mut input = JsonMap::new();
    input.insert("example".to_string(), Value::from("data"));
    input.insert("sample".to_string(), Value::from("value"));
    input
}

pub fn default_send_payload() -> Value {
    let mut payload = JsonMap::new();
    payload.insert("sample".to_string(), Value::from("payload"));
    payload.insert("from".to_string(), Value::from("sample-a"));
    Value::Object(payload)
}

/// Decode the `--data` text. A missing or empty flag sends the default
/// payload; any well-formed JSON value is sent as is.
pub fn parse_payload(data: Option<&str>) -> Result<Value, ApiError> {
    let Some(text) = data.filter(|s| !s.is_empty()) else {
        return Ok(default_send_payload());
    };
    serde_json::from_str(text).map_err(|e| ApiError::InvalidJson(e.to_string()))
}

fn report(err: &mut impl Write, e: &ApiError) -> io::Result<()> {
    debug!(error = ?e, "command failed");
    match e {
        ApiError::InvalidJson(_) => writeln!(err, "{INVALID_JSON_MESSAGE}"),
        other => writeln!(err, "Error: {other}"),
    }
}
