//! Executes `HttpRequest`s against the network.
//!
//! `UreqTransport` builds a new agent for every request and drops it before
//! returning, so no connection outlives the call that opened it. ureq's
//! status-as-error behaviour is disabled: 4xx/5xx come back as data and the
//! client decides what they mean.

use tracing::{debug, warn};

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// One request, one response.
pub trait Transport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct UreqTransport;

impl Transport for UreqTransport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();

        debug!(method = request.method.as_str(), url = %request.url, "sending request");

        let result = match request.method {
            HttpMethod::Get => {
                let mut builder = agent.get(&request.url);
                for (name, value) in &request.headers {
                    builder = builder.header(name.as_str(), value.as_str());
                }
                builder.call()
            }
            HttpMethod::Post => {
                let mut builder = agent.post(&request.url);
                for (name, value) in &request.headers {
                    builder = builder.header(name.as_str(), value.as_str());
                }
                match request.body {
                    Some(body) => builder.send(body.as_bytes()),
                    None => builder.send_empty(),
                }
            }
        };

        let mut response = result.map_err(|e| {
            warn!(url = %request.url, error = %e, "request failed");
            ApiError::TransportError(e.to_string())
        })?;

        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApiError::TransportError(e.to_string()))?;

        debug!(status, bytes = body.len(), "response received");

        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreachable_host_is_a_transport_error() {
        let addr = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap()
        };
        // listener dropped: the port is closed
        let request = HttpRequest {
            method: HttpMethod::Get,
            url: format!("http://{addr}/ip"),
            headers: Vec::new(),
            body: None,
        };
        let err = UreqTransport.execute(request).unwrap_err();
        assert!(matches!(err, ApiError::TransportError(_)));
    }
}
