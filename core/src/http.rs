//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! Requests and responses are plain data. `EchoClient` builds `HttpRequest`
//! values and parses `HttpResponse` values; a `Transport` sits between the
//! two and is the only place that touches the network.

/// HTTP method for a request. The echo service only needs these two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

/// An HTTP request described as plain data.
///
/// `url` is absolute: the client joins its base URL with the endpoint path.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16) -> HttpResponse {
        HttpResponse {
            status,
            body: String::new(),
        }
    }

    #[test]
    fn success_covers_the_whole_2xx_range() {
        assert!(response(200).is_success());
        assert!(response(204).is_success());
        assert!(response(299).is_success());
        assert!(!response(199).is_success());
        assert!(!response(301).is_success());
        assert!(!response(404).is_success());
        assert!(!response(503).is_success());
    }

    #[test]
    fn method_names() {
        assert_eq!(HttpMethod::Get.as_str(), "GET");
        assert_eq!(HttpMethod::Post.as_str(), "POST");
    }
}
