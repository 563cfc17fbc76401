//! HTTP exchanges described as plain data.
//!
//! # Design
//! `PostsClient` builds `HttpRequest` values and parses `HttpResponse`
//! values without touching the network; executing the round-trip is the
//! job of the `api` module (or of a test feeding canned responses). The
//! split keeps every status and parse edge case unit-testable offline.
//!
//! All fields use owned types (`String`, `Vec`) so values can be moved
//! around freely without lifetime concerns.

/// HTTP method for a request. Only the two methods this client issues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// An HTTP request described as plain data.
///
/// Built by `PostsClient::build_*` methods; executed by the caller.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Constructed after executing an `HttpRequest`, then passed to
/// `PostsClient::parse_*` methods for status interpretation and
/// deserialization.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}
