//! Stateless HTTP request builder and response parser for the posts resource.
//!
//! # Design
//! `PostsClient` holds only a `base_url` and carries no mutable state
//! between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. The `api` module executes the round-trip in between,
//! keeping this half deterministic and free of I/O dependencies.

use crate::error::RemoteRequestError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreatePostRequest, Post};

/// Stateless builder/parser pair for the posts resource.
#[derive(Debug, Clone)]
pub struct PostsClient {
    base_url: String,
}

impl PostsClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list_posts(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/posts", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_post(&self, input: &CreatePostRequest) -> Result<HttpRequest, RemoteRequestError> {
        let body = serde_json::to_string(input)
            .map_err(|e| RemoteRequestError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/posts", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn parse_list_posts(&self, response: HttpResponse) -> Result<Vec<Post>, RemoteRequestError> {
        check_status(&response)?;
        serde_json::from_str(&response.body)
            .map_err(|e| RemoteRequestError::DeserializationError(e.to_string()))
    }

    pub fn parse_create_post(&self, response: HttpResponse) -> Result<Post, RemoteRequestError> {
        check_status(&response)?;
        serde_json::from_str(&response.body)
            .map_err(|e| RemoteRequestError::DeserializationError(e.to_string()))
    }
}

/// Reject any non-2xx status. The remote contract promises "a success
/// status" rather than one exact code (200 for list, 201 for create on the
/// reference service), so the whole success range is accepted.
fn check_status(response: &HttpResponse) -> Result<(), RemoteRequestError> {
    if (200..300).contains(&response.status) {
        return Ok(());
    }
    Err(RemoteRequestError::Http {
        status: response.status,
    })
}
