//! The I/O half of the posts access layer.
//!
//! # Design
//! `PostsClient` stays pure; this module owns the network. `HttpPostsApi`
//! builds a request, executes it over a blocking `ureq` agent, and hands
//! the response back to the client for parsing. The agent is configured
//! with status-as-error disabled so 4xx/5xx responses come back as data
//! and status interpretation stays in one place (`PostsClient`).
//!
//! Failures are logged and returned unchanged — no retries, no timeout
//! policy, no caching. Every call is a fresh request that blocks the
//! caller until the remote settles.
//!
//! The `PostsApi` trait is the seam the form and list components call
//! through, so their state transitions can be exercised with a stub.

use crate::client::PostsClient;
use crate::error::RemoteRequestError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreatePostRequest, Post};

/// Public instance of the remote posts service this client was written
/// against.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Blocking access to the remote posts collection.
pub trait PostsApi {
    /// Fetch the full remote collection, in whatever order the service
    /// returns it.
    fn list_posts(&self) -> Result<Vec<Post>, RemoteRequestError>;

    /// Create one post and return it with its server-assigned id.
    fn create_post(&self, input: &CreatePostRequest) -> Result<Post, RemoteRequestError>;
}

/// `PostsApi` over real HTTP.
#[derive(Debug)]
pub struct HttpPostsApi {
    client: PostsClient,
    agent: ureq::Agent,
}

impl HttpPostsApi {
    pub fn new(base_url: &str) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self {
            client: PostsClient::new(base_url),
            agent,
        }
    }

    /// Execute an `HttpRequest` and return the raw `HttpResponse`.
    fn execute(&self, req: HttpRequest) -> Result<HttpResponse, RemoteRequestError> {
        let mut response = match (req.method, req.body) {
            (HttpMethod::Get, _) => self.agent.get(&req.path).call(),
            (HttpMethod::Post, Some(body)) => self
                .agent
                .post(&req.path)
                .content_type("application/json")
                .send(body.as_bytes()),
            (HttpMethod::Post, None) => self.agent.post(&req.path).send_empty(),
        }
        .map_err(|e| RemoteRequestError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response.body_mut().read_to_string().unwrap_or_default();

        Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body,
        })
    }
}

impl Default for HttpPostsApi {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl PostsApi for HttpPostsApi {
    fn list_posts(&self) -> Result<Vec<Post>, RemoteRequestError> {
        let req = self.client.build_list_posts();
        let result = self
            .execute(req)
            .and_then(|resp| self.client.parse_list_posts(resp));
        if let Err(err) = &result {
            tracing::error!("Error fetching posts: {}", err);
        }
        result
    }

    fn create_post(&self, input: &CreatePostRequest) -> Result<Post, RemoteRequestError> {
        let result = self
            .client
            .build_create_post(input)
            .and_then(|req| self.execute(req))
            .and_then(|resp| self.client.parse_create_post(resp));
        if let Err(err) = &result {
            tracing::error!("Error creating post: {}", err);
        }
        result
    }
}
