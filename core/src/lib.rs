//! Client core for a remote posts service.
//!
//! # Overview
//! Three cooperating pieces: an access layer that talks HTTP to the remote
//! posts collection, a creation form that validates and submits new posts,
//! and a list view that loads and displays the collection. The access
//! layer is split in two — `PostsClient` builds `HttpRequest` values and
//! parses `HttpResponse` values without touching the network, while
//! `HttpPostsApi` executes the round-trip — so every status and parse edge
//! case stays unit-testable offline.
//!
//! # Design
//! - `PostsClient` is stateless; it holds only `base_url`.
//! - `HttpPostsApi` implements the `PostsApi` trait over a blocking ureq
//!   agent: one fresh request per call, no retries, no timeout policy.
//!   Failures are logged via `tracing` and returned unchanged.
//! - `PostForm` and `PostList` are plain state machines over mutable
//!   fields; they report outcomes through `FormEvent` notifications and
//!   translate access-layer failures into their own `error` field.
//! - DTOs are defined independently from the mock-server crate;
//!   integration tests catch schema drift.

pub mod api;
pub mod client;
pub mod error;
pub mod form;
pub mod http;
pub mod list;
pub mod types;

pub use api::{HttpPostsApi, PostsApi, DEFAULT_BASE_URL};
pub use client::PostsClient;
pub use error::RemoteRequestError;
pub use form::{FormEvent, PostForm};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use list::PostList;
pub use types::{CreatePostRequest, Post, DEFAULT_USER_ID};
