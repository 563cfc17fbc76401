//! Domain DTOs for the remote posts resource.
//!
//! # Design
//! These types mirror the remote service's schema but are defined
//! independently of the mock-server crate; integration tests catch any
//! schema drift between the two. Wire field names are camelCase
//! (`userId`), mapped via serde container attributes.

use serde::{Deserialize, Serialize};

/// Owner id stamped onto every post this client creates.
pub const DEFAULT_USER_ID: i64 = 1;

/// A single post as stored by the remote service.
///
/// The `id` is assigned by the service and never changes afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub user_id: i64,
    pub id: i64,
    pub title: String,
    pub body: String,
}

/// Request payload for creating a new post.
///
/// Carries no `id` — the service assigns one, known only after the create
/// call returns. Title and body are expected to be non-empty after
/// trimming; the creation form validates this before building the request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub title: String,
    pub body: String,
    pub user_id: i64,
}
