//! List view state machine.
//!
//! # Design
//! Owns the displayed collection plus its loading/error flags and the
//! visibility of the creation form. A failed load leaves the collection
//! untouched (empty on first load, stale afterwards); a created post is
//! prepended without deduplication or a re-fetch — each notification is
//! trusted to carry a novel post.

use crate::api::PostsApi;
use crate::form::FormEvent;
use crate::types::Post;

const FALLBACK_LOAD_ERROR: &str = "Failed to load posts";

/// State of the post list view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostList {
    posts: Vec<Post>,
    loading: bool,
    error: Option<String>,
    form_visible: bool,
}

impl PostList {
    pub fn new() -> Self {
        Self::default()
    }

    /// The displayed collection, newest created post first.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_form_visible(&self) -> bool {
        self.form_visible
    }

    /// Fetch the remote collection, replacing the displayed one on
    /// success. Blocks until the call settles; on failure the collection
    /// is left as it was and the failure's message lands in `error`.
    pub fn load(&mut self, api: &dyn PostsApi) {
        self.loading = true;
        self.error = None;

        match api.list_posts() {
            Ok(posts) => self.posts = posts,
            Err(err) => {
                let msg = err.to_string();
                self.error = Some(if msg.is_empty() {
                    FALLBACK_LOAD_ERROR.to_string()
                } else {
                    msg
                });
            }
        }
        self.loading = false;
    }

    /// Show or hide the creation form. Touches nothing else.
    pub fn toggle_form(&mut self) {
        self.form_visible = !self.form_visible;
    }

    /// A create call succeeded: prepend the new post and hide the form.
    pub fn handle_post_created(&mut self, post: Post) {
        self.posts.insert(0, post);
        self.form_visible = false;
    }

    /// The form was dismissed: hide it.
    pub fn handle_form_cancelled(&mut self) {
        self.form_visible = false;
    }

    /// Route a form outcome to the matching handler.
    pub fn handle_form_event(&mut self, event: FormEvent) {
        match event {
            FormEvent::PostCreated(post) => self.handle_post_created(post),
            FormEvent::Cancelled => self.handle_form_cancelled(),
        }
    }
}
