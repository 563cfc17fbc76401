//! Creation form state machine.
//!
//! # Design
//! Plain mutable fields with explicit setters; any observer behavior
//! (re-rendering) is the consuming layer's concern. A submit attempt
//! either yields exactly one `FormEvent::PostCreated` or leaves an error
//! behind — never both, and never an event on validation failure.
//! Validation runs before the access layer is touched, so an empty title
//! or body costs no network call.

use crate::api::PostsApi;
use crate::types::{CreatePostRequest, Post, DEFAULT_USER_ID};

const FALLBACK_SUBMIT_ERROR: &str = "Failed to create post. Please try again.";

/// Outcome notifications emitted by the form to its host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// A create call succeeded; carries the post exactly as the access
    /// layer returned it.
    PostCreated(Post),
    /// The user dismissed the form.
    Cancelled,
}

/// State of the post creation form.
///
/// Starts idle with empty fields. `submit` blocks for the duration of the
/// create call; while it is in flight, edits and cancel are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostForm {
    title: String,
    body: String,
    submitting: bool,
    error: Option<String>,
}

impl PostForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Replace the title. Ignored mid-submit; clears any previous error
    /// since an edit starts a fresh attempt.
    pub fn set_title(&mut self, value: impl Into<String>) {
        if self.submitting {
            return;
        }
        self.title = value.into();
        self.error = None;
    }

    /// Replace the body. Same rules as `set_title`.
    pub fn set_body(&mut self, value: impl Into<String>) {
        if self.submitting {
            return;
        }
        self.body = value.into();
        self.error = None;
    }

    /// Attempt to submit the form.
    ///
    /// Trims both fields and validates title-then-body; on a validation
    /// failure the error is set and the access layer is never called. On a
    /// successful create the form resets to empty and the created post is
    /// returned as an event. On a failed create the as-typed field values
    /// are kept so the user can retry, and the failure's message lands in
    /// `error`.
    pub fn submit(&mut self, api: &dyn PostsApi) -> Option<FormEvent> {
        if self.submitting {
            return None;
        }

        let title = self.title.trim();
        if title.is_empty() {
            self.error = Some("Title is required".to_string());
            return None;
        }
        let body = self.body.trim();
        if body.is_empty() {
            self.error = Some("Body is required".to_string());
            return None;
        }

        let request = CreatePostRequest {
            title: title.to_string(),
            body: body.to_string(),
            user_id: DEFAULT_USER_ID,
        };

        self.submitting = true;
        self.error = None;
        let result = api.create_post(&request);
        self.submitting = false;

        match result {
            Ok(post) => {
                self.reset();
                Some(FormEvent::PostCreated(post))
            }
            Err(err) => {
                let msg = err.to_string();
                self.error = Some(if msg.is_empty() {
                    FALLBACK_SUBMIT_ERROR.to_string()
                } else {
                    msg
                });
                None
            }
        }
    }

    /// Dismiss the form, resetting all fields. Ignored mid-submit.
    pub fn cancel(&mut self) -> Option<FormEvent> {
        if self.submitting {
            return None;
        }
        self.reset();
        Some(FormEvent::Cancelled)
    }

    fn reset(&mut self) {
        self.title.clear();
        self.body.clear();
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RemoteRequestError;
    use std::cell::{Cell, RefCell};

    /// Scripted `PostsApi` that records create calls and their inputs.
    struct StubApi {
        create_calls: Cell<usize>,
        last_input: RefCell<Option<CreatePostRequest>>,
        result: RefCell<Option<Result<Post, RemoteRequestError>>>,
    }

    impl StubApi {
        fn with_result(result: Result<Post, RemoteRequestError>) -> Self {
            Self {
                create_calls: Cell::new(0),
                last_input: RefCell::new(None),
                result: RefCell::new(Some(result)),
            }
        }

        fn unused() -> Self {
            Self {
                create_calls: Cell::new(0),
                last_input: RefCell::new(None),
                result: RefCell::new(None),
            }
        }
    }

    impl PostsApi for StubApi {
        fn list_posts(&self) -> Result<Vec<Post>, RemoteRequestError> {
            unreachable!("the form never lists posts")
        }

        fn create_post(&self, input: &CreatePostRequest) -> Result<Post, RemoteRequestError> {
            self.create_calls.set(self.create_calls.get() + 1);
            *self.last_input.borrow_mut() = Some(input.clone());
            self.result
                .borrow_mut()
                .take()
                .expect("unexpected create_post call")
        }
    }

    fn sample_post() -> Post {
        Post {
            user_id: 1,
            id: 101,
            title: "Hello".to_string(),
            body: "World".to_string(),
        }
    }

    #[test]
    fn empty_title_sets_error_without_calling_api() {
        let api = StubApi::unused();
        let mut form = PostForm::new();
        form.set_title("   ");
        form.set_body("World");

        let event = form.submit(&api);

        assert!(event.is_none());
        assert_eq!(form.error(), Some("Title is required"));
        assert_eq!(api.create_calls.get(), 0);
        assert!(!form.is_submitting());
    }

    #[test]
    fn empty_body_sets_error_without_calling_api() {
        let api = StubApi::unused();
        let mut form = PostForm::new();
        form.set_title("Hello");
        form.set_body(" \t ");

        let event = form.submit(&api);

        assert!(event.is_none());
        assert_eq!(form.error(), Some("Body is required"));
        assert_eq!(api.create_calls.get(), 0);
    }

    #[test]
    fn title_is_validated_before_body() {
        let api = StubApi::unused();
        let mut form = PostForm::new();

        let event = form.submit(&api);

        assert!(event.is_none());
        assert_eq!(form.error(), Some("Title is required"));
    }

    #[test]
    fn successful_submit_emits_event_and_resets() {
        let api = StubApi::with_result(Ok(sample_post()));
        let mut form = PostForm::new();
        form.set_title("  Hello  ");
        form.set_body(" World ");

        let event = form.submit(&api);

        assert_eq!(event, Some(FormEvent::PostCreated(sample_post())));
        assert_eq!(form.title(), "");
        assert_eq!(form.body(), "");
        assert!(form.error().is_none());
        assert!(!form.is_submitting());
        assert_eq!(api.create_calls.get(), 1);
    }

    #[test]
    fn submit_sends_trimmed_fields_and_fixed_user_id() {
        let api = StubApi::with_result(Ok(sample_post()));
        let mut form = PostForm::new();
        form.set_title("  Hello  ");
        form.set_body(" World ");

        form.submit(&api);

        let sent = api.last_input.borrow().clone().unwrap();
        assert_eq!(
            sent,
            CreatePostRequest {
                title: "Hello".to_string(),
                body: "World".to_string(),
                user_id: 1,
            }
        );
    }

    #[test]
    fn failed_submit_keeps_fields_as_typed_and_sets_error() {
        let api = StubApi::with_result(Err(RemoteRequestError::Http { status: 500 }));
        let mut form = PostForm::new();
        form.set_title("  My title ");
        form.set_body(" My body");

        let event = form.submit(&api);

        assert!(event.is_none());
        assert_eq!(form.title(), "  My title ");
        assert_eq!(form.body(), " My body");
        assert_eq!(form.error(), Some("HTTP error! status: 500"));
        assert!(!form.is_submitting());
    }

    #[test]
    fn failed_submit_with_empty_message_uses_fallback() {
        let api = StubApi::with_result(Err(RemoteRequestError::Transport(String::new())));
        let mut form = PostForm::new();
        form.set_title("Hello");
        form.set_body("World");

        form.submit(&api);

        assert_eq!(form.error(), Some(FALLBACK_SUBMIT_ERROR));
    }

    #[test]
    fn editing_clears_the_error() {
        let api = StubApi::unused();
        let mut form = PostForm::new();
        form.submit(&api);
        assert!(form.error().is_some());

        form.set_title("H");
        assert!(form.error().is_none());
    }

    #[test]
    fn cancel_resets_and_emits() {
        let mut form = PostForm::new();
        form.set_title("Half-typed");
        form.set_body("Draft");

        let event = form.cancel();

        assert_eq!(event, Some(FormEvent::Cancelled));
        assert_eq!(form.title(), "");
        assert_eq!(form.body(), "");
        assert!(form.error().is_none());
    }
}
