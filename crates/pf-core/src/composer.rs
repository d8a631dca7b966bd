//! # Comment composer
//!
//! Draft text plus required-field validation for the "new comment" form.
//!
//! The hosting surface maps its own events onto three calls:
//! `on_change` for every edit, `on_invalid` when a submit is attempted on an
//! empty required field, and `submit` for the form submission itself.

use tracing::debug;

use crate::traits::CommentSink;

/// Message shown when an empty draft is submitted.
pub const REQUIRED_MESSAGE: &str = "Esse campo é obrigatório!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftState {
    Empty,
    NonEmpty,
}

/// Validation state of the draft field: a flag and the message to show.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValidity {
    pub invalid: bool,
    pub message: Option<String>,
}

impl FieldValidity {
    fn required(message: &str) -> Self {
        Self { invalid: true, message: Some(message.to_string()) }
    }
}

/// The host's submit event. Its default action is always suppressed.
#[derive(Debug, Default)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentComposer {
    draft: String,
    validity: FieldValidity,
    required_message: String,
}

impl CommentComposer {
    pub fn new(required_message: impl Into<String>) -> Self {
        Self {
            draft: String::new(),
            validity: FieldValidity::default(),
            required_message: required_message.into(),
        }
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn validity(&self) -> &FieldValidity {
        &self.validity
    }

    pub fn state(&self) -> DraftState {
        if self.draft.is_empty() {
            DraftState::Empty
        } else {
            DraftState::NonEmpty
        }
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        self.state() == DraftState::NonEmpty
    }

    /// Replaces the draft and clears any reported validation error.
    pub fn on_change(&mut self, text: impl Into<String>) {
        self.draft = text.into();
        self.validity = FieldValidity::default();
    }

    /// Flags the field as required-but-empty.
    pub fn on_invalid(&mut self) {
        self.validity = FieldValidity::required(&self.required_message);
    }

    /// Hands the draft to `sink` and resets it. Returns whether anything was sent.
    ///
    /// The event's default action is suppressed before anything else runs,
    /// including when the draft is empty and nothing is sent.
    pub fn submit<S: CommentSink + ?Sized>(&mut self, sink: &mut S, event: &mut SubmitEvent) -> bool {
        event.prevent_default();

        if !self.can_submit() {
            debug!("submit ignored, draft is empty");
            return false;
        }

        sink.add(std::mem::take(&mut self.draft));
        true
    }
}

impl Default for CommentComposer {
    fn default() -> Self {
        Self::new(REQUIRED_MESSAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comments::CommentThread;
    use crate::traits::MockCommentSink;
    use mockall::predicate::eq;

    #[test]
    fn starts_empty() {
        let composer = CommentComposer::default();
        assert_eq!(composer.state(), DraftState::Empty);
        assert!(!composer.can_submit());
        assert_eq!(composer.validity(), &FieldValidity::default());
    }

    #[test]
    fn change_drives_state() {
        let mut composer = CommentComposer::default();
        composer.on_change("a");
        assert_eq!(composer.state(), DraftState::NonEmpty);
        composer.on_change("");
        assert_eq!(composer.state(), DraftState::Empty);
    }

    #[test]
    fn invalid_then_change_clears_message() {
        let mut composer = CommentComposer::default();
        composer.on_invalid();
        assert!(composer.validity().invalid);
        assert_eq!(composer.validity().message.as_deref(), Some(REQUIRED_MESSAGE));

        composer.on_change("o");
        assert_eq!(composer.validity(), &FieldValidity::default());
    }

    #[test]
    fn empty_submit_never_reaches_sink() {
        let mut sink = MockCommentSink::new();
        sink.expect_add().times(0);

        let mut composer = CommentComposer::default();
        let mut event = SubmitEvent::new();
        assert!(!composer.submit(&mut sink, &mut event));
        assert!(event.default_prevented());
    }

    #[test]
    fn submit_sends_draft_once_and_resets() {
        let mut sink = MockCommentSink::new();
        sink.expect_add().with(eq("hello".to_string())).times(1).return_const(());

        let mut composer = CommentComposer::default();
        composer.on_change("hello");
        let mut event = SubmitEvent::new();

        assert!(composer.submit(&mut sink, &mut event));
        assert!(event.default_prevented());
        assert_eq!(composer.draft(), "");
        assert_eq!(composer.state(), DraftState::Empty);
    }

    #[test]
    fn submit_appends_to_thread() {
        let mut thread = CommentThread::new("seed");
        let mut composer = CommentComposer::default();
        composer.on_change("hello");

        composer.submit(&mut thread, &mut SubmitEvent::new());

        assert_eq!(thread.entries(), &["seed", "hello"]);
    }
}
