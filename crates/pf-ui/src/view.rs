//! # PostView
//!
//! Composes one read-only `Post` with its own comment thread and composer.
//! Every host event goes through [`PostView::handle`], which reports
//! whether the post needs to be drawn again.

use std::sync::Arc;

use askama::Template;
use pf_core::datefmt;
use pf_core::{
    AppError, Clock, CommentComposer, CommentThread, FieldValidity, Post, Result, SubmitEvent,
    REQUIRED_MESSAGE, SEED_COMMENT,
};
use tracing::debug;

use crate::content::{render_content, Fragment, PLACEHOLDER_HREF};

/// Per-view text and link settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewOptions {
    pub seed_comment: String,
    pub required_message: String,
    pub link_href: String,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            seed_comment: SEED_COMMENT.to_string(),
            required_message: REQUIRED_MESSAGE.to_string(),
            link_href: PLACEHOLDER_HREF.to_string(),
        }
    }
}

/// What the host can tell a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostEvent {
    DraftChanged(String),
    /// Submit attempted while the required draft field is empty
    DraftInvalid,
    Submit,
    DeleteComment(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventOutcome {
    pub rerender: bool,
    pub default_prevented: bool,
}

/// Everything the avatar collaborator receives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarProps {
    pub src: String,
    pub has_border: bool,
}

/// Flattened, render-ready state of a post at one moment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDisplay {
    pub post_id: u64,
    pub author_name: String,
    pub author_role: String,
    pub avatar: AvatarProps,
    pub published_iso: String,
    pub published_formatted: String,
    pub published_relative: String,
    pub fragments: Vec<Fragment>,
    pub draft: String,
    pub validity: FieldValidity,
    pub submit_disabled: bool,
    pub comments: Vec<String>,
}

impl PostDisplay {
    /// The inline validation message, empty when there is none.
    pub fn validation_message(&self) -> &str {
        self.validity.message.as_deref().unwrap_or_default()
    }
}

#[derive(Template)]
#[template(path = "post.html")]
pub struct PostTemplate<'a> {
    pub view: &'a PostDisplay,
}

pub struct PostView<'p> {
    post: &'p Post,
    clock: Arc<dyn Clock>,
    link_href: String,
    thread: CommentThread,
    composer: CommentComposer,
    revision: u64,
}

impl<'p> PostView<'p> {
    pub fn new(post: &'p Post, clock: Arc<dyn Clock>, options: ViewOptions) -> Self {
        Self {
            post,
            clock,
            link_href: options.link_href,
            thread: CommentThread::new(options.seed_comment),
            composer: CommentComposer::new(options.required_message),
            revision: 0,
        }
    }

    pub fn post(&self) -> &'p Post {
        self.post
    }

    pub fn thread(&self) -> &CommentThread {
        &self.thread
    }

    pub fn composer(&self) -> &CommentComposer {
        &self.composer
    }

    /// Bumped once for every event that changed thread or draft state.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn handle(&mut self, event: PostEvent) -> EventOutcome {
        let mut default_prevented = false;

        let rerender = match event {
            PostEvent::DraftChanged(text) => {
                let changed = self.composer.draft() != text || self.composer.validity().invalid;
                self.composer.on_change(text);
                changed
            }
            PostEvent::DraftInvalid => {
                let before = self.composer.validity().clone();
                self.composer.on_invalid();
                self.composer.validity() != &before
            }
            PostEvent::Submit => {
                let mut submit = SubmitEvent::new();
                let sent = self.composer.submit(&mut self.thread, &mut submit);
                default_prevented = submit.default_prevented();
                sent
            }
            PostEvent::DeleteComment(text) => self.thread.remove(&text) > 0,
        };

        if rerender {
            self.revision += 1;
            debug!(post_id = self.post.id(), revision = self.revision, "post state changed");
        }
        EventOutcome { rerender, default_prevented }
    }

    /// Derives the display state, reading the clock once.
    pub fn display(&self) -> PostDisplay {
        let published_at = self.post.published_at();
        let author = self.post.author();

        PostDisplay {
            post_id: self.post.id(),
            author_name: author.name.clone(),
            author_role: author.role.clone(),
            avatar: AvatarProps {
                src: author.avatar_url.clone(),
                has_border: true,
            },
            published_iso: datefmt::iso(published_at),
            published_formatted: datefmt::format(published_at),
            published_relative: datefmt::relative(published_at, self.clock.now()),
            fragments: render_content(self.post.content(), &self.link_href),
            draft: self.composer.draft().to_string(),
            validity: self.composer.validity().clone(),
            submit_disabled: !self.composer.can_submit(),
            comments: self.thread.entries().to_vec(),
        }
    }

    pub fn render_html(&self) -> Result<String> {
        let display = self.display();
        PostTemplate { view: &display }
            .render()
            .map_err(|e| AppError::Render(e.to_string()))
    }
}
