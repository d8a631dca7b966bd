//! postfeed/crates/pf-ui/src/lib.rs
//!
//! Presentation of one post unit: content fragments, the interactive
//! `PostView` and the askama templates that turn them into HTML.

pub mod content;
pub mod page;
pub mod view;

pub use content::{render_block, render_content, Fragment, FragmentKind, PLACEHOLDER_HREF};
pub use page::{render_page, FeedPage};
pub use view::{AvatarProps, EventOutcome, PostDisplay, PostEvent, PostTemplate, PostView, ViewOptions};
