//! postfeed/crates/pf-core/src/lib.rs
//!
//! The stateful core of one feed post: its model, its comment thread,
//! the comment composer and the publication date labels.

pub mod comments;
pub mod composer;
pub mod datefmt;
pub mod error;
pub mod feed;
pub mod models;
pub mod traits;

// Re-exporting for easier access in other crates
pub use comments::*;
pub use composer::*;
pub use error::*;
pub use feed::*;
pub use models::*;
pub use traits::*;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone};

    #[test]
    fn test_post_is_read_only_input() {
        let at = FixedOffset::west_opt(3 * 3600)
            .unwrap()
            .with_ymd_and_hms(2023, 6, 16, 9, 0, 0)
            .unwrap();
        let post = Post::new(
            1,
            Author {
                name: "Adriano Misina".to_string(),
                role: "Frontend UX | UI Developer".to_string(),
                avatar_url: "https://avatars.githubusercontent.com/u/65734814?v=4".to_string(),
            },
            vec![ContentBlock::paragraph("Fala galeraa 👋")],
            at,
        );
        assert_eq!(post.id(), 1);
        assert_eq!(datefmt::format(post.published_at()), "16 de junho às 09:00h");
    }
}
