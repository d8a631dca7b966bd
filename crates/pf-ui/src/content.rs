//! Post body rendering: one display fragment per known content block.

use pf_core::ContentBlock;
use tracing::debug;

/// Where link blocks point when nothing better is known.
pub const PLACEHOLDER_HREF: &str = "#";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentKind {
    Paragraph,
    Link,
}

/// A rendered content block. `key` is stable for a given block position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub key: String,
    pub kind: FragmentKind,
    pub text: String,
    /// Set for links only
    pub href: Option<String>,
}

impl Fragment {
    pub fn is_link(&self) -> bool {
        self.kind == FragmentKind::Link
    }

    pub fn target(&self) -> &str {
        self.href.as_deref().unwrap_or_default()
    }
}

/// Renders the block at `index`. Unknown kinds yield `None`.
pub fn render_block(index: usize, block: &ContentBlock, link_href: &str) -> Option<Fragment> {
    let key = format!("{}-{}", block.kind(), index);
    match block {
        ContentBlock::Paragraph { content } => Some(Fragment {
            key,
            kind: FragmentKind::Paragraph,
            text: content.clone(),
            href: None,
        }),
        ContentBlock::Link { content } => Some(Fragment {
            key,
            kind: FragmentKind::Link,
            text: content.clone(),
            href: Some(link_href.to_string()),
        }),
        ContentBlock::Unknown => {
            debug!(index, "skipping content block of unknown kind");
            None
        }
    }
}

/// Renders a whole body in order, skipping what cannot be rendered.
pub fn render_content(blocks: &[ContentBlock], link_href: &str) -> Vec<Fragment> {
    blocks
        .iter()
        .enumerate()
        .filter_map(|(index, block)| render_block(index, block, link_href))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_and_kinds_follow_input() {
        let blocks = [
            ContentBlock::paragraph("a"),
            ContentBlock::link("b"),
            ContentBlock::paragraph("c"),
        ];
        let fragments = render_content(&blocks, PLACEHOLDER_HREF);

        let texts: Vec<&str> = fragments.iter().map(|f| f.text.as_str()).collect();
        let kinds: Vec<FragmentKind> = fragments.iter().map(|f| f.kind).collect();
        assert_eq!(texts, ["a", "b", "c"]);
        assert_eq!(kinds, [FragmentKind::Paragraph, FragmentKind::Link, FragmentKind::Paragraph]);
    }

    #[test]
    fn keys_combine_kind_and_position() {
        let blocks = [ContentBlock::paragraph("a"), ContentBlock::link("b")];
        let keys: Vec<String> = render_content(&blocks, "#").into_iter().map(|f| f.key).collect();
        assert_eq!(keys, ["paragraph-0", "link-1"]);
    }

    #[test]
    fn unknown_block_is_skipped_without_stopping() {
        let blocks = [
            ContentBlock::paragraph("a"),
            ContentBlock::Unknown,
            ContentBlock::link("c"),
        ];
        let fragments = render_content(&blocks, "#");

        assert_eq!(fragments.len(), 2);
        assert_eq!(fragments[1].key, "link-2");
        assert!(render_block(1, &ContentBlock::Unknown, "#").is_none());
    }

    #[test]
    fn link_points_at_placeholder() {
        let fragment = render_block(0, &ContentBlock::link("me@example.com"), PLACEHOLDER_HREF).unwrap();
        assert!(fragment.is_link());
        assert_eq!(fragment.href.as_deref(), Some("#"));
        assert_eq!(fragment.text, "me@example.com");
    }
}
