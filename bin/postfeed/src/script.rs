//! Event scripts: recorded host events replayed against the feed's posts.
//!
//! ```json
//! [
//!   { "post": 1, "event": { "type": "draftChanged", "text": "Muito bom!" } },
//!   { "post": 1, "event": { "type": "submit" } },
//!   { "post": 2, "event": { "type": "deleteComment", "text": "Post muito bacana, hein?!" } }
//! ]
//! ```

use pf_ui::{PostEvent, PostView};
use serde::Deserialize;
use tracing::{debug, warn};

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ScriptedEvent {
    DraftChanged { text: String },
    DraftInvalid,
    Submit,
    DeleteComment { text: String },
}

impl From<ScriptedEvent> for PostEvent {
    fn from(event: ScriptedEvent) -> Self {
        match event {
            ScriptedEvent::DraftChanged { text } => PostEvent::DraftChanged(text),
            ScriptedEvent::DraftInvalid => PostEvent::DraftInvalid,
            ScriptedEvent::Submit => PostEvent::Submit,
            ScriptedEvent::DeleteComment { text } => PostEvent::DeleteComment(text),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScriptStep {
    pub post: u64,
    pub event: ScriptedEvent,
}

pub fn parse(json: &str) -> serde_json::Result<Vec<ScriptStep>> {
    serde_json::from_str(json)
}

/// Feeds each step to the first view showing its post. Returns how many steps landed.
pub fn replay(views: &mut [PostView<'_>], steps: Vec<ScriptStep>) -> usize {
    let mut applied = 0;
    for step in steps {
        let Some(view) = views.iter_mut().find(|v| v.post().id() == step.post) else {
            warn!(post_id = step.post, "event for a post not in the feed");
            continue;
        };
        let outcome = view.handle(step.event.into());
        debug!(post_id = step.post, rerender = outcome.rerender, "event replayed");
        applied += 1;
    }
    applied
}
