//! # postfeed
//!
//! Assembles the feed: settings, posts, one `PostView` per post, an optional
//! event script, and the rendered page.
//!
//! Usage: `postfeed [config.toml]`

mod script;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use configs::{LogSettings, Settings};
use pf_core::{parse_feed, Clock, SystemClock};
use pf_ui::{render_page, PostView, ViewOptions};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const DEMO_FEED: &str = include_str!("../feed.json");

fn init_tracing(log: &LogSettings) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.filter));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if log.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> anyhow::Result<()> {
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let settings = Settings::load(config_path.as_deref()).context("loading settings")?;
    init_tracing(&settings.log);

    let offset = settings.display_offset()?;
    let feed_json = match &settings.feed_path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading feed {}", path.display()))?,
        None => DEMO_FEED.to_string(),
    };
    let posts = parse_feed(&feed_json, offset)?;

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let options = ViewOptions {
        seed_comment: settings.seed_comment.clone(),
        required_message: settings.required_message.clone(),
        link_href: settings.link_href.clone(),
    };
    let mut views: Vec<PostView<'_>> = posts
        .iter()
        .map(|post| PostView::new(post, clock.clone(), options.clone()))
        .collect();

    if let Some(path) = &settings.events_path {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading event script {}", path.display()))?;
        let steps = script::parse(&raw).context("parsing event script")?;
        let total = steps.len();
        let applied = script::replay(&mut views, steps);
        info!(applied, total, "event script replayed");
    }

    let mut rendered = Vec::with_capacity(views.len());
    for view in &views {
        match view.render_html() {
            Ok(html) => rendered.push(html),
            Err(e) => warn!(post_id = view.post().id(), error = %e, "post left out of the page"),
        }
    }
    let page = render_page(&settings.title, &rendered)?;

    match &settings.output_path {
        Some(path) => {
            std::fs::write(path, page).with_context(|| format!("writing {}", path.display()))?;
            info!(path = %path.display(), posts = rendered.len(), "feed written");
        }
        None => println!("{page}"),
    }
    Ok(())
}
