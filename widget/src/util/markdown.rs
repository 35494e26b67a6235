//! Markdown rendering for bot replies.
//!
//! Replies are converted to HTML with `pulldown-cmark` and inserted as
//! markup. Two rewrites run on the event stream before rendering:
//! - raw HTML (block and inline) is dropped;
//! - link and image targets outside `http`, `https`, `mailto` or a relative
//!   path are replaced with [`BLOCKED_URL`].

#[cfg(test)]
#[path = "markdown_test.rs"]
mod markdown_test;

use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, html};

/// Replacement target for links and images with a disallowed scheme.
pub const BLOCKED_URL: &str = "#";

const ALLOWED_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

/// Render `markdown` to an HTML fragment safe to insert into the widget.
pub fn render_markdown_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let events = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        Event::Start(Tag::Link { link_type, dest_url, title, id }) if !is_allowed_url(&dest_url) => {
            log::debug!("webchat: blocked link target {dest_url:?}");
            Some(Event::Start(Tag::Link { link_type, dest_url: CowStr::Borrowed(BLOCKED_URL), title, id }))
        }
        Event::Start(Tag::Image { link_type, dest_url, title, id }) if !is_allowed_url(&dest_url) => {
            log::debug!("webchat: blocked image source {dest_url:?}");
            Some(Event::Start(Tag::Image { link_type, dest_url: CowStr::Borrowed(BLOCKED_URL), title, id }))
        }
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, events);
    out
}

/// Relative URLs and the allowed schemes pass. A `:` that follows a `/`,
/// `?` or `#` belongs to the path, query or fragment, not a scheme.
pub(crate) fn is_allowed_url(url: &str) -> bool {
    let url = url.trim();
    let Some(colon) = url.find(':') else {
        return true;
    };
    let head = &url[..colon];
    if head.contains(['/', '?', '#']) {
        return true;
    }
    ALLOWED_SCHEMES.iter().any(|scheme| head.eq_ignore_ascii_case(scheme))
}
