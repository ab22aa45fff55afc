//! Markdown rendering for model-authored text.

use pulldown_cmark::{Event, Options, Parser, html};

/// Render Markdown to an HTML fragment.
///
/// Raw HTML in the source is emitted as escaped text, so the output is safe to
/// inject into the page.
#[must_use]
pub fn render_markdown(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(source, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });

    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}
