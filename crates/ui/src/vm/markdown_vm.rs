use std::collections::HashSet;

use pulldown_cmark::{Options, Parser, html};

/// Render generated card text as sanitized HTML.
///
/// Generators often answer with light Markdown (bold, inline code, lists), so
/// text goes through a Markdown pass first. Links and images are stripped.
#[must_use]
pub fn card_text_html(input: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(input, options);
    let mut out = String::new();
    html::push_html(&mut out, parser);
    sanitize_html(&out)
}

#[must_use]
pub fn sanitize_html(html: &str) -> String {
    let tags: HashSet<&str> = [
        "p", "br", "em", "strong", "del", "code", "pre", "blockquote", "ul", "ol", "li",
    ]
    .into_iter()
    .collect();

    ammonia::Builder::new()
        .tags(tags)
        .clean(html)
        .to_string()
}
