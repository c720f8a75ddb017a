use crate::application::ports::markdown::MarkdownRenderer;
use pulldown_cmark::{Event, Options, Parser, html};

/// CommonMark renderer with tables and strikethrough. Raw HTML in the source is
/// emitted as escaped text.
#[derive(Default, Clone)]
pub struct PulldownMarkdownRenderer;

impl MarkdownRenderer for PulldownMarkdownRenderer {
    fn render(&self, source: &str) -> String {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);

        let parser = Parser::new_ext(source, options).map(|event| match event {
            Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
            other => other,
        });

        let mut output = String::with_capacity(source.len() * 3 / 2);
        html::push_html(&mut output, parser);
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_markdown_and_escapes_raw_html() {
        let html = PulldownMarkdownRenderer.render("# Title\n\n**bold** <script>x</script>");
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<strong>bold</strong>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }
}
