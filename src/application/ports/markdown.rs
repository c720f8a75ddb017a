pub trait MarkdownRenderer: Send + Sync {
    /// Renders Markdown source to an HTML fragment.
    fn render(&self, source: &str) -> String;
}
