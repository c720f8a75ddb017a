/// Turns category and tag names into URL-safe codes.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
