//! Bounded slug codes shared by categories and tags.

/// Builds the `attempt`-th candidate code from `base`, never longer than
/// `max_len` characters. Attempt 0 is the bare base; later attempts append
/// `-{attempt}` after cutting the base short enough to fit.
pub fn bounded_candidate(base: &str, attempt: u64, max_len: usize) -> String {
    let suffix = if attempt == 0 {
        String::new()
    } else {
        format!("-{attempt}")
    };
    let room = max_len.saturating_sub(suffix.len());
    let head: String = base.chars().take(room).collect();
    let head = head.trim_end_matches('-');
    format!("{head}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_bases_are_kept_whole() {
        assert_eq!(bounded_candidate("travel", 0, 64), "travel");
        assert_eq!(bounded_candidate("travel", 3, 64), "travel-3");
    }

    #[test]
    fn long_bases_are_cut_before_the_suffix() {
        let base = "a".repeat(64);
        assert_eq!(bounded_candidate(&base, 0, 64), base);

        let second = bounded_candidate(&base, 1, 64);
        assert_eq!(second.chars().count(), 64);
        assert!(second.ends_with("a-1"));

        let tenth = bounded_candidate(&base, 10, 64);
        assert_eq!(tenth.chars().count(), 64);
        assert!(tenth.ends_with("-10"));
    }

    #[test]
    fn dangling_dash_is_dropped_at_the_cut() {
        let base = format!("{}-tail", "b".repeat(61));
        assert_eq!(bounded_candidate(&base, 1, 64), format!("{}-1", "b".repeat(61)));
    }
}
