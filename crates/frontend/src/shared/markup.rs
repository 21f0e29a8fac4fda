//! Plain-text formatting helpers for the message pane.

/// Maximum number of excerpt characters shown in a citation entry.
pub const EXCERPT_LIMIT: usize = 100;

/// A run of message text, either plain or bold-emphasized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Plain(String),
    Bold(String),
}

/// Split `text` on `**bold**` markers. Only this one marker pair is
/// interpreted; an unterminated `**` is kept as literal text.
pub fn bold_segments(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut rest = text;

    while let Some(open) = rest.find("**") {
        let after_open = &rest[open + 2..];
        match after_open.find("**") {
            Some(close) => {
                if open > 0 {
                    segments.push(Segment::Plain(rest[..open].to_string()));
                }
                segments.push(Segment::Bold(after_open[..close].to_string()));
                rest = &after_open[close + 2..];
            }
            None => break,
        }
    }

    if !rest.is_empty() {
        segments.push(Segment::Plain(rest.to_string()));
    }
    segments
}

/// Citation excerpts are capped at [`EXCERPT_LIMIT`] characters with a
/// trailing "..."; shorter excerpts pass through untouched.
pub fn truncate_excerpt(text: &str) -> String {
    if text.chars().count() <= EXCERPT_LIMIT {
        return text.to_string();
    }
    let cut: String = text.chars().take(EXCERPT_LIMIT).collect();
    format!("{}...", cut)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_one_segment() {
        assert_eq!(
            bold_segments("hello there"),
            vec![Segment::Plain("hello there".into())]
        );
    }

    #[test]
    fn bold_marker_is_converted() {
        assert_eq!(
            bold_segments("I've finished reading **report.pdf**. Ask away!"),
            vec![
                Segment::Plain("I've finished reading ".into()),
                Segment::Bold("report.pdf".into()),
                Segment::Plain(". Ask away!".into()),
            ]
        );
    }

    #[test]
    fn multiple_bold_runs() {
        assert_eq!(
            bold_segments("**a** and **b**"),
            vec![
                Segment::Bold("a".into()),
                Segment::Plain(" and ".into()),
                Segment::Bold("b".into()),
            ]
        );
    }

    #[test]
    fn unterminated_marker_stays_literal() {
        assert_eq!(
            bold_segments("oops **dangling"),
            vec![Segment::Plain("oops **dangling".into())]
        );
    }

    #[test]
    fn empty_text_yields_no_segments() {
        assert!(bold_segments("").is_empty());
    }

    #[test]
    fn short_excerpt_passes_through() {
        assert_eq!(truncate_excerpt("short excerpt"), "short excerpt");
    }

    #[test]
    fn boundary_excerpt_has_no_ellipsis() {
        let text = "a".repeat(EXCERPT_LIMIT);
        assert_eq!(truncate_excerpt(&text), text);
    }

    #[test]
    fn long_excerpt_is_cut_to_limit_plus_ellipsis() {
        let text = "a".repeat(150);
        let shown = truncate_excerpt(&text);
        assert_eq!(shown, format!("{}...", "a".repeat(100)));
    }

    #[test]
    fn truncation_counts_chars_not_bytes() {
        let text = "é".repeat(150);
        let shown = truncate_excerpt(&text);
        assert_eq!(shown.chars().count(), EXCERPT_LIMIT + 3);
        assert!(shown.ends_with("..."));
    }
}
