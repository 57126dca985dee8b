//! Deterministic local composition.

/// Returned by `extractive_summary` for blank input.
pub const NO_CONTENT: &str = "No content available.";

/// Returned by `bullet_report` for an empty bullet list.
pub const NO_INSIGHTS: &str = "No insights available yet.";

/// Header line of a bullet report.
pub const REPORT_HEADER: &str = "Parent-Focused Insights:";

/// The first `max_sentences` non-empty `.`-delimited fragments of `text`,
/// rejoined with `". "` and closed with a period.
pub fn extractive_summary(text: &str, max_sentences: usize) -> String {
    let flattened = text.replace('\n', " ");
    let fragments: Vec<&str> = flattened
        .split('.')
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .take(max_sentences)
        .collect();
    if fragments.is_empty() {
        return NO_CONTENT.to_string();
    }
    format!("{}.", fragments.join(". "))
}

/// Fixed-format bullet list under a static header.
pub fn bullet_report(bullets: &[String]) -> String {
    if bullets.is_empty() {
        return NO_INSIGHTS.to_string();
    }
    let body: Vec<String> = bullets.iter().map(|b| format!("- {b}")).collect();
    format!("{REPORT_HEADER}\n{}", body.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn takes_first_sentences() {
        let text = "First point. Second point.\nThird point. Fourth.";
        assert_eq!(extractive_summary(text, 2), "First point. Second point.");
        assert_eq!(
            extractive_summary(text, 10),
            "First point. Second point. Third point. Fourth."
        );
    }

    #[test]
    fn skips_empty_fragments() {
        assert_eq!(extractive_summary("..  A.. B ...", 5), "A. B.");
    }

    #[test]
    fn blank_text_has_placeholder() {
        assert_eq!(extractive_summary("", 3), NO_CONTENT);
        assert_eq!(extractive_summary(" . \n .", 3), NO_CONTENT);
    }

    #[test]
    fn bullet_report_format() {
        let bullets = vec!["one".to_string(), "two".to_string()];
        assert_eq!(
            bullet_report(&bullets),
            "Parent-Focused Insights:\n- one\n- two"
        );
        assert_eq!(bullet_report(&[]), NO_INSIGHTS);
    }
}
