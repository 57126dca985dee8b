/// Lowercase, split on whitespace, and trim punctuation from token edges.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|raw| raw.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_edge_punctuation() {
        assert_eq!(
            tokenize("Employment rates, (2025) rose."),
            vec!["employment", "rates", "2025", "rose"]
        );
    }

    #[test]
    fn keeps_inner_punctuation() {
        assert_eq!(tokenize("year-over-year"), vec!["year-over-year"]);
    }

    #[test]
    fn blank_text_has_no_tokens() {
        assert!(tokenize("  \n\t ... ").is_empty());
    }
}
