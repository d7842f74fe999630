//! Helpers for the free-text, comma-separated `tags` field.
//!
//! Empty or whitespace-only segments (e.g., the leading segment of
//! `",React"`) are skipped rather than counted as an empty-string tag.

/// Splits a raw tags string into trimmed, non-empty tag labels
pub fn parse_tags(tags: &str) -> Vec<String> {
    tags.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Whether the raw tags string contains `tag` exactly (case-sensitive)
pub fn has_tag(tags: &str, tag: &str) -> bool {
    tags.split(',').any(|segment| segment.trim() == tag)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_tags_trims_segments() {
        assert_eq!(parse_tags("React, JavaScript"), vec!["React", "JavaScript"]);
        assert_eq!(parse_tags("  Rust  "), vec!["Rust"]);
    }

    #[test]
    fn test_parse_tags_skips_empty_segments() {
        assert_eq!(parse_tags(",React"), vec!["React"]);
        assert_eq!(parse_tags("React,, JavaScript,"), vec!["React", "JavaScript"]);
        assert!(parse_tags("").is_empty());
        assert!(parse_tags(" , ,").is_empty());
    }

    #[test]
    fn test_has_tag_is_case_sensitive() {
        assert!(has_tag("React, JavaScript", "React"));
        assert!(has_tag("React, JavaScript", "JavaScript"));
        assert!(!has_tag("React, JavaScript", "react"));
        assert!(!has_tag("React, JavaScript", "Java"));
    }
}
