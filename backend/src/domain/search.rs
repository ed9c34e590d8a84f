//! Closed enumeration selecting which article field a keyword matches.

use serde::{Deserialize, Serialize};

/// Article search dimension.
///
/// `Title`, `Content`, and `Author` match by substring (author against the
/// account nickname); `Hashtag` matches by equality. Wire values are the
/// upper-case variant names, e.g. `?searchType=TITLE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SearchType {
    /// Substring match on the article title.
    Title,
    /// Substring match on the article body.
    Content,
    /// Exact match on the article hashtag.
    Hashtag,
    /// Substring match on the author's nickname.
    Author,
}

impl std::fmt::Display for SearchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Title => "TITLE",
            Self::Content => "CONTENT",
            Self::Hashtag => "HASHTAG",
            Self::Author => "AUTHOR",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("\"TITLE\"", SearchType::Title)]
    #[case("\"CONTENT\"", SearchType::Content)]
    #[case("\"HASHTAG\"", SearchType::Hashtag)]
    #[case("\"AUTHOR\"", SearchType::Author)]
    fn deserializes_upper_case_wire_values(#[case] wire: &str, #[case] expected: SearchType) {
        let parsed: SearchType = serde_json::from_str(wire).expect("valid search type");
        assert_eq!(parsed, expected);
        assert_eq!(parsed.to_string(), wire.trim_matches('"'));
    }

    #[test]
    fn rejects_unknown_wire_values() {
        assert!(serde_json::from_str::<SearchType>("\"NICKNAME\"").is_err());
    }
}
