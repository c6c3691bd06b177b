//! Mood keyword options for the select screen
//!
//! The chosen keyword decides which generated album the player opens.
//! Unknown keywords (stale links, hand-edited routes) fall back to the
//! default bundle rather than failing.

/// One selectable mood keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordOption {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

/// Keywords offered after a clip upload
pub const KEYWORD_OPTIONS: [KeywordOption; 3] = [
    KeywordOption {
        id: "campfire-story",
        label: "Campfire Story",
        description: "Voices over night air and the crackle of burning logs.",
    },
    KeywordOption {
        id: "dawn-chorus",
        label: "Dawn Chorus",
        description: "A first track that rises with the morning birds.",
    },
    KeywordOption {
        id: "city-echo",
        label: "City Echo",
        description: "A rhythm wrapped around the city's glittering day.",
    },
];

/// Asset id opened when a keyword is unknown
pub const DEFAULT_ALBUM_ID: &str = "1";

/// Resolve a keyword id to the generated album it opens.
pub fn album_for_keyword(keyword: &str) -> &'static str {
    match keyword {
        "campfire-story" => "1",
        "dawn-chorus" => "2",
        "city-echo" => "3",
        _ => DEFAULT_ALBUM_ID,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::assets;

    #[test]
    fn test_every_keyword_resolves_to_a_bundle() {
        for option in &KEYWORD_OPTIONS {
            let id = album_for_keyword(option.id);
            // Resolving the id again must not hit the default fallback path
            assert!(assets::bundle_for(id).track.id == id);
        }
    }

    #[test]
    fn test_unknown_keyword_falls_back() {
        assert_eq!(album_for_keyword("definitely-not-a-mood"), DEFAULT_ALBUM_ID);
        assert_eq!(album_for_keyword(""), DEFAULT_ALBUM_ID);
    }
}
