//! Player asset bundles
//!
//! Maps a generated album id to the fixed set of assets the player screen
//! needs: cover art, a backdrop clip, an optional audio file and the track
//! metadata. Paths are relative to the configured assets directory; an
//! unresolved id opens the default bundle.

/// Track metadata shown on the player screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackInfo {
    pub id: &'static str,
    pub title: &'static str,
    pub artist: &'static str,
    /// Metadata duration; the estimate until a real audio file reports one
    pub duration_seconds: f64,
    /// Cover/glow gradient colors
    pub colors: [[u8; 3]; 3],
}

/// Everything the player screen needs for one album
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AssetBundle {
    /// Cover art, relative to the assets directory
    pub cover_image: &'static str,
    /// Backdrop clip shown behind the saved-clip overlay
    pub backdrop_clip: &'static str,
    /// Audio file; None means the transport runs on the simulated clock
    pub audio: Option<&'static str>,
    pub track: TrackInfo,
}

/// Bundle opened for unknown ids and for showcase albums
pub const DEFAULT_BUNDLE: AssetBundle = AssetBundle {
    cover_image: "cover.png",
    backdrop_clip: "clip.mp4",
    audio: None,
    track: TrackInfo {
        id: "ghost-01",
        title: "Spring Song",
        artist: "Ghost Bookstore",
        duration_seconds: 234.0,
        colors: [[0xa8, 0xe6, 0xcf], [0xdc, 0xed, 0xc1], [0xff, 0xd3, 0xb6]],
    },
};

/// Bundles for the five capture-derived albums
const BUNDLES: [AssetBundle; 5] = [
    AssetBundle {
        cover_image: "1.png",
        backdrop_clip: "clip1.mp4",
        audio: Some("1.mp3"),
        track: TrackInfo {
            id: "1",
            title: "Moment of Prayer",
            artist: "Quiet hopes held in a hushed room.",
            duration_seconds: 215.0,
            colors: [[0xff, 0xb3, 0x47], [0xff, 0x6f, 0x61], [0xb3, 0x39, 0x51]],
        },
    },
    AssetBundle {
        cover_image: "2.png",
        backdrop_clip: "clip2.mp4",
        audio: Some("2.mp3"),
        track: TrackInfo {
            id: "2",
            title: "Footrace",
            artist: "Two runners and the tension between them.",
            duration_seconds: 202.0,
            colors: [[0x74, 0xeb, 0xd5], [0x9f, 0xac, 0xe6], [0xa1, 0xc4, 0xfd]],
        },
    },
    AssetBundle {
        cover_image: "3.png",
        backdrop_clip: "clip3.mp4",
        audio: Some("3.mp3"),
        track: TrackInfo {
            id: "3",
            title: "Learning Together",
            artist: "A city room still bright late at night.",
            duration_seconds: 198.0,
            colors: [[0xff, 0x9a, 0x9e], [0xfa, 0xd0, 0xc4], [0xfb, 0xc2, 0xeb]],
        },
    },
    AssetBundle {
        cover_image: "4.png",
        backdrop_clip: "clip4.mp4",
        audio: Some("4.mp3"),
        track: TrackInfo {
            id: "4",
            title: "Clear Autumn Day",
            artist: "High blue skies and warm afternoon light.",
            duration_seconds: 210.0,
            colors: [[0xfb, 0xd3, 0xe9], [0xbb, 0x37, 0x7d], [0xd4, 0xa5, 0xc0]],
        },
    },
    AssetBundle {
        cover_image: "5.png",
        backdrop_clip: "clip5.mp4",
        audio: Some("5.mp3"),
        track: TrackInfo {
            id: "5",
            title: "Break Time",
            artist: "Eyes closed for a moment in a busy day.",
            duration_seconds: 225.0,
            colors: [[0x83, 0xa4, 0xd4], [0xb6, 0xfb, 0xff], [0xa0, 0xd4, 0xe8]],
        },
    },
];

/// Tags shown over the saved clip
pub const MOCK_TAGS: [&str; 5] = ["indie", "acoustic", "spring", "late night", "stroll"];

/// Resolve an album id to its asset bundle, falling back to the default.
pub fn bundle_for(id: &str) -> &'static AssetBundle {
    BUNDLES
        .iter()
        .find(|bundle| bundle.track.id == id)
        .unwrap_or(&DEFAULT_BUNDLE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_ids_resolve() {
        for id in ["1", "2", "3", "4", "5"] {
            let bundle = bundle_for(id);
            assert_eq!(bundle.track.id, id);
            assert!(bundle.audio.is_some());
        }
    }

    #[test]
    fn test_unknown_id_gets_default_bundle() {
        let bundle = bundle_for("nope");
        assert_eq!(bundle.track.id, DEFAULT_BUNDLE.track.id);
        assert!(bundle.audio.is_none());
        assert_eq!(bundle.track.duration_seconds, 234.0);
    }

    #[test]
    fn test_durations_are_positive() {
        for bundle in BUNDLES.iter().chain([&DEFAULT_BUNDLE]) {
            assert!(bundle.track.duration_seconds > 0.0);
        }
    }
}
