//! Album tables for the home stack
//!
//! Two sets: the showcase albums that fill the home carousel, and the
//! capture-derived albums that generated sessions resolve to.

use crate::carousel::CarouselItem;
use crate::catalog::gradients::{self, GradientSpec};

/// Static album metadata
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlbumInfo {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub gradient: GradientSpec,
}

/// Albums shown on the home carousel
pub const SHOWCASE_ALBUMS: [AlbumInfo; 10] = [
    AlbumInfo {
        id: "ember-odes",
        title: "Ember Echoes",
        subtitle: "Analog warmth in a twilight forest.",
        gradient: GradientSpec(&[
            (0.0, [0xff, 0xb3, 0x47]),
            (0.6, [0xff, 0x6f, 0x61]),
            (1.0, [0xb3, 0x39, 0x51]),
        ]),
    },
    AlbumInfo {
        id: "aurora",
        title: "Aurora Trails",
        subtitle: "Synth waves traveling through polar skies.",
        gradient: GradientSpec(&[(0.0, [0x74, 0xeb, 0xd5]), (1.0, [0x9f, 0xac, 0xe6])]),
    },
    AlbumInfo {
        id: "embers-deep",
        title: "Midnight Ember",
        subtitle: "Deep drums and midnight embers colliding.",
        gradient: GradientSpec(&[(0.0, [0xff, 0x9a, 0x9e]), (1.0, [0xfa, 0xd0, 0xc4])]),
    },
    AlbumInfo {
        id: "campfire",
        title: "Campfire Chorus",
        subtitle: "Stories sung beneath starlit canopies.",
        gradient: GradientSpec(&[(0.0, [0xfb, 0xd3, 0xe9]), (1.0, [0xbb, 0x37, 0x7d])]),
    },
    AlbumInfo {
        id: "horizon",
        title: "Horizon Sparks",
        subtitle: "Pulses of light cresting distant peaks.",
        gradient: GradientSpec(&[(0.0, [0x83, 0xa4, 0xd4]), (1.0, [0xb6, 0xfb, 0xff])]),
    },
    AlbumInfo {
        id: "crimson-dusk",
        title: "Crimson Dusk",
        subtitle: "Smoldering beats under red skies.",
        gradient: GradientSpec(&[(0.0, [0xff, 0x6f, 0x61]), (1.0, [0xc3, 0x14, 0x32])]),
    },
    AlbumInfo {
        id: "neon-river",
        title: "Neon River",
        subtitle: "Electric currents through a midnight city.",
        gradient: GradientSpec(&[(0.0, [0x00, 0xd2, 0xff]), (1.0, [0x3a, 0x7b, 0xd5])]),
    },
    AlbumInfo {
        id: "saffron-skies",
        title: "Saffron Skies",
        subtitle: "Sunlit grooves over warm horizons.",
        gradient: GradientSpec(&[(0.0, [0xf6, 0xd3, 0x65]), (1.0, [0xfd, 0xa0, 0x85])]),
    },
    AlbumInfo {
        id: "velvet-moon",
        title: "Velvet Moon",
        subtitle: "Soft echoes drifting past lunar craters.",
        gradient: GradientSpec(&[(0.0, [0x43, 0x43, 0x43]), (1.0, [0x00, 0x00, 0x00])]),
    },
    AlbumInfo {
        id: "cobalt-drift",
        title: "Cobalt Drift",
        subtitle: "Bluewave textures rolling offshore.",
        gradient: GradientSpec(&[(0.0, [0x36, 0xd1, 0xdc]), (1.0, [0x5b, 0x86, 0xe5])]),
    },
];

/// Albums produced by the capture-and-generate flow, keyed by asset id
pub const CAPTURE_ALBUMS: [AlbumInfo; 5] = [
    AlbumInfo {
        id: "1",
        title: "Moment of Prayer",
        subtitle: "Quiet hopes held in a hushed room.",
        gradient: GradientSpec(&[
            (0.0, [0xff, 0xb3, 0x47]),
            (0.6, [0xff, 0x6f, 0x61]),
            (1.0, [0xb3, 0x39, 0x51]),
        ]),
    },
    AlbumInfo {
        id: "2",
        title: "Footrace",
        subtitle: "Two runners and the tension between them.",
        gradient: GradientSpec(&[(0.0, [0x74, 0xeb, 0xd5]), (1.0, [0x9f, 0xac, 0xe6])]),
    },
    AlbumInfo {
        id: "3",
        title: "Learning Together",
        subtitle: "A city room still bright late at night.",
        gradient: GradientSpec(&[(0.0, [0xff, 0x9a, 0x9e]), (1.0, [0xfa, 0xd0, 0xc4])]),
    },
    AlbumInfo {
        id: "4",
        title: "Clear Autumn Day",
        subtitle: "High blue skies and warm afternoon light.",
        gradient: GradientSpec(&[(0.0, [0xfb, 0xd3, 0xe9]), (1.0, [0xbb, 0x37, 0x7d])]),
    },
    AlbumInfo {
        id: "5",
        title: "Break Time",
        subtitle: "Eyes closed for a moment in a busy day.",
        gradient: GradientSpec(&[(0.0, [0x83, 0xa4, 0xd4]), (1.0, [0xb6, 0xfb, 0xff])]),
    },
];

/// Build the home carousel ring: the creation entry at position 0 followed
/// by the showcase albums in table order.
pub fn stack_items() -> Vec<CarouselItem> {
    let mut items = Vec::with_capacity(SHOWCASE_ALBUMS.len() + 1);
    items.push(CarouselItem::CreateEntry {
        gradient: gradients::CREATE_CARD,
    });
    for album in &SHOWCASE_ALBUMS {
        items.push(CarouselItem::AlbumCard {
            id: album.id.to_string(),
            title: album.title.to_string(),
            subtitle: album.subtitle.to_string(),
            gradient: album.gradient,
        });
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_has_create_entry_first() {
        let items = stack_items();
        assert_eq!(items.len(), 11);
        assert!(matches!(items[0], CarouselItem::CreateEntry { .. }));
        assert_eq!(
            items
                .iter()
                .filter(|i| matches!(i, CarouselItem::CreateEntry { .. }))
                .count(),
            1
        );
    }

    #[test]
    fn test_album_order_matches_table() {
        let items = stack_items();
        let CarouselItem::AlbumCard { id, .. } = &items[1] else {
            panic!("expected album at position 1");
        };
        assert_eq!(id, SHOWCASE_ALBUMS[0].id);
    }

    #[test]
    fn test_album_ids_are_unique() {
        let mut ids: Vec<_> = SHOWCASE_ALBUMS.iter().map(|a| a.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), SHOWCASE_ALBUMS.len());
    }
}
