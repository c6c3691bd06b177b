//! Gradient palette shared by cards, covers and glows
//!
//! Gradients are stored as plain stop tables so the core crate stays free
//! of UI dependencies; `fireside-widgets` converts them to renderer
//! gradients at draw time. All sweeps run corner-to-corner (135°).

/// A linear gradient as `(offset, rgb)` stops, offset in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientSpec(pub &'static [(f32, [u8; 3])]);

impl GradientSpec {
    /// Stops of this gradient
    pub fn stops(&self) -> &'static [(f32, [u8; 3])] {
        self.0
    }

    /// First stop color, used where a flat fallback color is needed
    pub fn base_rgb(&self) -> [u8; 3] {
        self.0.first().map(|(_, rgb)| *rgb).unwrap_or([0, 0, 0])
    }
}

/// Gradient of the creation-entry card (red themed)
pub const CREATE_CARD: GradientSpec = GradientSpec(&[
    (0.0, [0xff, 0x6b, 0x6b]),
    (1.0, [0xd7, 0x26, 0x3d]),
]);

/// Rotating palette for cards without a fixed gradient of their own
pub const BORDER_GRADIENTS: [GradientSpec; 12] = [
    // pink -> peach
    GradientSpec(&[(0.0, [0xff, 0x9a, 0x9e]), (1.0, [0xfa, 0xd0, 0xc4])]),
    // purple -> pink
    GradientSpec(&[(0.0, [0xa1, 0x8c, 0xd1]), (1.0, [0xfb, 0xc2, 0xeb])]),
    // saffron -> apricot
    GradientSpec(&[(0.0, [0xf6, 0xd3, 0x65]), (1.0, [0xfd, 0xa0, 0x85])]),
    // mint -> sky
    GradientSpec(&[(0.0, [0x84, 0xfa, 0xb0]), (1.0, [0x8f, 0xd3, 0xf4])]),
    // cyan -> blue
    GradientSpec(&[(0.0, [0x89, 0xf7, 0xfe]), (1.0, [0x66, 0xa6, 0xff])]),
    // sand -> violet
    GradientSpec(&[(0.0, [0xfc, 0xcb, 0x90]), (1.0, [0xd5, 0x7e, 0xeb])]),
    // magenta -> coral
    GradientSpec(&[(0.0, [0xf0, 0x93, 0xfb]), (1.0, [0xf5, 0x57, 0x6c])]),
    // green -> teal
    GradientSpec(&[(0.0, [0x43, 0xe9, 0x7b]), (1.0, [0x38, 0xf9, 0xd7])]),
    // rose -> yellow
    GradientSpec(&[(0.0, [0xfa, 0x70, 0x9a]), (1.0, [0xfe, 0xe1, 0x40])]),
    // teal -> indigo
    GradientSpec(&[(0.0, [0x30, 0xcf, 0xd0]), (1.0, [0x33, 0x08, 0x67])]),
    // cream -> peach
    GradientSpec(&[(0.0, [0xff, 0xec, 0xd2]), (1.0, [0xfc, 0xb6, 0x9f])]),
    // lilac -> baby blue
    GradientSpec(&[(0.0, [0xe0, 0xc3, 0xfc]), (1.0, [0x8e, 0xc5, 0xfc])]),
];

/// Deterministically assign a palette gradient to a key.
///
/// Stable across runs so the same album always gets the same border.
pub fn gradient_for_key(key: &str) -> GradientSpec {
    let sum: u32 = key.bytes().map(u32::from).sum();
    BORDER_GRADIENTS[sum as usize % BORDER_GRADIENTS.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_for_key_is_stable() {
        let a = gradient_for_key("ember-odes");
        let b = gradient_for_key("ember-odes");
        assert_eq!(a, b);
    }

    #[test]
    fn test_gradient_for_key_covers_palette() {
        // Different keys land on different palette entries
        let picks: std::collections::HashSet<_> = (0..64)
            .map(|i| gradient_for_key(&format!("key-{i}")).base_rgb())
            .collect();
        assert!(picks.len() > 1);
    }

    #[test]
    fn test_stop_offsets_are_normalized() {
        for gradient in BORDER_GRADIENTS.iter().chain([&CREATE_CARD]) {
            for (offset, _) in gradient.stops() {
                assert!((0.0..=1.0).contains(offset));
            }
        }
    }
}
