//! Shared theme constants and color helpers for Fireside widgets
//!
//! The palette follows the app's fireside look: near-black warm backdrop
//! with amber text and card gradients from the core palette tables.

use std::f32::consts::PI;

use fireside_core::catalog::gradients::GradientSpec;
use iced::{Color, Radians};

/// Deepest backdrop color (screen edges)
pub const BACKDROP_DARK: Color = Color::from_rgb(0.02, 0.008, 0.012);

/// Backdrop color toward the top glow
pub const BACKDROP_WARM: Color = Color::from_rgb(0.10, 0.035, 0.05);

/// Primary warm text color
pub const TEXT_WARM: Color = Color::from_rgb(1.0, 0.98, 0.92);

/// Secondary/dimmed text color
pub const TEXT_DIM: Color = Color::from_rgba(1.0, 0.92, 0.78, 0.8);

/// Ink color used on top of bright card gradients
pub const CARD_INK: Color = Color::from_rgb(0.067, 0.02, 0.008);

/// Build an opaque [`Color`] from an 8-bit rgb triple
pub fn rgb(rgb: [u8; 3]) -> Color {
    Color::from_rgb8(rgb[0], rgb[1], rgb[2])
}

/// Build a translucent [`Color`] from an 8-bit rgb triple
pub fn rgba(rgb: [u8; 3], alpha: f32) -> Color {
    Color::from_rgba8(rgb[0], rgb[1], rgb[2], alpha)
}

/// Convert a core gradient spec into an iced linear gradient.
///
/// All card gradients sweep corner-to-corner, matching the product's
/// 135-degree look.
pub fn linear_gradient(spec: GradientSpec) -> iced::Gradient {
    linear_gradient_with_alpha(spec, 1.0)
}

/// Gradient conversion with a uniform alpha, for glows and dimmed cards
pub fn linear_gradient_with_alpha(spec: GradientSpec, alpha: f32) -> iced::Gradient {
    let mut linear = iced::gradient::Linear::new(Radians(3.0 * PI / 4.0));
    for (offset, color) in spec.stops() {
        linear = linear.add_stop(*offset, rgba(*color, alpha));
    }
    linear.into()
}
