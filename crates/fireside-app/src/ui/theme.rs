//! Styles shared across Fireside screens
//!
//! The fireside look: near-black warm backdrop, amber text, frosted-glass
//! pills. Style functions follow the iced 0.14 pattern of free functions
//! passed to `.style(...)`.

use fireside_widgets::theme as palette;
use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

/// Full-screen backdrop
pub fn screen_background(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::BACKDROP_DARK)),
        text_color: Some(palette::TEXT_WARM),
        ..Default::default()
    }
}

/// Warm glow panel behind headers
pub fn header_glow(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Gradient(
            iced::gradient::Linear::new(iced::Radians(std::f32::consts::PI))
                .add_stop(0.0, palette::BACKDROP_WARM)
                .add_stop(1.0, Color::TRANSPARENT)
                .into(),
        )),
        ..Default::default()
    }
}

/// Inline error banner (rose tint, soft border)
pub fn error_banner(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgba(0.95, 0.25, 0.35, 0.2))),
        text_color: Some(Color::from_rgb(1.0, 0.85, 0.87)),
        border: Border {
            color: Color::from_rgba(0.98, 0.45, 0.55, 0.4),
            width: 1.0,
            radius: 14.0.into(),
        },
        ..Default::default()
    }
}

/// Frosted-glass pill container (tags, badges)
pub fn glass_panel(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgba(1.0, 1.0, 1.0, 0.2))),
        text_color: Some(Color::WHITE),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: 12.0.into(),
        },
        ..Default::default()
    }
}

/// Saved-clip placeholder panel, tinted by the track's cover colors
pub fn clip_panel(colors: [[u8; 3]; 3]) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(Background::Gradient(
            iced::gradient::Linear::new(iced::Radians(3.0 * std::f32::consts::FRAC_PI_4))
                .add_stop(0.0, palette::rgba(colors[0], 0.5))
                .add_stop(0.5, palette::rgba(colors[1], 0.5))
                .add_stop(1.0, palette::rgba(colors[2], 0.5))
                .into(),
        )),
        border: Border {
            color: Color::from_rgba(1.0, 1.0, 1.0, 0.1),
            width: 1.0,
            radius: 18.0.into(),
        },
        ..Default::default()
    }
}

/// Frosted-glass pill button
pub fn glass_button(theme: &Theme, status: button::Status) -> button::Style {
    let hovered = matches!(status, button::Status::Hovered | button::Status::Pressed);
    button::Style {
        background: Some(Background::Color(Color::from_rgba(
            1.0,
            1.0,
            1.0,
            if hovered { 0.3 } else { 0.2 },
        ))),
        text_color: Color::WHITE,
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: 22.0.into(),
        },
        ..button::secondary(theme, status)
    }
}

/// Amber call-to-action pill
pub fn accent_button(theme: &Theme, status: button::Status) -> button::Style {
    let hovered = matches!(status, button::Status::Hovered | button::Status::Pressed);
    button::Style {
        background: Some(Background::Gradient(
            iced::gradient::Linear::new(iced::Radians(std::f32::consts::FRAC_PI_2))
                .add_stop(0.0, Color::from_rgb8(0xf5, 0x9e, 0x0b))
                .add_stop(1.0, Color::from_rgb8(0xf9, 0x73, 0x16))
                .into(),
        )),
        text_color: Color::WHITE,
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: 24.0.into(),
        },
        shadow: Shadow {
            color: Color::from_rgba8(0xff, 0xad, 0x5e, if hovered { 0.6 } else { 0.45 }),
            offset: Vector::new(0.0, 10.0),
            blur_radius: 30.0,
        },
        ..button::primary(theme, status)
    }
}

/// Transport toggle (shuffle/repeat): solid white when engaged
pub fn toggle_button(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme, status| {
        if active {
            button::Style {
                background: Some(Background::Color(Color::WHITE)),
                text_color: Color::BLACK,
                border: Border {
                    color: Color::TRANSPARENT,
                    width: 0.0,
                    radius: 20.0.into(),
                },
                ..button::primary(theme, status)
            }
        } else {
            button::Style {
                background: Some(Background::Color(Color::from_rgba(1.0, 1.0, 1.0, 0.1))),
                text_color: Color::WHITE,
                border: Border {
                    color: Color::from_rgba(1.0, 1.0, 1.0, 0.3),
                    width: 1.0,
                    radius: 20.0.into(),
                },
                ..button::secondary(theme, status)
            }
        }
    }
}

/// The big round record button; red while recording
pub fn record_button(recording: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme, status| {
        let fill = if recording {
            Color::from_rgba(0.92, 0.2, 0.2, 0.9)
        } else {
            Color::from_rgba(1.0, 1.0, 1.0, 0.9)
        };
        button::Style {
            background: Some(Background::Color(fill)),
            text_color: if recording { Color::WHITE } else { Color::BLACK },
            border: Border {
                color: Color::from_rgba(1.0, 1.0, 1.0, 0.8),
                width: 4.0,
                radius: 48.0.into(),
            },
            ..button::primary(theme, status)
        }
    }
}

/// Keyword option card; highlighted when selected
pub fn keyword_card(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme, status| {
        let hovered = matches!(status, button::Status::Hovered);
        if selected {
            button::Style {
                background: Some(Background::Color(Color::from_rgba(1.0, 1.0, 1.0, 0.1))),
                text_color: Color::WHITE,
                border: Border {
                    color: Color::from_rgb8(0xfd, 0xe6, 0x8a),
                    width: 1.0,
                    radius: 16.0.into(),
                },
                shadow: Shadow {
                    color: Color::from_rgba8(0xff, 0xad, 0x5e, 0.25),
                    offset: Vector::new(0.0, 16.0),
                    blur_radius: 50.0,
                },
                ..button::secondary(theme, status)
            }
        } else {
            button::Style {
                background: Some(Background::Color(Color::from_rgba(
                    1.0,
                    1.0,
                    1.0,
                    if hovered { 0.08 } else { 0.05 },
                ))),
                text_color: palette::TEXT_WARM,
                border: Border {
                    color: Color::from_rgba(1.0, 1.0, 1.0, 0.1),
                    width: 1.0,
                    radius: 16.0.into(),
                },
                ..button::secondary(theme, status)
            }
        }
    }
}
