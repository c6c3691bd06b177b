//! Player screen: the vinyl turntable
//!
//! Builds the transport over the right clock source for the album's asset
//! bundle - the CPAL sink when the bundle ships audio and the backend comes
//! up, the simulated one-second clock otherwise - and renders it through
//! the turntable canvas. Subscriptions are keyed on the transport state:
//! the rotation frame tick only exists while playing, the simulated tick
//! only on the simulated path, the backend poll only on the real path.
//! Leaving the screen drops the transport and with it the audio stream.

use std::time::{Duration, Instant};

use fireside_core::catalog::assets::{self, AssetBundle};
use fireside_core::transport::{format_time, Transport};
use fireside_widgets::turntable::{turntable, TurntableState};
use iced::keyboard::{key::Named, Key};
use iced::widget::{button, column, container, row, slider, text, Space};
use iced::{time, Center, Element, Fill, Subscription, Task};

use super::message::{Message, Route};
use super::theme;
use crate::audio;
use crate::config::FiresideConfig;

/// Backend poll interval on the real-media path (ms)
const SYNC_INTERVAL_MS: u64 = 250;

/// Rotation animation frame interval (ms)
const FRAME_INTERVAL_MS: u64 = 16;

/// Player screen state
pub struct PlayerScreen {
    bundle: &'static AssetBundle,
    transport: Transport,
    show_clip: bool,
}

/// Messages for the player
#[derive(Debug, Clone, Copy)]
pub enum PlayerMessage {
    TogglePlay,
    /// Simulated-clock advance (1 s cadence)
    Tick,
    /// Real-media backend poll
    SyncClock,
    /// Rotation animation frame
    Frame(Instant),
    /// Seek to a progress percentage
    Seek(f32),
    ToggleRepeat,
    ToggleShuffle,
    NextTrack,
    /// Show the saved clip overlay
    OpenClip,
    CloseClip,
    Back,
}

impl PlayerScreen {
    pub fn new(album_id: Option<&str>, config: &FiresideConfig) -> Self {
        let bundle = match album_id {
            Some(id) => assets::bundle_for(id),
            None => &assets::DEFAULT_BUNDLE,
        };
        let estimate = bundle.track.duration_seconds;

        let transport = match bundle.audio {
            Some(file) => {
                let path = config.assets_path.join(file);
                match audio::start_playback(&path) {
                    Ok(handle) => {
                        log::info!("player: real audio clock from {:?}", path);
                        Transport::with_media(Box::new(handle), estimate)
                    }
                    Err(e) => {
                        log::warn!("player: audio backend unavailable ({e}), simulating");
                        Transport::with_simulated(estimate)
                    }
                }
            }
            None => Transport::with_simulated(estimate),
        };

        Self {
            bundle,
            transport,
            show_clip: false,
        }
    }

    pub fn update(&mut self, message: PlayerMessage) -> Task<Message> {
        match message {
            PlayerMessage::TogglePlay => self.transport.toggle_play(),
            PlayerMessage::Tick => self.transport.tick(),
            PlayerMessage::SyncClock => self.transport.sync(),
            PlayerMessage::Frame(now) => self.transport.advance_rotation(now),
            PlayerMessage::Seek(percent) => self.transport.seek(percent),
            PlayerMessage::ToggleRepeat => self.transport.toggle_repeat(),
            PlayerMessage::ToggleShuffle => self.transport.toggle_shuffle(),
            PlayerMessage::NextTrack => self.transport.next_track(),
            PlayerMessage::OpenClip => self.show_clip = true,
            PlayerMessage::CloseClip => self.show_clip = false,
            PlayerMessage::Back => return Task::done(Message::Navigate(Route::Home)),
        }
        Task::none()
    }

    pub fn subscription(&self) -> Subscription<PlayerMessage> {
        let mut subscriptions = vec![iced::keyboard::on_key_press(|key, _modifiers| {
            match key {
                Key::Named(Named::Space) => Some(PlayerMessage::TogglePlay),
                _ => None,
            }
        })];

        if self.transport.is_playing() {
            subscriptions.push(
                time::every(Duration::from_millis(FRAME_INTERVAL_MS)).map(PlayerMessage::Frame),
            );
        }

        if self.transport.is_simulated() {
            if self.transport.is_playing() {
                subscriptions
                    .push(time::every(Duration::from_secs(1)).map(|_| PlayerMessage::Tick));
            }
        } else {
            subscriptions.push(
                time::every(Duration::from_millis(SYNC_INTERVAL_MS))
                    .map(|_| PlayerMessage::SyncClock),
            );
        }

        Subscription::batch(subscriptions)
    }

    pub fn view(&self) -> Element<'_, PlayerMessage> {
        if self.show_clip {
            return self.view_clip_overlay();
        }

        let track = &self.bundle.track;

        let top_bar = row![
            button(text("<").size(16))
                .on_press(PlayerMessage::Back)
                .style(theme::glass_button)
                .padding([8, 14]),
            Space::new().width(Fill),
        ]
        .padding(16);

        let disc = container(turntable(
            TurntableState {
                colors: track.colors,
                rotation_deg: self.transport.rotation_deg(),
                tonearm_deg: self.transport.tonearm_angle(),
                is_playing: self.transport.is_playing(),
            },
            PlayerMessage::TogglePlay,
        ))
        .width(Fill)
        .height(Fill);

        let titles = column![
            text(track.title).size(24),
            text(track.artist)
                .size(14)
                .color(fireside_widgets::theme::TEXT_DIM),
        ]
        .spacing(4)
        .align_x(Center);

        let progress = column![
            slider(
                0.0..=100.0,
                self.transport.progress_percent(),
                PlayerMessage::Seek
            )
            .step(0.1),
            row![
                text(format_time(self.transport.position_seconds())).size(11),
                Space::new().width(Fill),
                text(format_time(self.transport.duration_seconds())).size(11),
            ],
        ]
        .spacing(6);

        let controls = self.view_controls();

        let clip_button = button(text("View the saved clip").size(13).align_x(Center))
            .on_press(PlayerMessage::OpenClip)
            .style(theme::glass_button)
            .width(Fill)
            .padding(14);

        column![
            top_bar,
            disc,
            container(
                column![titles, progress, controls, clip_button]
                    .spacing(18)
                    .align_x(Center)
            )
            .width(Fill)
            .padding([12, 28]),
        ]
        .width(Fill)
        .height(Fill)
        .into()
    }

    fn view_controls(&self) -> Element<'_, PlayerMessage> {
        let shuffle = button(text("⤨").size(18))
            .on_press(PlayerMessage::ToggleShuffle)
            .style(theme::toggle_button(self.transport.shuffle()))
            .padding([8, 12]);

        // Previous track exists visually but the demo has a single track
        let previous = button(text("⏮").size(22))
            .style(theme::glass_button)
            .padding([8, 12]);

        let play_glyph = if self.transport.is_playing() {
            "⏸"
        } else {
            "▶"
        };
        let play = button(text(play_glyph).size(26).align_x(Center))
            .on_press(PlayerMessage::TogglePlay)
            .style(theme::toggle_button(true))
            .width(64)
            .height(64);

        let next = button(text("⏭").size(22))
            .on_press(PlayerMessage::NextTrack)
            .style(theme::glass_button)
            .padding([8, 12]);

        let repeat = button(text("🔁").size(18))
            .on_press(PlayerMessage::ToggleRepeat)
            .style(theme::toggle_button(self.transport.repeat()))
            .padding([8, 12]);

        row![shuffle, previous, play, next, repeat]
            .spacing(18)
            .align_y(Center)
            .into()
    }

    /// Saved-clip overlay: the backdrop placeholder and its mood tags
    fn view_clip_overlay(&self) -> Element<'_, PlayerMessage> {
        let mut tags = row![].spacing(8);
        for tag in assets::MOCK_TAGS {
            tags = tags.push(
                container(text(format!("#{tag}")).size(11))
                    .style(theme::glass_panel)
                    .padding([6, 12]),
            );
        }

        let close = button(text("✕").size(16))
            .on_press(PlayerMessage::CloseClip)
            .style(theme::glass_button)
            .padding([8, 14]);

        let panel = container(
            column![
                tags,
                Space::new().height(Fill),
                text(self.bundle.backdrop_clip)
                    .size(12)
                    .color(fireside_widgets::theme::TEXT_DIM),
            ]
            .spacing(12)
            .padding(20),
        )
        .style(theme::clip_panel(self.bundle.track.colors))
        .width(Fill)
        .height(Fill);

        column![
            row![Space::new().width(Fill), close].padding(16),
            container(panel).width(Fill).height(Fill).padding(24),
        ]
        .width(Fill)
        .height(Fill)
        .into()
    }
}
