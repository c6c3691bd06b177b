//! Capture screen: record a three-second moment
//!
//! Opens the capture device (exact rear-facing first, relaxed on refusal),
//! then records a fixed-length clip with a 100 ms countdown. The finished
//! clip is base64-encoded into the session store and the flow moves on to
//! the upload stage. Device failures disable the controls and surface
//! inline, matching the rest of the error taxonomy: recover by going back,
//! never crash.

use std::time::Duration;

use fireside_core::capture::{
    self, CaptureDevice, CaptureError, RecordingCountdown, SyntheticCamera, COUNTDOWN_TICK_MS,
};
use fireside_core::session::{SessionStore, RECORDING_KEY};
use iced::widget::{button, column, container, row, text, Space};
use iced::{time, Center, Element, Fill, Subscription, Task};

use super::message::{Message, Route};
use super::theme;

/// Simulated camera warm-up before controls enable (ms)
const SETUP_DELAY_MS: u64 = 400;

/// Capture screen state
pub struct CaptureScreen {
    camera: Option<SyntheticCamera>,
    countdown: Option<RecordingCountdown>,
    error: Option<CaptureError>,
}

/// Messages for the capture flow
#[derive(Debug, Clone)]
pub enum CaptureMessage {
    /// Camera warm-up finished; try to open the device
    CameraReady,
    /// Record button pressed
    Record,
    /// 100 ms countdown tick while recording
    CountdownTick,
    /// Leave back to the home screen
    Back,
}

impl CaptureScreen {
    pub fn new() -> (Self, Task<Message>) {
        let screen = Self {
            camera: None,
            countdown: None,
            error: None,
        };
        let warmup = super::after(SETUP_DELAY_MS, Message::Capture(CaptureMessage::CameraReady));
        (screen, warmup)
    }

    pub fn update(&mut self, message: CaptureMessage, session: &mut SessionStore) -> Task<Message> {
        match message {
            CaptureMessage::CameraReady => {
                match capture::open_with_fallback::<SyntheticCamera>() {
                    Ok(camera) => {
                        self.camera = Some(camera);
                        self.error = None;
                    }
                    Err(e) => {
                        log::warn!("capture device unavailable: {e}");
                        self.error = Some(e);
                    }
                }
                Task::none()
            }

            CaptureMessage::Record => {
                if self.countdown.is_some() || self.error.is_some() {
                    return Task::none();
                }
                let Some(camera) = &mut self.camera else {
                    return Task::none();
                };
                match camera.start_clip() {
                    Ok(()) => self.countdown = Some(RecordingCountdown::new()),
                    Err(e) => {
                        log::warn!("could not start recording: {e}");
                        self.error = Some(e);
                    }
                }
                Task::none()
            }

            CaptureMessage::CountdownTick => {
                let Some(countdown) = &mut self.countdown else {
                    return Task::none();
                };
                countdown.tick();
                if !countdown.finished() {
                    return Task::none();
                }
                self.countdown = None;
                self.finish_clip(session)
            }

            CaptureMessage::Back => Task::done(Message::Navigate(Route::Home)),
        }
    }

    /// Stop the recorder, hand the clip to the session store, move on.
    fn finish_clip(&mut self, session: &mut SessionStore) -> Task<Message> {
        let Some(camera) = &mut self.camera else {
            return Task::none();
        };
        match camera.finish_clip() {
            Ok(clip) => {
                session.put(RECORDING_KEY, capture::encode_clip(&clip));
                Task::done(Message::Navigate(Route::Upload))
            }
            Err(e) => {
                log::warn!("recording failed: {e}");
                self.error = Some(e);
                Task::none()
            }
        }
    }

    pub fn subscription(&self) -> Subscription<CaptureMessage> {
        if self.countdown.is_some() {
            time::every(Duration::from_millis(COUNTDOWN_TICK_MS))
                .map(|_| CaptureMessage::CountdownTick)
        } else {
            Subscription::none()
        }
    }

    pub fn view(&self) -> Element<'_, CaptureMessage> {
        let back = button(text("< Back").size(12))
            .on_press(CaptureMessage::Back)
            .style(theme::glass_button)
            .padding([8, 16]);

        let header = column![
            text("FIRESIDE CAPTURE").size(11),
            text("Time to light up a new album").size(26),
            text("Record a three second clip with the rear camera.\nWhen it ends, the flow moves on by itself.")
                .size(14)
                .color(fireside_widgets::theme::TEXT_DIM)
                .align_x(Center),
        ]
        .spacing(10)
        .align_x(Center);

        let status = if let Some(countdown) = &self.countdown {
            format!("Recording {}s", countdown.remaining_label())
        } else if self.error.is_some() {
            String::new()
        } else if self.camera.is_some() {
            "Ready to record".to_string()
        } else {
            "Setting up camera...".to_string()
        };

        let mut content = column![]
            .spacing(18)
            .align_x(Center)
            .width(Fill);

        content = content.push(text(status).size(13));

        if let Some(error) = &self.error {
            content = content.push(
                container(text(error.to_string()).size(13))
                    .style(theme::error_banner)
                    .padding([10, 16]),
            );
        }

        let recording = self.countdown.is_some();
        let enabled = self.camera.is_some() && !recording && self.error.is_none();
        let glyph = if recording { "■" } else { "●" };
        let mut record = button(text(glyph).size(30).align_x(Center))
            .style(theme::record_button(recording))
            .width(96)
            .height(96);
        if enabled {
            record = record.on_press(CaptureMessage::Record);
        }

        content = content.push(record);
        content = content.push(
            text("TAP TO RECORD 3S")
                .size(11)
                .color(fireside_widgets::theme::TEXT_DIM),
        );

        column![
            row![back, Space::new().width(Fill)].padding(12),
            container(header).width(Fill).center_x(Fill),
            Space::new().height(Fill),
            container(content).width(Fill).center_x(Fill).padding(32),
        ]
        .width(Fill)
        .height(Fill)
        .into()
    }
}
