//! Upload screen: staged clip upload with retry
//!
//! Walks the recorded clip through timed status stages and performs the
//! real multipart POST during the uploading stage. A failed upload shows a
//! retry affordance that discards the pending recording and returns to the
//! capture step. Reaching this screen without a recording in the session
//! store silently redirects back to capture; the constructor returning
//! `None` is how the app detects that.

use fireside_core::capture;
use fireside_core::session::{SessionStore, RECORDING_KEY, UPLOAD_RESPONSE_KEY};
use iced::widget::{button, column, container, text};
use iced::{Center, Element, Fill, Task};

use super::message::{Message, Route};
use super::theme;
use crate::config::FiresideConfig;
use crate::upload;

/// Upload screen state
pub struct UploadScreen {
    status: String,
    failure: Option<String>,
    /// Decoded clip, consumed when the POST fires
    clip: Option<Vec<u8>>,
    endpoint: String,
    timeout_secs: u64,
}

/// Messages for the staged upload
#[derive(Debug, Clone)]
pub enum UploadMessage {
    /// Preparing stage elapsed
    Package,
    /// Packaging stage elapsed; fire the POST
    Send,
    /// POST finished
    Uploaded(Result<String, String>),
    /// Completion pause elapsed
    Finish,
    /// Discard the pending recording and go back to capture
    Retry,
}

impl UploadScreen {
    /// Build the screen from the session handoff. `None` means no recording
    /// was stored and the caller should redirect to the capture step.
    pub fn new(
        session: &mut SessionStore,
        config: &FiresideConfig,
    ) -> Option<(Self, Task<Message>)> {
        let encoded = session.take(RECORDING_KEY)?;
        let clip = match capture::decode_clip(&encoded) {
            Ok(clip) => clip,
            Err(e) => {
                log::warn!("dropping stored recording: {e}");
                return None;
            }
        };

        let screen = Self {
            status: "Preparing your clip...".to_string(),
            failure: None,
            clip: Some(clip),
            endpoint: config.upload.endpoint.clone(),
            timeout_secs: config.upload.timeout_secs,
        };
        let first = super::after(1_200, Message::Upload(UploadMessage::Package));
        Some((screen, first))
    }

    pub fn update(&mut self, message: UploadMessage, session: &mut SessionStore) -> Task<Message> {
        match message {
            UploadMessage::Package => {
                self.status = "Packaging the clip...".to_string();
                super::after(1_500, Message::Upload(UploadMessage::Send))
            }

            UploadMessage::Send => {
                self.status = "Uploading the clip...".to_string();
                let Some(clip) = self.clip.take() else {
                    return Task::none();
                };
                let endpoint = self.endpoint.clone();
                let timeout = self.timeout_secs;
                Task::perform(upload::upload_clip(endpoint, clip, timeout), |result| {
                    Message::Upload(UploadMessage::Uploaded(result))
                })
            }

            UploadMessage::Uploaded(Ok(body)) => {
                session.put(UPLOAD_RESPONSE_KEY, body);
                self.status = "Upload complete. Moving on...".to_string();
                super::after(800, Message::Upload(UploadMessage::Finish))
            }

            UploadMessage::Uploaded(Err(reason)) => {
                log::warn!("clip upload failed: {reason}");
                self.failure = Some(reason);
                Task::none()
            }

            UploadMessage::Finish => Task::done(Message::Navigate(Route::Select)),

            UploadMessage::Retry => {
                // The pending recording is gone either way; start over
                session.clear();
                Task::done(Message::Navigate(Route::Capture))
            }
        }
    }

    pub fn view(&self) -> Element<'_, UploadMessage> {
        let mut content = column![
            text("Looking at your clip").size(26),
        ]
        .spacing(20)
        .align_x(Center);

        if let Some(failure) = &self.failure {
            content = content
                .push(
                    container(text(failure.clone()).size(13))
                        .style(theme::error_banner)
                        .padding([10, 16]),
                )
                .push(
                    button(text("Record again").size(14))
                        .on_press(UploadMessage::Retry)
                        .style(theme::accent_button)
                        .padding([12, 28]),
                );
        } else {
            content = content.push(
                text(self.status.clone())
                    .size(14)
                    .color(fireside_widgets::theme::TEXT_DIM),
            );
        }

        container(content)
            .width(Fill)
            .height(Fill)
            .center_x(Fill)
            .center_y(Fill)
            .into()
    }
}
