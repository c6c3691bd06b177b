//! Generation screen: staged mock "generating" animation
//!
//! No real computation happens here. A fixed sequence of timed status
//! messages plays out, then the flow lands on the player for the album the
//! chosen keyword maps to. Reaching this screen without an upload response
//! in the session store redirects back to capture, like the upload step.

use fireside_core::catalog::keywords;
use fireside_core::session::{SessionStore, UPLOAD_RESPONSE_KEY};
use iced::widget::{column, container, text};
use iced::{Center, Element, Fill, Task};

use super::message::{Message, Route};

/// Status line and dwell time for each mock stage
const STAGES: [(&str, u64); 4] = [
    ("Reading the mood of your clip...", 1_200),
    ("Sketching a melody to match...", 1_500),
    ("Pressing your record...", 1_800),
    ("Done. Dropping the needle...", 800),
];

/// Generation screen state
pub struct GenerateScreen {
    keyword: String,
    stage: usize,
}

/// Messages for the staged animation
#[derive(Debug, Clone)]
pub enum GenerateMessage {
    /// Current stage's dwell time elapsed
    Advance,
}

impl GenerateScreen {
    /// Build the screen; `None` when the upload handoff is missing and the
    /// caller should redirect to capture.
    pub fn new(keyword: String, session: &mut SessionStore) -> Option<(Self, Task<Message>)> {
        // The opaque upload response is consumed here; the mock generator
        // has no use for its contents.
        session.take(UPLOAD_RESPONSE_KEY)?;

        let screen = Self { keyword, stage: 0 };
        let first = super::after(STAGES[0].1, Message::Generate(GenerateMessage::Advance));
        Some((screen, first))
    }

    pub fn update(&mut self, message: GenerateMessage) -> Task<Message> {
        match message {
            GenerateMessage::Advance => {
                self.stage += 1;
                if self.stage >= STAGES.len() {
                    let album_id = keywords::album_for_keyword(&self.keyword);
                    return Task::done(Message::Navigate(Route::Player {
                        album_id: Some(album_id.to_string()),
                    }));
                }
                super::after(
                    STAGES[self.stage].1,
                    Message::Generate(GenerateMessage::Advance),
                )
            }
        }
    }

    pub fn view(&self) -> Element<'_, GenerateMessage> {
        let status = STAGES[self.stage.min(STAGES.len() - 1)].0;

        container(
            column![
                text("♪").size(44),
                text("Generating your album").size(26),
                text(status)
                    .size(14)
                    .color(fireside_widgets::theme::TEXT_DIM),
            ]
            .spacing(18)
            .align_x(Center),
        )
        .width(Fill)
        .height(Fill)
        .center_x(Fill)
        .center_y(Fill)
        .into()
    }
}
