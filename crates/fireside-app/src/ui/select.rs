//! Keyword select screen
//!
//! One keyword decides the generated album's mood. Continue without a
//! selection surfaces an inline nudge instead of advancing.

use fireside_core::catalog::keywords::{KeywordOption, KEYWORD_OPTIONS};
use iced::widget::{button, column, container, row, text, Space};
use iced::{Center, Element, Fill, Task};

use super::message::{Message, Route};
use super::theme;

/// Select screen state
pub struct SelectScreen {
    selected: Option<&'static str>,
    error: Option<String>,
}

/// Messages for keyword selection
#[derive(Debug, Clone)]
pub enum SelectMessage {
    /// A keyword card was clicked
    Choose(&'static str),
    /// Continue to generation
    Continue,
    /// Back to the capture step
    Back,
}

impl SelectScreen {
    pub fn new() -> Self {
        Self {
            selected: None,
            error: None,
        }
    }

    pub fn update(&mut self, message: SelectMessage) -> Task<Message> {
        match message {
            SelectMessage::Choose(id) => {
                self.selected = Some(id);
                self.error = None;
                Task::none()
            }
            SelectMessage::Continue => match self.selected {
                Some(keyword) => Task::done(Message::Navigate(Route::Generate {
                    keyword: keyword.to_string(),
                })),
                None => {
                    self.error = Some("Choose a keyword to continue.".to_string());
                    Task::none()
                }
            },
            SelectMessage::Back => Task::done(Message::Navigate(Route::Capture)),
        }
    }

    pub fn view(&self) -> Element<'_, SelectMessage> {
        let header = column![
            text("SELECT KEYWORD").size(11),
            text("What mood should the album carry?").size(24),
            text("Pick one keyword below. It shapes the cover and the\natmosphere of the generated album.")
                .size(14)
                .color(fireside_widgets::theme::TEXT_DIM)
                .align_x(Center),
        ]
        .spacing(10)
        .align_x(Center);

        let mut options = column![].spacing(12).width(Fill);
        for option in &KEYWORD_OPTIONS {
            options = options.push(self.option_card(option));
        }

        let mut body = column![options].spacing(16).align_x(Center).width(Fill);
        if let Some(error) = &self.error {
            body = body.push(
                container(text(error.clone()).size(13))
                    .style(theme::error_banner)
                    .padding([10, 16]),
            );
        }

        let footer = row![
            button(text("BACK").size(12))
                .on_press(SelectMessage::Back)
                .style(theme::glass_button)
                .padding([10, 22]),
            Space::new().width(Fill),
            button(text("CONTINUE").size(12))
                .on_press(SelectMessage::Continue)
                .style(theme::accent_button)
                .padding([12, 26]),
        ]
        .align_y(Center);

        column![
            container(header).width(Fill).center_x(Fill).padding(24),
            container(body).width(Fill).padding([8, 32]),
            Space::new().height(Fill),
            container(footer).width(Fill).padding(24),
        ]
        .width(Fill)
        .height(Fill)
        .into()
    }

    fn option_card(&self, option: &KeywordOption) -> Element<'_, SelectMessage> {
        let is_active = self.selected == Some(option.id);
        let badge = if is_active { "SELECTED" } else { "KEYWORD" };

        button(
            column![
                text(badge).size(10).color(fireside_widgets::theme::TEXT_DIM),
                text(option.label).size(19),
                text(option.description)
                    .size(13)
                    .color(fireside_widgets::theme::TEXT_DIM),
            ]
            .spacing(6),
        )
        .on_press(SelectMessage::Choose(option.id))
        .style(theme::keyword_card(is_active))
        .width(Fill)
        .padding(18)
        .into()
    }
}

impl Default for SelectScreen {
    fn default() -> Self {
        Self::new()
    }
}
