//! Home screen: the album card stack
//!
//! Owns the carousel engine and a session slogan. Gestures come back from
//! the card stack canvas as [`StackEvent`]s; committed transitions schedule
//! their settle timer through the app task queue so the engine's lock
//! clears slightly after the visual transition.

use fireside_core::carousel::{CarouselEngine, Settle};
use fireside_core::catalog;
use fireside_widgets::card_stack::{card_stack, StackEvent};
use iced::keyboard::{key::Named, Key};
use iced::widget::{column, container, text};
use iced::{Center, Element, Fill, Subscription, Task};

use super::message::{Message, Route};
use super::theme;

/// Home screen state
pub struct HomeScreen {
    engine: CarouselEngine,
    slogan: &'static str,
}

/// Messages for home interaction
#[derive(Debug, Clone)]
pub enum HomeMessage {
    /// Gesture from the card stack canvas
    Stack(StackEvent),
    /// Keyboard paging
    Shift(i32),
    /// Settle timer fired for a committed transition
    Settled(Settle),
}

impl HomeScreen {
    pub fn new() -> Self {
        Self {
            engine: CarouselEngine::new(catalog::stack_items()),
            slogan: catalog::random_slogan(),
        }
    }

    pub fn update(&mut self, message: HomeMessage) -> Task<Message> {
        match message {
            HomeMessage::Stack(event) => match event {
                StackEvent::DragStart(y) => {
                    self.engine.begin_drag(y);
                    Task::none()
                }
                StackEvent::DragMove(y) => {
                    self.engine.drag_to(y);
                    Task::none()
                }
                StackEvent::DragEnd(y) => schedule_settle(self.engine.end_drag(y)),
                StackEvent::DragCancel => {
                    self.engine.cancel_drag();
                    Task::none()
                }
                StackEvent::Wheel(delta) => schedule_settle(self.engine.on_wheel(delta)),
                StackEvent::Activate(index) => self.activate(index),
            },
            HomeMessage::Shift(step) => schedule_settle(self.engine.shift_by(step)),
            HomeMessage::Settled(token) => {
                self.engine.settle(token);
                Task::none()
            }
        }
    }

    /// Clicking the creation card starts the capture flow; album cards open
    /// the player on the default bundle.
    fn activate(&self, index: usize) -> Task<Message> {
        let route = if index == 0 {
            Route::Capture
        } else {
            Route::Player { album_id: None }
        };
        Task::done(Message::Navigate(route))
    }

    pub fn subscription(&self) -> Subscription<HomeMessage> {
        iced::keyboard::on_key_press(|key, _modifiers| match key {
            Key::Named(Named::ArrowDown) | Key::Named(Named::PageDown) => {
                Some(HomeMessage::Shift(1))
            }
            Key::Named(Named::ArrowUp) | Key::Named(Named::PageUp) => Some(HomeMessage::Shift(-1)),
            _ => None,
        })
    }

    pub fn view(&self) -> Element<'_, HomeMessage> {
        let header = column![
            text("FIRESIDE").size(30),
            text(self.slogan)
                .size(16)
                .color(fireside_widgets::theme::TEXT_DIM),
        ]
        .spacing(8)
        .align_x(Center);

        let stack = container(card_stack(&self.engine, HomeMessage::Stack))
            .width(Fill)
            .height(Fill);

        container(
            column![header, stack]
                .spacing(12)
                .align_x(Center)
                .padding(24),
        )
        .width(Fill)
        .height(Fill)
        .style(theme::header_glow)
        .into()
    }
}

impl Default for HomeScreen {
    fn default() -> Self {
        Self::new()
    }
}

/// Schedule the settle timer for a committed transition, if one happened
fn schedule_settle(token: Option<Settle>) -> Task<Message> {
    match token {
        Some(token) => Task::perform(
            tokio::time::sleep(CarouselEngine::settle_delay()),
            move |_| Message::Home(HomeMessage::Settled(token)),
        ),
        None => Task::none(),
    }
}
