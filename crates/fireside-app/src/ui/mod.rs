//! UI module for Fireside
//!
//! Built with iced, one module per screen. Screens follow the same shape:
//! a state struct with `new`/`update`/`view` (plus `subscription` where the
//! screen needs timers or keyboard input), with messages dispatched through
//! the top-level [`message::Message`] enum.

pub mod app;
pub mod capture;
pub mod generate;
pub mod home;
pub mod message;
pub mod player;
pub mod select;
pub mod theme;
pub mod upload;

pub use app::FiresideApp;

use std::time::Duration;

use iced::Task;

use message::Message;

/// Deliver `message` after a fixed delay; the staged screens and the
/// carousel settle timer are built on this.
pub(crate) fn after(ms: u64, message: Message) -> Task<Message> {
    Task::perform(tokio::time::sleep(Duration::from_millis(ms)), move |_| {
        message.clone()
    })
}
