//! Application messages for Fireside
//!
//! Top-level message enum plus the route type; per-screen messages live
//! next to their screens.

use super::capture::CaptureMessage;
use super::generate::GenerateMessage;
use super::home::HomeMessage;
use super::player::PlayerMessage;
use super::select::SelectMessage;
use super::upload::UploadMessage;

/// Messages that can be sent to the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Switch screens
    Navigate(Route),
    /// Home screen message
    Home(HomeMessage),
    /// Capture screen message
    Capture(CaptureMessage),
    /// Upload screen message
    Upload(UploadMessage),
    /// Keyword select screen message
    Select(SelectMessage),
    /// Generation screen message
    Generate(GenerateMessage),
    /// Player screen message
    Player(PlayerMessage),
}

/// In-app routes; the only data carried across a navigation is the
/// selected keyword / resolved album id
#[derive(Debug, Clone)]
pub enum Route {
    Home,
    Capture,
    Upload,
    Select,
    Generate { keyword: String },
    /// `None` opens the default bundle (showcase albums)
    Player { album_id: Option<String> },
}
