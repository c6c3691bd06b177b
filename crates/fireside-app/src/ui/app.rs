//! Main iced application for Fireside
//!
//! Owns the config, the session store and the active screen. Screens are a
//! plain enum; navigating replaces the current screen wholesale, which
//! drops its state machine, timers and any acquired device (the player's
//! audio stream closes on drop). Messages are dispatched to the active
//! screen only - a stale message for a screen that was just left is
//! silently ignored.

use fireside_core::session::SessionStore;
use iced::widget::container;
use iced::{Element, Fill, Subscription, Task, Theme};

use super::capture::CaptureScreen;
use super::generate::GenerateScreen;
use super::home::HomeScreen;
use super::message::{Message, Route};
use super::player::PlayerScreen;
use super::select::SelectScreen;
use super::theme;
use super::upload::UploadScreen;
use crate::config::FiresideConfig;

/// Application state
pub struct FiresideApp {
    config: FiresideConfig,
    session: SessionStore,
    screen: Screen,
}

/// The active screen; exactly one exists at a time
enum Screen {
    Home(HomeScreen),
    Capture(CaptureScreen),
    Upload(UploadScreen),
    Select(SelectScreen),
    Generate(GenerateScreen),
    Player(PlayerScreen),
}

impl FiresideApp {
    /// Create the application on the home screen
    pub fn new(config: FiresideConfig) -> Self {
        Self {
            config,
            session: SessionStore::new(),
            screen: Screen::Home(HomeScreen::new()),
        }
    }

    /// Update application state
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navigate(route) => self.navigate(route),

            Message::Home(msg) => match &mut self.screen {
                Screen::Home(screen) => screen.update(msg),
                _ => Task::none(),
            },
            Message::Capture(msg) => match &mut self.screen {
                Screen::Capture(screen) => screen.update(msg, &mut self.session),
                _ => Task::none(),
            },
            Message::Upload(msg) => match &mut self.screen {
                Screen::Upload(screen) => screen.update(msg, &mut self.session),
                _ => Task::none(),
            },
            Message::Select(msg) => match &mut self.screen {
                Screen::Select(screen) => screen.update(msg),
                _ => Task::none(),
            },
            Message::Generate(msg) => match &mut self.screen {
                Screen::Generate(screen) => screen.update(msg),
                _ => Task::none(),
            },
            Message::Player(msg) => match &mut self.screen {
                Screen::Player(screen) => screen.update(msg),
                _ => Task::none(),
            },
        }
    }

    /// Replace the active screen.
    ///
    /// The upload and generation steps depend on the session handoff;
    /// reaching them without it silently redirects back to the capture
    /// step.
    fn navigate(&mut self, route: Route) -> Task<Message> {
        log::info!("navigate: {:?}", route);
        match route {
            Route::Home => {
                self.screen = Screen::Home(HomeScreen::new());
                Task::none()
            }
            Route::Capture => {
                let (screen, task) = CaptureScreen::new();
                self.screen = Screen::Capture(screen);
                task
            }
            Route::Upload => match UploadScreen::new(&mut self.session, &self.config) {
                Some((screen, task)) => {
                    self.screen = Screen::Upload(screen);
                    task
                }
                None => {
                    log::warn!("upload step reached without a recording, back to capture");
                    self.navigate(Route::Capture)
                }
            },
            Route::Select => {
                self.screen = Screen::Select(SelectScreen::new());
                Task::none()
            }
            Route::Generate { keyword } => {
                match GenerateScreen::new(keyword, &mut self.session) {
                    Some((screen, task)) => {
                        self.screen = Screen::Generate(screen);
                        task
                    }
                    None => {
                        log::warn!("generation reached without an upload, back to capture");
                        self.navigate(Route::Capture)
                    }
                }
            }
            Route::Player { album_id } => {
                self.screen = Screen::Player(PlayerScreen::new(album_id.as_deref(), &self.config));
                Task::none()
            }
        }
    }

    /// Build the view
    pub fn view(&self) -> Element<'_, Message> {
        let content = match &self.screen {
            Screen::Home(screen) => screen.view().map(Message::Home),
            Screen::Capture(screen) => screen.view().map(Message::Capture),
            Screen::Upload(screen) => screen.view().map(Message::Upload),
            Screen::Select(screen) => screen.view().map(Message::Select),
            Screen::Generate(screen) => screen.view().map(Message::Generate),
            Screen::Player(screen) => screen.view().map(Message::Player),
        };

        container(content)
            .width(Fill)
            .height(Fill)
            .style(theme::screen_background)
            .into()
    }

    /// Subscriptions belong to the active screen and die with it
    pub fn subscription(&self) -> Subscription<Message> {
        match &self.screen {
            Screen::Home(screen) => screen.subscription().map(Message::Home),
            Screen::Capture(screen) => screen.subscription().map(Message::Capture),
            Screen::Player(screen) => screen.subscription().map(Message::Player),
            _ => Subscription::none(),
        }
    }

    /// Get the theme
    pub fn theme(&self) -> Theme {
        Theme::Dark
    }
}
