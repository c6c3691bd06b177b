//! Shared UI widgets for the Fireside demo
//!
//! This crate renders the core state machines with iced canvases, following
//! the same pattern throughout:
//!
//! - **State** lives in `fireside-core` (the widgets own no domain state)
//! - **View functions** take state + callbacks and return `Element<Message>`
//! - **Canvas Programs** handle custom drawing and event-to-callback
//!   translation
//!
//! ## Widgets
//!
//! - `card_stack`: the home screen's 3-D card ring with drag/wheel gestures
//! - `turntable`: the player's vinyl disc, rotation marker and tonearm

pub mod card_stack;
pub mod theme;
pub mod turntable;

pub use card_stack::{card_stack, StackEvent};
pub use theme::{linear_gradient, rgb, rgba};
pub use turntable::turntable;
