//! Event handling module for keyboard and mouse input, plus the date bus.
//!
//! Input handlers translate crossterm events into [`Action`]s; the App
//! applies them to the picker. Confirmed dates leave through [`DateBus`].

mod action;
pub mod bus;
mod handler;
mod keyboard;
mod mouse;

pub use action::Action;
pub use bus::{DateBus, DateSelected};
pub use handler::EventHandler;
