//! Terminal rendering for the picker host.

pub mod components;
pub mod interaction;
pub mod theme;
pub mod ui;
