//! Built-in session commands

mod history;
mod menu;

pub use history::{Clear, History, Stats};
pub use menu::{Menu, Plugins};
