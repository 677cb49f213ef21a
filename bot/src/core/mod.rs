//! Core chat logic: command routing, conversation wizards and report rendering

pub mod commands;
pub mod conversation;
pub mod input;
pub mod report;
pub mod texts;

pub use commands::Command;
pub use conversation::{advance, main_menu, Commit, Reply, SessionState, Transition};
