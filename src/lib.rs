//! pomo - A Pomodoro timer for the terminal
//!
//! This crate provides the Pomodoro session state machine along with an
//! interactive TUI and a line-mode runner that drive it.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod notify;
pub mod output;
pub mod session;
pub mod tui;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::PomoError;
pub use session::{Durations, SessionController, SessionKind};
