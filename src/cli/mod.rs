//! Command-line interface: argument model and command dispatch.

pub mod args;
pub mod commands;
