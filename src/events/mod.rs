//! Event handling module.
//!
//! This module contains handlers for different types of events:
//! - Network events: store API interactions
//! - Terminal events: user input and terminal interactions

pub mod network;
pub mod terminal;
