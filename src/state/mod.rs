//! Application state management module.
//!
//! This module contains the core state management for the application,
//! including:
//! - Main `State` struct holding fetched data and UI bookkeeping
//! - Navigation types (View)
//! - Product form editing types
//! - State error handling

mod error;
mod form;
mod navigation;
mod state_impl;

pub use error::StateError;
pub use form::{FormField, ProductForm};
pub use navigation::View;
pub use state_impl::State;
