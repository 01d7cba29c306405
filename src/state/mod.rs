//! Application state management module.
//!
//! This module contains the core state management for the application, including:
//! - Main `State` struct that holds the food list and dashboard data
//! - Modal and load status types
//! - Form editing types
//! - State error handling

mod error;
mod form;
mod modal;
mod state_impl;

pub use error::StateError;
pub use form::{FoodForm, FormField};
pub use modal::{LoadStatus, Modal, Status};
pub use state_impl::State;
