//! This module provides common objects used throughout the entire application

pub mod abort_handle;
pub mod action;
pub mod app_action;
pub mod error;
pub mod file_descriptor;
pub mod progress;
pub mod state;
pub mod upload;
pub mod upload_status;
