//! This module provides functionality for moving the bytes of an upload and reporting
//! its progress back to the application

pub mod task_registry;
pub mod transport;
pub mod upload_runner;
