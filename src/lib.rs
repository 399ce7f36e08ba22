//! # Upload Progress Library
//!
//! This library provides a file upload progress widget built as a model, an
//! update function and a view function:
//!
//! - [`init`] creates the model of a new upload from its file descriptors
//! - [`Action`] lists the events a transport reports for an upload
//! - [`update`] applies an action and returns the new model
//! - [`view`] renders the model into a virtual UI tree
//!
//! The widget does not perform any I/O. The remaining modules provide a
//! terminal host that runs simulated uploads and renders them with ratatui.
//!
//! ```
//! use upload_progress::model::abort_handle::AbortHandle;
//! use upload_progress::model::file_descriptor::FileDescriptor;
//! use upload_progress::model::progress::ProgressEvent;
//! use upload_progress::view::options::RenderOptions;
//! use upload_progress::{init, update, view, Action};
//!
//! let model = init(vec![FileDescriptor::new("a.png", Some(100))]);
//! let action = Action::progress(AbortHandle::new(|| {}), ProgressEvent::new(50, 100)).unwrap();
//! let model = update(action, model);
//! let tree = view(&RenderOptions::default(), &model);
//! assert!(tree.as_element().is_some());
//! ```

#![forbid(unsafe_code)]

pub mod cli;
pub mod components;
pub mod model;
pub mod services;
pub mod settings;
pub mod state_store;
pub mod termination;
pub mod ui_manager;
pub mod utils;
pub mod view;

pub use model::action::Action;
pub use model::upload::{init, update, UploadModel};
pub use view::upload_view::view;
