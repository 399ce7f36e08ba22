//! Pure projections of the upload model into a virtual UI tree

pub mod node;
pub mod options;
pub mod style;
pub mod upload_view;
