//! Terminal rendering of the upload widgets

pub mod component;
pub mod upload_row;
pub mod uploads_page;
