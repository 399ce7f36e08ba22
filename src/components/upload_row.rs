use crate::model::upload::{abortable, size, UploadModel};
use crate::model::upload_status::UploadStatus;
use crate::utils::{format_bytes, format_progress_bar};
use crate::view::options::ProgressSpecs;
use crate::view::style::{action_label, status_label};
use ratatui::prelude::*;
use ratatui::widgets::{Cell, Row};
use throbber_widgets_tui::{Throbber, ThrobberState};

/// Horizontal pixels of the drawing represented by one terminal column
pub const PIXELS_PER_COLUMN: u32 = 10;

/// Terminal rendering of a single upload widget
pub struct UploadRow<'a> {
    model: &'a UploadModel,
    specs: ProgressSpecs,
}

impl<'a> UploadRow<'a> {
    pub fn new(model: &'a UploadModel, specs: ProgressSpecs) -> Self {
        UploadRow { model, specs }
    }

    /// Number of terminal columns used by a progress bar of `specs`, never
    /// wider than a terminal can address
    pub fn bar_columns(specs: ProgressSpecs) -> usize {
        (specs.width / PIXELS_PER_COLUMN).clamp(1, u32::from(u16::MAX)) as usize
    }

    /// Title, size, bar, status and abort cells as plain text
    pub fn to_columns(&self) -> [String; 5] {
        let fraction = self.model.percent_progress().unwrap_or(0.0);
        [
            self.model.title.clone(),
            format_bytes(size(self.model)),
            format_progress_bar(fraction, Self::bar_columns(self.specs)),
            status_label(self.model.status).unwrap_or_default().to_string(),
            self.abort_label().to_string(),
        ]
    }

    fn abort_label(&self) -> &'static str {
        if abortable(self.model) {
            action_label("abort").unwrap_or_default()
        } else {
            ""
        }
    }

    fn status_color(&self) -> Color {
        match self.model.status {
            UploadStatus::Initial => Color::DarkGray,
            UploadStatus::Uploading | UploadStatus::Processing => Color::Cyan,
            UploadStatus::Uploaded => Color::Green,
            UploadStatus::Error => Color::Red,
            UploadStatus::Abort => Color::Yellow,
        }
    }

    pub fn to_row(&self, throbber_state: &ThrobberState) -> Row<'static> {
        let color = self.status_color();
        let [title, size, bar, status_text, abort] = self.to_columns();

        let mut status = Line::default();
        if self.model.status == UploadStatus::Processing {
            status.push_span(Throbber::default().to_symbol_span(throbber_state));
        }
        status.push_span(Span::styled(status_text, Style::default().fg(color)));

        let title = match &self.model.url {
            Some(_) => Span::styled(title, Style::default().underlined()),
            None => Span::raw(title),
        };

        Row::new(vec![
            Cell::from(title),
            Cell::from(size),
            Cell::from(Span::styled(bar, Style::default().fg(color))),
            Cell::from(status),
            Cell::from(Span::styled(abort, Style::default().fg(Color::Red).bold())),
        ])
    }
}
