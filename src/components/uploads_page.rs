use crate::components::component::{Component, ComponentRender};
use crate::components::upload_row::UploadRow;
use crate::model::app_action::AppAction;
use crate::model::state::State;
use crate::model::upload::UploadModel;
use crate::view::options::ProgressSpecs;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::{prelude::*, widgets::*};
use throbber_widgets_tui::ThrobberState;
use tokio::sync::mpsc::UnboundedSender;

#[derive(Clone)]
struct Props {
    uploads: Vec<UploadModel>,
    selected: usize,
    progress_specs: ProgressSpecs,
}

impl From<&State> for Props {
    fn from(state: &State) -> Self {
        let st = state.clone();
        Props {
            uploads: st.uploads,
            selected: st.selected,
            progress_specs: st.progress_specs,
        }
    }
}

/// Lists one upload widget per selection
pub struct UploadsPage {
    pub action_tx: UnboundedSender<AppAction>,
    props: Props,
}

impl Component for UploadsPage {
    fn new(state: &State, action_tx: UnboundedSender<AppAction>) -> Self
    where
        Self: Sized,
    {
        UploadsPage {
            action_tx: action_tx.clone(),
            props: Props::from(state),
        }
        .move_with_state(state)
    }

    fn move_with_state(self, state: &State) -> Self
    where
        Self: Sized,
    {
        UploadsPage {
            props: Props::from(state),
            ..self
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        let action = match key.code {
            KeyCode::Up | KeyCode::Char('k') => AppAction::SelectPrevious,
            KeyCode::Down | KeyCode::Char('j') => AppAction::SelectNext,
            KeyCode::Char('x') | KeyCode::Delete => AppAction::AbortSelected,
            KeyCode::Char('q') | KeyCode::Esc => AppAction::Exit,
            _ => return,
        };
        let _ = self.action_tx.send(action);
    }
}

impl UploadsPage {
    fn get_table(&self, throbber_state: &ThrobberState) -> Table<'static> {
        let focus_color = Color::Rgb(98, 114, 164);
        let bar_columns = UploadRow::bar_columns(self.props.progress_specs);
        let header = Row::new(vec!["File", "Size", "Progress", "Status", ""])
            .fg(focus_color)
            .bold()
            .underlined()
            .height(1)
            .bottom_margin(0);
        let rows: Vec<Row> = self
            .props
            .uploads
            .iter()
            .map(|upload| UploadRow::new(upload, self.props.progress_specs).to_row(throbber_state))
            .collect();
        let finished = self
            .props
            .uploads
            .iter()
            .filter(|upload| upload.status.is_terminal())
            .count();
        let widths = [
            Constraint::Fill(1),
            Constraint::Length(10),
            Constraint::Length(u16::try_from(bar_columns).unwrap_or(u16::MAX)),
            Constraint::Length(12),
            Constraint::Length(1),
        ];
        Table::new(rows, widths)
            .header(header)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("Uploads ({}/{} finished)", finished, self.props.uploads.len()))
                    .title_bottom(" ↑/↓ select, x abort, q quit ")
                    .fg(Color::White),
            )
            .row_highlight_style(Style::default().fg(focus_color).bg(Color::White).add_modifier(Modifier::REVERSED))
    }
}

impl ComponentRender<&ThrobberState> for UploadsPage {
    fn render(&self, frame: &mut Frame, throbber_state: &ThrobberState) {
        if self.props.uploads.is_empty() {
            let info = Paragraph::new(Text::from("No uploads. Pass files or a manifest on the command line"));
            frame.render_widget(info, frame.area());
            return;
        }
        let mut table_state = TableState::default().with_selected(Some(self.props.selected));
        frame.render_stateful_widget(self.get_table(throbber_state), frame.area(), &mut table_state);
    }
}
