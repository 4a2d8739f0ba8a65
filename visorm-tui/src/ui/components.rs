use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use visorm_core::models::draft::{FieldId, TableDraft};
use visorm_core::preview::{sample_rows, PreviewRow};
use visorm_core::DraftEditor;

use super::{UIHandler, UIRenderer};

pub const NAV_ITEMS: [&str; 2] = ["Designer", "Preview"];

pub struct SchemaDesignerUI {
    pub editor: DraftEditor,
    pub current_screen: ScreenState,
    pub current_focus: FocusedWidget,
    pub selected_nav: usize,
    pub focused_control: ControlId,
    pub preview_rows: Vec<PreviewRow>,
    pub selected_preview_row: usize,
    pub status_message: Option<StatusMessage>,
    pub should_quit: bool,
}

#[derive(Clone, Copy, PartialEq)]
pub enum ScreenState {
    TableDesigner,
    SchemaPreview,
}

#[derive(Clone, Copy, PartialEq)]
pub enum FocusedWidget {
    Sidebar,
    Main,
}

/// Per-row form controls, in left-to-right order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldControl {
    Name,
    Type,
    Default,
    Nullable,
    Unique,
    Remove,
    InsertAfter,
}

impl FieldControl {
    pub const PARTS: [FieldControl; 7] = [
        FieldControl::Name,
        FieldControl::Type,
        FieldControl::Default,
        FieldControl::Nullable,
        FieldControl::Unique,
        FieldControl::Remove,
        FieldControl::InsertAfter,
    ];
}

/// Identity of one focusable form control. Field-row controls are keyed
/// by the row's stable [`FieldId`], never by its position, so focus stays
/// with its row when earlier rows are inserted or removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlId {
    TableName,
    CreateButton,
    PrimaryKeyName,
    PrimaryKeyType,
    AddFieldEnd,
    Field(FieldId, FieldControl),
}

/// Flattened top-to-bottom, left-to-right traversal order of the form.
pub fn control_order(draft: &TableDraft) -> Vec<ControlId> {
    let mut controls = vec![
        ControlId::TableName,
        ControlId::CreateButton,
        ControlId::PrimaryKeyName,
        ControlId::PrimaryKeyType,
        ControlId::AddFieldEnd,
    ];
    for field in &draft.fields {
        for part in FieldControl::PARTS {
            controls.push(ControlId::Field(field.id, part));
        }
    }
    controls
}

#[derive(Clone, PartialEq)]
pub enum StatusMessage {
    Info(String),
    Error(String),
}

impl SchemaDesignerUI {
    pub fn new() -> Self {
        Self {
            editor: DraftEditor::new(),
            current_screen: ScreenState::TableDesigner,
            current_focus: FocusedWidget::Sidebar,
            selected_nav: 0,
            focused_control: ControlId::TableName,
            preview_rows: sample_rows(),
            selected_preview_row: 0,
            status_message: None,
            should_quit: false,
        }
    }

    pub async fn run_ui(&mut self) -> Result<(), io::Error> {
        let _guard = TerminalGuard;
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.ui_loop(&mut terminal).await;

        terminal.show_cursor()?;

        result
    }

    async fn ui_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        loop {
            match self.current_screen {
                ScreenState::TableDesigner => {
                    UIRenderer::render_designer_screen(self, terminal).await?
                }
                ScreenState::SchemaPreview => {
                    UIRenderer::render_preview_screen(self, terminal).await?
                }
            }

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match self.current_focus {
                    FocusedWidget::Sidebar => {
                        UIHandler::handle_sidebar_input(self, key.code).await;
                    }
                    FocusedWidget::Main => match self.current_screen {
                        ScreenState::TableDesigner => {
                            UIHandler::handle_designer_input(self, key.code).await?;
                        }
                        ScreenState::SchemaPreview => {
                            UIHandler::handle_preview_input(self, key.code).await;
                        }
                    },
                }
            }

            if self.should_quit {
                return Ok(());
            }
        }
    }
}

struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen, DisableMouseCapture);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control_order_starts_with_table_header_controls() {
        let ui = SchemaDesignerUI::new();
        let order = control_order(ui.editor.draft());
        assert_eq!(
            order,
            vec![
                ControlId::TableName,
                ControlId::CreateButton,
                ControlId::PrimaryKeyName,
                ControlId::PrimaryKeyType,
                ControlId::AddFieldEnd,
            ]
        );
    }

    #[test]
    fn control_order_lists_each_row_in_part_order() {
        let mut ui = SchemaDesignerUI::new();
        let first = ui.editor.insert_field(0).unwrap();
        let second = ui.editor.insert_field(1).unwrap();

        let order = control_order(ui.editor.draft());
        assert_eq!(order.len(), 5 + 2 * FieldControl::PARTS.len());
        assert_eq!(order[5], ControlId::Field(first, FieldControl::Name));
        assert_eq!(
            order[5 + FieldControl::PARTS.len()],
            ControlId::Field(second, FieldControl::Name)
        );
    }
}
