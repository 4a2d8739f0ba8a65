use std::io;

use crossterm::event::KeyCode;
use log::{debug, warn};
use visorm_core::errors::DraftError;
use visorm_core::models::draft::{FieldId, FieldType, PrimaryKeyType};
use visorm_core::preview::log_row;
use visorm_core::submit::{submit, LogSubmitHandler};

use super::{
    components::{
        control_order, ControlId, FieldControl, FocusedWidget, ScreenState, StatusMessage,
        NAV_ITEMS,
    },
    SchemaDesignerUI, UIHandler,
};

impl UIHandler for SchemaDesignerUI {
    async fn handle_sidebar_input(&mut self, key: KeyCode) {
        match key {
            KeyCode::Up => {
                if self.selected_nav > 0 {
                    self.selected_nav -= 1;
                }
            }
            KeyCode::Down => {
                if self.selected_nav < NAV_ITEMS.len() - 1 {
                    self.selected_nav += 1;
                }
            }
            KeyCode::Enter | KeyCode::Tab => {
                self.current_screen = match self.selected_nav {
                    1 => ScreenState::SchemaPreview,
                    _ => ScreenState::TableDesigner,
                };
                self.current_focus = FocusedWidget::Main;
            }
            KeyCode::Char('q') => {
                self.should_quit = true;
            }
            _ => {}
        }
    }

    async fn handle_designer_input(&mut self, key: KeyCode) -> io::Result<()> {
        match key {
            KeyCode::Esc | KeyCode::Tab => {
                self.current_focus = FocusedWidget::Sidebar;
            }
            KeyCode::Up => self.move_focus(-1),
            KeyCode::Down => self.move_focus(1),
            _ => self.handle_control_key(key),
        }
        Ok(())
    }

    async fn handle_preview_input(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::Tab => {
                self.current_focus = FocusedWidget::Sidebar;
            }
            KeyCode::Up => {
                if self.selected_preview_row > 0 {
                    self.selected_preview_row -= 1;
                }
            }
            KeyCode::Down => {
                if self.selected_preview_row < self.preview_rows.len().saturating_sub(1) {
                    self.selected_preview_row += 1;
                }
            }
            KeyCode::Enter => {
                if let Some(row) = self.preview_rows.get(self.selected_preview_row) {
                    if let Err(err) = log_row(row) {
                        warn!("failed to log preview row: {}", err);
                        self.status_message = Some(StatusMessage::Error(err.to_string()));
                    }
                }
            }
            _ => {}
        }
    }
}

impl SchemaDesignerUI {
    fn move_focus(&mut self, delta: isize) {
        let order = control_order(self.editor.draft());
        let len = order.len() as isize;
        let pos = order
            .iter()
            .position(|control| *control == self.focused_control)
            .unwrap_or(0) as isize;
        let next = (pos + delta).clamp(0, len - 1);
        self.focused_control = order[next as usize];
    }

    fn handle_control_key(&mut self, key: KeyCode) {
        match self.focused_control {
            ControlId::TableName
            | ControlId::PrimaryKeyName
            | ControlId::Field(_, FieldControl::Name)
            | ControlId::Field(_, FieldControl::Default) => self.edit_focused_text(key),
            ControlId::PrimaryKeyType => match key {
                KeyCode::Left => self.cycle_primary_key_type(false),
                KeyCode::Right => self.cycle_primary_key_type(true),
                _ => {}
            },
            ControlId::Field(id, FieldControl::Type) => match key {
                KeyCode::Left => self.cycle_field_type(id, false),
                KeyCode::Right => self.cycle_field_type(id, true),
                _ => {}
            },
            ControlId::Field(_, FieldControl::Nullable)
            | ControlId::Field(_, FieldControl::Unique) => {
                if matches!(key, KeyCode::Char(' ') | KeyCode::Enter) {
                    self.toggle_focused_checkbox();
                }
            }
            ControlId::CreateButton => {
                if key == KeyCode::Enter {
                    self.submit_draft();
                }
            }
            ControlId::AddFieldEnd => {
                if key == KeyCode::Enter {
                    let len = self.editor.fields().len();
                    self.insert_field_at(len);
                }
            }
            ControlId::Field(id, FieldControl::Remove) => {
                if key == KeyCode::Enter {
                    if let Some(at) = self.editor.field_index(id) {
                        self.remove_field_at(at);
                    }
                }
            }
            ControlId::Field(id, FieldControl::InsertAfter) => {
                if key == KeyCode::Enter {
                    if let Some(at) = self.editor.field_index(id) {
                        self.insert_field_at(at + 1);
                    }
                }
            }
        }
    }

    fn edit_focused_text(&mut self, key: KeyCode) {
        let Some(value) = self.focused_text_mut() else {
            return;
        };
        match key {
            KeyCode::Char(c) => value.push(c),
            KeyCode::Backspace => {
                value.pop();
            }
            _ => {}
        }
    }

    fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focused_control {
            ControlId::TableName => Some(&mut self.editor.draft_mut().name),
            ControlId::PrimaryKeyName => Some(&mut self.editor.draft_mut().primary_key.name),
            ControlId::Field(id, FieldControl::Name) => {
                let at = self.editor.field_index(id)?;
                Some(&mut self.editor.field_mut(at)?.name)
            }
            ControlId::Field(id, FieldControl::Default) => {
                let at = self.editor.field_index(id)?;
                Some(&mut self.editor.field_mut(at)?.default)
            }
            _ => None,
        }
    }

    fn cycle_primary_key_type(&mut self, forward: bool) {
        let all = PrimaryKeyType::ALL;
        let current = self.editor.draft().primary_key.key_type;
        let pos = all.iter().position(|t| *t == current).unwrap_or(0);
        let next = if forward {
            (pos + 1) % all.len()
        } else {
            (pos + all.len() - 1) % all.len()
        };
        self.editor.draft_mut().primary_key.key_type = all[next];
    }

    // A field's type has no default and, once chosen, cannot be unset
    // again (only re-chosen), matching the required selector it models.
    fn cycle_field_type(&mut self, id: FieldId, forward: bool) {
        let all = FieldType::ALL;
        let Some(at) = self.editor.field_index(id) else {
            return;
        };
        let Some(field) = self.editor.field_mut(at) else {
            return;
        };
        field.field_type = Some(match field.field_type {
            None => all[0],
            Some(current) => {
                let pos = all.iter().position(|t| *t == current).unwrap_or(0);
                let next = if forward {
                    (pos + 1) % all.len()
                } else {
                    (pos + all.len() - 1) % all.len()
                };
                all[next]
            }
        });
    }

    fn toggle_focused_checkbox(&mut self) {
        if let ControlId::Field(id, part) = self.focused_control {
            let Some(at) = self.editor.field_index(id) else {
                return;
            };
            let Some(field) = self.editor.field_mut(at) else {
                return;
            };
            match part {
                FieldControl::Nullable => field.nullable = !field.nullable,
                FieldControl::Unique => field.unique = !field.unique,
                _ => {}
            }
        }
    }

    fn insert_field_at(&mut self, at: usize) {
        match self.editor.insert_field(at) {
            Ok(id) => {
                self.focused_control = ControlId::Field(id, FieldControl::Name);
                self.status_message = None;
            }
            Err(err) => {
                warn!("insert_field({}) rejected: {}", at, err);
                self.status_message = Some(StatusMessage::Error(err.to_string()));
            }
        }
    }

    fn remove_field_at(&mut self, at: usize) {
        match self.editor.remove_field(at) {
            Ok(removed) => {
                debug!("removed field {:?} at index {}", removed.name, at);
                // Land on the nearest surviving row, or the add control
                // when the list is empty.
                let fields = self.editor.fields();
                self.focused_control = fields
                    .get(at)
                    .or_else(|| at.checked_sub(1).and_then(|prev| fields.get(prev)))
                    .map(|field| ControlId::Field(field.id, FieldControl::Remove))
                    .unwrap_or(ControlId::AddFieldEnd);
            }
            Err(err) => {
                warn!("remove_field({}) rejected: {}", at, err);
                self.status_message = Some(StatusMessage::Error(err.to_string()));
            }
        }
    }

    fn submit_draft(&mut self) {
        let mut handler = LogSubmitHandler;
        match submit(self.editor.draft(), &mut handler) {
            Ok(()) => {
                self.status_message = Some(StatusMessage::Info(format!(
                    "table draft \"{}\" submitted",
                    self.editor.draft().name
                )));
            }
            Err(err) => {
                self.focus_violation(&err);
                self.status_message = Some(StatusMessage::Error(err.to_string()));
            }
        }
    }

    // TUI analog of browser required-field feedback: jump focus to the
    // first offending control.
    fn focus_violation(&mut self, err: &DraftError) {
        match err {
            DraftError::MissingTableName => self.focused_control = ControlId::TableName,
            DraftError::MissingFieldName { index } => {
                if let Some(field) = self.editor.fields().get(*index) {
                    self.focused_control = ControlId::Field(field.id, FieldControl::Name);
                }
            }
            DraftError::MissingFieldType { index } => {
                if let Some(field) = self.editor.fields().get(*index) {
                    self.focused_control = ControlId::Field(field.id, FieldControl::Type);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ui_with_rows(names: &[&str]) -> SchemaDesignerUI {
        let mut ui = SchemaDesignerUI::new();
        for (i, name) in names.iter().enumerate() {
            ui.editor.insert_field(i).unwrap();
            let field = ui.editor.field_mut(i).unwrap();
            field.name = name.to_string();
            field.field_type = Some(FieldType::Text);
        }
        ui
    }

    #[test]
    fn add_at_end_focuses_new_row_name() {
        let mut ui = SchemaDesignerUI::new();
        ui.focused_control = ControlId::AddFieldEnd;
        ui.handle_control_key(KeyCode::Enter);

        assert_eq!(ui.editor.fields().len(), 1);
        let id = ui.editor.fields()[0].id;
        assert_eq!(ui.focused_control, ControlId::Field(id, FieldControl::Name));
    }

    #[test]
    fn insert_after_keeps_focus_identity_of_later_rows() {
        let mut ui = ui_with_rows(&["a", "b"]);
        let b = ui.editor.fields()[1].id;
        let a = ui.editor.fields()[0].id;

        // Insert between a and b via a's insert-after control.
        ui.focused_control = ControlId::Field(a, FieldControl::InsertAfter);
        ui.handle_control_key(KeyCode::Enter);

        assert_eq!(ui.editor.fields().len(), 3);
        // b kept its identity even though its index shifted.
        assert_eq!(ui.editor.field_index(b), Some(2));
    }

    #[test]
    fn remove_moves_focus_to_nearest_row() {
        let mut ui = ui_with_rows(&["a", "b", "c"]);
        let b = ui.editor.fields()[1].id;
        let c = ui.editor.fields()[2].id;

        ui.focused_control = ControlId::Field(b, FieldControl::Remove);
        ui.handle_control_key(KeyCode::Enter);

        assert_eq!(ui.editor.fields().len(), 2);
        assert_eq!(ui.focused_control, ControlId::Field(c, FieldControl::Remove));
    }

    #[test]
    fn remove_last_row_falls_back_to_add_control() {
        let mut ui = ui_with_rows(&["only"]);
        let id = ui.editor.fields()[0].id;

        ui.focused_control = ControlId::Field(id, FieldControl::Remove);
        ui.handle_control_key(KeyCode::Enter);

        assert!(ui.editor.fields().is_empty());
        assert_eq!(ui.focused_control, ControlId::AddFieldEnd);
    }

    #[test]
    fn typing_edits_the_focused_text_control() {
        let mut ui = SchemaDesignerUI::new();
        ui.focused_control = ControlId::TableName;
        for c in "users".chars() {
            ui.handle_control_key(KeyCode::Char(c));
        }
        ui.handle_control_key(KeyCode::Backspace);

        assert_eq!(ui.editor.draft().name, "user");
    }

    #[test]
    fn type_selector_cycles_and_never_unsets() {
        let mut ui = ui_with_rows(&["a"]);
        let id = ui.editor.fields()[0].id;
        ui.editor.field_mut(0).unwrap().field_type = None;

        ui.focused_control = ControlId::Field(id, FieldControl::Type);
        ui.handle_control_key(KeyCode::Right);
        assert_eq!(ui.editor.fields()[0].field_type, Some(FieldType::Text));

        ui.handle_control_key(KeyCode::Left);
        assert_eq!(
            ui.editor.fields()[0].field_type,
            Some(FieldType::Timestamptz)
        );
    }

    #[test]
    fn failed_submit_focuses_offending_control() {
        let mut ui = ui_with_rows(&["a"]);
        ui.editor.draft_mut().name = "users".to_string();
        ui.editor.field_mut(0).unwrap().field_type = None;
        let id = ui.editor.fields()[0].id;

        ui.focused_control = ControlId::CreateButton;
        ui.handle_control_key(KeyCode::Enter);

        assert_eq!(ui.focused_control, ControlId::Field(id, FieldControl::Type));
        assert!(matches!(ui.status_message, Some(StatusMessage::Error(_))));
    }

    #[test]
    fn successful_submit_leaves_draft_editable() {
        let mut ui = ui_with_rows(&["a"]);
        ui.editor.draft_mut().name = "users".to_string();

        ui.focused_control = ControlId::CreateButton;
        ui.handle_control_key(KeyCode::Enter);

        assert!(matches!(ui.status_message, Some(StatusMessage::Info(_))));
        ui.focused_control = ControlId::TableName;
        ui.handle_control_key(KeyCode::Char('2'));
        assert_eq!(ui.editor.draft().name, "users2");
    }
}
