use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, List, ListItem, Paragraph, Row, Table, Wrap};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use std::io;
use visorm_core::preview::PreviewColumn;

use super::{
    components::{ControlId, FieldControl, FocusedWidget, StatusMessage, NAV_ITEMS},
    SchemaDesignerUI, UIRenderer,
};

impl UIRenderer for SchemaDesignerUI {
    async fn render_designer_screen(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        terminal.draw(|f| {
            let chunks = split_shell(f.area());
            render_sidebar(self, f, chunks[0]);

            let main = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(3)].as_ref())
                .split(chunks[1]);

            let form_block = Block::default()
                .title("Create Table")
                .borders(Borders::ALL)
                .border_style(main_border_style(self));

            let form = Paragraph::new(designer_lines(self))
                .block(form_block)
                .wrap(Wrap { trim: false });
            f.render_widget(form, main[0]);

            let help = vec![
                key_span("↑/↓"),
                Span::raw(" move, "),
                key_span("←/→"),
                Span::raw(" choose type, "),
                key_span("Space"),
                Span::raw(" toggle, "),
                Span::styled(
                    "Enter",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" activate, "),
                Span::styled(
                    "Esc",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::raw(" sidebar"),
            ];
            render_status_bar(self, f, main[1], help);
        })?;

        Ok(())
    }

    async fn render_preview_screen(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        terminal.draw(|f| {
            let chunks = split_shell(f.area());
            render_sidebar(self, f, chunks[0]);

            let main = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(3)].as_ref())
                .split(chunks[1]);

            let header = Row::new(
                PreviewColumn::ALL
                    .iter()
                    .map(|column| Cell::from(column.title().to_string())),
            )
            .style(Style::default().add_modifier(Modifier::BOLD))
            .bottom_margin(1);

            let rows: Vec<Row> = self
                .preview_rows
                .iter()
                .enumerate()
                .map(|(i, preview_row)| {
                    let cells = PreviewColumn::ALL
                        .iter()
                        .map(|column| Cell::from(column.cell_text(preview_row)));
                    let row = Row::new(cells);
                    if i == self.selected_preview_row && self.current_focus == FocusedWidget::Main
                    {
                        row.style(
                            Style::default()
                                .bg(Color::Yellow)
                                .fg(Color::Black)
                                .add_modifier(Modifier::BOLD),
                        )
                    } else {
                        row.style(Style::default().fg(Color::White))
                    }
                })
                .collect();

            let widths = [
                Constraint::Length(6),
                Constraint::Percentage(18),
                Constraint::Percentage(12),
                Constraint::Percentage(14),
                Constraint::Length(6),
                Constraint::Length(6),
                Constraint::Percentage(25),
            ];

            let table = Table::new(rows, widths).header(header).block(
                Block::default()
                    .title("Schema Preview")
                    .borders(Borders::ALL)
                    .border_style(main_border_style(self)),
            );
            f.render_widget(table, main[0]);

            let help = vec![
                key_span("↑/↓"),
                Span::raw(" select row, "),
                Span::styled(
                    "Enter",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" log row, "),
                Span::styled(
                    "Esc",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::raw(" sidebar"),
            ];
            render_status_bar(self, f, main[1], help);
        })?;

        Ok(())
    }
}

fn split_shell(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(14), Constraint::Min(0)].as_ref())
        .split(area)
}

fn render_sidebar(ui: &SchemaDesignerUI, f: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)].as_ref())
        .split(area);

    let logo = Paragraph::new(vec![Line::from("VIS"), Line::from("ORM")])
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    f.render_widget(logo, chunks[0]);

    let nav_items: Vec<ListItem> = NAV_ITEMS
        .iter()
        .enumerate()
        .map(|(i, item)| {
            if i == ui.selected_nav {
                ListItem::new(*item).style(
                    Style::default()
                        .bg(Color::Yellow)
                        .fg(Color::Black)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ListItem::new(*item).style(Style::default().fg(Color::White))
            }
        })
        .collect();

    let border_style = if ui.current_focus == FocusedWidget::Sidebar {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::White)
    };

    let nav_widget = List::new(nav_items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    f.render_widget(nav_widget, chunks[1]);
}

fn main_border_style(ui: &SchemaDesignerUI) -> Style {
    if ui.current_focus == FocusedWidget::Main {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::White)
    }
}

fn render_status_bar(ui: &SchemaDesignerUI, f: &mut Frame, area: Rect, help: Vec<Span>) {
    let mut lines = vec![Line::from(help)];
    if let Some(message) = &ui.status_message {
        lines.push(match message {
            StatusMessage::Info(text) => Line::from(Span::styled(
                text.clone(),
                Style::default().fg(Color::Green),
            )),
            StatusMessage::Error(text) => {
                Line::from(Span::styled(text.clone(), Style::default().fg(Color::Red)))
            }
        });
    }

    let status = Paragraph::new(lines)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(status, area);
}

fn designer_lines(ui: &SchemaDesignerUI) -> Vec<Line<'static>> {
    let draft = ui.editor.draft();
    let focused = |control: ControlId| {
        ui.current_focus == FocusedWidget::Main && ui.focused_control == control
    };

    let mut lines = vec![
        Line::from(vec![
            label_span("Table Name "),
            input_span(&draft.name, "name", focused(ControlId::TableName)),
            Span::raw("  "),
            button_span("[ Create ]", focused(ControlId::CreateButton)),
        ]),
        Line::from(""),
        Line::from(vec![
            label_span("Primary Key "),
            input_span(
                &draft.primary_key.name,
                "id",
                focused(ControlId::PrimaryKeyName),
            ),
            Span::raw("  "),
            selector_span(
                draft.primary_key.key_type.as_str(),
                focused(ControlId::PrimaryKeyType),
            ),
        ]),
        Line::from(""),
        Line::from(vec![button_span(
            "[ + Add field ]",
            focused(ControlId::AddFieldEnd),
        )]),
        Line::from(""),
    ];

    for field in &draft.fields {
        let id = field.id;
        let type_text = field
            .field_type
            .map(|t| t.label().to_string())
            .unwrap_or_else(|| "[Choose One]".to_string());

        lines.push(Line::from(vec![
            label_span("  Name "),
            input_span(&field.name, "name", focused(ControlId::Field(id, FieldControl::Name))),
            label_span("  Type "),
            selector_span(&type_text, focused(ControlId::Field(id, FieldControl::Type))),
            label_span("  Default "),
            input_span(
                &field.default,
                "default",
                focused(ControlId::Field(id, FieldControl::Default)),
            ),
            Span::raw("  "),
            checkbox_span(
                "Null",
                field.nullable,
                focused(ControlId::Field(id, FieldControl::Nullable)),
            ),
            Span::raw("  "),
            checkbox_span(
                "Unique",
                field.unique,
                focused(ControlId::Field(id, FieldControl::Unique)),
            ),
            Span::raw("  "),
            button_span("[ - ]", focused(ControlId::Field(id, FieldControl::Remove))),
            Span::raw(" "),
            button_span(
                "[ + ]",
                focused(ControlId::Field(id, FieldControl::InsertAfter)),
            ),
        ]));
        lines.push(Line::from(""));
    }

    lines
}

fn focus_style() -> Style {
    Style::default()
        .bg(Color::Yellow)
        .fg(Color::Black)
        .add_modifier(Modifier::BOLD)
}

fn label_span(text: &str) -> Span<'static> {
    Span::styled(text.to_string(), Style::default().fg(Color::DarkGray))
}

fn input_span(value: &str, placeholder: &str, focused: bool) -> Span<'static> {
    let empty = value.is_empty();
    let text = if empty {
        format!(" {} ", placeholder)
    } else {
        format!(" {} ", value)
    };
    let style = if focused {
        focus_style()
    } else if empty {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::White)
    };
    Span::styled(text, style)
}

fn selector_span(text: &str, focused: bool) -> Span<'static> {
    let style = if focused {
        focus_style()
    } else {
        Style::default().fg(Color::White)
    };
    Span::styled(format!("< {} >", text), style)
}

fn button_span(label: &str, focused: bool) -> Span<'static> {
    let style = if focused {
        focus_style()
    } else {
        Style::default().fg(Color::White)
    };
    Span::styled(label.to_string(), style)
}

fn checkbox_span(label: &str, checked: bool, focused: bool) -> Span<'static> {
    let mark = if checked { "[x]" } else { "[ ]" };
    let style = if focused {
        focus_style()
    } else {
        Style::default().fg(Color::White)
    };
    Span::styled(format!("{} {}", mark, label), style)
}

fn key_span(text: &str) -> Span<'static> {
    Span::styled(
        text.to_string(),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )
}
