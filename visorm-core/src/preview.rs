//! Read-only schema preview grid.
//!
//! This is an independent display component driven by a fixed sample
//! dataset. It is not wired to the live [`TableDraft`] and uses its own,
//! looser field shape and type list.
//!
//! [`TableDraft`]: crate::models::draft::TableDraft

use log::info;
use serde::Serialize;

use crate::errors::DraftError;

/// Display-only type set of the preview grid. Deliberately separate from
/// [`FieldType`](crate::models::draft::FieldType).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PreviewType {
    Int,
    Serial,
    Text,
    Varchar,
}

impl PreviewType {
    pub const ALL: [PreviewType; 4] = [
        PreviewType::Int,
        PreviewType::Serial,
        PreviewType::Text,
        PreviewType::Varchar,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            PreviewType::Int => "INT",
            PreviewType::Serial => "SERIAL",
            PreviewType::Text => "TEXT",
            PreviewType::Varchar => "VARCHAR",
        }
    }
}

/// One row of the preview grid. An empty string in `references` means
/// "no reference".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreviewRow {
    pub name: String,
    #[serde(rename = "type")]
    pub row_type: PreviewType,
    pub default: String,
    pub nullable: bool,
    pub unique: bool,
    pub references: Vec<String>,
}

/// Closed set of grid columns. Each variant carries exactly one
/// rendering strategy in [`PreviewColumn::cell_text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewColumn {
    Action,
    Name,
    Type,
    Default,
    Nullable,
    Unique,
    References,
}

impl PreviewColumn {
    pub const ALL: [PreviewColumn; 7] = [
        PreviewColumn::Action,
        PreviewColumn::Name,
        PreviewColumn::Type,
        PreviewColumn::Default,
        PreviewColumn::Nullable,
        PreviewColumn::Unique,
        PreviewColumn::References,
    ];

    pub fn title(&self) -> &str {
        match self {
            PreviewColumn::Action => "",
            PreviewColumn::Name => "Name",
            PreviewColumn::Type => "Type",
            PreviewColumn::Default => "Default",
            PreviewColumn::Nullable => "Null",
            PreviewColumn::Unique => "Unique",
            PreviewColumn::References => "References",
        }
    }

    pub fn cell_text(&self, row: &PreviewRow) -> String {
        match self {
            PreviewColumn::Action => "[log]".to_string(),
            PreviewColumn::Name => row.name.clone(),
            PreviewColumn::Type => row.row_type.as_str().to_string(),
            PreviewColumn::Default => {
                if row.default.is_empty() {
                    "-".to_string()
                } else {
                    row.default.clone()
                }
            }
            PreviewColumn::Nullable => checkbox(row.nullable),
            PreviewColumn::Unique => checkbox(row.unique),
            PreviewColumn::References => {
                let targets: Vec<&str> = row
                    .references
                    .iter()
                    .filter(|target| !target.is_empty())
                    .map(String::as_str)
                    .collect();
                if targets.is_empty() {
                    "-".to_string()
                } else {
                    targets.join(", ")
                }
            }
        }
    }
}

fn checkbox(checked: bool) -> String {
    if checked { "[x]" } else { "[ ]" }.to_string()
}

/// The row "action": emits a diagnostic log of the row and nothing else.
pub fn log_row(row: &PreviewRow) -> Result<(), DraftError> {
    let payload = serde_json::to_string(row)?;
    info!("preview row: {}", payload);
    Ok(())
}

/// Hard-coded dataset driving the preview grid.
pub fn sample_rows() -> Vec<PreviewRow> {
    vec![
        PreviewRow {
            name: "id".to_string(),
            row_type: PreviewType::Serial,
            default: String::new(),
            nullable: false,
            unique: true,
            references: vec![String::new()],
        },
        PreviewRow {
            name: "title".to_string(),
            row_type: PreviewType::Text,
            default: "untitled".to_string(),
            nullable: false,
            unique: false,
            references: vec![String::new()],
        },
        PreviewRow {
            name: "owner_id".to_string(),
            row_type: PreviewType::Int,
            default: String::new(),
            nullable: true,
            unique: false,
            references: vec![String::new(), "users".to_string(), "accounts".to_string()],
        },
        PreviewRow {
            name: "slug".to_string(),
            row_type: PreviewType::Varchar,
            default: String::new(),
            nullable: false,
            unique: true,
            references: vec![String::new()],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_column_renders_for_every_sample_row() {
        for row in sample_rows() {
            for column in PreviewColumn::ALL {
                // Rendering must not panic for any column/row pairing.
                let _ = column.cell_text(&row);
            }
        }
    }

    #[test]
    fn empty_reference_entries_mean_no_reference() {
        let rows = sample_rows();
        assert_eq!(PreviewColumn::References.cell_text(&rows[0]), "-");
        assert_eq!(
            PreviewColumn::References.cell_text(&rows[2]),
            "users, accounts"
        );
    }

    #[test]
    fn checkbox_cells_show_state() {
        let rows = sample_rows();
        assert_eq!(PreviewColumn::Unique.cell_text(&rows[0]), "[x]");
        assert_eq!(PreviewColumn::Nullable.cell_text(&rows[0]), "[ ]");
    }
}
