use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identity of one field row, assigned at creation and independent
/// of position. Rendering layers key rows by this rather than by index,
/// so local UI state (focus, pending edits) stays with its row when rows
/// before it are inserted or removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldId(Uuid);

impl FieldId {
    fn new() -> Self {
        FieldId(Uuid::new_v4())
    }
}

impl Default for FieldId {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimaryKeyType {
    Uuid,
    Bigserial,
    Serial,
    Smallserial,
    Integer,
    Bigint,
    Smallint,
}

impl PrimaryKeyType {
    pub const ALL: [PrimaryKeyType; 7] = [
        PrimaryKeyType::Uuid,
        PrimaryKeyType::Bigserial,
        PrimaryKeyType::Serial,
        PrimaryKeyType::Smallserial,
        PrimaryKeyType::Integer,
        PrimaryKeyType::Bigint,
        PrimaryKeyType::Smallint,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            PrimaryKeyType::Uuid => "uuid",
            PrimaryKeyType::Bigserial => "bigserial",
            PrimaryKeyType::Serial => "serial",
            PrimaryKeyType::Smallserial => "smallserial",
            PrimaryKeyType::Integer => "integer",
            PrimaryKeyType::Bigint => "bigint",
            PrimaryKeyType::Smallint => "smallint",
        }
    }
}

impl Default for PrimaryKeyType {
    fn default() -> Self {
        PrimaryKeyType::Uuid
    }
}

/// Column types offered by the field editor. There is no default
/// variant: a field starts with no type and one must be chosen
/// explicitly before submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Int,
    Bool,
    Timestamp,
    Timestamptz,
}

impl FieldType {
    pub const ALL: [FieldType; 5] = [
        FieldType::Text,
        FieldType::Int,
        FieldType::Bool,
        FieldType::Timestamp,
        FieldType::Timestamptz,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            FieldType::Text => "text",
            FieldType::Int => "int",
            FieldType::Bool => "bool",
            FieldType::Timestamp => "timestamp",
            FieldType::Timestamptz => "timestamptz",
        }
    }

    /// Human-readable label shown in the type selector.
    pub fn label(&self) -> &str {
        match self {
            FieldType::Text => "Text",
            FieldType::Int => "Int",
            FieldType::Bool => "Bool",
            FieldType::Timestamp => "Timestamp",
            FieldType::Timestamptz => "Timestamp with timezone",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimaryKey {
    pub name: String,
    #[serde(rename = "type")]
    pub key_type: PrimaryKeyType,
}

impl Default for PrimaryKey {
    fn default() -> Self {
        PrimaryKey {
            name: "id".to_string(),
            key_type: PrimaryKeyType::default(),
        }
    }
}

/// One column specification being authored. `field_type` is `None` until
/// the user picks a type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDraft {
    #[serde(skip)]
    pub id: FieldId,
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: Option<FieldType>,
    pub default: String,
    pub nullable: bool,
    pub unique: bool,
}

impl FieldDraft {
    /// A blank row: empty name, no type chosen, empty default, not
    /// nullable, not unique.
    pub fn new() -> Self {
        FieldDraft {
            id: FieldId::default(),
            name: String::new(),
            field_type: None,
            default: String::new(),
            nullable: false,
            unique: false,
        }
    }
}

impl Default for FieldDraft {
    fn default() -> Self {
        Self::new()
    }
}

/// In-memory, unsaved representation of a table schema being authored.
/// Field order is significant and defines column order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableDraft {
    pub name: String,
    pub primary_key: PrimaryKey,
    pub fields: Vec<FieldDraft>,
}

impl TableDraft {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_key_defaults_to_id_uuid() {
        let pk = PrimaryKey::default();
        assert_eq!(pk.name, "id");
        assert_eq!(pk.key_type, PrimaryKeyType::Uuid);
    }

    #[test]
    fn field_ids_are_unique_per_creation() {
        let a = FieldDraft::new();
        let b = FieldDraft::new();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn draft_serializes_with_original_key_names() {
        let mut draft = TableDraft::new();
        draft.name = "users".to_string();
        let mut field = FieldDraft::new();
        field.name = "email".to_string();
        field.field_type = Some(FieldType::Text);
        draft.fields.push(field);

        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["primary_key"]["type"], "uuid");
        assert_eq!(json["fields"][0]["type"], "text");
        assert_eq!(json["fields"][0]["nullable"], false);
        assert!(json["fields"][0].get("id").is_none());
    }
}
