use crate::errors::DraftError;
use crate::models::draft::{FieldDraft, FieldId, TableDraft};

/// Owns exactly one [`TableDraft`] for its lifetime and applies the two
/// positional field-list mutations consumed by the rendering layer.
///
/// Mutations are synchronous and single-threaded: each one completes
/// before the next user event is processed. Out-of-range indices are
/// rejected with [`DraftError::IndexOutOfBounds`] and leave the sequence
/// untouched.
#[derive(Debug, Default)]
pub struct DraftEditor {
    draft: TableDraft,
}

impl DraftEditor {
    pub fn new() -> Self {
        DraftEditor {
            draft: TableDraft::new(),
        }
    }

    pub fn with_draft(draft: TableDraft) -> Self {
        DraftEditor { draft }
    }

    pub fn draft(&self) -> &TableDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut TableDraft {
        &mut self.draft
    }

    pub fn fields(&self) -> &[FieldDraft] {
        &self.draft.fields
    }

    pub fn field_mut(&mut self, at: usize) -> Option<&mut FieldDraft> {
        self.draft.fields.get_mut(at)
    }

    /// Position of the row carrying `id`, if it is still present.
    pub fn field_index(&self, id: FieldId) -> Option<usize> {
        self.draft.fields.iter().position(|field| field.id == id)
    }

    /// Inserts a blank [`FieldDraft`] at `at`, shifting rows at `at` and
    /// beyond one position later. `at == len` appends. Returns the new
    /// row's stable id.
    pub fn insert_field(&mut self, at: usize) -> Result<FieldId, DraftError> {
        let len = self.draft.fields.len();
        if at > len {
            return Err(DraftError::IndexOutOfBounds { index: at, len });
        }
        let field = FieldDraft::new();
        let id = field.id;
        self.draft.fields.insert(at, field);
        Ok(id)
    }

    /// Removes and returns the row at `at`, shifting subsequent rows one
    /// position earlier.
    pub fn remove_field(&mut self, at: usize) -> Result<FieldDraft, DraftError> {
        let len = self.draft.fields.len();
        if at >= len {
            return Err(DraftError::IndexOutOfBounds { index: at, len });
        }
        Ok(self.draft.fields.remove(at))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(editor: &mut DraftEditor, at: usize, name: &str) {
        editor.insert_field(at).unwrap();
        editor.field_mut(at).unwrap().name = name.to_string();
    }

    fn names(editor: &DraftEditor) -> Vec<String> {
        editor.fields().iter().map(|f| f.name.clone()).collect()
    }

    #[test]
    fn appending_preserves_order() {
        let mut editor = DraftEditor::new();
        for i in 0..5 {
            let len = editor.fields().len();
            named(&mut editor, len, &format!("f{}", i));
        }
        assert_eq!(editor.fields().len(), 5);
        assert_eq!(names(&editor), vec!["f0", "f1", "f2", "f3", "f4"]);
    }

    #[test]
    fn insert_then_remove_round_trips() {
        let mut editor = DraftEditor::new();
        named(&mut editor, 0, "a");
        named(&mut editor, 1, "b");
        let before = editor.draft().clone();

        editor.insert_field(1).unwrap();
        editor.remove_field(1).unwrap();

        assert_eq!(*editor.draft(), before);
    }

    #[test]
    fn remove_middle_shifts_later_rows() {
        let mut editor = DraftEditor::new();
        named(&mut editor, 0, "a");
        named(&mut editor, 1, "b");
        named(&mut editor, 2, "c");

        let removed = editor.remove_field(1).unwrap();
        assert_eq!(removed.name, "b");
        assert_eq!(names(&editor), vec!["a", "c"]);

        named(&mut editor, 1, "d");
        assert_eq!(names(&editor), vec!["a", "d", "c"]);
    }

    #[test]
    fn insert_into_empty_list_yields_blank_row() {
        let mut editor = DraftEditor::new();
        editor.insert_field(0).unwrap();

        let fields = editor.fields();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].name, "");
        assert_eq!(fields[0].field_type, None);
        assert_eq!(fields[0].default, "");
        assert!(!fields[0].nullable);
        assert!(!fields[0].unique);
    }

    #[test]
    fn out_of_range_indices_leave_fields_unchanged() {
        let mut editor = DraftEditor::new();
        named(&mut editor, 0, "a");
        let before = editor.draft().clone();

        assert!(matches!(
            editor.remove_field(1),
            Err(DraftError::IndexOutOfBounds { index: 1, len: 1 })
        ));
        assert!(matches!(
            editor.insert_field(2),
            Err(DraftError::IndexOutOfBounds { index: 2, len: 1 })
        ));
        assert_eq!(*editor.draft(), before);
    }

    #[test]
    fn row_identity_survives_insertion_before_it() {
        let mut editor = DraftEditor::new();
        named(&mut editor, 0, "a");
        let id = editor.fields()[0].id;

        editor.insert_field(0).unwrap();
        assert_eq!(editor.field_index(id), Some(1));

        editor.remove_field(0).unwrap();
        assert_eq!(editor.field_index(id), Some(0));
    }
}
