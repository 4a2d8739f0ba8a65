use log::info;

use crate::errors::DraftError;
use crate::models::draft::TableDraft;

/// Required-field contract: the table name and every field's name and
/// type must be filled in before submission succeeds. The first
/// violation is reported.
pub fn validate(draft: &TableDraft) -> Result<(), DraftError> {
    if draft.name.trim().is_empty() {
        return Err(DraftError::MissingTableName);
    }
    for (index, field) in draft.fields.iter().enumerate() {
        if field.name.trim().is_empty() {
            return Err(DraftError::MissingFieldName { index });
        }
        if field.field_type.is_none() {
            return Err(DraftError::MissingFieldType { index });
        }
    }
    Ok(())
}

/// External consumer of a submitted draft. This is the seam where a real
/// backend integration would attach.
#[cfg_attr(test, mockall::automock)]
pub trait SubmitHandler {
    fn handle(&mut self, draft: &TableDraft) -> Result<(), DraftError>;
}

/// Validates the current draft and, if it passes, hands a snapshot to
/// `handler` exactly once. The draft is only read and stays editable
/// afterwards.
pub fn submit<H: SubmitHandler>(draft: &TableDraft, handler: &mut H) -> Result<(), DraftError> {
    validate(draft)?;
    handler.handle(draft)
}

/// Default diagnostic sink: logs the submitted draft as JSON.
pub struct LogSubmitHandler;

impl SubmitHandler for LogSubmitHandler {
    fn handle(&mut self, draft: &TableDraft) -> Result<(), DraftError> {
        let payload = serde_json::to_string_pretty(draft)?;
        info!("table draft submitted:\n{}", payload);
        Ok(())
    }
}
