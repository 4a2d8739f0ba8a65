pub mod editor;
pub mod errors;
pub mod models;
pub mod preview;
pub mod submit;

pub use editor::DraftEditor;
pub use errors::DraftError;
