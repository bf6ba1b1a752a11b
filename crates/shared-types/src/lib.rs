pub mod error;
pub mod types;

pub use error::ValidationError;
pub use types::{
    CategoryChecklist, ChecklistItem, Document, DocumentCategory, DocumentStatus, Project,
    RawDocument, StoredStatus, SuggestedStatus,
};
