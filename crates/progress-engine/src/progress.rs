//! Per-category completion state derived from uploaded documents.
//!
//! When several documents share a category, the category keeps the best
//! status seen among them (`approved` > `pending_review` > `not_submitted`).
//! The reduction is a maximum, so input order never changes the result and
//! an approved category cannot be downgraded by another document.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use shared_types::{Document, DocumentCategory, DocumentStatus, RawDocument, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CategoryProgress {
    pub complete: bool,
    /// 0, 50 or 100
    pub progress: u8,
}

impl From<DocumentStatus> for CategoryProgress {
    fn from(status: DocumentStatus) -> Self {
        match status {
            DocumentStatus::Approved => CategoryProgress {
                complete: true,
                progress: 100,
            },
            DocumentStatus::PendingReview => CategoryProgress {
                complete: false,
                progress: 50,
            },
            DocumentStatus::NotSubmitted => CategoryProgress {
                complete: false,
                progress: 0,
            },
        }
    }
}

pub type ProgressMap = BTreeMap<DocumentCategory, CategoryProgress>;

/// Compute completion state for every tracked category.
///
/// Untracked categories in `documents` are ignored; tracked categories with
/// no document stay at `{ complete: false, progress: 0 }`.
pub fn compute_category_progress(
    documents: &[Document],
    categories: &[DocumentCategory],
) -> ProgressMap {
    let mut best: BTreeMap<DocumentCategory, Option<DocumentStatus>> =
        categories.iter().map(|c| (*c, None)).collect();

    for doc in documents {
        if let Some(slot) = best.get_mut(&doc.category) {
            *slot = (*slot).max(Some(doc.status));
        }
    }

    best.into_iter()
        .map(|(category, status)| {
            let progress = status.map(CategoryProgress::from).unwrap_or_default();
            (category, progress)
        })
        .collect()
}

/// Same as [`compute_category_progress`] for documents that have not been
/// validated yet. The first malformed document aborts the computation.
pub fn compute_category_progress_raw(
    documents: &[RawDocument],
    categories: &[DocumentCategory],
) -> Result<ProgressMap, ValidationError> {
    let documents = documents
        .iter()
        .map(Document::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(compute_category_progress(&documents, categories))
}
