//! Overall project progress and the status it suggests.

use shared_types::{Document, DocumentCategory, StoredStatus, SuggestedStatus};

use crate::progress::{compute_category_progress, ProgressMap};

/// Mean of per-category progress over the whole tracked set, rounded to the
/// nearest integer with halves rounding up. An empty category set yields 0.
pub fn overall_progress(documents: &[Document], categories: &[DocumentCategory]) -> u8 {
    mean_progress(&compute_category_progress(documents, categories))
}

pub fn mean_progress(progress: &ProgressMap) -> u8 {
    let count = progress.len() as u32;
    if count == 0 {
        return 0;
    }
    let sum: u32 = progress.values().map(|p| u32::from(p.progress)).sum();
    // round(sum / count) without floats
    ((2 * sum + count) / (2 * count)) as u8
}

/// Advisory status for a project that has not been submitted yet.
///
/// Never yields `under_review`, `approved` or `rejected`: those are reached
/// only through submission and the authority's decision.
pub fn suggest_project_status(overall: u8) -> SuggestedStatus {
    match overall {
        0 => SuggestedStatus::NotStarted,
        100..=u8::MAX => SuggestedStatus::ReadyForSubmission,
        _ => SuggestedStatus::InProgress,
    }
}

/// Submission to the authority is only offered at 100%
pub fn can_submit(overall: u8) -> bool {
    overall >= 100
}

/// The stored status a caller may apply after deriving a suggestion.
///
/// Returns `None` when nothing should change: either the suggestion already
/// matches, or the project is past submission and derivation no longer
/// applies to it.
pub fn reconcile(stored: StoredStatus, suggested: SuggestedStatus) -> Option<StoredStatus> {
    if !stored.is_pre_submission() {
        return None;
    }
    let target = suggested.as_stored();
    (target != stored).then_some(target)
}
