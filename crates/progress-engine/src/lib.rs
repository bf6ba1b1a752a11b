pub mod aggregate;
pub mod deadline;
pub mod progress;
pub mod registry;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared_types::{DocumentCategory, Project, StoredStatus, SuggestedStatus};

pub use aggregate::{can_submit, overall_progress, reconcile, suggest_project_status};
pub use deadline::{evaluate_deadline, DeadlineEvaluation, UrgencyTier};
pub use progress::{compute_category_progress, CategoryProgress, ProgressMap};
pub use registry::get_checklist;

/// Everything the dashboard shows about a project's readiness
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectReport {
    pub project_id: String,
    pub categories: ProgressMap,
    pub overall_progress: u8,
    pub suggested_status: SuggestedStatus,
    /// Set when the stored status differs from the suggestion and may
    /// still be updated by derivation
    pub status_change: Option<StoredStatus>,
    pub can_submit: bool,
    pub deadline: DeadlineEvaluation,
    pub urgency: UrgencyTier,
}

/// ProgressEngine entry point
pub struct ProgressEngine {
    categories: Vec<DocumentCategory>,
}

impl ProgressEngine {
    /// Engine tracking the full fixed category set
    pub fn new() -> Self {
        Self::with_categories(DocumentCategory::ALL.to_vec())
    }

    pub fn with_categories(mut categories: Vec<DocumentCategory>) -> Self {
        categories.sort();
        categories.dedup();
        Self { categories }
    }

    pub fn categories(&self) -> &[DocumentCategory] {
        &self.categories
    }

    pub fn report(&self, project: &Project, now: DateTime<Utc>) -> ProjectReport {
        let categories = compute_category_progress(&project.documents, &self.categories);
        let overall = aggregate::mean_progress(&categories);
        let suggested = suggest_project_status(overall);
        let deadline = evaluate_deadline(project.deadline, now);

        ProjectReport {
            project_id: project.id.clone(),
            categories,
            overall_progress: overall,
            suggested_status: suggested,
            status_change: reconcile(project.status, suggested),
            can_submit: can_submit(overall),
            urgency: deadline.urgency(),
            deadline,
        }
    }
}

impl Default for ProgressEngine {
    fn default() -> Self {
        Self::new()
    }
}
