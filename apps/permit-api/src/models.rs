//! Request and response bodies for the permit API

use chrono::{DateTime, Utc};
use progress_engine::deadline::parse_deadline;
use progress_engine::{DeadlineEvaluation, ProgressMap, UrgencyTier};
use serde::{Deserialize, Serialize};
use shared_types::{
    Document, DocumentCategory, Project, RawDocument, SuggestedStatus, ValidationError,
};

/// Category entry for the category listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryInfo {
    pub key: String,
    pub label: String,
}

impl From<DocumentCategory> for CategoryInfo {
    fn from(category: DocumentCategory) -> Self {
        Self {
            key: category.key().to_string(),
            label: category.label().to_string(),
        }
    }
}

/// Request to compute category progress for a document set
#[derive(Debug, Clone, Deserialize)]
pub struct ProgressRequest {
    pub documents: Vec<RawDocument>,
    /// Tracked categories; the configured set when absent
    #[serde(default)]
    pub categories: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressResponse {
    pub categories: ProgressMap,
    pub overall_progress: u8,
    pub suggested_status: SuggestedStatus,
    pub can_submit: bool,
}

/// Request to evaluate a single deadline
#[derive(Debug, Clone, Deserialize)]
pub struct DeadlineRequest {
    #[serde(default)]
    pub deadline: Option<String>,
    /// Evaluation time; server clock when absent
    #[serde(default)]
    pub now: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeadlineResponse {
    #[serde(flatten)]
    pub evaluation: DeadlineEvaluation,
    pub urgency: UrgencyTier,
}

/// Project as supplied by the storage service, before validation
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectSnapshot {
    pub id: String,
    pub name: String,
    pub status: String,
    #[serde(default)]
    pub deadline: Option<String>,
    #[serde(default)]
    pub documents: Vec<RawDocument>,
    #[serde(default)]
    pub now: Option<String>,
}

impl ProjectSnapshot {
    pub fn into_project(self) -> Result<Project, ValidationError> {
        let documents = self
            .documents
            .iter()
            .map(Document::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Project {
            id: self.id,
            name: self.name,
            status: self.status.parse()?,
            deadline: parse_optional_timestamp(self.deadline.as_deref())?,
            documents,
        })
    }
}

pub fn parse_optional_timestamp(
    value: Option<&str>,
) -> Result<Option<DateTime<Utc>>, ValidationError> {
    value.map(parse_deadline).transpose()
}

pub fn parse_categories(keys: &[String]) -> Result<Vec<DocumentCategory>, ValidationError> {
    keys.iter().map(|k| k.parse()).collect()
}
