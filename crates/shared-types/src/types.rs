use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Required document types within a permit submission package
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentCategory {
    SitePlan,
    FacilityPlan,
    EgressPlan,
    StructuralPlans,
    Commodities,
    FireProtection,
    SpecialInspection,
    CoverLetter,
}

impl DocumentCategory {
    /// The full fixed category set, in display order
    pub const ALL: [DocumentCategory; 8] = [
        DocumentCategory::SitePlan,
        DocumentCategory::FacilityPlan,
        DocumentCategory::EgressPlan,
        DocumentCategory::StructuralPlans,
        DocumentCategory::Commodities,
        DocumentCategory::FireProtection,
        DocumentCategory::SpecialInspection,
        DocumentCategory::CoverLetter,
    ];

    /// Wire key, e.g. `SITE_PLAN`
    pub fn key(&self) -> &'static str {
        match self {
            DocumentCategory::SitePlan => "SITE_PLAN",
            DocumentCategory::FacilityPlan => "FACILITY_PLAN",
            DocumentCategory::EgressPlan => "EGRESS_PLAN",
            DocumentCategory::StructuralPlans => "STRUCTURAL_PLANS",
            DocumentCategory::Commodities => "COMMODITIES",
            DocumentCategory::FireProtection => "FIRE_PROTECTION",
            DocumentCategory::SpecialInspection => "SPECIAL_INSPECTION",
            DocumentCategory::CoverLetter => "COVER_LETTER",
        }
    }

    /// Display name, e.g. `Site Plan`
    pub fn label(&self) -> &'static str {
        match self {
            DocumentCategory::SitePlan => "Site Plan",
            DocumentCategory::FacilityPlan => "Facility Plan",
            DocumentCategory::EgressPlan => "Egress Plan",
            DocumentCategory::StructuralPlans => "Structural Plans",
            DocumentCategory::Commodities => "Commodities",
            DocumentCategory::FireProtection => "Fire Protection",
            DocumentCategory::SpecialInspection => "Special Inspection",
            DocumentCategory::CoverLetter => "Cover Letter",
        }
    }
}

impl fmt::Display for DocumentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for DocumentCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DocumentCategory::ALL
            .into_iter()
            .find(|c| c.key() == s)
            .ok_or_else(|| ValidationError::UnknownCategory(s.to_string()))
    }
}

/// Review state of a single uploaded document.
///
/// Variants are ordered by review progress so the best status for a
/// category is simply the maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    NotSubmitted,
    PendingReview,
    Approved,
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentStatus::NotSubmitted => write!(f, "not_submitted"),
            DocumentStatus::PendingReview => write!(f, "pending_review"),
            DocumentStatus::Approved => write!(f, "approved"),
        }
    }
}

impl FromStr for DocumentStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "not_submitted" => Ok(DocumentStatus::NotSubmitted),
            "pending_review" => Ok(DocumentStatus::PendingReview),
            "approved" => Ok(DocumentStatus::Approved),
            other => Err(ValidationError::UnknownDocumentStatus(other.to_string())),
        }
    }
}

/// Authoritative project status, set by submission and review actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoredStatus {
    NotStarted,
    InProgress,
    ReadyForSubmission,
    UnderReview,
    Approved,
    Rejected,
}

impl StoredStatus {
    pub fn label(&self) -> &'static str {
        match self {
            StoredStatus::NotStarted => "Not Started",
            StoredStatus::InProgress => "In Progress",
            StoredStatus::ReadyForSubmission => "Ready for Submission",
            StoredStatus::UnderReview => "Under Review",
            StoredStatus::Approved => "Approved",
            StoredStatus::Rejected => "Rejected",
        }
    }

    /// True while the project has not yet been handed to the authority
    pub fn is_pre_submission(&self) -> bool {
        matches!(
            self,
            StoredStatus::NotStarted | StoredStatus::InProgress | StoredStatus::ReadyForSubmission
        )
    }
}

impl fmt::Display for StoredStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoredStatus::NotStarted => write!(f, "not_started"),
            StoredStatus::InProgress => write!(f, "in_progress"),
            StoredStatus::ReadyForSubmission => write!(f, "ready_for_submission"),
            StoredStatus::UnderReview => write!(f, "under_review"),
            StoredStatus::Approved => write!(f, "approved"),
            StoredStatus::Rejected => write!(f, "rejected"),
        }
    }
}

impl FromStr for StoredStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "not_started" => Ok(StoredStatus::NotStarted),
            "in_progress" => Ok(StoredStatus::InProgress),
            "ready_for_submission" => Ok(StoredStatus::ReadyForSubmission),
            "under_review" => Ok(StoredStatus::UnderReview),
            "approved" => Ok(StoredStatus::Approved),
            "rejected" => Ok(StoredStatus::Rejected),
            other => Err(ValidationError::UnknownProjectStatus(other.to_string())),
        }
    }
}

/// Status derived from document progress. Advisory only: it never covers
/// the post-submission states, which only external actions can reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestedStatus {
    NotStarted,
    InProgress,
    ReadyForSubmission,
}

impl SuggestedStatus {
    /// Explicit conversion for callers that decide to apply the suggestion
    pub fn as_stored(self) -> StoredStatus {
        match self {
            SuggestedStatus::NotStarted => StoredStatus::NotStarted,
            SuggestedStatus::InProgress => StoredStatus::InProgress,
            SuggestedStatus::ReadyForSubmission => StoredStatus::ReadyForSubmission,
        }
    }
}

impl fmt::Display for SuggestedStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_stored().fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: String,
    pub label: String,
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryChecklist {
    pub title: String,
    pub items: Vec<ChecklistItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub category: DocumentCategory,
    pub status: DocumentStatus,
}

/// Document as received from the storage service, before validation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawDocument {
    pub id: String,
    pub category: String,
    pub status: String,
}

impl TryFrom<&RawDocument> for Document {
    type Error = ValidationError;

    fn try_from(raw: &RawDocument) -> Result<Self, Self::Error> {
        Ok(Document {
            id: raw.id.clone(),
            category: raw.category.parse()?,
            status: raw.status.parse()?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub status: StoredStatus,
    pub deadline: Option<DateTime<Utc>>,
    pub documents: Vec<Document>,
}
