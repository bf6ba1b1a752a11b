//! HTTP handlers for the permit API

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use chrono::Utc;
use progress_engine::{
    aggregate, progress::compute_category_progress_raw, registry, ProjectReport,
};
use shared_types::CategoryChecklist;

use crate::error::ApiError;
use crate::models::*;
use crate::state::AppState;

/// Health check endpoint
pub async fn health() -> &'static str {
    "OK"
}

/// Categories the service tracks, in display order
pub async fn list_categories(State(state): State<Arc<AppState>>) -> Json<Vec<CategoryInfo>> {
    Json(
        state
            .engine
            .categories()
            .iter()
            .copied()
            .map(CategoryInfo::from)
            .collect(),
    )
}

/// Checklist for any category key; unknown keys get the generic checklist
pub async fn get_checklist(Path(category): Path<String>) -> Json<CategoryChecklist> {
    Json(registry::get_checklist(&category))
}

/// Per-category progress and overall completion for a document set
pub async fn compute_progress(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ProgressRequest>, JsonRejection>,
) -> Result<Json<ProgressResponse>, ApiError> {
    let Json(req) = payload?;

    let categories = match &req.categories {
        Some(keys) => parse_categories(keys)?,
        None => state.engine.categories().to_vec(),
    };
    let progress = compute_category_progress_raw(&req.documents, &categories)?;
    let overall = aggregate::mean_progress(&progress);

    tracing::debug!(
        "Computed progress for {} documents over {} categories: {}%",
        req.documents.len(),
        categories.len(),
        overall
    );

    Ok(Json(ProgressResponse {
        categories: progress,
        overall_progress: overall,
        suggested_status: aggregate::suggest_project_status(overall),
        can_submit: aggregate::can_submit(overall),
    }))
}

/// Urgency of a single deadline
pub async fn evaluate_deadline(
    payload: Result<Json<DeadlineRequest>, JsonRejection>,
) -> Result<Json<DeadlineResponse>, ApiError> {
    let Json(req) = payload?;

    let deadline = parse_optional_timestamp(req.deadline.as_deref())?;
    let now = parse_optional_timestamp(req.now.as_deref())?.unwrap_or_else(Utc::now);
    let evaluation = progress_engine::evaluate_deadline(deadline, now);

    Ok(Json(DeadlineResponse {
        urgency: evaluation.urgency(),
        evaluation,
    }))
}

/// Full readiness report for a project snapshot
pub async fn project_report(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ProjectSnapshot>, JsonRejection>,
) -> Result<Json<ProjectReport>, ApiError> {
    let Json(snapshot) = payload?;

    let now = parse_optional_timestamp(snapshot.now.as_deref())?.unwrap_or_else(Utc::now);
    let project = snapshot.into_project()?;
    let report = state.engine.report(&project, now);

    tracing::info!(
        "Report for project {}: {}% complete, suggested {}, stored {}",
        project.id,
        report.overall_progress,
        report.suggested_status.as_stored().label(),
        project.status.label()
    );

    Ok(Json(report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use shared_types::{DocumentCategory, RawDocument, SuggestedStatus};

    fn create_test_state() -> Arc<AppState> {
        Arc::new(AppState::new(Config::default()))
    }

    fn raw(category: &str, status: &str) -> RawDocument {
        RawDocument {
            id: format!("{}-{}", category, status),
            category: category.to_string(),
            status: status.to_string(),
        }
    }

    #[tokio::test]
    async fn test_list_categories_uses_config() {
        let state = Arc::new(AppState::new(Config {
            categories: vec![DocumentCategory::CoverLetter],
            ..Config::default()
        }));
        let Json(categories) = list_categories(State(state)).await;
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].key, "COVER_LETTER");
        assert_eq!(categories[0].label, "Cover Letter");
    }

    #[tokio::test]
    async fn test_compute_progress_with_explicit_categories() {
        let req = ProgressRequest {
            documents: vec![raw("SITE_PLAN", "approved")],
            categories: Some(vec!["SITE_PLAN".to_string(), "EGRESS_PLAN".to_string()]),
        };
        let Json(response) = compute_progress(State(create_test_state()), Ok(Json(req)))
            .await
            .unwrap();

        assert_eq!(response.overall_progress, 50);
        assert_eq!(response.suggested_status, SuggestedStatus::InProgress);
        assert!(!response.can_submit);
        assert_eq!(response.categories.len(), 2);
    }

    #[tokio::test]
    async fn test_compute_progress_rejects_unknown_status() {
        let req = ProgressRequest {
            documents: vec![raw("SITE_PLAN", "lost")],
            categories: None,
        };
        let result = compute_progress(State(create_test_state()), Ok(Json(req))).await;
        assert!(matches!(result, Err(ApiError::Validation(_))));
    }

    #[tokio::test]
    async fn test_evaluate_deadline_absent() {
        let req = DeadlineRequest {
            deadline: None,
            now: None,
        };
        let Json(response) = evaluate_deadline(Ok(Json(req))).await.unwrap();
        assert_eq!(response.evaluation.text, "No deadline");
        assert_eq!(response.evaluation.days_left, None);
    }

    #[tokio::test]
    async fn test_project_report_flags_status_change() {
        let snapshot = ProjectSnapshot {
            id: "p1".to_string(),
            name: "Cold storage".to_string(),
            status: "not_started".to_string(),
            deadline: Some("2026-10-20T00:00:00Z".to_string()),
            documents: vec![raw("COVER_LETTER", "pending_review")],
            now: Some("2026-10-19T00:00:00Z".to_string()),
        };
        let Json(report) = project_report(State(create_test_state()), Ok(Json(snapshot)))
            .await
            .unwrap();

        // 50 / 8 = 6.25
        assert_eq!(report.overall_progress, 6);
        assert_eq!(report.deadline.text, "Due tomorrow");
        assert!(report.status_change.is_some());
    }
}
