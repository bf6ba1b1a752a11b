//! Property-based tests for permit-api
//!
//! Tests the request models and validation logic using proptest.

use permit_api::models::{parse_categories, parse_optional_timestamp, ProjectSnapshot};
use progress_engine::registry::get_checklist;
use proptest::prelude::*;
use shared_types::{DocumentCategory, RawDocument, ValidationError};

const CATEGORY_KEYS: [&str; 8] = [
    "SITE_PLAN",
    "FACILITY_PLAN",
    "EGRESS_PLAN",
    "STRUCTURAL_PLANS",
    "COMMODITIES",
    "FIRE_PROTECTION",
    "SPECIAL_INSPECTION",
    "COVER_LETTER",
];

const DOCUMENT_STATUSES: [&str; 3] = ["not_submitted", "pending_review", "approved"];

fn category_key() -> impl Strategy<Value = String> {
    (0usize..CATEGORY_KEYS.len()).prop_map(|i| CATEGORY_KEYS[i].to_string())
}

fn document_status() -> impl Strategy<Value = String> {
    (0usize..DOCUMENT_STATUSES.len()).prop_map(|i| DOCUMENT_STATUSES[i].to_string())
}

fn raw_document() -> impl Strategy<Value = RawDocument> {
    ("[a-z0-9]{6,12}", category_key(), document_status()).prop_map(|(id, category, status)| {
        RawDocument {
            id,
            category,
            status,
        }
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // ============================================================
    // Category Key Tests
    // ============================================================

    #[test]
    fn known_keys_parse(keys in prop::collection::vec(category_key(), 0..10)) {
        let parsed = parse_categories(&keys).unwrap();
        prop_assert_eq!(parsed.len(), keys.len());
    }

    #[test]
    fn lowercase_keys_are_rejected(key in "[a-z_]{1,20}") {
        let result = parse_categories(&[key.clone()]);
        prop_assert_eq!(result, Err(ValidationError::UnknownCategory(key)));
    }

    #[test]
    fn checklist_titles_are_title_cased(key in "[A-Z]{1,8}(_[A-Z]{1,8}){0,3}") {
        let title = get_checklist(&key).title;
        let pattern = regex::Regex::new(r"^[A-Z][a-z]*( [A-Z][a-z]*)*$").unwrap();
        prop_assert!(pattern.is_match(&title), "title {:?} for key {:?}", title, key);
    }

    // ============================================================
    // Project Snapshot Tests
    // ============================================================

    #[test]
    fn valid_snapshots_convert(
        documents in prop::collection::vec(raw_document(), 0..20),
        day in 1u32..28,
    ) {
        let snapshot = ProjectSnapshot {
            id: "p".to_string(),
            name: "Project".to_string(),
            status: "in_progress".to_string(),
            deadline: Some(format!("2026-11-{:02}", day)),
            documents: documents.clone(),
            now: None,
        };
        let project = snapshot.into_project().unwrap();
        prop_assert_eq!(project.documents.len(), documents.len());
        for (doc, raw) in project.documents.iter().zip(&documents) {
            prop_assert_eq!(doc.category.key(), raw.category.as_str());
            prop_assert_eq!(doc.status.to_string(), raw.status.clone());
        }
    }

    #[test]
    fn invalid_document_status_rejects_snapshot(
        documents in prop::collection::vec(raw_document(), 0..5),
        bad in "[a-z]{3,10}",
    ) {
        prop_assume!(!DOCUMENT_STATUSES.contains(&bad.as_str()));
        let mut documents = documents;
        documents.push(RawDocument {
            id: "bad".to_string(),
            category: DocumentCategory::CoverLetter.key().to_string(),
            status: bad.clone(),
        });
        let snapshot = ProjectSnapshot {
            id: "p".to_string(),
            name: "Project".to_string(),
            status: "not_started".to_string(),
            deadline: None,
            documents,
            now: None,
        };
        prop_assert_eq!(
            snapshot.into_project().unwrap_err(),
            ValidationError::UnknownDocumentStatus(bad)
        );
    }

    // ============================================================
    // Timestamp Tests
    // ============================================================

    #[test]
    fn rfc3339_timestamps_parse(
        month in 1u32..=12,
        day in 1u32..=28,
        hour in 0u32..24,
        minute in 0u32..60,
    ) {
        let value = format!("2026-{:02}-{:02}T{:02}:{:02}:00Z", month, day, hour, minute);
        prop_assert!(parse_optional_timestamp(Some(&value)).unwrap().is_some());
    }

    #[test]
    fn free_text_timestamps_rejected(value in "[a-z ]{1,20}") {
        prop_assert!(parse_optional_timestamp(Some(&value)).is_err());
    }
}
