//! Category registry: the static checklist catalog reviewers verify per
//! document category.
//!
//! Known categories resolve to their catalog entry. Any other key gets a
//! generic three-item checklist synthesized from the key itself, so a lookup
//! never fails.

use std::collections::HashMap;

use lazy_static::lazy_static;
use shared_types::{CategoryChecklist, ChecklistItem, DocumentCategory};

lazy_static! {
    static ref CHECKLISTS: HashMap<&'static str, (&'static str, Vec<(&'static str, &'static str)>)> = {
        let mut m = HashMap::new();
        m.insert(
            DocumentCategory::SitePlan.key(),
            (
                "Site Plan",
                vec![
                    ("property_lines", "Property lines and dimensions shown"),
                    ("fire_access", "Fire apparatus access roads identified"),
                    ("hydrants", "Fire hydrant locations marked"),
                    ("north_arrow", "North arrow and scale included"),
                ],
            ),
        );
        m.insert(
            DocumentCategory::FacilityPlan.key(),
            (
                "Facility Plan",
                vec![
                    ("floor_layout", "Floor layout with room uses labeled"),
                    ("storage_areas", "Storage areas and rack locations shown"),
                    ("occupancy", "Occupancy classification stated"),
                ],
            ),
        );
        m.insert(
            DocumentCategory::EgressPlan.key(),
            (
                "Egress Plan",
                vec![
                    ("exit_locations", "Exit locations and exit signs shown"),
                    ("travel_distance", "Travel distances to exits indicated"),
                    ("occupant_load", "Occupant load calculations provided"),
                    ("emergency_lighting", "Emergency lighting locations marked"),
                ],
            ),
        );
        m.insert(
            DocumentCategory::StructuralPlans.key(),
            (
                "Structural Plans",
                vec![
                    ("engineer_stamp", "Stamped by a licensed engineer"),
                    ("rack_anchorage", "Rack anchorage and seismic details included"),
                    ("load_calcs", "Design load calculations attached"),
                ],
            ),
        );
        m.insert(
            DocumentCategory::Commodities.key(),
            (
                "Commodities",
                vec![
                    ("commodity_class", "Commodity classification identified"),
                    ("storage_height", "Maximum storage height stated"),
                    ("hazardous_materials", "Hazardous materials inventory listed"),
                ],
            ),
        );
        m.insert(
            DocumentCategory::FireProtection.key(),
            (
                "Fire Protection",
                vec![
                    ("sprinkler_design", "Sprinkler system design criteria shown"),
                    ("alarm_system", "Fire alarm system described"),
                    ("extinguishers", "Portable extinguisher locations marked"),
                    ("hydraulic_calcs", "Hydraulic calculations provided"),
                ],
            ),
        );
        m.insert(
            DocumentCategory::SpecialInspection.key(),
            (
                "Special Inspection",
                vec![
                    ("inspector", "Special inspector identified"),
                    ("inspection_schedule", "Schedule of inspections attached"),
                    ("agency_qualifications", "Agency qualifications included"),
                ],
            ),
        );
        m.insert(
            DocumentCategory::CoverLetter.key(),
            (
                "Cover Letter",
                vec![
                    ("project_description", "Project description and scope of work"),
                    ("contact_info", "Applicant contact information"),
                    ("signed", "Signed by the applicant or agent"),
                ],
            ),
        );
        m
    };
}

/// Look up the checklist for a category key.
///
/// Total: unknown keys fall back to [`generic_checklist`].
pub fn get_checklist(category: &str) -> CategoryChecklist {
    match CHECKLISTS.get(category) {
        Some((title, items)) => CategoryChecklist {
            title: title.to_string(),
            items: items
                .iter()
                .map(|(id, label)| item(id, label.to_string()))
                .collect(),
        },
        None => generic_checklist(category),
    }
}

pub fn checklist_for(category: DocumentCategory) -> CategoryChecklist {
    get_checklist(category.key())
}

/// Checklist for a category the catalog does not know about
pub fn generic_checklist(category: &str) -> CategoryChecklist {
    let title = title_case(category);
    CategoryChecklist {
        items: vec![
            item("complete", format!("{} is complete", title)),
            item("legible", format!("{} is legible", title)),
            item("accurate", "Information appears accurate".to_string()),
        ],
        title,
    }
}

/// `FIRE_PROTECTION` -> `Fire Protection`
pub fn title_case(key: &str) -> String {
    key.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(|c| c.to_lowercase()))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn item(id: &str, label: String) -> ChecklistItem {
    ChecklistItem {
        id: id.to_string(),
        label,
        checked: false,
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: lookup never fails and never returns an empty checklist
        #[test]
        fn lookup_is_total(key in "\\PC{0,40}") {
            let checklist = get_checklist(&key);
            prop_assert!(!checklist.items.is_empty());
        }

        /// Property: fallback titles contain no underscores
        #[test]
        fn fallback_title_has_no_underscores(key in "[A-Z_]{1,30}") {
            prop_assume!(!CHECKLISTS.contains_key(key.as_str()));
            let checklist = get_checklist(&key);
            prop_assert!(!checklist.title.contains('_'));
            prop_assert_eq!(checklist.items.len(), 3);
        }
    }
}
