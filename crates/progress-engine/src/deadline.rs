use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use shared_types::ValidationError;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Days shown as "N days left" and styled urgent
pub const NEAR_TERM_DAYS: i64 = 7;

/// Days at or below which the deadline renders in the highest tier
pub const CRITICAL_DAYS: i64 = 3;

/// Human-facing summary of how close a project deadline is
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeadlineEvaluation {
    pub text: String,
    pub is_urgent: bool,
    pub days_left: Option<i64>,
}

impl DeadlineEvaluation {
    pub fn urgency(&self) -> UrgencyTier {
        urgency_tier(self.days_left)
    }
}

/// Display tier for deadline styling
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UrgencyTier {
    Normal,
    Medium,
    Highest,
}

/// Whole days from `now` until `deadline`, rounding any partial day up.
///
/// Negative once the deadline has passed by at least a full day.
pub fn days_until(deadline: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let millis = (deadline - now).num_milliseconds();
    -(-millis).div_euclid(MILLIS_PER_DAY)
}

/// Classify a deadline relative to `now`
pub fn evaluate_deadline(
    deadline: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> DeadlineEvaluation {
    let Some(deadline) = deadline else {
        return DeadlineEvaluation {
            text: "No deadline".to_string(),
            is_urgent: false,
            days_left: None,
        };
    };

    let days_left = days_until(deadline, now);

    if deadline < now {
        return DeadlineEvaluation {
            text: format!("Overdue by {} days", days_left.abs()),
            is_urgent: true,
            days_left: Some(days_left),
        };
    }

    if days_left <= NEAR_TERM_DAYS {
        let text = match days_left {
            0 => "Due today".to_string(),
            1 => "Due tomorrow".to_string(),
            n => format!("{} days left", n),
        };
        return DeadlineEvaluation {
            text,
            is_urgent: true,
            days_left: Some(days_left),
        };
    }

    DeadlineEvaluation {
        text: format!("{} ({} days)", format_date(deadline), days_left),
        is_urgent: false,
        days_left: Some(days_left),
    }
}

/// Overdue and critical deadlines share the highest tier
pub fn urgency_tier(days_left: Option<i64>) -> UrgencyTier {
    match days_left {
        Some(n) if n <= CRITICAL_DAYS => UrgencyTier::Highest,
        Some(n) if n <= NEAR_TERM_DAYS => UrgencyTier::Medium,
        _ => UrgencyTier::Normal,
    }
}

/// Calendar date as shown next to distant deadlines, e.g. `Nov 18, 2026`
pub fn format_date(date: DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Parse an ISO-8601 timestamp. Bare dates are taken as midnight UTC.
pub fn parse_deadline(value: &str) -> Result<DateTime<Utc>, ValidationError> {
    let value = value.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Ok(ts.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .ok_or_else(|| ValidationError::InvalidTimestamp(value.to_string()))
}
