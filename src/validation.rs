//! Request validation for schedule adjustment.
//!
//! Two stages, both of which complete before any schedule is mutated:
//!
//! 1. **Shape validation** ([`parse_request`]): the raw JSON request must be
//!    an object with `original` and `change`, the schedule must carry exactly
//!    the six required keys, and every value must parse as a `YYYY-MM-DD`
//!    date. Produces a typed [`AdjustRequest`].
//! 2. **Business rules** ([`validate_change`]): the changed date must not
//!    equal the deadline, must not fall on a weekend, and must not precede
//!    the immediately preceding milestone's date.
//!
//! Every failure maps to a distinct [`AdjustError`] kind and aborts the
//! operation; there is no partial result.

use chrono::NaiveDate;
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

use crate::models::{AdjustRequest, Milestone, MilestoneChange, ProjectSchedule};
use crate::shift;

/// The exact key set a schedule object must carry, in schedule order.
pub const SCHEDULE_KEYS: [&str; 6] = ["m1", "m2", "m3", "m4", "m5", "project deadline"];

/// Reasons an adjustment request is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdjustError {
    /// Top-level input is not a JSON object.
    #[error("input must be an object with 'original' and 'change' keys")]
    NotAnObject,
    /// `original` or `change` is absent from the input.
    #[error("input is missing the top-level key '{0}'")]
    MissingTopLevelKey(&'static str),
    /// A required schedule key is absent from `original`.
    #[error("the key '{0}' is missing from the original schedule")]
    MissingMilestoneKey(String),
    /// `original` carries an unrecognized key or an unparseable date.
    #[error("invalid original schedule: {0}")]
    InvalidScheduleShape(String),
    /// `change` names something other than `m1`..`m5`, or its date is
    /// unparseable.
    #[error("invalid change request: {0}")]
    InvalidChangeShape(String),
    /// Changed date equals the project deadline.
    #[error("change date {0} cannot be the same as the project deadline")]
    DeadlineCollision(NaiveDate),
    /// Changed date falls on Saturday or Sunday.
    #[error("change date {0} cannot be a weekend")]
    WeekendChange(NaiveDate),
    /// Changed date precedes the previous milestone's date.
    #[error("change date {date} for {milestone} cannot be earlier than {previous_milestone} ({previous_date})")]
    OutOfOrderChange {
        milestone: Milestone,
        date: NaiveDate,
        previous_milestone: Milestone,
        previous_date: NaiveDate,
    },
}

/// Parses a date value in the wire format.
///
/// Only `YYYY-MM-DD` is accepted; anything looser would make weekday and
/// equality checks depend on how much of a timestamp the caller sent.
fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()
}

fn require(dates: &HashMap<&str, NaiveDate>, key: &'static str) -> Result<NaiveDate, AdjustError> {
    dates
        .get(key)
        .copied()
        .ok_or_else(|| AdjustError::MissingMilestoneKey(key.to_string()))
}

/// Validates the shape of a raw adjustment request.
///
/// Checks, in order:
/// 1. Input is an object.
/// 2. `original` and `change` keys exist.
/// 3. `original` carries all six required keys (first missing one wins).
/// 4. `original` carries no other key, and every value parses as a date.
/// 5. `change`'s key is one of `m1`..`m5` and its value parses as a date.
///
/// If `change` carries several keys, only the first in enumeration order is
/// read; the rest are ignored.
///
/// # Returns
/// A typed [`AdjustRequest`], or the first [`AdjustError`] encountered.
pub fn parse_request(input: &Value) -> Result<AdjustRequest, AdjustError> {
    let top = input.as_object().ok_or(AdjustError::NotAnObject)?;

    for key in ["original", "change"] {
        if !top.contains_key(key) {
            return Err(AdjustError::MissingTopLevelKey(key));
        }
    }

    let original = top["original"].as_object().ok_or_else(|| {
        AdjustError::InvalidScheduleShape("'original' must be an object".to_string())
    })?;

    for key in SCHEDULE_KEYS {
        if !original.contains_key(key) {
            return Err(AdjustError::MissingMilestoneKey(key.to_string()));
        }
    }

    let mut dates: HashMap<&str, NaiveDate> = HashMap::new();
    for (key, value) in original {
        if !SCHEDULE_KEYS.contains(&key.as_str()) {
            return Err(AdjustError::InvalidScheduleShape(format!(
                "unrecognized key '{key}'"
            )));
        }
        let date = value
            .as_str()
            .and_then(parse_date)
            .ok_or_else(|| {
                AdjustError::InvalidScheduleShape(format!(
                    "'{key}' must be a YYYY-MM-DD date string"
                ))
            })?;
        dates.insert(key.as_str(), date);
    }

    let schedule = ProjectSchedule::new(
        require(&dates, "m1")?,
        require(&dates, "m2")?,
        require(&dates, "m3")?,
        require(&dates, "m4")?,
        require(&dates, "m5")?,
        require(&dates, "project deadline")?,
    );

    let change_obj = top["change"].as_object().ok_or_else(|| {
        AdjustError::InvalidChangeShape("'change' must be an object".to_string())
    })?;

    // First key in enumeration order wins; extra keys are ignored.
    let (change_key, change_value) = change_obj.iter().next().ok_or_else(|| {
        AdjustError::InvalidChangeShape(
            "'change' must have one key that is one of 'm1'..'m5'".to_string(),
        )
    })?;

    let milestone = Milestone::from_key(change_key).ok_or_else(|| {
        AdjustError::InvalidChangeShape(format!(
            "'{change_key}' is not one of 'm1'..'m5'"
        ))
    })?;

    let date = change_value
        .as_str()
        .and_then(parse_date)
        .ok_or_else(|| {
            AdjustError::InvalidChangeShape(format!(
                "'{change_key}' must be a YYYY-MM-DD date string"
            ))
        })?;

    Ok(AdjustRequest {
        original: schedule,
        change: MilestoneChange::new(milestone, date),
    })
}

/// Validates the business rules for a shape-valid change.
///
/// Checks, in order:
/// 1. The changed date does not equal the project deadline.
/// 2. The changed date is a weekday.
/// 3. For milestones after `m1`, the changed date is not earlier than the
///    preceding milestone's date. Nothing is checked against later
///    milestones; redistribution moves those.
pub fn validate_change(
    schedule: &ProjectSchedule,
    change: &MilestoneChange,
) -> Result<(), AdjustError> {
    if change.date == schedule.deadline {
        return Err(AdjustError::DeadlineCollision(change.date));
    }

    if shift::is_weekend(change.date) {
        return Err(AdjustError::WeekendChange(change.date));
    }

    if let Some(previous) = change.milestone.preceding() {
        let previous_date = schedule.date_of(previous);
        if change.date < previous_date {
            return Err(AdjustError::OutOfOrderChange {
                milestone: change.milestone,
                date: change.date,
                previous_milestone: previous,
                previous_date,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_request() -> Value {
        json!({
            "original": {
                "m1": "2023-10-02",
                "m2": "2023-10-06",
                "m3": "2023-10-12",
                "m4": "2023-10-18",
                "m5": "2023-10-24",
                "project deadline": "2023-10-25",
            },
            "change": { "m1": "2023-10-09" },
        })
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_valid_request_parses() {
        let request = parse_request(&valid_request()).unwrap();
        assert_eq!(request.change.milestone, Milestone::M1);
        assert_eq!(request.change.date, date(2023, 10, 9));
        assert_eq!(request.original.m3, date(2023, 10, 12));
        assert_eq!(request.original.deadline, date(2023, 10, 25));
    }

    #[test]
    fn test_not_an_object() {
        assert_eq!(
            parse_request(&json!("not an object")),
            Err(AdjustError::NotAnObject)
        );
        assert_eq!(parse_request(&json!([1, 2])), Err(AdjustError::NotAnObject));
        assert_eq!(parse_request(&json!(null)), Err(AdjustError::NotAnObject));
    }

    #[test]
    fn test_missing_top_level_key() {
        assert_eq!(
            parse_request(&json!({ "change": { "m1": "2023-10-09" } })),
            Err(AdjustError::MissingTopLevelKey("original"))
        );

        let mut request = valid_request();
        request.as_object_mut().unwrap().remove("change");
        assert_eq!(
            parse_request(&request),
            Err(AdjustError::MissingTopLevelKey("change"))
        );
    }

    #[test]
    fn test_missing_milestone_key() {
        let mut request = valid_request();
        request["original"].as_object_mut().unwrap().remove("m3");
        assert_eq!(
            parse_request(&request),
            Err(AdjustError::MissingMilestoneKey("m3".to_string()))
        );
    }

    #[test]
    fn test_missing_key_reported_before_extra_key() {
        let mut request = valid_request();
        let original = request["original"].as_object_mut().unwrap();
        original.remove("m2");
        original.insert("m6".to_string(), json!("2023-10-24"));
        assert_eq!(
            parse_request(&request),
            Err(AdjustError::MissingMilestoneKey("m2".to_string()))
        );
    }

    #[test]
    fn test_extra_key_rejected() {
        let mut request = valid_request();
        request["original"]
            .as_object_mut()
            .unwrap()
            .insert("m6".to_string(), json!("2023-10-24"));
        assert!(matches!(
            parse_request(&request),
            Err(AdjustError::InvalidScheduleShape(_))
        ));
    }

    #[test]
    fn test_unparseable_schedule_date() {
        let mut request = valid_request();
        request["original"]["m4"] = json!("2023/10/18");
        assert!(matches!(
            parse_request(&request),
            Err(AdjustError::InvalidScheduleShape(_))
        ));

        let mut request = valid_request();
        request["original"]["m4"] = json!(42);
        assert!(matches!(
            parse_request(&request),
            Err(AdjustError::InvalidScheduleShape(_))
        ));
    }

    #[test]
    fn test_change_key_must_be_milestone() {
        let mut request = valid_request();
        request["change"] = json!({ "project deadline": "2023-10-26" });
        assert!(matches!(
            parse_request(&request),
            Err(AdjustError::InvalidChangeShape(_))
        ));

        let mut request = valid_request();
        request["change"] = json!({});
        assert!(matches!(
            parse_request(&request),
            Err(AdjustError::InvalidChangeShape(_))
        ));
    }

    #[test]
    fn test_unparseable_change_date() {
        let mut request = valid_request();
        request["change"] = json!({ "m1": "next monday" });
        assert!(matches!(
            parse_request(&request),
            Err(AdjustError::InvalidChangeShape(_))
        ));
    }

    #[test]
    fn test_change_first_key_wins() {
        let mut request = valid_request();
        request["change"] = json!({ "m2": "2023-10-09", "m4": "2023-10-20" });
        let parsed = parse_request(&request).unwrap();
        assert_eq!(parsed.change.milestone, Milestone::M2);
        assert_eq!(parsed.change.date, date(2023, 10, 9));
    }

    #[test]
    fn test_deadline_collision() {
        let request = parse_request(&valid_request()).unwrap();
        let change = MilestoneChange::new(Milestone::M1, date(2023, 10, 25));
        assert_eq!(
            validate_change(&request.original, &change),
            Err(AdjustError::DeadlineCollision(date(2023, 10, 25)))
        );
    }

    #[test]
    fn test_weekend_change() {
        let request = parse_request(&valid_request()).unwrap();
        for day in [7, 8] {
            let change = MilestoneChange::new(Milestone::M1, date(2023, 10, day));
            assert_eq!(
                validate_change(&request.original, &change),
                Err(AdjustError::WeekendChange(date(2023, 10, day)))
            );
        }
    }

    #[test]
    fn test_out_of_order_change() {
        let request = parse_request(&valid_request()).unwrap();
        // m3 moved before m2 (2023-10-06).
        let change = MilestoneChange::new(Milestone::M3, date(2023, 10, 4));
        assert_eq!(
            validate_change(&request.original, &change),
            Err(AdjustError::OutOfOrderChange {
                milestone: Milestone::M3,
                date: date(2023, 10, 4),
                previous_milestone: Milestone::M2,
                previous_date: date(2023, 10, 6),
            })
        );
    }

    #[test]
    fn test_m1_has_no_predecessor_check() {
        let request = parse_request(&valid_request()).unwrap();
        // Earlier than every other milestone, still fine for m1.
        let change = MilestoneChange::new(Milestone::M1, date(2023, 9, 4));
        assert_eq!(validate_change(&request.original, &change), Ok(()));
    }

    #[test]
    fn test_deadline_checked_before_weekend() {
        // A Saturday deadline: equality must win over the weekend check.
        let mut request = valid_request();
        request["original"]["project deadline"] = json!("2023-10-28");
        let parsed = parse_request(&request).unwrap();
        let change = MilestoneChange::new(Milestone::M1, date(2023, 10, 28));
        assert_eq!(
            validate_change(&parsed.original, &change),
            Err(AdjustError::DeadlineCollision(date(2023, 10, 28)))
        );
    }
}
