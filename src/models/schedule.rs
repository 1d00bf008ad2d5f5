//! Project schedule and change-request models.
//!
//! A `ProjectSchedule` holds the six dates of a linear plan: milestones
//! `m1`..`m5` plus the terminal `project deadline`. Serialization produces
//! exactly those six keys with `YYYY-MM-DD` values, matching the wire shape
//! consumed by [`crate::validation::parse_request`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Milestone;

/// A linear project schedule: five ordered milestones and a deadline.
///
/// Field order is schedule order; serde preserves it, so the serialized
/// form always enumerates `m1`..`m5` followed by `"project deadline"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSchedule {
    pub m1: NaiveDate,
    pub m2: NaiveDate,
    pub m3: NaiveDate,
    pub m4: NaiveDate,
    pub m5: NaiveDate,
    /// Terminal date bounding the schedule. May be pushed forward during
    /// adjustment, never pulled back.
    #[serde(rename = "project deadline")]
    pub deadline: NaiveDate,
}

impl ProjectSchedule {
    /// Creates a schedule from the five milestone dates and the deadline.
    pub fn new(
        m1: NaiveDate,
        m2: NaiveDate,
        m3: NaiveDate,
        m4: NaiveDate,
        m5: NaiveDate,
        deadline: NaiveDate,
    ) -> Self {
        Self {
            m1,
            m2,
            m3,
            m4,
            m5,
            deadline,
        }
    }

    /// Date currently stored for a milestone.
    pub fn date_of(&self, milestone: Milestone) -> NaiveDate {
        match milestone {
            Milestone::M1 => self.m1,
            Milestone::M2 => self.m2,
            Milestone::M3 => self.m3,
            Milestone::M4 => self.m4,
            Milestone::M5 => self.m5,
        }
    }

    /// Overwrites the date stored for a milestone.
    pub fn set_date(&mut self, milestone: Milestone, date: NaiveDate) {
        match milestone {
            Milestone::M1 => self.m1 = date,
            Milestone::M2 => self.m2 = date,
            Milestone::M3 => self.m3 = date,
            Milestone::M4 => self.m4 = date,
            Milestone::M5 => self.m5 = date,
        }
    }
}

/// A request to move one milestone to a new date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilestoneChange {
    /// Which milestone moves.
    pub milestone: Milestone,
    /// Its requested new date.
    pub date: NaiveDate,
}

impl MilestoneChange {
    /// Creates a change request.
    pub fn new(milestone: Milestone, date: NaiveDate) -> Self {
        Self { milestone, date }
    }
}

/// A fully shape-validated adjustment request.
///
/// Produced by [`crate::validation::parse_request`]; business-rule checks
/// (weekend, deadline collision, ordering) happen later, during adjustment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjustRequest {
    /// The schedule as it stands before the change.
    pub original: ProjectSchedule,
    /// The single milestone change to apply.
    pub change: MilestoneChange,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> ProjectSchedule {
        ProjectSchedule::new(
            date(2023, 10, 2),
            date(2023, 10, 6),
            date(2023, 10, 12),
            date(2023, 10, 18),
            date(2023, 10, 24),
            date(2023, 10, 25),
        )
    }

    #[test]
    fn test_date_accessors() {
        let mut s = sample();
        assert_eq!(s.date_of(Milestone::M3), date(2023, 10, 12));

        s.set_date(Milestone::M3, date(2023, 10, 16));
        assert_eq!(s.m3, date(2023, 10, 16));
        assert_eq!(s.date_of(Milestone::M3), date(2023, 10, 16));
    }

    #[test]
    fn test_serialize_exact_key_set() {
        let value = serde_json::to_value(sample()).unwrap();
        let obj = value.as_object().unwrap();
        let keys: Vec<&str> = obj.keys().map(String::as_str).collect();
        assert_eq!(keys, ["m1", "m2", "m3", "m4", "m5", "project deadline"]);
        assert_eq!(obj["m1"], "2023-10-02");
        assert_eq!(obj["project deadline"], "2023-10-25");
    }

    #[test]
    fn test_deserialize_wire_shape() {
        let s: ProjectSchedule = serde_json::from_value(serde_json::json!({
            "m1": "2023-10-02",
            "m2": "2023-10-06",
            "m3": "2023-10-12",
            "m4": "2023-10-18",
            "m5": "2023-10-24",
            "project deadline": "2023-10-25",
        }))
        .unwrap();
        assert_eq!(s, sample());
    }
}
