//! Schedule adjustment.
//!
//! Applies a single milestone change to a [`ProjectSchedule`]:
//!
//! 1. Business-rule validation ([`crate::validation::validate_change`]).
//! 2. A redistribution pass spacing every milestone after the changed one
//!    proportionally between the changed date and the deadline, nudging each
//!    off weekends and off the changed date itself, and pushing the deadline
//!    forward whenever a recomputed milestone would land exactly on it.
//! 3. A convergence loop: while a pass reproduces the pre-change dates
//!    exactly, the deadline advances one day and the pass reruns against the
//!    larger range.
//! 4. Finalization: the changed milestone's own date is written last — but
//!    only when the convergence loop did not exit early.
//!
//! # Algorithm
//!
//! Spacing is proportional over *timestamps*, not calendar days: for the
//! `i`-th of `N` eligible milestones the offset from the changed date is
//! `round(range_millis / (N + 1)) * (i + 1)`. The range is re-read from the
//! schedule at every step, so a deadline pushed by a collision is visible to
//! the rest of the same pass.

use chrono::{Duration, NaiveDate};
use serde_json::Value;
use tracing::{debug, trace};

use crate::models::{Milestone, MilestoneChange, ProjectSchedule};
use crate::shift::{epoch_millis, shift_from};
use crate::validation::{self, AdjustError};

/// Rounds half toward positive infinity, e.g. `round(0.5) == 1` and
/// `round(-0.5) == 0`.
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// One redistribution pass over the eligible milestones.
///
/// Writes each recomputed date into the schedule and advances the deadline
/// by one day whenever a recomputed date coincides with it.
fn redistribute_pass(
    schedule: &mut ProjectSchedule,
    changed_date: NaiveDate,
    eligible: &[Milestone],
) {
    let slots = eligible.len() as i64 + 1;
    for (i, &milestone) in eligible.iter().enumerate() {
        // Re-read the deadline each step so an earlier collision in this
        // pass widens the range for the milestones after it.
        let range = epoch_millis(schedule.deadline) - epoch_millis(changed_date);
        let offset = round_half_up(range as f64 / slots as f64) * (i as i64 + 1);
        let new_date = shift_from(changed_date, offset);
        trace!(%milestone, %new_date, offset_millis = offset, "milestone recomputed");

        if new_date == schedule.deadline {
            schedule.deadline += Duration::days(1);
            debug!(
                %milestone,
                deadline = %schedule.deadline,
                "recomputed date collided with deadline; deadline advanced"
            );
        }

        schedule.set_date(milestone, new_date);
    }
}

/// Applies a milestone change to the schedule in place.
///
/// Milestones after the changed one are redistributed between the change
/// date and the deadline; milestones before it are untouched, and the
/// deadline only ever moves forward. When redistribution reproduces the
/// pre-change dates exactly, the deadline advances a day at a time until a
/// pass changes something.
///
/// When such a retry pass is what finally changes a date, the function
/// returns at that point and the changed milestone's own field keeps its
/// previous value; otherwise the change date is written as the last step.
///
/// # Errors
/// Any [`AdjustError`] business-rule violation, raised before the schedule
/// is touched.
pub fn apply_change(
    schedule: &mut ProjectSchedule,
    change: &MilestoneChange,
) -> Result<(), AdjustError> {
    validation::validate_change(schedule, change)?;

    let snapshot = schedule.clone();
    let eligible = change.milestone.following();
    let unchanged = |s: &ProjectSchedule| {
        eligible
            .iter()
            .all(|&m| s.date_of(m) == snapshot.date_of(m))
    };

    redistribute_pass(schedule, change.date, eligible);

    // A change to m5 has nothing to redistribute; go straight to the
    // final write.
    let mut identical = !eligible.is_empty() && unchanged(schedule);
    while identical {
        schedule.deadline += Duration::days(1);
        debug!(
            deadline = %schedule.deadline,
            "redistribution left every milestone unchanged; deadline advanced"
        );
        redistribute_pass(schedule, change.date, eligible);
        identical = unchanged(schedule);
        if !identical {
            // Early exit: the changed milestone's own field is not
            // written on this path.
            return Ok(());
        }
    }

    schedule.set_date(change.milestone, change.date);
    Ok(())
}

/// Adjusts a schedule from a raw JSON request.
///
/// Expects `{ "original": <schedule>, "change": { "<m1..m5>": "<date>" } }`,
/// validates shape and business rules, applies the change, and returns the
/// adjusted schedule.
///
/// # Errors
/// Any [`AdjustError`]; nothing is returned on failure.
pub fn adjust(input: &Value) -> Result<ProjectSchedule, AdjustError> {
    let request = validation::parse_request(input)?;
    let mut schedule = request.original;
    apply_change(&mut schedule, &request.change)?;
    Ok(schedule)
}
