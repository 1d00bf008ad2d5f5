//! Replanning domain models.
//!
//! Core data types for the fixed five-milestone linear schedule shape:
//!
//! | Type | Meaning |
//! |------|---------|
//! | `Milestone` | one of the five ordered checkpoints `m1`..`m5` |
//! | `ProjectSchedule` | the six dated entries of a plan (milestones + deadline) |
//! | `MilestoneChange` | a request to move one milestone |
//! | `AdjustRequest` | shape-validated pair of schedule and change |

mod milestone;
mod schedule;

pub use milestone::Milestone;
pub use schedule::{AdjustRequest, MilestoneChange, ProjectSchedule};
