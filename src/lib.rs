//! Milestone replanning for linear project schedules.
//!
//! Recomputes a five-milestone plan (`m1`..`m5` plus a `project deadline`)
//! after one milestone's date changes: milestones downstream of the change
//! are respaced proportionally between the new date and the deadline, kept
//! off weekends, and the deadline yields a day at a time when a recomputed
//! milestone would land exactly on it.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Milestone`, `ProjectSchedule`,
//!   `MilestoneChange`, `AdjustRequest`
//! - **`validation`**: Request shape and business-rule checks, `AdjustError`
//! - **`shift`**: Weekend-safe date shifting over UTC millisecond offsets
//! - **`adjuster`**: Redistribution, deadline-collision resolution, and the
//!   convergence loop
//!
//! # Example
//!
//! ```
//! use u_replan::adjust;
//! use serde_json::json;
//!
//! let adjusted = adjust(&json!({
//!     "original": {
//!         "m1": "2023-10-02",
//!         "m2": "2023-10-06",
//!         "m3": "2023-10-12",
//!         "m4": "2023-10-18",
//!         "m5": "2023-10-24",
//!         "project deadline": "2023-10-25",
//!     },
//!     "change": { "m1": "2023-10-09" },
//! }))?;
//!
//! assert_eq!(adjusted.m2.to_string(), "2023-10-12");
//! assert_eq!(adjusted.m1.to_string(), "2023-10-09");
//! # Ok::<(), u_replan::AdjustError>(())
//! ```
//!
//! # Determinism
//!
//! All date parsing, weekday tests, and day-equality tests use the UTC
//! calendar uniformly; results do not depend on the host time zone. The
//! operation is purely computational — no I/O, no shared state across calls.

pub mod adjuster;
pub mod models;
pub mod shift;
pub mod validation;

pub use adjuster::{adjust, apply_change};
pub use models::{AdjustRequest, Milestone, MilestoneChange, ProjectSchedule};
pub use validation::AdjustError;
