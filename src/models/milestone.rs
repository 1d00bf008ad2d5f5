//! Milestone identifiers.
//!
//! A project plan has exactly five ordered milestones, `m1` through `m5`,
//! bounded by a terminal deadline. Order is significant: `m1` precedes `m2`
//! precedes ... precedes `m5`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the five ordered milestones in a project plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Milestone {
    M1,
    M2,
    M3,
    M4,
    M5,
}

impl Milestone {
    /// All milestones in schedule order.
    pub const ALL: [Milestone; 5] = [
        Milestone::M1,
        Milestone::M2,
        Milestone::M3,
        Milestone::M4,
        Milestone::M5,
    ];

    /// Wire name of this milestone (`"m1"` .. `"m5"`).
    pub fn key(self) -> &'static str {
        match self {
            Milestone::M1 => "m1",
            Milestone::M2 => "m2",
            Milestone::M3 => "m3",
            Milestone::M4 => "m4",
            Milestone::M5 => "m5",
        }
    }

    /// Parses a wire name. Returns `None` for anything outside `m1`..`m5`
    /// (including `"project deadline"`).
    pub fn from_key(key: &str) -> Option<Milestone> {
        Milestone::ALL.iter().copied().find(|m| m.key() == key)
    }

    /// Position in schedule order (0-based).
    pub fn index(self) -> usize {
        self as usize
    }

    /// The milestone immediately before this one, if any.
    pub fn preceding(self) -> Option<Milestone> {
        self.index().checked_sub(1).map(|i| Milestone::ALL[i])
    }

    /// Milestones strictly after this one, in schedule order.
    ///
    /// These are the milestones eligible for redistribution when this
    /// milestone's date changes. Empty for `M5`.
    pub fn following(self) -> &'static [Milestone] {
        &Milestone::ALL[self.index() + 1..]
    }
}

impl fmt::Display for Milestone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
