//! Launch schedule reference data.

use chrono::{DateTime, Utc};

/// A launch pad as published by the launch schedule provider.
///
/// Pads are reference data: the identifier is opaque and the remaining
/// fields are carried through for display only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchPad {
    pub id: String,
    pub name: String,
    pub full_name: String,
    pub locality: String,
    pub region: String,
    pub status: String,
}

/// A single scheduled or completed launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Launch {
    pub name: String,
    pub date_utc: DateTime<Utc>,
    /// Identifier of the pad the launch departs from.
    pub launch_pad_id: String,
    /// Whether the launch succeeded. Upcoming launches report `false`.
    pub success: bool,
}
