#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::resolver::TelemetryUnits;

/// Radio-wide voice settings the announcements depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Announce distances in feet and speeds in knots.
    pub imperial: bool,
    /// Always say the hours of a duration, even when there are none.
    pub always_announce_hours: bool,
}

impl Config {
    /// Unit resolver matching these settings.
    #[must_use]
    pub fn resolver(&self) -> TelemetryUnits {
        TelemetryUnits {
            imperial: self.imperial,
        }
    }
}
