//! EXIT SAFETY CLASSIFICATION
//!
//! Lead-time estimation and the three-band security zone classifier for a
//! population attempting simultaneous unilateral exits.

use serde::{Deserialize, Serialize};

use crate::capacity::clamp_rho;

/// Upper bound of the safe band (inclusive).
pub const SAFE_ZONE_MAX_USERS: u64 = 83_000;

/// Upper bound of the probabilistic band (inclusive). Anything above is
/// insolvent territory.
pub const PROBABILISTIC_ZONE_MAX_USERS: u64 = 232_000;

/// Qualitative safety classification for a given exit population.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SecurityZone {
    /// Everyone can exit within the window.
    Safe,
    /// Exits clear only under favorable ordering and fee conditions.
    Probabilistic,
    /// The window cannot clear this population at any fee level.
    Insolvent,
}

/// Minimum advance notice, in block-equivalents, for `users` to clear at the
/// modeled throughput.
pub fn lead_time_blocks(
    users: f64,
    per_user_weight: f64,
    rho: f64,
    avg_per_block_capacity: f64,
) -> f64 {
    if users <= 0.0 || per_user_weight <= 0.0 || avg_per_block_capacity <= 0.0 {
        return 0.0;
    }
    (users * per_user_weight) / (clamp_rho(rho) * avg_per_block_capacity)
}

/// Step classifier over the fixed population thresholds, inclusive on the
/// lower two bands.
pub fn classify_security_zone(users_attempting_exit: u64) -> SecurityZone {
    if users_attempting_exit <= SAFE_ZONE_MAX_USERS {
        SecurityZone::Safe
    } else if users_attempting_exit <= PROBABILISTIC_ZONE_MAX_USERS {
        SecurityZone::Probabilistic
    } else {
        SecurityZone::Insolvent
    }
}
