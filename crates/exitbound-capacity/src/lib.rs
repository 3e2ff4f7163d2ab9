//! CONSERVATION OF BLOCKSPACE
//!
//! Pure capacity math for unilateral-exit analysis:
//! - raw and efficiency-discounted weight budgets per settlement window
//! - the maximum exit population those budgets support
//! - loss-to-efficiency inversion, cohort blending, lead-time bounds, and
//!   the security-zone classifier
//!
//! The crate holds no state; identical inputs always produce bit-identical
//! outputs, even under parallel callers.

pub mod blend;
pub mod capacity;
pub mod safety;

pub use blend::{blended_weight, WeightBucket};
pub use capacity::{
    effective_capacity, max_users, rho_from_losses, total_capacity, usable_block_weight,
    LossInputs, CONSENSUS_WEIGHT_LIMIT, DEFAULT_COINBASE_WEIGHT,
};
pub use safety::{
    classify_security_zone, lead_time_blocks, SecurityZone, PROBABILISTIC_ZONE_MAX_USERS,
    SAFE_ZONE_MAX_USERS,
};
