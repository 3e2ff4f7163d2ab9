//! BYTE-WEIGHT CAPACITY ACCOUNTING
//!
//! How much block weight a settlement window physically offers, how much of
//! it survives efficiency losses, and how many unilateral exits that budget
//! can carry.
//!
//! Every function is total: degenerate inputs resolve to 0 instead of
//! erroring, so display-layer callers never need a fallible path.

use serde::{Deserialize, Serialize};

/// Consensus weight limit per block (weight units).
pub const CONSENSUS_WEIGHT_LIMIT: f64 = 4_000_000.0;

/// Coinbase overhead assumed per block when a caller supplies none.
pub const DEFAULT_COINBASE_WEIGHT: f64 = 2_000.0;

/// Clamp an efficiency coefficient into [0, 1].
pub(crate) fn clamp_rho(rho: f64) -> f64 {
    rho.clamp(0.0, 1.0)
}

/// Usable weight per block once the coinbase overhead is paid, floored at 0.
///
/// This is also the average per-block throughput figure fed back into
/// [`crate::safety::lead_time_blocks`].
pub fn usable_block_weight(w_coinbase: Option<f64>) -> f64 {
    let w_cb = w_coinbase.unwrap_or(DEFAULT_COINBASE_WEIGHT);
    (CONSENSUS_WEIGHT_LIMIT - w_cb).max(0.0)
}

/// Physical weight budget across a settlement window, before any efficiency
/// loss is applied. A zero-length window carries no capacity.
pub fn total_capacity(window_blocks: u32, w_coinbase: Option<f64>) -> f64 {
    if window_blocks == 0 {
        return 0.0;
    }
    usable_block_weight(w_coinbase) * f64::from(window_blocks)
}

/// Capacity actually available after discounting by the efficiency
/// coefficient. Rho outside [0, 1] is clamped, never rejected.
pub fn effective_capacity(rho: f64, window_blocks: u32, w_coinbase: Option<f64>) -> f64 {
    if window_blocks == 0 {
        return 0.0;
    }
    clamp_rho(rho) * total_capacity(window_blocks, w_coinbase)
}

/// Maximum number of users that can complete a unilateral exit within the
/// window at the given per-user enforcement weight.
///
/// A partial user cannot exit, so the bound always rounds down.
pub fn max_users(
    rho: f64,
    window_blocks: u32,
    per_user_weight: f64,
    w_coinbase: Option<f64>,
) -> u64 {
    if per_user_weight <= 0.0 {
        return 0;
    }
    let capacity = effective_capacity(rho, window_blocks, w_coinbase);
    if capacity <= 0.0 {
        return 0;
    }
    (capacity / per_user_weight).floor() as u64
}

/// Observed weight losses across a window, by category.
///
/// Unspecified categories default to zero, so call sites name only the
/// losses they actually measured and fill the rest with `..Default::default()`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LossInputs {
    /// Settlement window the losses were measured over.
    pub window_blocks: u32,
    /// Coinbase overhead per block.
    pub w_coinbase: f64,
    /// Weight of transactions replaced before confirmation.
    pub replaced: f64,
    /// Weight stranded in orphaned blocks.
    pub orphan: f64,
    /// Weight spent on dusted outputs.
    pub dust: f64,
    /// Weight rejected by relay policy.
    pub policy: f64,
    /// Losses outside the named categories.
    pub other: f64,
}

impl Default for LossInputs {
    fn default() -> Self {
        LossInputs {
            window_blocks: 0,
            w_coinbase: DEFAULT_COINBASE_WEIGHT,
            replaced: 0.0,
            orphan: 0.0,
            dust: 0.0,
            policy: 0.0,
            other: 0.0,
        }
    }
}

/// Back out an observed efficiency coefficient from measured losses by
/// inverting the capacity accounting.
pub fn rho_from_losses(inputs: &LossInputs) -> f64 {
    if inputs.window_blocks == 0 {
        return 0.0;
    }
    let max_capacity = total_capacity(inputs.window_blocks, Some(inputs.w_coinbase));
    if max_capacity == 0.0 {
        return 0.0;
    }
    let total_loss = inputs.replaced + inputs.orphan + inputs.dust + inputs.policy + inputs.other;
    clamp_rho(1.0 - total_loss / max_capacity)
}
