//! SCENARIO RECORDS & DERIVED METRICS
//!
//! A scenario bundles the model inputs for one exit configuration: the
//! efficiency coefficient, the settlement window, an optional coinbase
//! override, and the cohort mix. Presets and user-edited "custom" values
//! share this shape and are interchangeable wherever a scenario is accepted.

use exitbound_capacity::{blended_weight, max_users, WeightBucket};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Scenario id reserved for ephemeral, user-edited configurations.
pub const CUSTOM_SCENARIO_ID: &str = "custom";

/// An identified group of users sharing one per-user enforcement weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cohort {
    /// Unique within a scenario.
    pub id: String,
    /// Display label.
    pub label: String,
    /// Per-user enforcement weight (weight units).
    pub per_user_weight: f64,
    /// Fractional weight of the population, relative to the other cohorts.
    pub share: f64,
}

/// A named capacity configuration: global parameters plus a cohort mix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Efficiency coefficient. Stored as supplied; clamped at consumption.
    pub rho: f64,
    /// Settlement window length in block-equivalents.
    pub window_blocks: u32,
    /// Per-block coinbase overhead override. Absent means the model default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub w_coinbase: Option<f64>,
    /// Ordered for display; order survives the encode/decode round trip.
    pub cohorts: Vec<Cohort>,
}

/// Derived headline figures for a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioMetrics {
    /// Per-user weight the capacity bound was computed with.
    pub effective_weight: f64,
    /// Maximum simultaneous unilateral exits within the window.
    pub max_users: u64,
}

/// Exportable document bundling a scenario with its computed metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioReport {
    pub scenario: Scenario,
    pub metrics: ScenarioMetrics,
}

/// Why a scenario is unusable for metric computation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScenarioError {
    #[error("scenario has no cohorts")]
    EmptyCohorts,
    #[error("window must span at least one block")]
    ZeroWindow,
    #[error("duplicate cohort id: {0}")]
    DuplicateCohortId(String),
    #[error("cohort {0} has non-positive per-user weight")]
    NonPositiveWeight(String),
    #[error("cohort {0} has negative share")]
    NegativeShare(String),
}

impl Scenario {
    /// Build the transient "custom" scenario from loose slider state.
    ///
    /// Reconstructed fresh on every edit; no identity or caching.
    pub fn custom(rho: f64, window_blocks: u32, per_user_weight: f64, w_coinbase: f64) -> Self {
        Scenario {
            id: CUSTOM_SCENARIO_ID.to_string(),
            name: "Custom inputs".to_string(),
            description: "Your manually tuned parameters".to_string(),
            rho,
            window_blocks,
            w_coinbase: Some(w_coinbase),
            cohorts: vec![Cohort {
                id: "custom-cohort".to_string(),
                label: "Custom".to_string(),
                per_user_weight,
                share: 1.0,
            }],
        }
    }

    /// Check the scenario is usable for metric computation.
    ///
    /// Metric computation itself stays total and degrades to 0 on these
    /// inputs; `validate` exists so editors can reject them up front.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        if self.cohorts.is_empty() {
            return Err(ScenarioError::EmptyCohorts);
        }
        if self.window_blocks == 0 {
            return Err(ScenarioError::ZeroWindow);
        }
        let mut seen = HashSet::new();
        for cohort in &self.cohorts {
            if !seen.insert(cohort.id.as_str()) {
                return Err(ScenarioError::DuplicateCohortId(cohort.id.clone()));
            }
            if cohort.per_user_weight <= 0.0 {
                return Err(ScenarioError::NonPositiveWeight(cohort.id.clone()));
            }
            if cohort.share < 0.0 {
                return Err(ScenarioError::NegativeShare(cohort.id.clone()));
            }
        }
        Ok(())
    }

    /// Per-user weight the capacity bound should use for this scenario.
    ///
    /// A single cohort bypasses blending: dividing `w * s` by `s` is not
    /// guaranteed to round back to `w` for every share, and one cohort is
    /// the common case.
    pub fn effective_weight(&self) -> f64 {
        if self.cohorts.len() == 1 {
            return self.cohorts[0].per_user_weight;
        }
        let buckets: Vec<WeightBucket> = self
            .cohorts
            .iter()
            .map(|cohort| WeightBucket {
                weight: cohort.per_user_weight,
                share: cohort.share,
            })
            .collect();
        blended_weight(&buckets)
    }

    /// Compose the effective weight with the exit bound for this scenario.
    pub fn metrics(&self) -> ScenarioMetrics {
        let effective_weight = self.effective_weight();
        ScenarioMetrics {
            effective_weight,
            max_users: max_users(self.rho, self.window_blocks, effective_weight, self.w_coinbase),
        }
    }

    /// Bundle the scenario with its metrics for export.
    pub fn report(&self) -> ScenarioReport {
        ScenarioReport {
            scenario: self.clone(),
            metrics: self.metrics(),
        }
    }
}
