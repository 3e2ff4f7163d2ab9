//! SCENARIO MODEL
//!
//! Named exit-capacity scenarios: the record type bundling model inputs, the
//! published preset catalog, derived metrics on top of the capacity math, and
//! the lossless text encoding used to share a scenario as a compact string.

pub mod encoding;
pub mod presets;
pub mod scenario;

pub use encoding::{
    decode_scenario, encode_scenario, from_query_string, to_query_string, SCENARIO_QUERY_KEY,
};
pub use presets::{find_preset, ARK_WEIGHT, LN_ACTIVE_WEIGHT, LN_IDLE_WEIGHT, SCENARIOS};
pub use scenario::{
    Cohort, Scenario, ScenarioError, ScenarioMetrics, ScenarioReport, CUSTOM_SCENARIO_ID,
};
