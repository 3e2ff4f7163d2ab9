//! EXITBOUND
//!
//! Capacity and safety bounds for blockchain unilateral-exit scenarios.
//!
//! Given an efficiency coefficient, a settlement window, a per-user
//! enforcement weight, and the coinbase overhead, the model answers one
//! question: how many users can get out unilaterally before the window
//! closes. Two layers:
//! - `exitbound-capacity`: the pure byte-weight math
//! - `exitbound-scenario`: named scenario records, the preset catalog, and
//!   the shareable text encoding
//!
//! This umbrella crate re-exports both.

pub use exitbound_capacity::{
    blended_weight, classify_security_zone, effective_capacity, lead_time_blocks, max_users,
    rho_from_losses, total_capacity, usable_block_weight, LossInputs, SecurityZone, WeightBucket,
    CONSENSUS_WEIGHT_LIMIT, DEFAULT_COINBASE_WEIGHT, PROBABILISTIC_ZONE_MAX_USERS,
    SAFE_ZONE_MAX_USERS,
};
pub use exitbound_scenario::{
    decode_scenario, encode_scenario, find_preset, from_query_string, to_query_string, Cohort,
    Scenario, ScenarioError, ScenarioMetrics, ScenarioReport, ARK_WEIGHT, CUSTOM_SCENARIO_ID,
    LN_ACTIVE_WEIGHT, LN_IDLE_WEIGHT, SCENARIOS, SCENARIO_QUERY_KEY,
};

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_published_capacity_figures_end_to_end() {
        assert_eq!(total_capacity(137, None), 547_726_000.0);
        assert_eq!(effective_capacity(0.7, 137, None), 383_408_200.0);
        assert_eq!(max_users(0.7, 137, LN_ACTIVE_WEIGHT, None), 83_060);
        assert_eq!(max_users(0.7, 137, LN_IDLE_WEIGHT, None), 162_461);
    }

    #[test]
    fn test_preset_metrics_feed_the_zone_classifier() {
        let metrics = find_preset("retail-panic").unwrap().metrics();
        assert_eq!(metrics.max_users, 94_926);
        assert_eq!(
            classify_security_zone(metrics.max_users),
            SecurityZone::Probabilistic
        );

        let ark = find_preset("ark-week").unwrap().metrics();
        assert_eq!(ark.max_users, 1_007_496);
        assert_eq!(classify_security_zone(ark.max_users), SecurityZone::Insolvent);
    }

    #[test]
    fn test_lead_time_uses_usable_block_weight() {
        // 50k active users at rho 0.7 against the default per-block budget.
        let avg = usable_block_weight(None);
        assert_eq!(avg, 3_998_000.0);
        assert_abs_diff_eq!(
            lead_time_blocks(50_000.0, LN_ACTIVE_WEIGHT, 0.7, avg),
            82.5,
            epsilon = 0.1
        );
    }

    #[test]
    fn test_congestion_sample_recovers_rho() {
        let rho = rho_from_losses(&LossInputs {
            window_blocks: 137,
            replaced: 118_400_000.0,
            orphan: 22_800_000.0,
            dust: 8_100_000.0,
            policy: 10_900_000.0,
            ..LossInputs::default()
        });
        assert_abs_diff_eq!(rho, 0.71, epsilon = 0.01);
    }

    #[test]
    fn test_share_link_roundtrip_with_noise() {
        let scenario = Scenario::custom(0.74, 576, 3_488.0, 2_000.0);
        let query = format!("?ref=paper&{}", to_query_string(&scenario));
        assert_eq!(from_query_string(&query), Some(scenario));
    }

    #[test]
    fn test_report_serializes_scenario_with_metrics() {
        let report = find_preset("mixed-economy").unwrap().report();
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["scenario"]["windowBlocks"], 432);
        assert_eq!(value["metrics"]["effectiveWeight"], 3_488.0);
        assert_eq!(value["metrics"]["maxUsers"], 396_132);
    }
}
