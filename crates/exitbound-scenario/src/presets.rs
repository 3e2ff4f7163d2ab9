//! PUBLISHED SCENARIO CATALOG
//!
//! Immutable, ordered catalog constructed once at startup. There is no
//! mutation or reinitialization API; callers take references into it.

use lazy_static::lazy_static;

use crate::scenario::{Cohort, Scenario};

/// Per-user enforcement weight of an idle Lightning channel (wu).
pub const LN_IDLE_WEIGHT: f64 = 2_360.0;

/// Per-user enforcement weight of an active Lightning channel (wu).
pub const LN_ACTIVE_WEIGHT: f64 = 4_616.0;

/// Per-user exit path weight in an Ark timeout tree (wu).
pub const ARK_WEIGHT: f64 = 3_200.0;

fn single_cohort(
    scenario: (&str, &str, &str),
    rho: f64,
    window_blocks: u32,
    cohort: (&str, &str, f64),
) -> Scenario {
    let (id, name, description) = scenario;
    let (cohort_id, label, per_user_weight) = cohort;
    Scenario {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        rho,
        window_blocks,
        w_coinbase: None,
        cohorts: vec![Cohort {
            id: cohort_id.to_string(),
            label: label.to_string(),
            per_user_weight,
            share: 1.0,
        }],
    }
}

lazy_static! {
    /// The published presets, in display order.
    pub static ref SCENARIOS: Vec<Scenario> = vec![
        single_cohort(
            ("retail-panic", "Retail Panic", "1-day window, active Lightning users under stress"),
            0.8,
            137,
            ("active", "Active channels", LN_ACTIVE_WEIGHT),
        ),
        single_cohort(
            ("quiet-exit", "Quiet Exit", "1-day window, mostly idle Lightning users"),
            0.8,
            137,
            ("idle", "Idle channels", LN_IDLE_WEIGHT),
        ),
        Scenario {
            id: "mixed-economy".to_string(),
            name: "Mixed Economy".to_string(),
            description: "3-day window with 50/50 active-idle blend".to_string(),
            rho: 0.8,
            window_blocks: 432,
            w_coinbase: None,
            cohorts: vec![
                Cohort {
                    id: "active".to_string(),
                    label: "Active channels".to_string(),
                    per_user_weight: LN_ACTIVE_WEIGHT,
                    share: 0.5,
                },
                Cohort {
                    id: "idle".to_string(),
                    label: "Idle channels".to_string(),
                    per_user_weight: LN_IDLE_WEIGHT,
                    share: 0.5,
                },
            ],
        },
        single_cohort(
            ("institutional", "Institutional", "2-week window, active Lightning users"),
            0.8,
            2_016,
            ("active", "Active channels", LN_ACTIVE_WEIGHT),
        ),
        single_cohort(
            ("ark-week", "Ark (1 Week)", "Ark-style timeout tree with 1-week window"),
            0.8,
            1_008,
            ("ark-leaf", "Per-user exit path", ARK_WEIGHT),
        ),
        single_cohort(
            ("ark-fortnight", "Ark (2 Weeks)", "Ark-style timeout tree with 2-week window"),
            0.8,
            2_016,
            ("ark-leaf", "Per-user exit path", ARK_WEIGHT),
        ),
    ];
}

/// Look up a preset by id. The reserved "custom" id never resolves here.
pub fn find_preset(id: &str) -> Option<&'static Scenario> {
    SCENARIOS.iter().find(|scenario| scenario.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn test_catalog_lists_six_presets() {
        assert_eq!(SCENARIOS.len(), 6);
    }

    #[test]
    fn test_preset_ids_are_unique() {
        assert!(SCENARIOS.iter().map(|s| s.id.as_str()).all_unique());
    }

    #[test]
    fn test_every_preset_validates() {
        for scenario in SCENARIOS.iter() {
            assert_eq!(scenario.validate(), Ok(()), "{}", scenario.id);
        }
    }

    #[test]
    fn test_preset_shares_sum_to_one() {
        for scenario in SCENARIOS.iter() {
            let total: f64 = scenario.cohorts.iter().map(|c| c.share).sum();
            assert_eq!(total, 1.0, "{}", scenario.id);
        }
    }

    #[test]
    fn test_find_preset_resolves_known_ids_only() {
        assert!(find_preset("ark-fortnight").is_some());
        assert!(find_preset("custom").is_none());
        assert!(find_preset("does-not-exist").is_none());
    }
}
