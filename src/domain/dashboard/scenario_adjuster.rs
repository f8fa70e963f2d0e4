//! Scales baseline KPIs for a day scenario.

use super::{DashboardState, FormatPolicy, Kpi, Scenario};

/// Returns copies of `base` KPIs with `current` scaled by the scenario
/// multiplier and `display` regenerated from `formats`.
///
/// Titles, targets, change labels, trends and statuses are kept as-is.
pub fn scale_kpis(base: &[Kpi], scenario: Scenario, formats: &FormatPolicy) -> Vec<Kpi> {
    let multiplier = scenario.multiplier();
    base.iter()
        .map(|kpi| {
            let current = multiplier.apply(kpi.current);
            Kpi {
                current,
                display: formats.render(&kpi.id, current),
                ..kpi.clone()
            }
        })
        .collect()
}

/// Returns `base` with its KPIs scaled for `scenario` and the scenario recorded.
///
/// Always scales from `base`, so effects never compound across calls.
pub fn apply_scenario(
    base: &DashboardState,
    scenario: Scenario,
    formats: &FormatPolicy,
) -> DashboardState {
    tracing::debug!(
        scenario = %scenario,
        multiplier = scenario.multiplier().value(),
        "Adjusting KPIs for scenario"
    );
    DashboardState {
        kpis: scale_kpis(&base.kpis, scenario, formats),
        current_scenario: scenario,
        ..base.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dashboard::fixtures::initial_state;

    fn currents(state: &DashboardState) -> Vec<f64> {
        state.kpis.iter().map(|k| k.current).collect()
    }

    fn displays(state: &DashboardState) -> Vec<&str> {
        state.kpis.iter().map(|k| k.display.as_str()).collect()
    }

    #[test]
    fn hot_day_scales_sales_by_thirty_percent() {
        let adjusted = apply_scenario(&initial_state(), Scenario::HotDay, &FormatPolicy::default());

        assert_eq!(adjusted.kpi("sales").unwrap().current, 15600.0);
        assert_eq!(adjusted.current_scenario, Scenario::HotDay);
        assert_eq!(currents(&adjusted), vec![15600.0, 11.05, 28.6, 106.6]);
        assert_eq!(displays(&adjusted), vec!["$15,600", "$11.05", "29%", "107%"]);
    }

    #[test]
    fn rainy_day_scales_down() {
        let adjusted =
            apply_scenario(&initial_state(), Scenario::RainyDay, &FormatPolicy::default());

        assert_eq!(currents(&adjusted), vec![9600.0, 6.8, 17.6, 65.6]);
        assert_eq!(displays(&adjusted), vec!["$9,600", "$6.80", "18%", "66%"]);
    }

    #[test]
    fn staff_shortage_rounds_to_cents() {
        let adjusted =
            apply_scenario(&initial_state(), Scenario::StaffShortage, &FormatPolicy::default());

        assert_eq!(adjusted.kpi("tickets").unwrap().current, 6.38);
        assert_eq!(adjusted.kpi("tickets").unwrap().display, "$6.38");
        assert_eq!(adjusted.kpi("sales").unwrap().display, "$9,000");
    }

    #[test]
    fn normal_day_reproduces_baseline_kpis() {
        let base = initial_state();
        let adjusted = apply_scenario(&base, Scenario::NormalDay, &FormatPolicy::default());
        assert_eq!(adjusted, base);
    }

    #[test]
    fn scenario_keeps_targets_and_statuses() {
        let base = initial_state();
        let adjusted = apply_scenario(&base, Scenario::PromoRunning, &FormatPolicy::default());

        for (before, after) in base.kpis.iter().zip(&adjusted.kpis) {
            assert_eq!(before.target, after.target);
            assert_eq!(before.status, after.status);
            assert_eq!(before.trend, after.trend);
        }
        assert_eq!(adjusted.categories, base.categories);
    }

    #[test]
    fn scenarios_do_not_compound() {
        let base = initial_state();
        let formats = FormatPolicy::default();
        let hot = apply_scenario(&base, Scenario::HotDay, &formats);
        let rainy_after_hot = apply_scenario(&base, Scenario::RainyDay, &formats);
        let rainy_direct = apply_scenario(&base, Scenario::RainyDay, &formats);

        assert_ne!(currents(&hot), currents(&rainy_after_hot));
        assert_eq!(rainy_after_hot, rainy_direct);
    }
}
