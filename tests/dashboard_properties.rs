//! Property tests for the dashboard store over random action sequences.

use proptest::prelude::*;

use restaurant_dashboard::domain::dashboard::{
    initial_state, scale_kpis, DashboardAction, DashboardStore, FormatPolicy, Scenario,
};
use restaurant_dashboard::domain::foundation::RecommendationId;

const RECOMMENDATION_IDS: [&str; 4] = [
    "coffee_bundle",
    "dessert_discount",
    "drink_combo_hot",
    "nonexistent_id",
];

fn apply(id: &str) -> DashboardAction {
    DashboardAction::ApplyRecommendation(RecommendationId::new(id).unwrap())
}

fn recommendation_id() -> impl Strategy<Value = &'static str> {
    prop::sample::select(RECOMMENDATION_IDS.to_vec())
}

fn scenario() -> impl Strategy<Value = Scenario> {
    prop::sample::select(Scenario::ALL.to_vec())
}

fn action() -> impl Strategy<Value = DashboardAction> {
    prop_oneof![
        Just(DashboardAction::LoadData),
        Just(DashboardAction::ToggleBeforeAfter),
        Just(DashboardAction::ResetData),
        scenario().prop_map(DashboardAction::SetScenario),
        recommendation_id().prop_map(apply),
    ]
}

fn store_after(actions: &[DashboardAction]) -> DashboardStore {
    let mut store = DashboardStore::with_fixture();
    for action in actions {
        store.dispatch(action.clone());
    }
    store
}

proptest! {
    #[test]
    fn prop_apply_is_idempotent(
        actions in prop::collection::vec(action(), 0..20),
        id in recommendation_id()
    ) {
        let mut store = store_after(&actions);

        let once = store.dispatch(apply(id));
        let twice = store.dispatch(apply(id));

        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_apply_only_touches_target_category(
        actions in prop::collection::vec(action(), 0..20),
        id in recommendation_id()
    ) {
        let mut store = store_after(&actions);
        let before = store.snapshot();
        let target = before
            .recommendation(&RecommendationId::new(id).unwrap())
            .map(|r| r.category.clone());

        let after = store.dispatch(apply(id));

        prop_assert_eq!(&before.kpis, &after.kpis);
        prop_assert_eq!(&before.recommendations, &after.recommendations);
        for (old, new) in before.categories.iter().zip(&after.categories) {
            if target.as_deref() != Some(old.name.as_str()) {
                prop_assert_eq!(old, new);
            }
        }
    }

    #[test]
    fn prop_applied_set_only_grows_between_resets(
        actions in prop::collection::vec(action(), 0..30)
    ) {
        let mut store = DashboardStore::with_fixture();
        let mut previous = store.snapshot().applied_recommendations;

        for action in actions {
            let clears = matches!(action, DashboardAction::LoadData | DashboardAction::ResetData);
            let current = store.dispatch(action).applied_recommendations;
            if clears {
                prop_assert!(current.is_empty());
            } else {
                prop_assert!(previous.is_subset(&current));
                prop_assert!(current.len() <= previous.len() + 1);
            }
            previous = current;
        }
    }

    #[test]
    fn prop_reset_restores_baseline(actions in prop::collection::vec(action(), 0..30)) {
        let mut store = store_after(&actions);

        prop_assert_eq!(store.dispatch(DashboardAction::ResetData), initial_state());
    }

    #[test]
    fn prop_scenario_scales_baseline_regardless_of_history(
        actions in prop::collection::vec(action(), 0..20),
        scenario in scenario()
    ) {
        let mut store = store_after(&actions);

        let state = store.dispatch(DashboardAction::SetScenario(scenario));

        prop_assert_eq!(state.current_scenario, scenario);
        prop_assert_eq!(
            state.kpis,
            scale_kpis(&initial_state().kpis, scenario, &FormatPolicy::default())
        );
    }

    #[test]
    fn prop_snapshots_are_unaffected_by_later_dispatches(
        prefix in prop::collection::vec(action(), 0..10),
        suffix in prop::collection::vec(action(), 1..10)
    ) {
        let mut store = store_after(&prefix);
        let snapshot = store.snapshot();

        for action in suffix {
            store.dispatch(action);
        }

        prop_assert_eq!(snapshot, store_after(&prefix).snapshot());
    }

    #[test]
    fn prop_action_text_round_trips(action in action()) {
        let parsed: DashboardAction = action.to_string().parse().unwrap();
        prop_assert_eq!(parsed, action);
    }
}

#[test]
fn dessert_discount_lifts_desserts_to_good() {
    let mut store = DashboardStore::with_fixture();

    let state = store.dispatch(apply("dessert_discount"));
    let desserts = state.category_named("Desserts").unwrap();

    assert_eq!(desserts.sales, 1440.0);
    assert_eq!(desserts.status.to_string(), "good");
    assert_eq!(state.applied_recommendations.len(), 1);
}

#[test]
fn hot_day_scales_sales_to_15600() {
    let mut store = DashboardStore::with_fixture();

    let state = store.dispatch(DashboardAction::SetScenario(Scenario::HotDay));

    assert_eq!(state.kpi("sales").unwrap().current, 15600.0);
}

#[test]
fn unknown_recommendation_leaves_state_unchanged() {
    let mut store = DashboardStore::with_fixture();

    assert_eq!(store.dispatch(apply("nonexistent_id")), initial_state());
}
