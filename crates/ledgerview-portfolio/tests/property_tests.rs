//! Property-based tests for allocation invariants.
//!
//! These tests verify properties that should always hold:
//! - Weights sum to 100% whenever the total value is positive
//! - Groups are sorted by value and cover every holding
//! - Pie slices are contiguous and close the circle
//! - Sector mapping is total
//! - Risk labels follow the largest group share

use ledgerview_portfolio::prelude::*;
use proptest::prelude::*;

// =============================================================================
// GENERATORS
// =============================================================================

const TYPE_TAGS: [&str; 6] = ["stock", "crypto", "etf", "bond", "reit", "option"];

fn holding_strategy() -> impl Strategy<Value = Holding> {
    (
        0usize..TYPE_TAGS.len(),
        0i64..1_000_000,
        0i64..10_000,
        0i64..1_000_000,
    )
        .prop_map(|(tag, price_cents, qty, cost_cents)| Holding {
            id: format!("H{tag}-{price_cents}-{qty}"),
            symbol: format!("S{tag}"),
            name: None,
            asset_type: TYPE_TAGS[tag].to_string(),
            current_price: Decimal::new(price_cents, 2),
            quantity: Decimal::from(qty),
            average_cost: Decimal::new(cost_cents, 2),
        })
}

fn holdings_strategy() -> impl Strategy<Value = Vec<Holding>> {
    prop::collection::vec(holding_strategy(), 0..60)
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn property_weights_sum_to_100(holdings in holdings_strategy()) {
        let groups = aggregate(&holdings, classify_by_sector).unwrap();
        let total_value: Decimal = holdings.iter().map(Holding::market_value).sum();

        let total_pct: f64 = groups.iter().map(|g| g.percentage_of_total).sum();
        if total_value.is_zero() {
            prop_assert!(groups.iter().all(|g| g.percentage_of_total == 0.0));
        } else {
            prop_assert!((total_pct - 100.0).abs() <= 100.0 * 1e-9, "sum was {}", total_pct);
        }
    }

    #[test]
    fn property_groups_sorted_and_cover_all_holdings(holdings in holdings_strategy()) {
        let groups = aggregate(&holdings, classify_by_type).unwrap();

        for pair in groups.windows(2) {
            prop_assert!(pair[0].total_value >= pair[1].total_value);
        }

        let counted: usize = groups.iter().map(|g| g.holding_count).sum();
        prop_assert_eq!(counted, holdings.len());
        prop_assert!(groups.iter().all(|g| g.holding_count >= 1));

        for (rank, g) in groups.iter().enumerate() {
            prop_assert_eq!(g.render_color, RenderColor::for_rank(rank));
            prop_assert!((0.0..=100.0).contains(&g.percentage_of_total));
        }
    }

    #[test]
    fn property_aggregate_idempotent(holdings in holdings_strategy()) {
        let first = aggregate(&holdings, classify_by_sector).unwrap();
        let second = aggregate(&holdings, classify_by_sector).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn property_pie_closes_circle(holdings in holdings_strategy()) {
        let groups = aggregate(&holdings, classify_by_sector).unwrap();
        let slices = compute_pie_slices(&groups);
        let total_value: Decimal = holdings.iter().map(Holding::market_value).sum();

        prop_assert_eq!(slices.len(), groups.len());
        if let Some(first) = slices.first() {
            prop_assert_eq!(first.start_angle_degrees, 0.0);
        }
        for pair in slices.windows(2) {
            prop_assert_eq!(pair[0].end_angle_degrees, pair[1].start_angle_degrees);
        }
        if !total_value.is_zero() {
            let end = slices.last().map_or(0.0, |s| s.end_angle_degrees);
            prop_assert!((end - 360.0).abs() < 1e-6, "end was {}", end);
        }
    }

    #[test]
    fn property_sector_mapping_is_total(tag in "\\PC*") {
        let expected = match tag.as_str() {
            "stock" => "Equity",
            "crypto" => "Cryptocurrency",
            "etf" => "Exchange Traded Fund",
            "bond" => "Fixed Income",
            _ => "Other",
        };
        prop_assert_eq!(Sector::from_type_tag(&tag).name(), expected);
    }

    #[test]
    fn property_risk_follows_largest_share(pcts in prop::collection::vec(0.0f64..=100.0, 0..10)) {
        let groups: Vec<AllocationGroup> = pcts
            .iter()
            .enumerate()
            .map(|(i, &p)| AllocationGroup {
                key: format!("G{i}"),
                total_value: Decimal::ONE,
                percentage_of_total: p,
                holding_count: 1,
                render_color: RenderColor::for_rank(i),
            })
            .collect();

        let max = pcts.iter().copied().fold(0.0f64, f64::max);
        let expected = if max > 40.0 {
            RiskAssessment::High
        } else if max > 25.0 {
            RiskAssessment::Medium
        } else {
            RiskAssessment::Low
        };
        prop_assert_eq!(assess_risk(&groups), expected);
    }

    #[test]
    fn property_performers_bounded_and_ordered(holdings in holdings_strategy(), n in 0usize..80) {
        let top = top_performers(&holdings, n);
        let worst = worst_performers(&holdings, n);

        prop_assert_eq!(top.len(), n.min(holdings.len()));
        prop_assert_eq!(worst.len(), n.min(holdings.len()));
        for pair in top.windows(2) {
            prop_assert!(pair[0].gain_loss_percent >= pair[1].gain_loss_percent);
        }
        for pair in worst.windows(2) {
            prop_assert!(pair[0].gain_loss_percent <= pair[1].gain_loss_percent);
        }
    }
}

#[test]
fn property_negative_inputs_always_rejected() {
    for qty in [-1i64, -100, -1_000_000] {
        let holdings = vec![Holding {
            id: "NEG".to_string(),
            symbol: "NEG".to_string(),
            name: None,
            asset_type: "stock".to_string(),
            current_price: dec!(10),
            quantity: Decimal::from(qty),
            average_cost: dec!(10),
        }];
        assert!(aggregate(&holdings, classify_by_type)
            .unwrap_err()
            .is_invalid_input());
        assert!(summarize(&holdings).unwrap_err().is_invalid_input());
    }
}
