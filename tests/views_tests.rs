mod common;

use common::{mixed, scenario};
use pretty_assertions::assert_eq;
use sales_dash::aggregator::{Metric, MonthKey};
use sales_dash::records::{FilterCriteria, Price, RecordStore, RegionTable};
use sales_dash::views::{assemble_views, to_report, SalesContext};

#[test]
fn test_scenario_views() {
    let views = assemble_views(&scenario());

    let states: Vec<(&str, u64)> = views
        .revenue_by_state
        .iter()
        .map(|r| (r.state.as_str(), r.metrics.sum_price.cents()))
        .collect();
    assert_eq!(states, vec![("RJ", 20000), ("SP", 15000)]);

    let categories: Vec<&str> = views.revenue_by_category.iter().map(|r| r.key.as_str()).collect();
    assert_eq!(categories, vec!["A", "B"]);

    let top = views.top_sellers(Metric::SumPrice, 1);
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].key, "X");
    assert_eq!(top[0].metrics.sum_price, Price::from_cents(30000));

    assert_eq!(views.totals.revenue, Price::from_cents(35000));
    assert_eq!(views.totals.sales, 3);
}

#[test]
fn test_state_views_carry_coordinates() {
    let views = assemble_views(&scenario());
    let sp = views
        .sales_by_state
        .iter()
        .find(|r| r.state == "SP")
        .unwrap();

    assert_eq!(sp.metrics.count, 2);
    assert_eq!(sp.coordinates.latitude, -22.19);
    assert!(views.missing_geo.is_empty());
}

#[test]
fn test_monthly_views_are_chronological() {
    let views = assemble_views(&mixed());
    let keys: Vec<MonthKey> = views.revenue_by_month.iter().map(|r| r.key()).collect();

    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);
    assert_eq!(keys.first(), Some(&MonthKey::new(2020, 1)));
    assert_eq!(keys.last(), Some(&MonthKey::new(2023, 5)));
    // Jan 2020 through May 2023 inclusive
    assert_eq!(keys.len(), 41);
    assert_eq!(views.sales_by_month, views.revenue_by_month);
}

#[test]
fn test_unknown_region_yields_empty_views() {
    let store = RecordStore::new(mixed());
    let context = SalesContext::new(
        &store,
        FilterCriteria::new().with_region("Atlantis"),
        &RegionTable::brazil(),
    );
    let views = context.views();

    assert!(views.is_empty());
    assert!(views.revenue_by_state.is_empty());
    assert!(views.sales_by_state.is_empty());
    assert!(views.revenue_by_month.is_empty());
    assert!(views.revenue_by_category.is_empty());
    assert!(views.sales_by_category.is_empty());
    assert!(views.sellers.is_empty());
    assert!(views.top_states(Metric::Count, 5).is_empty());
}

#[test]
fn test_region_year_and_seller_selection() {
    let store = RecordStore::new(mixed());
    let criteria = FilterCriteria::new()
        .with_region("Sudeste")
        .with_year(Some(2020))
        .with_sellers(["Mariana Ferreira"]);
    let views = SalesContext::new(&store, criteria, &RegionTable::brazil()).views();

    assert_eq!(views.totals.sales, 1);
    assert_eq!(views.totals.revenue, Price::from_cents(130497));
    assert_eq!(views.revenue_by_state[0].state, "SP");
}

#[test]
fn test_report_rankings() {
    let store = RecordStore::new(mixed());
    let context = SalesContext::new(&store, FilterCriteria::new(), &RegionTable::brazil());
    let report = to_report(&context, Default::default(), 2, 3);

    let sellers: Vec<&str> = report
        .top_sellers_by_revenue
        .iter()
        .map(|r| r.key.as_str())
        .collect();
    assert_eq!(sellers, vec!["Mariana Ferreira", "Camila Ribeiro"]);

    // Camila, Mariana and Thiago each have two sales; ties break alphabetically
    let by_count: Vec<&str> = report
        .top_sellers_by_count
        .iter()
        .map(|r| r.key.as_str())
        .collect();
    assert_eq!(by_count, vec!["Camila Ribeiro", "Mariana Ferreira"]);

    let states: Vec<&str> = report
        .top_states_by_revenue
        .iter()
        .map(|r| r.state.as_str())
        .collect();
    assert_eq!(states, vec!["SP", "MG", "BA"]);
}
