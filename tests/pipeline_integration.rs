//! End-to-end tests for the profit pipeline over the bundled lookup data.

use margin_calc::calc::pipeline::{evaluate, CalcSettings, InputSnapshot};
use margin_calc::calc::{is_under_threshold, UK_VAT_THRESHOLD_GBP};
use margin_calc::data;
use margin_calc::shipping::{select_cheapest, Dimensions, ShippingOption, ShippingTable};

#[test]
fn test_single_option_table_scenario() {
    // One EMS bracket up to 2kg at 2000 JPY; a 500g package selects it.
    let table = ShippingTable::new(vec![ShippingOption::new("EMS", 2000.0, 2000.0)]);

    let selection = select_cheapest(&table, 500.0, &Dimensions::default());
    let quote = selection.quote().expect("EMS should be eligible");
    assert_eq!(quote.method, "EMS");
    assert_eq!(quote.price_jpy, 2000.0);
}

#[test]
fn test_reference_breakdown_scenario() {
    // sellingPrice=10000, costPrice=3000, shipping=2000, fee=10%
    // -> actualCost=6000, grossProfit=4000, margin=0.4
    let table = ShippingTable::new(vec![ShippingOption::new("EMS", 2000.0, 2000.0)]);

    let snapshot = InputSnapshot {
        cost_price: Some(3000.0),
        selling_price: Some(10000.0),
        weight_grams: Some(500.0),
        dimensions: Dimensions::default(),
        category_fee_percent: Some(10.0),
        exchange_rate_gbp_to_jpy: Some(190.0),
    };

    let eval = evaluate(&table, &snapshot, &CalcSettings::default());
    let breakdown = eval.breakdown.expect("all inputs present");

    assert_eq!(breakdown.category_fee_jpy, 1000.0);
    assert_eq!(breakdown.actual_cost_jpy, 6000.0);
    assert_eq!(breakdown.gross_profit_jpy, 4000.0);
    assert_eq!(breakdown.profit_margin, 0.4);
}

#[test]
fn test_vat_boundary_at_fixed_rate() {
    let table = ShippingTable::new(vec![ShippingOption::new("EMS", 2000.0, 2000.0)]);
    let rate = 190.0;

    let mut snapshot = InputSnapshot {
        cost_price: Some(3000.0),
        selling_price: Some(20000.0), // ~105.3 GBP, under threshold
        weight_grams: Some(500.0),
        dimensions: Dimensions::default(),
        category_fee_percent: Some(10.0),
        exchange_rate_gbp_to_jpy: Some(rate),
    };

    let eval = evaluate(&table, &snapshot, &CalcSettings::default());
    assert!(eval.vat_applies);
    assert!(eval.detail.unwrap().vat_jpy > 0.0);

    snapshot.selling_price = Some(30000.0); // ~157.9 GBP, over threshold
    let eval = evaluate(&table, &snapshot, &CalcSettings::default());
    assert!(!eval.vat_applies);
    assert_eq!(eval.detail.unwrap().vat_jpy, 0.0);
}

#[test]
fn test_threshold_constant() {
    assert_eq!(UK_VAT_THRESHOLD_GBP, 135.0);
    assert!(is_under_threshold(135.0));
    assert!(!is_under_threshold(135.01));
}

#[test]
fn test_bundled_data_end_to_end() {
    let table = data::load_shipping_table(None).unwrap();
    let fees = data::load_category_fees(None).unwrap();

    let fee_percent = fees.iter().find(|f| f.label == "Electronics").unwrap().value;

    let snapshot = InputSnapshot {
        cost_price: Some(8000.0),
        selling_price: Some(24000.0),
        weight_grams: Some(1500.0),
        dimensions: Dimensions::new(40.0, 30.0, 20.0),
        category_fee_percent: Some(fee_percent),
        exchange_rate_gbp_to_jpy: Some(190.0),
    };

    let eval = evaluate(&table, &snapshot, &CalcSettings::default());

    // 1.5kg within the ePacket bracket and its 60cm caps.
    let quote = eval.shipping.as_ref().unwrap().quote().unwrap();
    assert_eq!(quote.method, "ePacket");

    let breakdown = eval.breakdown.as_ref().unwrap();
    assert_eq!(breakdown.shipping_jpy, 2100.0);
    assert!(breakdown.gross_profit_jpy > 0.0);

    // 24000 / 190 ≈ 126.3 GBP, still under the threshold.
    assert!(eval.vat_applies);

    let detail = eval.detail.as_ref().unwrap();
    assert!(detail.net_profit_jpy < breakdown.gross_profit_jpy);
}

#[test]
fn test_heavy_oversize_package_has_no_method() {
    let table = data::load_shipping_table(None).unwrap();

    let snapshot = InputSnapshot {
        cost_price: Some(8000.0),
        selling_price: Some(24000.0),
        weight_grams: Some(30000.0),
        dimensions: Dimensions::new(200.0, 100.0, 100.0),
        category_fee_percent: Some(10.0),
        exchange_rate_gbp_to_jpy: Some(190.0),
    };

    let eval = evaluate(&table, &snapshot, &CalcSettings::default());
    assert!(eval.shipping.as_ref().unwrap().is_none_eligible());
    assert!(eval.breakdown.is_none());
    assert!(eval.detail.is_none());
}

#[test]
fn test_pipeline_idempotent_over_bundled_data() {
    let table = data::load_shipping_table(None).unwrap();

    let snapshot = InputSnapshot {
        cost_price: Some(5000.0),
        selling_price: Some(15000.0),
        weight_grams: Some(900.0),
        dimensions: Dimensions::new(30.0, 20.0, 10.0),
        category_fee_percent: Some(13.6),
        exchange_rate_gbp_to_jpy: Some(185.5),
    };
    let settings = CalcSettings::default();

    let first = evaluate(&table, &snapshot, &settings);
    let second = evaluate(&table, &snapshot, &settings);
    assert_eq!(first, second);
}
