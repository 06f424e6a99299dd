//! Tests for present-value discounting and Macaulay duration.

use crate::error::InvalidInputError;
use crate::model::{CashFlow, CashFlowStream, MarketAssumptions, RiskTag};
use crate::present_value::{macaulay_duration, present_value};

use super::flat_market;

/// An empty stream is worth exactly zero.
#[test]
fn test_empty_stream_is_zero() {
    let assumptions = MarketAssumptions::default();
    let pv = present_value(&CashFlowStream::empty(), &assumptions).unwrap();
    assert_eq!(pv, 0.0);
}

/// A flow at offset zero counts at face value, whatever its risk tag.
#[test]
fn test_flow_at_time_zero_is_undiscounted() {
    let assumptions = MarketAssumptions::default();
    let stream = CashFlowStream::new(vec![CashFlow {
        offset_years: 0.0,
        amount: 50_000.0,
        risk: RiskTag::BondLike,
    }]);

    let pv = present_value(&stream, &assumptions).unwrap();
    assert_eq!(pv, 50_000.0);
}

/// An ordinary annuity matches the closed-form factor
/// (1 - (1 + r)^-n) / r.
#[test]
fn test_annuity_matches_closed_form() {
    let assumptions = MarketAssumptions::default(); // riskless rate 2%
    let payment = 100_000.0;
    let years = 50;

    let stream = CashFlowStream::annuity(payment, years, RiskTag::Riskless);
    let pv = present_value(&stream, &assumptions).unwrap();

    let r = assumptions.riskless_rate;
    let expected = payment * (1.0 - (1.0 + r).powi(-(years as i32))) / r;
    assert!(
        (pv - expected).abs() < 1e-6,
        "expected {expected}, got {pv}"
    );
}

/// At a zero rate the annuity is just the sum of its payments.
#[test]
fn test_zero_rate_annuity_is_simple_sum() {
    let stream = CashFlowStream::annuity(10_000.0, 30, RiskTag::Riskless);
    let pv = present_value(&stream, &flat_market()).unwrap();
    assert!((pv - 300_000.0).abs() < 1e-9);
}

/// Non-negative amounts and a rate above -100% can never produce a
/// negative present value.
#[test]
fn test_non_negative_amounts_give_non_negative_pv() {
    let assumptions = MarketAssumptions::default();
    let streams = [
        CashFlowStream::empty(),
        CashFlowStream::annuity(1.0, 80, RiskTag::StockLike),
        CashFlowStream::new(vec![
            CashFlow {
                offset_years: 0.5,
                amount: 0.0,
                risk: RiskTag::Riskless,
            },
            CashFlow {
                offset_years: 12.0,
                amount: 7_500.0,
                risk: RiskTag::BondLike,
            },
        ]),
    ];

    for stream in &streams {
        let pv = present_value(stream, &assumptions).unwrap();
        assert!(pv >= 0.0, "pv {pv} for stream {stream:?}");
    }
}

/// Risky tags discount harder than the riskless rate, so risky income is
/// worth less today.
#[test]
fn test_risky_income_discounts_harder() {
    let assumptions = MarketAssumptions::default();
    let riskless = present_value(
        &CashFlowStream::annuity(100_000.0, 35, RiskTag::Riskless),
        &assumptions,
    )
    .unwrap();
    let bond_like = present_value(
        &CashFlowStream::annuity(100_000.0, 35, RiskTag::BondLike),
        &assumptions,
    )
    .unwrap();
    let stock_like = present_value(
        &CashFlowStream::annuity(100_000.0, 35, RiskTag::StockLike),
        &assumptions,
    )
    .unwrap();

    assert!(riskless > bond_like, "{riskless} vs {bond_like}");
    assert!(bond_like > stock_like, "{bond_like} vs {stock_like}");
}

/// Negative time offsets are malformed input, not a silent skip.
#[test]
fn test_negative_offset_is_rejected() {
    let assumptions = MarketAssumptions::default();
    let stream = CashFlowStream::new(vec![CashFlow {
        offset_years: -1.0,
        amount: 100.0,
        risk: RiskTag::Riskless,
    }]);

    let err = present_value(&stream, &assumptions).unwrap_err();
    assert!(matches!(
        err,
        InvalidInputError::NegativeTimeOffset { .. }
    ));
}

/// A discount rate at or below -100% has no finite discount factor.
#[test]
fn test_rate_at_or_below_minus_one_is_rejected() {
    let assumptions = MarketAssumptions {
        riskless_rate: -1.5,
        ..MarketAssumptions::default()
    };
    let stream = CashFlowStream::annuity(100.0, 5, RiskTag::Riskless);

    let err = present_value(&stream, &assumptions).unwrap_err();
    assert!(matches!(
        err,
        InvalidInputError::DiscountRateBelowFloor { .. }
    ));
}

/// Annuity duration matches the closed form
/// (1 + r)/r - n / ((1 + r)^n - 1).
#[test]
fn test_annuity_duration_matches_closed_form() {
    let assumptions = MarketAssumptions::default();
    let years = 35;

    let stream = CashFlowStream::annuity(1.0, years, RiskTag::Riskless);
    let duration = macaulay_duration(&stream, &assumptions).unwrap();

    let r = assumptions.riskless_rate;
    let n = f64::from(years);
    let expected = (1.0 + r) / r - n / ((1.0 + r).powf(n) - 1.0);
    assert!(
        (duration - expected).abs() < 1e-9,
        "expected {expected}, got {duration}"
    );
}

/// Duration of an empty stream is zero.
#[test]
fn test_empty_stream_duration_is_zero() {
    let assumptions = MarketAssumptions::default();
    let duration = macaulay_duration(&CashFlowStream::empty(), &assumptions).unwrap();
    assert_eq!(duration, 0.0);
}

/// At a zero rate, duration is the simple average payment time
/// (n + 1) / 2.
#[test]
fn test_zero_rate_duration_is_average_time() {
    let stream = CashFlowStream::annuity(5_000.0, 35, RiskTag::Riskless);
    let duration = macaulay_duration(&stream, &flat_market()).unwrap();
    assert!((duration - 18.0).abs() < 1e-9);
}
