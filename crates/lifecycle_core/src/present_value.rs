//! Present-value discounting of cash-flow streams.
//!
//! Each flow is discounted at the rate matching its risk tag under annual
//! compounding: `amount / (1 + rate)^t`. A pure function of its inputs.

use crate::error::InvalidInputError;
use crate::model::{CashFlow, CashFlowStream, MarketAssumptions};

/// Discounted value of a single flow.
pub(crate) fn discounted_amount(
    flow: &CashFlow,
    assumptions: &MarketAssumptions,
) -> Result<f64, InvalidInputError> {
    if flow.offset_years < 0.0 {
        return Err(InvalidInputError::NegativeTimeOffset {
            offset_years: flow.offset_years,
        });
    }
    let rate = assumptions.discount_rate(flow.risk);
    if rate <= -1.0 {
        return Err(InvalidInputError::DiscountRateBelowFloor { rate });
    }
    Ok(flow.amount * (1.0 + rate).powf(-flow.offset_years))
}

/// Present value of a cash-flow stream.
///
/// An empty stream is worth exactly zero. Flows at offset zero count at
/// face value.
///
/// # Errors
/// [`InvalidInputError`] for negative time offsets or a discount rate at or
/// below -100%.
pub fn present_value(
    stream: &CashFlowStream,
    assumptions: &MarketAssumptions,
) -> Result<f64, InvalidInputError> {
    let mut total = 0.0;
    for flow in stream.flows() {
        total += discounted_amount(flow, assumptions)?;
    }
    Ok(total)
}

/// Macaulay duration of a stream: the PV-weighted average time to its
/// flows, in years.
///
/// Zero for an empty stream or one whose present value nets to zero.
/// Duration is what makes human capital behave like a long- or short-dated
/// bond in the total-wealth picture.
///
/// # Errors
/// Same input validation as [`present_value`].
pub fn macaulay_duration(
    stream: &CashFlowStream,
    assumptions: &MarketAssumptions,
) -> Result<f64, InvalidInputError> {
    let mut total_pv = 0.0;
    let mut weighted = 0.0;
    for flow in stream.flows() {
        let pv = discounted_amount(flow, assumptions)?;
        total_pv += pv;
        weighted += pv * flow.offset_years;
    }
    if total_pv == 0.0 {
        return Ok(0.0);
    }
    Ok(weighted / total_pv)
}
