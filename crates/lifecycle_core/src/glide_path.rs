//! Glide-path derivation: the optimizer applied at every age along the
//! horizon.
//!
//! Each year the remaining income and expense streams shrink, human capital
//! melts toward zero, and the optimal financial allocation is recomputed
//! against wealth carried forward at geometric expected returns. The
//! falling risk allocation over time is an emergent property of that loop,
//! not a hardcoded rule.

use crate::error::{EngineError, InvalidInputError};
use crate::model::{
    AllocationConstraints, AssetClass, GlidePathPoint, InvestorProfile, MarketAssumptions,
};
use crate::optimizer::optimize;
use crate::total_wealth::compose;

/// One [`GlidePathPoint`] per year of age from `current_age` through
/// `terminal_age`, in increasing age order.
///
/// A zero-length horizon (current age equals terminal age) yields exactly
/// one point; with no working years left the income stream is empty, so
/// that point is the optimizer's output against financial wealth alone.
///
/// # Errors
/// - [`InvalidInputError::AgesOutOfOrder`] when the horizon is inverted.
/// - Any optimizer or present-value error for the given assumptions.
pub fn generate_glide_path(
    profile: &InvestorProfile,
    assumptions: &MarketAssumptions,
    constraints: &AllocationConstraints,
) -> Result<Vec<GlidePathPoint>, EngineError> {
    if profile.terminal_age < profile.current_age {
        return Err(InvalidInputError::AgesOutOfOrder {
            current_age: profile.current_age,
            terminal_age: profile.terminal_age,
        }
        .into());
    }

    let income = profile.income_stream();
    let expenses = profile.expense_stream();

    let stock_growth = assumptions.geometric_return(AssetClass::Stock);
    let bond_growth = assumptions.geometric_return(AssetClass::Bond);
    let cash_growth = assumptions.geometric_return(AssetClass::Cash);

    let mut financial_wealth = profile.financial_wealth;
    let mut path = Vec::with_capacity((profile.terminal_age - profile.current_age + 1) as usize);

    for age in profile.current_age..=profile.terminal_age {
        let elapsed = f64::from(age - profile.current_age);
        let income_remaining = income.truncate_before(elapsed);
        let expenses_remaining = expenses.truncate_before(elapsed);

        let snapshot = compose(financial_wealth, &income_remaining, &expenses_remaining, assumptions)?;
        let allocation = optimize(&snapshot, assumptions, profile.risk_aversion, constraints)?;

        path.push(GlidePathPoint {
            age,
            years_to_retirement: profile.retirement_age.saturating_sub(age),
            snapshot,
            allocation,
        });

        // Carry wealth into next year: geometric compounding at the chosen
        // allocation plus this year's net savings or withdrawal, floored at
        // zero.
        let portfolio_growth = allocation.stock * stock_growth
            + allocation.bond * bond_growth
            + allocation.cash * cash_growth;
        financial_wealth = (financial_wealth * (1.0 + portfolio_growth)
            + profile.net_cash_flow_at(age))
        .max(0.0);
    }

    Ok(path)
}
