//! Mean-variance optimization with a riskless asset and a human-capital
//! adjustment.
//!
//! Maximizes `w'mu - (gamma/2) w' sigma w` over the risky assets in closed
//! form, sizes the answer against total wealth, then backs out the
//! financial-portfolio weights that realize it once human capital's
//! implicit exposure is netted off.

use tracing::debug;

use crate::error::{EngineError, InvalidInputError, SingularCovarianceError};
use crate::math::solve_spd;
use crate::model::{
    AllocationConstraints, AllocationWeights, AssetClass, MarketAssumptions, TotalWealthSnapshot,
};

const SPD_TOLERANCE: f64 = 1e-12;

/// Optimal financial-portfolio weights for one total-wealth snapshot.
///
/// Degenerate inputs (no financial wealth, or the negative-total-wealth
/// flag) return the constraints' fallback allocation; that is policy, not
/// an error.
///
/// # Errors
/// - [`InvalidInputError::NonPositiveRiskAversion`] when `risk_aversion <= 0`.
/// - [`SingularCovarianceError`] when the risky covariance matrix has no
///   Cholesky factor.
pub fn optimize(
    snapshot: &TotalWealthSnapshot,
    assumptions: &MarketAssumptions,
    risk_aversion: f64,
    constraints: &AllocationConstraints,
) -> Result<AllocationWeights, EngineError> {
    if risk_aversion <= 0.0 {
        return Err(InvalidInputError::NonPositiveRiskAversion { risk_aversion }.into());
    }

    if snapshot.financial_wealth <= 0.0 || snapshot.total_wealth_negative {
        debug!(
            financial_wealth = snapshot.financial_wealth,
            total_wealth_negative = snapshot.total_wealth_negative,
            "degenerate snapshot, returning fallback allocation"
        );
        return Ok(constraints.fallback);
    }

    // Closed-form unconstrained optimum on total wealth:
    // w = (1/gamma) * sigma^-1 * mu, solved via Cholesky.
    let mu = [
        assumptions.excess_return(AssetClass::Stock),
        assumptions.excess_return(AssetClass::Bond),
    ];
    let sigma = assumptions.risky_covariance();
    let base = solve_spd(&sigma, &mu, SPD_TOLERANCE).ok_or_else(|| SingularCovarianceError {
        covariance: sigma.iter().map(|row| row.to_vec()).collect(),
    })?;
    let total_stock = base[0] / risk_aversion;
    let total_bond = base[1] / risk_aversion;

    // Dollar targets are sized against total wealth (floored at zero), but
    // must be realized through financial assets alone, net of the exposure
    // already embedded in human capital.
    let wealth = snapshot.optimization_wealth();
    let human_capital = snapshot.human_capital_pv.max(0.0);
    let implicit = snapshot.implicit_risk_weights;

    let mut stock = (total_stock * wealth - implicit.stock * human_capital)
        / snapshot.financial_wealth;
    let mut bond =
        (total_bond * wealth - implicit.bond * human_capital) / snapshot.financial_wealth;

    stock = stock.clamp(constraints.weight_min, constraints.weight_max);
    bond = bond.clamp(constraints.weight_min, constraints.weight_max);

    // Combined risky exposure respects the leverage cap; scale both risky
    // weights down proportionally if it binds.
    let risky = stock + bond;
    if risky > constraints.leverage_cap && risky > 0.0 {
        let scale = constraints.leverage_cap / risky;
        stock *= scale;
        bond *= scale;
    }

    // Residual goes to cash so the weights sum to exactly one.
    let cash = 1.0 - stock - bond;

    Ok(AllocationWeights { stock, bond, cash })
}
