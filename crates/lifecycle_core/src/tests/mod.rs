//! Integration tests for the lifecycle calculation engine
//!
//! Tests are organized by topic:
//! - `math` - Cholesky factorization, SPD solves, correlated draws
//! - `present_value` - Discounting and duration of cash-flow streams
//! - `total_wealth` - Total-wealth composition and implicit risk split
//! - `optimizer` - Mean-variance weights, constraints, degenerate policy
//! - `glide_path` - Horizon loop and emergent de-risking
//! - `projection` - Deterministic and Monte Carlo wealth projection

mod math;
mod present_value;

use crate::model::{InvestorProfile, MarketAssumptions};

/// The worked example used throughout the glide-path and projection tests:
/// a 25-year-old with stable income, retiring at 65, planning to 85.
pub(crate) fn default_profile() -> InvestorProfile {
    InvestorProfile {
        current_age: 25,
        retirement_age: 65,
        terminal_age: 85,
        financial_wealth: 50_000.0,
        annual_income: 150_000.0,
        working_expenses: 80_000.0,
        retirement_expenses: 60_000.0,
        risk_aversion: 2.0,
        income_beta: 0.0,
        allow_leverage: false,
    }
}

/// Market assumptions with every rate and volatility zeroed, so present
/// values equal raw amounts. Handy for exact-arithmetic assertions.
pub(crate) fn flat_market() -> MarketAssumptions {
    MarketAssumptions {
        stock_return: 0.0,
        bond_return: 0.0,
        cash_return: 0.0,
        stock_volatility: 0.0,
        bond_volatility: 0.0,
        cash_volatility: 0.0,
        stock_bond_correlation: 0.0,
        stock_cash_correlation: 0.0,
        bond_cash_correlation: 0.0,
        riskless_rate: 0.0,
    }
}
