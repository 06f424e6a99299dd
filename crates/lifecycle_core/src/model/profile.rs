//! Investor inputs and allocation constraints.

use serde::{Deserialize, Serialize};

use crate::model::cash_flow::{CashFlowStream, RiskTag};
use crate::model::results::AllocationWeights;

/// Leverage cap applied when the investor enables leverage. Risky weights
/// may then sum to at most this multiple of financial wealth, funded by a
/// negative cash position.
pub const DEFAULT_LEVERAGE_CAP: f64 = 2.0;

/// Everything the engine needs to know about one investor.
///
/// Ages are whole years; the horizon is discretized one point per year of
/// age from `current_age` through `terminal_age`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InvestorProfile {
    pub current_age: u32,
    pub retirement_age: u32,
    /// Planning horizon end (life expectancy).
    pub terminal_age: u32,
    /// Current investable financial assets.
    pub financial_wealth: f64,
    /// Annual labor income during working years, constant in real terms.
    pub annual_income: f64,
    /// Annual expenses while working.
    pub working_expenses: f64,
    /// Annual expenses in retirement.
    pub retirement_expenses: f64,
    /// Coefficient of relative risk aversion (gamma).
    pub risk_aversion: f64,
    /// Fraction of labor income that co-moves with the stock market.
    /// Zero for stable income, around 0.4 for finance-sector income.
    pub income_beta: f64,
    /// When set, risky weights may exceed 100% of financial wealth up to
    /// [`DEFAULT_LEVERAGE_CAP`], funded by borrowing at the cash rate.
    pub allow_leverage: bool,
}

impl InvestorProfile {
    /// Years of labor income remaining. Zero once retired.
    #[must_use]
    pub fn years_working(&self) -> u32 {
        self.retirement_age.saturating_sub(self.current_age)
    }

    /// Years of retirement within the planning horizon.
    #[must_use]
    pub fn years_retired(&self) -> u32 {
        self.terminal_age
            .saturating_sub(self.retirement_age.max(self.current_age))
    }

    /// Future labor income as a cash-flow stream, offsets measured from the
    /// current age. Income splits into a bond-like part and a stock-like
    /// part according to `income_beta`.
    #[must_use]
    pub fn income_stream(&self) -> CashFlowStream {
        let years = self.years_working();
        let beta = self.income_beta.clamp(0.0, 1.0);

        let mut flows = CashFlowStream::annuity(self.annual_income * (1.0 - beta), years, RiskTag::BondLike)
            .flows()
            .to_vec();
        if beta > 0.0 {
            flows.extend_from_slice(
                CashFlowStream::annuity(self.annual_income * beta, years, RiskTag::StockLike)
                    .flows(),
            );
        }
        CashFlowStream::new(flows)
    }

    /// Future consumption as a cash-flow stream: working expenses for the
    /// remaining working years, then retirement expenses until the terminal
    /// age. Consumption is a fixed obligation, so every flow is riskless.
    #[must_use]
    pub fn expense_stream(&self) -> CashFlowStream {
        let working = self.years_working();
        let retired = self.years_retired();

        let mut flows = CashFlowStream::annuity(self.working_expenses, working, RiskTag::Riskless)
            .flows()
            .to_vec();
        flows.extend_from_slice(
            CashFlowStream::deferred_annuity(
                self.retirement_expenses,
                working,
                retired,
                RiskTag::Riskless,
            )
            .flows(),
        );
        CashFlowStream::new(flows)
    }

    /// Net savings (positive) or withdrawal (negative) during the year the
    /// investor is `age` years old.
    #[must_use]
    pub fn net_cash_flow_at(&self, age: u32) -> f64 {
        if age < self.retirement_age {
            self.annual_income - self.working_expenses
        } else {
            -self.retirement_expenses
        }
    }

    /// Allocation constraints implied by the leverage toggle.
    #[must_use]
    pub fn constraints(&self) -> AllocationConstraints {
        if self.allow_leverage {
            AllocationConstraints::with_leverage(DEFAULT_LEVERAGE_CAP)
        } else {
            AllocationConstraints::default()
        }
    }
}

/// Per-weight bounds and the combined-risky-weight cap applied when mapping
/// optimizer output back onto the financial portfolio.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AllocationConstraints {
    /// Lower bound per risky weight. Zero forbids shorting.
    pub weight_min: f64,
    /// Upper bound per risky weight.
    pub weight_max: f64,
    /// Cap on stock + bond combined. Above 1.0 permits a negative cash
    /// position (leverage).
    pub leverage_cap: f64,
    /// Allocation returned for degenerate inputs (no financial wealth, or
    /// negative total wealth).
    pub fallback: AllocationWeights,
}

impl AllocationConstraints {
    /// Constraints permitting risky exposure up to `cap` times financial
    /// wealth, funded by negative cash.
    #[must_use]
    pub fn with_leverage(cap: f64) -> Self {
        Self {
            weight_min: 0.0,
            weight_max: cap,
            leverage_cap: cap,
            fallback: AllocationWeights::all_cash(),
        }
    }
}

impl Default for AllocationConstraints {
    /// No shorting, no leverage, all-cash fallback.
    fn default() -> Self {
        Self {
            weight_min: 0.0,
            weight_max: 1.0,
            leverage_cap: 1.0,
            fallback: AllocationWeights::all_cash(),
        }
    }
}
