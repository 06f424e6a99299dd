//! Composition of financial assets, human capital and future obligations
//! into a single total-wealth snapshot.

use tracing::debug;

use crate::error::InvalidInputError;
use crate::model::{AssetWeights, CashFlowStream, MarketAssumptions, RiskTag, TotalWealthSnapshot};
use crate::present_value::{discounted_amount, present_value};

/// Combines current financial assets with the present value of future
/// income and expenses.
///
/// `total_wealth = financial_wealth + human_capital_pv - future_expenses_pv`.
/// The result may be negative; the snapshot flags that case instead of
/// erroring so the optimizer can apply its fallback policy.
///
/// The implicit risk weights decompose human capital by the income flows'
/// risk tags: stock-like flows count toward stock, bond-like toward bond,
/// riskless toward cash, each as a fraction of `human_capital_pv`.
///
/// # Errors
/// [`InvalidInputError`] from present-value validation of either stream.
pub fn compose(
    financial_wealth: f64,
    income: &CashFlowStream,
    expenses: &CashFlowStream,
    assumptions: &MarketAssumptions,
) -> Result<TotalWealthSnapshot, InvalidInputError> {
    let human_capital_pv = present_value(income, assumptions)?;
    let future_expenses_pv = present_value(expenses, assumptions)?;
    let total_wealth = financial_wealth + human_capital_pv - future_expenses_pv;

    let implicit_risk_weights = if human_capital_pv > 0.0 {
        let mut stock_pv = 0.0;
        let mut bond_pv = 0.0;
        let mut cash_pv = 0.0;
        for flow in income.flows() {
            let pv = discounted_amount(flow, assumptions)?;
            match flow.risk {
                RiskTag::StockLike => stock_pv += pv,
                RiskTag::BondLike => bond_pv += pv,
                RiskTag::Riskless => cash_pv += pv,
            }
        }
        AssetWeights {
            stock: stock_pv / human_capital_pv,
            bond: bond_pv / human_capital_pv,
            cash: cash_pv / human_capital_pv,
        }
    } else {
        AssetWeights::ZERO
    };

    let total_wealth_negative = total_wealth < 0.0;
    if total_wealth_negative {
        debug!(
            total_wealth,
            financial_wealth, "obligations exceed total resources"
        );
    }

    Ok(TotalWealthSnapshot {
        financial_wealth,
        human_capital_pv,
        future_expenses_pv,
        total_wealth,
        implicit_risk_weights,
        total_wealth_negative,
    })
}
