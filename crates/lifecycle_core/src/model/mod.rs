mod cash_flow;
mod market;
mod profile;
mod results;

pub use cash_flow::{CashFlow, CashFlowStream, RiskTag};
pub use market::{AssetClass, MarketAssumptions};
pub use profile::{AllocationConstraints, DEFAULT_LEVERAGE_CAP, InvestorProfile};
pub use results::{
    AllocationWeights, AssetWeights, GlidePathPoint, ProjectionPath, ProjectionResult,
    TotalWealthSnapshot, WEIGHT_SUM_TOLERANCE,
};
