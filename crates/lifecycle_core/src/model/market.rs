//! Capital market assumptions for the three-asset universe.
//!
//! Expected returns, volatilities and pairwise correlations for stock, bond
//! and cash, plus the riskless discount rate. Supplied by the caller's
//! configuration layer and treated as read-only by every calculation.

use serde::{Deserialize, Serialize};

use crate::model::cash_flow::RiskTag;

/// The three asset classes the engine allocates across.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetClass {
    Stock,
    Bond,
    Cash,
}

impl AssetClass {
    /// All classes in covariance-matrix order.
    pub const ALL: [AssetClass; 3] = [AssetClass::Stock, AssetClass::Bond, AssetClass::Cash];
}

/// Expected annual return and volatility per asset class, pairwise
/// correlations, and the riskless discount rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketAssumptions {
    pub stock_return: f64,
    pub bond_return: f64,
    pub cash_return: f64,
    pub stock_volatility: f64,
    pub bond_volatility: f64,
    pub cash_volatility: f64,
    pub stock_bond_correlation: f64,
    pub stock_cash_correlation: f64,
    pub bond_cash_correlation: f64,
    /// Real riskless rate used for discounting riskless flows.
    pub riskless_rate: f64,
}

impl MarketAssumptions {
    // Baseline assumptions: 2% real riskless rate, 4% stock / 1% bond
    // arithmetic excess returns, 18% volatility on both risky assets,
    // zero cross-correlations.
    pub const BASELINE: MarketAssumptions = MarketAssumptions {
        stock_return: 0.06,
        bond_return: 0.03,
        cash_return: 0.02,
        stock_volatility: 0.18,
        bond_volatility: 0.18,
        cash_volatility: 0.0,
        stock_bond_correlation: 0.0,
        stock_cash_correlation: 0.0,
        bond_cash_correlation: 0.0,
        riskless_rate: 0.02,
    };

    #[must_use]
    pub fn expected_return(&self, asset: AssetClass) -> f64 {
        match asset {
            AssetClass::Stock => self.stock_return,
            AssetClass::Bond => self.bond_return,
            AssetClass::Cash => self.cash_return,
        }
    }

    #[must_use]
    pub fn volatility(&self, asset: AssetClass) -> f64 {
        match asset {
            AssetClass::Stock => self.stock_volatility,
            AssetClass::Bond => self.bond_volatility,
            AssetClass::Cash => self.cash_volatility,
        }
    }

    /// Expected return over the riskless rate.
    #[must_use]
    pub fn excess_return(&self, asset: AssetClass) -> f64 {
        self.expected_return(asset) - self.riskless_rate
    }

    /// Geometric (compounding) return approximation: E[R] - sigma^2 / 2.
    #[must_use]
    pub fn geometric_return(&self, asset: AssetClass) -> f64 {
        let sigma = self.volatility(asset);
        self.expected_return(asset) - 0.5 * sigma * sigma
    }

    #[must_use]
    pub fn correlation(&self, a: AssetClass, b: AssetClass) -> f64 {
        use AssetClass::{Bond, Cash, Stock};
        match (a, b) {
            (Stock, Stock) | (Bond, Bond) | (Cash, Cash) => 1.0,
            (Stock, Bond) | (Bond, Stock) => self.stock_bond_correlation,
            (Stock, Cash) | (Cash, Stock) => self.stock_cash_correlation,
            (Bond, Cash) | (Cash, Bond) => self.bond_cash_correlation,
        }
    }

    #[must_use]
    pub fn covariance_of(&self, a: AssetClass, b: AssetClass) -> f64 {
        self.correlation(a, b) * self.volatility(a) * self.volatility(b)
    }

    /// Full 3x3 covariance matrix in [stock, bond, cash] order.
    #[must_use]
    pub fn covariance(&self) -> [[f64; 3]; 3] {
        let mut cov = [[0.0; 3]; 3];
        for (i, a) in AssetClass::ALL.iter().enumerate() {
            for (j, b) in AssetClass::ALL.iter().enumerate() {
                cov[i][j] = self.covariance_of(*a, *b);
            }
        }
        cov
    }

    /// Covariance submatrix of the risky assets (stock, bond).
    #[must_use]
    pub fn risky_covariance(&self) -> [[f64; 2]; 2] {
        use AssetClass::{Bond, Stock};
        [
            [self.covariance_of(Stock, Stock), self.covariance_of(Stock, Bond)],
            [self.covariance_of(Bond, Stock), self.covariance_of(Bond, Bond)],
        ]
    }

    /// Discount rate for a cash flow with the given risk tag.
    ///
    /// Riskless flows discount at the riskless rate; risky flows add the
    /// premium of the asset class whose volatility they share.
    #[must_use]
    pub fn discount_rate(&self, risk: RiskTag) -> f64 {
        match risk {
            RiskTag::Riskless => self.riskless_rate,
            RiskTag::BondLike => self.riskless_rate + self.excess_return(AssetClass::Bond),
            RiskTag::StockLike => self.riskless_rate + self.excess_return(AssetClass::Stock),
        }
    }
}

impl Default for MarketAssumptions {
    fn default() -> Self {
        Self::BASELINE
    }
}
