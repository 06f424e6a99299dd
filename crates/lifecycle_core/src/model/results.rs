//! Output records: wealth snapshots, allocations, glide paths and
//! projection paths.
//!
//! Everything here is a plain serializable value record with no embedded
//! presentation logic; the UI layer charts these directly.

use serde::{Deserialize, Serialize};

use crate::model::market::AssetClass;

/// Tolerance on the "weights sum to one" invariant.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Per-asset-class fractions. Used both for financial portfolio weights
/// (where the fractions sum to one) and for the implicit risk decomposition
/// of human capital (where they need not).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AssetWeights {
    pub stock: f64,
    pub bond: f64,
    pub cash: f64,
}

impl AssetWeights {
    pub const ZERO: AssetWeights = AssetWeights {
        stock: 0.0,
        bond: 0.0,
        cash: 0.0,
    };

    #[must_use]
    pub fn get(&self, asset: AssetClass) -> f64 {
        match asset {
            AssetClass::Stock => self.stock,
            AssetClass::Bond => self.bond,
            AssetClass::Cash => self.cash,
        }
    }

    #[must_use]
    pub fn sum(&self) -> f64 {
        self.stock + self.bond + self.cash
    }
}

/// Target fractions of *financial* wealth per asset class.
///
/// Invariant: the fractions sum to 1.0 within [`WEIGHT_SUM_TOLERANCE`] and
/// each lies within its configured bound.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AllocationWeights {
    pub stock: f64,
    pub bond: f64,
    pub cash: f64,
}

impl AllocationWeights {
    /// The default degenerate-case fallback: everything in cash.
    #[must_use]
    pub fn all_cash() -> Self {
        Self {
            stock: 0.0,
            bond: 0.0,
            cash: 1.0,
        }
    }

    #[must_use]
    pub fn get(&self, asset: AssetClass) -> f64 {
        match asset {
            AssetClass::Stock => self.stock,
            AssetClass::Bond => self.bond,
            AssetClass::Cash => self.cash,
        }
    }

    #[must_use]
    pub fn sum(&self) -> f64 {
        self.stock + self.bond + self.cash
    }

    /// Whether the weights sum to one within tolerance.
    #[must_use]
    pub fn is_normalized(&self) -> bool {
        (self.sum() - 1.0).abs() <= WEIGHT_SUM_TOLERANCE
    }
}

/// Decomposition of an investor's total economic wealth at one point in
/// time.
///
/// Invariant: `total_wealth = financial_wealth + human_capital_pv -
/// future_expenses_pv`. `total_wealth` may be negative; downstream
/// optimization uses [`TotalWealthSnapshot::optimization_wealth`] and the
/// `total_wealth_negative` flag instead of erroring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TotalWealthSnapshot {
    /// Current investable assets.
    pub financial_wealth: f64,
    /// Present value of remaining labor income.
    pub human_capital_pv: f64,
    /// Present value of remaining lifetime expenses.
    pub future_expenses_pv: f64,
    /// financial_wealth + human_capital_pv - future_expenses_pv.
    pub total_wealth: f64,
    /// Fraction of human capital implicitly exposed to each asset class,
    /// derived from the income stream's risk tags. All zero when
    /// `human_capital_pv <= 0`.
    pub implicit_risk_weights: AssetWeights,
    /// Set when obligations exceed total resources. Signals the optimizer
    /// to apply its degenerate fallback policy.
    pub total_wealth_negative: bool,
}

impl TotalWealthSnapshot {
    /// Total wealth floored at zero, the base the optimizer sizes risky
    /// exposure against.
    #[must_use]
    pub fn optimization_wealth(&self) -> f64 {
        self.total_wealth.max(0.0)
    }
}

/// One step of the glide path: the wealth decomposition and optimal
/// allocation at a given age.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GlidePathPoint {
    pub age: u32,
    pub years_to_retirement: u32,
    pub snapshot: TotalWealthSnapshot,
    pub allocation: AllocationWeights,
}

/// One simulated wealth trajectory: (step, wealth) pairs with step 0 being
/// the starting wealth.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPath {
    pub points: Vec<(u32, f64)>,
}

impl ProjectionPath {
    /// Wealth at the final step, or zero for an empty path.
    #[must_use]
    pub fn terminal_wealth(&self) -> f64 {
        self.points.last().map_or(0.0, |(_, w)| *w)
    }

    /// Whether wealth dropped to or below zero at any step after the start.
    #[must_use]
    pub fn is_ruined(&self) -> bool {
        self.points.iter().skip(1).any(|(_, w)| *w <= 0.0)
    }
}

/// Result of a wealth projection run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ProjectionResult {
    /// A single expected-return trajectory.
    Deterministic(ProjectionPath),
    /// One trajectory per Monte Carlo trial.
    MonteCarlo(Vec<ProjectionPath>),
}

impl ProjectionResult {
    /// All paths in the result (one for deterministic runs).
    #[must_use]
    pub fn paths(&self) -> &[ProjectionPath] {
        match self {
            ProjectionResult::Deterministic(path) => std::slice::from_ref(path),
            ProjectionResult::MonteCarlo(paths) => paths,
        }
    }

    /// Terminal wealth at the given percentile (0.0..=1.0) across trials.
    ///
    /// Returns `None` for an empty result. For a deterministic run this is
    /// the single terminal wealth regardless of the percentile asked for.
    #[must_use]
    pub fn terminal_percentile(&self, percentile: f64) -> Option<f64> {
        let mut terminals: Vec<f64> = self.paths().iter().map(ProjectionPath::terminal_wealth).collect();
        if terminals.is_empty() {
            return None;
        }
        terminals.sort_by(f64::total_cmp);
        let rank = percentile.clamp(0.0, 1.0) * (terminals.len() - 1) as f64;
        Some(terminals[rank.round() as usize])
    }

    /// Fraction of trials where wealth hit or crossed zero.
    #[must_use]
    pub fn ruin_probability(&self) -> f64 {
        let paths = self.paths();
        if paths.is_empty() {
            return 0.0;
        }
        let ruined = paths.iter().filter(|p| p.is_ruined()).count();
        ruined as f64 / paths.len() as f64
    }
}
