//! Forward wealth projection along a glide path.
//!
//! Deterministic mode compounds wealth at each step's allocation-weighted
//! geometric expected return. Monte Carlo mode draws correlated per-asset
//! returns through a Cholesky factor of the covariance matrix, one
//! independent trial per seeded RNG, so results are reproducible and
//! identical whether trials run serially or in parallel.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
#[cfg(feature = "parallel")]
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{EngineError, InvalidInputError, SingularCovarianceError};
use crate::math::{cholesky_lower_psd, correlate_normals};
use crate::model::{
    AssetClass, GlidePathPoint, InvestorProfile, MarketAssumptions, ProjectionPath,
    ProjectionResult,
};

const PSD_TOLERANCE: f64 = 1e-12;

/// How to propagate wealth forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectionMode {
    /// Single path at geometric expected returns.
    Deterministic,
    /// `trials` independent paths with correlated random returns.
    MonteCarlo { trials: u32, seed: u64 },
}

/// Projection options beyond the mode itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionConfig {
    pub mode: ProjectionMode,
    /// When set, wealth is floored at zero each step (bankruptcy
    /// truncation). When unset, negative wealth propagates so the caller
    /// can surface a ruin warning.
    pub bankruptcy_truncation: bool,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            mode: ProjectionMode::Deterministic,
            bankruptcy_truncation: false,
        }
    }
}

/// Projects financial wealth along `glide_path`, starting from the
/// profile's current financial wealth. The returned path has one point per
/// glide-path step plus the starting point.
///
/// # Errors
/// - [`InvalidInputError::ZeroTrials`] for a Monte Carlo run with no trials.
/// - [`SingularCovarianceError`] when the full covariance matrix is
///   indefinite and cannot be factored for correlated sampling.
pub fn project(
    glide_path: &[GlidePathPoint],
    profile: &InvestorProfile,
    assumptions: &MarketAssumptions,
    config: &ProjectionConfig,
) -> Result<ProjectionResult, EngineError> {
    match config.mode {
        ProjectionMode::Deterministic => Ok(ProjectionResult::Deterministic(deterministic_path(
            glide_path,
            profile,
            assumptions,
            config.bankruptcy_truncation,
        ))),
        ProjectionMode::MonteCarlo { trials, seed } => {
            if trials == 0 {
                return Err(InvalidInputError::ZeroTrials.into());
            }

            let covariance = assumptions.covariance();
            let factor = cholesky_lower_psd(&covariance, PSD_TOLERANCE).ok_or_else(|| {
                SingularCovarianceError {
                    covariance: covariance.iter().map(|row| row.to_vec()).collect(),
                }
            })?;
            debug!(trials, seed, "starting monte carlo projection");

            let run = |trial: u32| {
                let mut rng = StdRng::seed_from_u64(seed.wrapping_add(u64::from(trial)));
                stochastic_path(
                    glide_path,
                    profile,
                    assumptions,
                    &factor,
                    config.bankruptcy_truncation,
                    &mut rng,
                )
            };

            #[cfg(feature = "parallel")]
            let paths: Vec<ProjectionPath> = (0..trials).into_par_iter().map(run).collect();
            #[cfg(not(feature = "parallel"))]
            let paths: Vec<ProjectionPath> = (0..trials).map(run).collect();

            Ok(ProjectionResult::MonteCarlo(paths))
        }
    }
}

fn apply_floor(wealth: f64, truncate: bool) -> f64 {
    if truncate { wealth.max(0.0) } else { wealth }
}

fn deterministic_path(
    glide_path: &[GlidePathPoint],
    profile: &InvestorProfile,
    assumptions: &MarketAssumptions,
    truncate: bool,
) -> ProjectionPath {
    let growth = [
        assumptions.geometric_return(AssetClass::Stock),
        assumptions.geometric_return(AssetClass::Bond),
        assumptions.geometric_return(AssetClass::Cash),
    ];

    let mut wealth = profile.financial_wealth;
    let mut points = Vec::with_capacity(glide_path.len() + 1);
    points.push((0, wealth));

    for (step, point) in glide_path.iter().enumerate() {
        let portfolio_return = point.allocation.stock * growth[0]
            + point.allocation.bond * growth[1]
            + point.allocation.cash * growth[2];
        wealth = apply_floor(
            wealth * (1.0 + portfolio_return) + profile.net_cash_flow_at(point.age),
            truncate,
        );
        points.push((step as u32 + 1, wealth));
    }

    ProjectionPath { points }
}

fn stochastic_path(
    glide_path: &[GlidePathPoint],
    profile: &InvestorProfile,
    assumptions: &MarketAssumptions,
    factor: &[[f64; 3]; 3],
    truncate: bool,
    rng: &mut StdRng,
) -> ProjectionPath {
    let mean = [
        assumptions.expected_return(AssetClass::Stock),
        assumptions.expected_return(AssetClass::Bond),
        assumptions.expected_return(AssetClass::Cash),
    ];

    let mut wealth = profile.financial_wealth;
    let mut points = Vec::with_capacity(glide_path.len() + 1);
    points.push((0, wealth));

    for (step, point) in glide_path.iter().enumerate() {
        let z = [
            rng.sample::<f64, _>(StandardNormal),
            rng.sample::<f64, _>(StandardNormal),
            rng.sample::<f64, _>(StandardNormal),
        ];
        let shock = correlate_normals(factor, &z);

        let portfolio_return = point.allocation.stock * (mean[0] + shock[0])
            + point.allocation.bond * (mean[1] + shock[1])
            + point.allocation.cash * (mean[2] + shock[2]);
        wealth = apply_floor(
            wealth * (1.0 + portfolio_return) + profile.net_cash_flow_at(point.age),
            truncate,
        );
        points.push((step as u32 + 1, wealth));
    }

    ProjectionPath { points }
}
