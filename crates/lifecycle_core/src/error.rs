use std::fmt;

/// Malformed numeric input. Always surfaced to the caller, never silently
/// corrected.
#[derive(Debug, Clone, PartialEq)]
pub enum InvalidInputError {
    /// A cash flow dated before the present.
    NegativeTimeOffset { offset_years: f64 },
    /// A discount rate at or below -100%, which has no finite discount
    /// factor.
    DiscountRateBelowFloor { rate: f64 },
    /// Risk aversion must be strictly positive.
    NonPositiveRiskAversion { risk_aversion: f64 },
    /// A Monte Carlo run needs at least one trial.
    ZeroTrials,
    /// The planning horizon ends before it starts.
    AgesOutOfOrder { current_age: u32, terminal_age: u32 },
}

impl fmt::Display for InvalidInputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidInputError::NegativeTimeOffset { offset_years } => {
                write!(f, "cash flow has negative time offset {offset_years}")
            }
            InvalidInputError::DiscountRateBelowFloor { rate } => {
                write!(f, "discount rate {rate} is at or below -100%")
            }
            InvalidInputError::NonPositiveRiskAversion { risk_aversion } => {
                write!(f, "risk aversion {risk_aversion} must be positive")
            }
            InvalidInputError::ZeroTrials => {
                write!(f, "monte carlo projection requires at least one trial")
            }
            InvalidInputError::AgesOutOfOrder {
                current_age,
                terminal_age,
            } => {
                write!(
                    f,
                    "terminal age {terminal_age} precedes current age {current_age}"
                )
            }
        }
    }
}

impl std::error::Error for InvalidInputError {}

/// The covariance matrix has no Cholesky factor, so the optimizer cannot
/// solve for risky weights. The caller should regularize its assumptions
/// (e.g. avoid zero volatility or perfect correlation) and retry.
#[derive(Debug, Clone, PartialEq)]
pub struct SingularCovarianceError {
    /// The matrix that failed to factor, row-major.
    pub covariance: Vec<Vec<f64>>,
}

impl fmt::Display for SingularCovarianceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "covariance matrix {:?} is not positive definite",
            self.covariance
        )
    }
}

impl std::error::Error for SingularCovarianceError {}

/// Umbrella error for engine operations.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineError {
    InvalidInput(InvalidInputError),
    SingularCovariance(SingularCovarianceError),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::InvalidInput(e) => write!(f, "{e}"),
            EngineError::SingularCovariance(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::InvalidInput(e) => Some(e),
            EngineError::SingularCovariance(e) => Some(e),
        }
    }
}

impl From<InvalidInputError> for EngineError {
    fn from(e: InvalidInputError) -> Self {
        EngineError::InvalidInput(e)
    }
}

impl From<SingularCovarianceError> for EngineError {
    fn from(e: SingularCovarianceError) -> Self {
        EngineError::SingularCovariance(e)
    }
}
