//! Lifecycle investing calculation engine
//!
//! This crate computes optimal stock/bond/cash allocations under a
//! total-wealth framework: current financial assets plus the present value
//! of future labor income, net of future expenses, form the base a
//! mean-variance-optimal allocation is sized against. It provides:
//! - Present-value discounting of tagged cash-flow streams
//! - Total-wealth composition with an implicit human-capital risk split
//! - Closed-form mean-variance optimization with leverage/no-short bounds
//! - Year-by-year glide paths over the investor's horizon
//! - Deterministic and correlated Monte Carlo wealth projection
//!
//! # Example
//!
//! ```ignore
//! use lifecycle_core::model::{InvestorProfile, MarketAssumptions};
//! use lifecycle_core::{generate_glide_path, project, ProjectionConfig};
//!
//! let profile = InvestorProfile {
//!     current_age: 25,
//!     retirement_age: 65,
//!     terminal_age: 85,
//!     financial_wealth: 50_000.0,
//!     annual_income: 150_000.0,
//!     working_expenses: 80_000.0,
//!     retirement_expenses: 60_000.0,
//!     risk_aversion: 2.0,
//!     income_beta: 0.0,
//!     allow_leverage: false,
//! };
//! let assumptions = MarketAssumptions::default();
//! let path = generate_glide_path(&profile, &assumptions, &profile.constraints())?;
//! let wealth = project(&path, &profile, &assumptions, &ProjectionConfig::default())?;
//! ```
//!
//! All computation is synchronous and stateless between calls; every input
//! and output is an immutable value record.

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod error;
pub mod glide_path;
pub mod math;
pub mod optimizer;
pub mod present_value;
pub mod projection;
pub mod total_wealth;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use error::{EngineError, InvalidInputError, SingularCovarianceError};
pub use glide_path::generate_glide_path;
pub use optimizer::optimize;
pub use present_value::{macaulay_duration, present_value};
pub use projection::{ProjectionConfig, ProjectionMode, project};
pub use total_wealth::compose;
