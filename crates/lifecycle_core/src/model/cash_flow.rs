//! Cash-flow streams: the raw material for present-value calculations.
//!
//! A stream is an immutable, time-ordered list of future flows. Each flow
//! carries a risk tag that decides which discount rate applies to it.

use serde::{Deserialize, Serialize};

/// Risk character of a future cash flow.
///
/// Governs the discount rate: riskless flows discount at the riskless rate,
/// bond-like and stock-like flows pick up the corresponding risk premium.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskTag {
    /// Fixed obligations, e.g. planned consumption.
    Riskless,
    /// Stable labor income (teacher, government).
    BondLike,
    /// Income that co-moves with the equity market (trader, banker).
    StockLike,
}

/// A single future cash flow.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CashFlow {
    /// Years from the present. Zero means "today" (undiscounted).
    pub offset_years: f64,
    /// Amount in currency units. Sign is up to the caller; income and
    /// expense streams are kept separate upstream.
    pub amount: f64,
    /// Which discount rate applies to this flow.
    pub risk: RiskTag,
}

/// An immutable, time-ordered sequence of future cash flows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CashFlowStream {
    flows: Vec<CashFlow>,
}

impl CashFlowStream {
    /// Build a stream from arbitrary flows, ordering them by time offset.
    #[must_use]
    pub fn new(mut flows: Vec<CashFlow>) -> Self {
        flows.sort_by(|a, b| a.offset_years.total_cmp(&b.offset_years));
        Self { flows }
    }

    /// A stream with no flows. Its present value is exactly zero.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// An ordinary annuity: `amount` paid at the end of each of the next
    /// `years` years (offsets 1..=years).
    #[must_use]
    pub fn annuity(amount: f64, years: u32, risk: RiskTag) -> Self {
        Self::deferred_annuity(amount, 0, years, risk)
    }

    /// An annuity whose first payment arrives `start_year + 1` years out.
    ///
    /// Used for retirement expenses: the payments begin once the working
    /// period ends.
    #[must_use]
    pub fn deferred_annuity(amount: f64, start_year: u32, years: u32, risk: RiskTag) -> Self {
        let flows = (1..=years)
            .map(|y| CashFlow {
                offset_years: f64::from(start_year + y),
                amount,
                risk,
            })
            .collect();
        Self { flows }
    }

    /// The flows, ordered by increasing time offset.
    #[must_use]
    pub fn flows(&self) -> &[CashFlow] {
        &self.flows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.flows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flows.is_empty()
    }

    /// Keep only flows occurring at or after `elapsed_years`, re-based so
    /// offsets are measured from that point in time.
    ///
    /// This is how the glide path walks the streams forward: a flow at the
    /// cutoff itself survives with offset zero (it is "this year's" flow).
    #[must_use]
    pub fn truncate_before(&self, elapsed_years: f64) -> Self {
        let flows = self
            .flows
            .iter()
            .filter(|f| f.offset_years >= elapsed_years)
            .map(|f| CashFlow {
                offset_years: f.offset_years - elapsed_years,
                ..*f
            })
            .collect();
        Self { flows }
    }

    /// Sum of the raw (undiscounted) amounts.
    #[must_use]
    pub fn total_amount(&self) -> f64 {
        self.flows.iter().map(|f| f.amount).sum()
    }
}
