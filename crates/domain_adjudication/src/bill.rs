//! Bill model and aggregation
//!
//! The bill aggregator reconciles an observed invoice (possibly absent or
//! incomplete) with a simulated estimate derived from clinical codes,
//! producing the single authoritative bill the calculators settle against.

use serde::{Deserialize, Serialize};

use core_kernel::{Currency, Money};

use crate::case::CaseInput;
use crate::ports::PriceLookup;

/// Category tag for a bill line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BillCategory {
    /// Clinical service charge
    Service,
    /// Procedure charge
    Procedure,
    /// Administrative fee
    Administration,
    /// Synthetic line carrying an invoice header total
    Header,
    /// Simulated estimate line
    Estimate,
    /// Anything else from an observed invoice
    Other,
}

/// A single line on a bill
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillLine {
    pub name: String,
    pub category: BillCategory,
    pub amount: Money,
}

impl BillLine {
    pub fn new(name: impl Into<String>, category: BillCategory, amount: Money) -> Self {
        Self {
            name: name.into(),
            category,
            amount,
        }
    }
}

/// Provenance of a bill's total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BillSource {
    /// Itemized lines from an observed invoice
    ObservedLines,
    /// A header total with no line items
    HeaderTotal,
    /// Simulated from clinical code prices
    Simulated,
    /// All lookups missed; placeholder keeps arithmetic well-defined
    Placeholder,
}

/// An ordered sequence of bill lines with a total
///
/// The total always equals the sum of line amounts; construction is the
/// only way to build one, so the invariant cannot drift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bill {
    lines: Vec<BillLine>,
    total: Money,
    source: BillSource,
}

impl Bill {
    /// Builds a bill from lines, computing the total
    pub fn from_lines(lines: Vec<BillLine>, source: BillSource) -> Self {
        let total = lines
            .iter()
            .fold(Money::zero(Currency::IDR), |acc, line| acc + line.amount);
        Self {
            lines,
            total,
            source,
        }
    }

    /// Builds a single-line bill
    pub fn single(line: BillLine, source: BillSource) -> Self {
        Self::from_lines(vec![line], source)
    }

    /// Zero-amount placeholder bill; never truly empty
    pub fn placeholder() -> Self {
        Bill::single(
            BillLine::new(
                "Unspecified",
                BillCategory::Other,
                Money::zero(Currency::IDR),
            ),
            BillSource::Placeholder,
        )
    }

    pub fn lines(&self) -> &[BillLine] {
        &self.lines
    }

    pub fn total(&self) -> Money {
        self.total
    }

    pub fn source(&self) -> BillSource {
        self.source
    }

    /// True when the total came from observed data, not simulation
    ///
    /// A zero total is never usable; the calculators fall back to their
    /// own simulated figures in that case.
    pub fn has_usable_total(&self) -> bool {
        matches!(self.source, BillSource::ObservedLines | BillSource::HeaderTotal)
            && self.total.is_positive()
    }
}

/// An invoice as observed by the billing system
///
/// Either or both of the header total and the line items may be missing;
/// the aggregation contract resolves every combination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservedInvoice {
    pub header_total: Option<Money>,
    pub lines: Vec<BillLine>,
}

/// Aggregates an observed invoice and a case into the authoritative bill
///
/// Contract, in priority order:
/// 1. Observed line items, when present, are authoritative and the header
///    total is ignored.
/// 2. A positive header total with no lines becomes a single synthetic
///    "Header Total" line.
/// 3. Otherwise the bill is simulated as one line at the unadjusted base
///    price (primary diagnosis plus procedure unit prices). Comorbidity
///    surcharges are scheme-specific and applied by the calculators, not
///    here.
/// 4. If every lookup misses, a zero-amount placeholder line is produced
///    so downstream arithmetic stays well-defined.
pub fn aggregate_bill(
    observed: Option<&ObservedInvoice>,
    case: &CaseInput,
    prices: &dyn PriceLookup,
) -> Bill {
    if let Some(invoice) = observed {
        if !invoice.lines.is_empty() {
            return Bill::from_lines(invoice.lines.clone(), BillSource::ObservedLines);
        }
        if let Some(header) = invoice.header_total {
            if header.is_positive() {
                return Bill::single(
                    BillLine::new("Header Total", BillCategory::Header, header),
                    BillSource::HeaderTotal,
                );
            }
        }
    }

    let (diagnosis_price, diagnosis_name) = prices
        .diagnosis_price(&case.primary_diagnosis)
        .unwrap_or_else(|| (Money::zero(Currency::IDR), "Unspecified".to_string()));

    let procedure_price = case
        .procedure_code
        .as_deref()
        .and_then(|code| prices.procedure_price(code))
        .unwrap_or_else(|| Money::zero(Currency::IDR));

    let base = diagnosis_price + procedure_price;
    if base.is_positive() {
        Bill::single(
            BillLine::new(
                format!("Estimated Tariff ({})", diagnosis_name),
                BillCategory::Estimate,
                base,
            ),
            BillSource::Simulated,
        )
    } else {
        Bill::placeholder()
    }
}
