use rust_decimal::Decimal;
use time::Date;

use super::journal::Symbol;

/// The realized outcome of a single sale.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct GainLoss {
    pub account_number: String,
    pub trade_date: Date,
    pub market: String,
    pub symbol: Symbol,
    pub quantity: Decimal,
    pub price: Decimal,
    pub cost: Decimal,
    pub proceeds: Decimal,
    pub gain: Decimal,
}

impl GainLoss {
    pub fn year(&self) -> i32 {
        self.trade_date.year()
    }
}

#[derive(PartialEq, Eq, Clone, Debug)]
pub struct SymbolGainSummary {
    pub year: i32,
    pub account_number: String,
    pub market: String,
    pub symbol: Symbol,
    pub gain: Decimal,
}

/// A row of the annual gains summary.
///
/// Each year is a run of `Symbol` rows followed by one `YearTotal` row.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum GainSummary {
    Symbol(SymbolGainSummary),
    YearTotal { year: i32, total: Decimal },
}

impl GainSummary {
    pub fn year(&self) -> i32 {
        match self {
            GainSummary::Symbol(s) => s.year,
            GainSummary::YearTotal { year, .. } => *year,
        }
    }
}
