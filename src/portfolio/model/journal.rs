use std::fmt::Display;

use rust_decimal::Decimal;
use time::Date;

pub type Symbol = String;

/// The kind of operation a journal entry records.
///
/// Brokerage exports carry this as free text. Anything outside the seven
/// kinds below is kept as `Unrecognized`, which the ledger ignores.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum Operation {
    Buy,
    Sell,
    Cancellation,
    StockSplit,
    Expiration,
    Assignation,
    Transfer,
    Unrecognized(String),
}

impl Operation {
    pub fn from_journal_text(value: &str) -> Operation {
        match value.trim() {
            "Buy" => Operation::Buy,
            "Sell" => Operation::Sell,
            "Cancellation" => Operation::Cancellation,
            "Stock Split" => Operation::StockSplit,
            "Expiration" => Operation::Expiration,
            "Assignation" => Operation::Assignation,
            "Transfer" => Operation::Transfer,
            other => Operation::Unrecognized(other.to_string()),
        }
    }

    pub fn journal_str(&self) -> &str {
        match self {
            Operation::Buy => "Buy",
            Operation::Sell => "Sell",
            Operation::Cancellation => "Cancellation",
            Operation::StockSplit => "Stock Split",
            Operation::Expiration => "Expiration",
            Operation::Assignation => "Assignation",
            Operation::Transfer => "Transfer",
            Operation::Unrecognized(s) => s.as_str(),
        }
    }

    /// Buys and sells are the only operations which must name a security.
    pub fn requires_symbol(&self) -> bool {
        matches!(self, Operation::Buy | Operation::Sell)
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Operation::Unrecognized(_))
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.journal_str())
    }
}

/// A single row of a brokerage transaction journal.
///
/// Amounts follow the brokerage sign convention: `net_amount` is negative
/// for cash leaving the account and positive for cash coming in.
/// Entries are never mutated once read.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct JournalEntry {
    pub account_number: String,
    pub account_description: String,
    pub trade_date: Date,
    pub settlement_date: Option<Date>,
    pub processing_date: Option<Date>,
    pub market: String,
    // Empty for non-security entries, like fees or contributions.
    pub symbol: Symbol,
    pub description: String,
    pub operation: Operation,
    pub quantity: Decimal,
    pub price: Decimal,
    pub commission: Decimal,
    pub net_amount: Decimal,
    pub balance_at_settlement_date: Decimal,
    pub current_balance: Decimal,
}

impl JournalEntry {
    pub fn has_symbol(&self) -> bool {
        !self.symbol.is_empty()
    }
}
