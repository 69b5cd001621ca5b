use rust_decimal::Decimal;
use time::Date;

use super::journal::{JournalEntry, Symbol};

/// The running position in one security.
///
/// `book_value` is the net cash invested (positive means money spent), and
/// `acb` is the average cost base per share. `acb` is `None` when the last
/// recomputation had a zero quantity to divide by.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Holding {
    pub account_number: String,
    pub trade_date: Date,
    pub market: String,
    pub symbol: Symbol,
    pub quantity: Decimal,
    pub price: Decimal,
    pub acb: Option<Decimal>,
    pub market_value: Decimal,
    pub book_value: Decimal,
    // Shares which arrived by transfer, and whose cost is not known.
    pub transfer_in_quantity: Decimal,
}

impl Holding {
    pub fn new_for_entry(entry: &JournalEntry) -> Holding {
        Holding {
            account_number: entry.account_number.clone(),
            trade_date: entry.trade_date,
            market: entry.market.clone(),
            symbol: entry.symbol.clone(),
            quantity: Decimal::ZERO,
            price: Decimal::ZERO,
            acb: Some(Decimal::ZERO),
            market_value: Decimal::ZERO,
            book_value: Decimal::ZERO,
            transfer_in_quantity: Decimal::ZERO,
        }
    }

    /// Also undefined when the division overflows.
    pub fn recompute_acb(&mut self) {
        self.acb = self.book_value.checked_div(self.quantity);
    }

    /// Returns the new market value, or None (leaving it unchanged) if
    /// quantity x price is out of range.
    pub fn refresh_market_value(&mut self) -> Option<Decimal> {
        self.market_value = self.quantity.checked_mul(self.price)?;
        Some(self.market_value)
    }

    /// The cost of the shares still held, at the current average cost.
    pub fn book_cost(&self) -> Option<Decimal> {
        self.acb.and_then(|acb| acb.checked_mul(self.quantity))
    }

    pub fn is_empty(&self) -> bool {
        self.quantity.is_zero()
    }
}
