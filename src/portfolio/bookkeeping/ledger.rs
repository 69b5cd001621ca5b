use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::portfolio::{GainLoss, Holding, JournalEntry, Operation, Symbol};
use crate::util::decimal::is_positive;

use super::LedgerError;

/// Per-run store of live holdings, keyed by symbol.
///
/// A holding is created the first time a symbol is referenced, and removed
/// as soon as its quantity returns to zero. Entries must be applied in
/// chronological order (oldest first).
#[derive(Default, Debug)]
pub struct HoldingLedger {
    holdings: HashMap<Symbol, Holding>,
}

impl HoldingLedger {
    pub fn new() -> HoldingLedger {
        HoldingLedger { holdings: HashMap::new() }
    }

    pub fn get(&self, symbol: &str) -> Option<&Holding> {
        self.holdings.get(symbol)
    }

    pub fn len(&self) -> usize {
        self.holdings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }

    pub fn into_holdings(self) -> Vec<Holding> {
        self.holdings.into_values().collect()
    }

    /// Applies every entry in order, collecting the outcome of each sale.
    /// Aborts on the first error.
    pub fn process<'a, I>(&mut self, entries: I) -> Result<Vec<GainLoss>, LedgerError>
    where
        I: IntoIterator<Item = &'a JournalEntry>,
    {
        let mut gains = Vec::new();
        for entry in entries {
            if let Some(gain) = self.apply(entry)? {
                gains.push(gain);
            }
        }
        Ok(gains)
    }

    /// Applies a single journal entry to the holding for its symbol.
    ///
    /// Returns the realized gain/loss if the entry was a sale. Fails if an
    /// amount derived from the entry does not fit in a `Decimal`.
    pub fn apply(&mut self, entry: &JournalEntry) -> Result<Option<GainLoss>, LedgerError> {
        if !entry.has_symbol() {
            if entry.operation.requires_symbol() {
                return Err(LedgerError::MissingSymbol {
                    trade_date: entry.trade_date,
                    operation: entry.operation.to_string(),
                });
            }
            // Fees, contributions, interest and the like.
            tracing::trace!("HoldingLedger::apply skipping {} entry without symbol on {}",
                            entry.operation, entry.trade_date);
            return Ok(None);
        }

        let holding = self.holdings.entry(entry.symbol.clone())
            .or_insert_with(|| Holding::new_for_entry(entry));
        holding.trade_date = entry.trade_date;

        let res = match &entry.operation {
            Operation::Buy => apply_buy(holding, entry).map(|_| None),
            Operation::Sell => apply_sell(holding, entry).map(Some),
            Operation::StockSplit => apply_split(holding, entry).map(|_| None),
            Operation::Cancellation => apply_cancellation(holding, entry).map(|_| None),
            Operation::Expiration | Operation::Assignation =>
                apply_expired_or_assigned(holding, entry).map(|_| None),
            Operation::Transfer => apply_transfer(holding, entry).map(|_| None),
            Operation::Unrecognized(op) => {
                tracing::debug!("HoldingLedger::apply ignoring unrecognized operation \
                                 '{}' for {} on {}", op, entry.symbol, entry.trade_date);
                Ok(None)
            }
        };

        tracing::debug!(
            "HoldingLedger::apply {} {} {} on {}: quantity = {}, book_value = {}, \
            acb = {:?}, transfer_in_quantity = {}",
            entry.operation, entry.quantity, entry.symbol, entry.trade_date,
            holding.quantity, holding.book_value, holding.acb,
            holding.transfer_in_quantity);

        if holding.is_empty() {
            self.holdings.remove(&entry.symbol);
        }
        res
    }
}

fn overflow(entry: &JournalEntry) -> LedgerError {
    LedgerError::Overflow {
        trade_date: entry.trade_date,
        operation: entry.operation.to_string(),
    }
}

fn add(a: Decimal, b: Decimal, entry: &JournalEntry) -> Result<Decimal, LedgerError> {
    a.checked_add(b).ok_or_else(|| overflow(entry))
}

fn sub(a: Decimal, b: Decimal, entry: &JournalEntry) -> Result<Decimal, LedgerError> {
    a.checked_sub(b).ok_or_else(|| overflow(entry))
}

fn take_price(holding: &mut Holding, entry: &JournalEntry) -> Result<(), LedgerError> {
    holding.price = entry.price;
    holding.refresh_market_value().map(|_| ()).ok_or_else(|| overflow(entry))
}

fn apply_buy(holding: &mut Holding, entry: &JournalEntry) -> Result<(), LedgerError> {
    // net_amount is negative for the cash spent.
    holding.book_value = sub(holding.book_value, entry.net_amount, entry)?;
    holding.quantity = add(holding.quantity, entry.quantity, entry)?;
    take_price(holding, entry)?;
    holding.recompute_acb();
    Ok(())
}

fn apply_sell(holding: &mut Holding, entry: &JournalEntry) -> Result<GainLoss, LedgerError> {
    // A sale out of a holding without a defined ACB (only possible right
    // after a zero-quantity recomputation) is costed at zero.
    let acb = holding.acb.unwrap_or_default();
    let cost = acb.checked_mul(entry.quantity).ok_or_else(|| overflow(entry))?;
    let mut gain_loss = GainLoss {
        account_number: entry.account_number.clone(),
        trade_date: entry.trade_date,
        market: entry.market.clone(),
        symbol: entry.symbol.clone(),
        quantity: entry.quantity,
        price: entry.price,
        cost,
        proceeds: entry.net_amount,
        gain: sub(entry.net_amount, cost, entry)?,
    };

    // The ACB itself is left as is. Selling at the average cost does not
    // change it.
    holding.book_value = sub(holding.book_value, entry.net_amount, entry)?;
    holding.quantity = sub(holding.quantity, entry.quantity, entry)?;
    take_price(holding, entry)?;

    // Shares obtained by transfer have no known cost, so when the sale can be
    // covered entirely by them, it is treated as realizing nothing.
    if holding.transfer_in_quantity >= entry.quantity {
        holding.transfer_in_quantity =
            sub(holding.transfer_in_quantity, entry.quantity, entry)?;
        gain_loss.cost = gain_loss.proceeds;
        gain_loss.gain = Decimal::ZERO;
    }
    Ok(gain_loss)
}

fn apply_split(holding: &mut Holding, entry: &JournalEntry) -> Result<(), LedgerError> {
    // Splits arrive as a share delta, and carry no usable price.
    holding.quantity = add(holding.quantity, entry.quantity, entry)?;
    holding.recompute_acb();
    Ok(())
}

fn apply_cancellation(holding: &mut Holding, entry: &JournalEntry) -> Result<(), LedgerError> {
    if entry.net_amount.is_zero() {
        return Ok(());
    }
    if is_positive(&entry.net_amount) {
        // Cash came back, so this cancels a buy.
        holding.quantity = sub(holding.quantity, entry.quantity, entry)?;
        holding.book_value = sub(holding.book_value, entry.net_amount, entry)?;
    } else {
        // Cash went back out, so this cancels a sell.
        holding.quantity = add(holding.quantity, entry.quantity, entry)?;
        holding.book_value = add(holding.book_value, entry.net_amount, entry)?;
    }
    take_price(holding, entry)?;
    holding.recompute_acb();
    Ok(())
}

// TODO: realize a capital loss when options expire worthless or are
// assigned. Only the share count is adjusted for now.
fn apply_expired_or_assigned(
    holding: &mut Holding, entry: &JournalEntry,
) -> Result<(), LedgerError> {
    holding.quantity = add(holding.quantity, entry.quantity, entry)?;
    Ok(())
}

fn apply_transfer(holding: &mut Holding, entry: &JournalEntry) -> Result<(), LedgerError> {
    holding.quantity = add(holding.quantity, entry.quantity, entry)?;
    if is_positive(&entry.quantity) {
        holding.transfer_in_quantity =
            add(holding.transfer_in_quantity, entry.quantity, entry)?;
    }
    // Transfers out are not matched against transfer_in_quantity.
    Ok(())
}
