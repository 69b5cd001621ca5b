use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::portfolio::{GainLoss, GainSummary, Operation, Symbol, SymbolGainSummary};

use super::LedgerError;

/// Rolls sale outcomes up into per-year, per-symbol rows, each year followed
/// by a total row.
///
/// `gains` must be in non-decreasing year order, which is what the ledger
/// produces for a chronological journal. A sale from an earlier year which
/// turns up after a later one is folded into the later year's group, so its
/// own year then appears in more than one group.
///
/// Fails with `LedgerError::Overflow`, naming the sale being added, if a sum
/// goes out of range.
pub fn calc_gains_by_year(gains: &[GainLoss]) -> Result<Vec<GainSummary>, LedgerError> {
    let mut summary = Vec::new();
    let mut year = match gains.first() {
        Some(g) => g.year(),
        None => return Ok(summary),
    };
    let mut symbol_gains = BTreeMap::<Symbol, SymbolGainSummary>::new();
    let mut last = &gains[0];

    for gain in gains {
        if year < gain.year() {
            tally_year(&mut summary, year, std::mem::take(&mut symbol_gains), last)?;
            year = gain.year();
        } else if year > gain.year() {
            tracing::warn!("calc_gains_by_year: sale of {} on {} is out of year order",
                           gain.symbol, gain.trade_date);
        }
        match symbol_gains.get_mut(&gain.symbol) {
            Some(s) => {
                s.gain = s.gain.checked_add(gain.gain).ok_or_else(|| overflow(gain))?;
            }
            None => {
                symbol_gains.insert(gain.symbol.clone(), SymbolGainSummary {
                    year: gain.year(),
                    account_number: gain.account_number.clone(),
                    market: gain.market.clone(),
                    symbol: gain.symbol.clone(),
                    gain: gain.gain,
                });
            }
        }
        last = gain;
    }
    tally_year(&mut summary, year, symbol_gains, last)?;
    Ok(summary)
}

fn overflow(gain: &GainLoss) -> LedgerError {
    LedgerError::Overflow {
        trade_date: gain.trade_date,
        operation: Operation::Sell.to_string(),
    }
}

fn tally_year(summary: &mut Vec<GainSummary>, year: i32,
              symbol_gains: BTreeMap<Symbol, SymbolGainSummary>,
              last_sale: &GainLoss) -> Result<(), LedgerError> {
    if symbol_gains.is_empty() {
        return Ok(());
    }
    let mut total = Decimal::ZERO;
    for (_, sg) in symbol_gains {
        total = total.checked_add(sg.gain).ok_or_else(|| overflow(last_sale))?;
        summary.push(GainSummary::Symbol(sg));
    }
    tracing::debug!("tally_year: {} total gain {}", year, total);
    summary.push(GainSummary::YearTotal { year, total });
    Ok(())
}
