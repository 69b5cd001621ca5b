use itertools::Itertools;

use crate::portfolio::{GainLoss, GainSummary, Holding, JournalEntry};

use super::{calc_gains_by_year, HoldingLedger, LedgerError};

/// Journal entries in true chronological order (oldest first).
///
/// Brokerage exports list the newest entry first. Use `from_newest_first`
/// for those, which reverses them once here, so nothing downstream has to
/// iterate backwards.
#[derive(PartialEq, Eq, Clone, Debug, Default)]
pub struct ChronologicalJournal {
    entries: Vec<JournalEntry>,
}

impl ChronologicalJournal {
    pub fn from_newest_first(mut entries: Vec<JournalEntry>) -> ChronologicalJournal {
        entries.reverse();
        ChronologicalJournal { entries }
    }

    pub fn from_oldest_first(entries: Vec<JournalEntry>) -> ChronologicalJournal {
        ChronologicalJournal { entries }
    }

    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct AcbResult {
    /// Live holdings, in no particular order.
    pub holdings: Vec<Holding>,
    /// Sale outcomes, in the order the sales occurred.
    pub gains: Vec<GainLoss>,
    pub gains_by_year: Vec<GainSummary>,
}

impl AcbResult {
    /// Holdings ordered by symbol, for rendering.
    pub fn sorted_holdings(&self) -> Vec<&Holding> {
        self.holdings.iter().sorted_by(|a, b| a.symbol.cmp(&b.symbol)).collect()
    }
}

/// Runs the whole journal through a fresh ledger, and summarizes the
/// resulting sales by year.
///
/// Any ledger error, including an amount going out of range, aborts the
/// computation, and no partial result is returned.
pub fn compute_acb(journal: &ChronologicalJournal) -> Result<AcbResult, LedgerError> {
    let mut ledger = HoldingLedger::new();
    let gains = ledger.process(journal.entries())?;
    let gains_by_year = if gains.is_empty() {
        Vec::new()
    } else {
        calc_gains_by_year(&gains)?
    };
    tracing::debug!("compute_acb: {} entries, {} holdings, {} sales",
                    journal.len(), ledger.len(), gains.len());
    Ok(AcbResult {
        holdings: ledger.into_holdings(),
        gains,
        gains_by_year,
    })
}
