mod acb;
mod annual_gains;
mod ledger;

pub use self::acb::*;
pub use self::annual_gains::*;
pub use self::ledger::*;

use time::Date;

use crate::util::date::to_iso_string;

#[derive(thiserror::Error, PartialEq, Eq, Debug)]
pub enum LedgerError {
    #[error("no symbol specified in a journal entry: tradeDate={}, operation={}",
            to_iso_string(.trade_date), .operation)]
    MissingSymbol { trade_date: Date, operation: String },
    #[error("amounts out of range in a journal entry: tradeDate={}, operation={}",
            to_iso_string(.trade_date), .operation)]
    Overflow { trade_date: Date, operation: String },
}
