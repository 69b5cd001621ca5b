use std::collections::HashSet;

/// Journal input columns, as matched against the (lowercased, trimmed)
/// headers of a brokerage export.
pub struct JournalCol();
impl JournalCol {
    pub const ACCOUNT_NUMBER: &'static str = "account number";
    pub const ACCOUNT_DESCRIPTION: &'static str = "account description";
    pub const TRADE_DATE: &'static str = "trade date";
    pub const SETTLEMENT_DATE: &'static str = "settlement date";
    pub const PROCESSING_DATE: &'static str = "processing date";
    pub const MARKET: &'static str = "market";
    pub const SYMBOL: &'static str = "symbol";
    pub const DESCRIPTION: &'static str = "description";
    pub const OPERATION: &'static str = "operation";
    pub const QUANTITY: &'static str = "quantity";
    pub const PRICE: &'static str = "price";
    pub const COMMISSION: &'static str = "commission";
    pub const NET_AMOUNT: &'static str = "net amount";
    pub const BALANCE_AT_SETTLEMENT_DATE: &'static str = "balance as at settlement date";
    pub const CURRENT_BALANCE: &'static str = "current balance";

    pub fn get_csv_cols() -> HashSet<&'static str> {
        HashSet::from(JournalCol::export_order_cols())
    }

    /// The column order of the brokerage export.
    pub fn export_order_cols() -> [&'static str; 15] {
        [
            JournalCol::ACCOUNT_NUMBER,
            JournalCol::ACCOUNT_DESCRIPTION,
            JournalCol::TRADE_DATE,
            JournalCol::SETTLEMENT_DATE,
            JournalCol::PROCESSING_DATE,
            JournalCol::MARKET,
            JournalCol::SYMBOL,
            JournalCol::DESCRIPTION,
            JournalCol::OPERATION,
            JournalCol::QUANTITY,
            JournalCol::PRICE,
            JournalCol::COMMISSION,
            JournalCol::NET_AMOUNT,
            JournalCol::BALANCE_AT_SETTLEMENT_DATE,
            JournalCol::CURRENT_BALANCE,
        ]
    }
}

/// Headers of the three output tables.
pub struct OutCol();
impl OutCol {
    pub const ACCOUNT_NUMBER: &'static str = "Account number";
    pub const TRADE_DATE: &'static str = "Trade date";
    pub const MARKET: &'static str = "Market";
    pub const SYMBOL: &'static str = "Symbol";
    pub const QUANTITY: &'static str = "Quantity";
    pub const PRICE: &'static str = "Price";
    pub const ACB: &'static str = "ACB";
    pub const MARKET_VALUE: &'static str = "Market value";
    pub const BOOK_VALUE: &'static str = "Book value";
    pub const COST: &'static str = "Cost";
    pub const PROCEED: &'static str = "Proceed";
    pub const GAIN: &'static str = "Gain";
    pub const YEAR: &'static str = "Year";
    pub const ANNUAL_TOTAL: &'static str = "Annual total";

    pub fn holdings_cols() -> Vec<&'static str> {
        vec![
            OutCol::ACCOUNT_NUMBER,
            OutCol::TRADE_DATE,
            OutCol::MARKET,
            OutCol::SYMBOL,
            OutCol::QUANTITY,
            OutCol::PRICE,
            OutCol::ACB,
            OutCol::MARKET_VALUE,
            OutCol::BOOK_VALUE,
        ]
    }

    pub fn gains_cols() -> Vec<&'static str> {
        vec![
            OutCol::ACCOUNT_NUMBER,
            OutCol::TRADE_DATE,
            OutCol::MARKET,
            OutCol::SYMBOL,
            OutCol::QUANTITY,
            OutCol::PRICE,
            OutCol::COST,
            OutCol::PROCEED,
            OutCol::GAIN,
        ]
    }

    pub fn gains_summary_cols() -> Vec<&'static str> {
        vec![
            OutCol::YEAR,
            OutCol::ACCOUNT_NUMBER,
            OutCol::MARKET,
            OutCol::SYMBOL,
            OutCol::GAIN,
            OutCol::ANNUAL_TOTAL,
        ]
    }
}
