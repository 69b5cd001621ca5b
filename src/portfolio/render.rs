use rust_decimal::Decimal;

use crate::portfolio::csv_common::OutCol;
use crate::portfolio::{GainLoss, GainSummary, Holding};
use crate::util::date::to_journal_string;
use crate::util::decimal::{dollar_precision_str, to_string_min_precision};

pub struct RenderTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RenderTable {
    fn with_header(header: Vec<&'static str>) -> RenderTable {
        RenderTable {
            header: header.into_iter().map(String::from).collect(),
            rows: Vec::new(),
        }
    }
}

fn qty_str(d: &Decimal) -> String {
    to_string_min_precision(d, 0)
}

fn price_str(d: &Decimal) -> String {
    to_string_min_precision(d, 2)
}

/// One row per holding, in the order given.
pub fn render_holdings_table<'a, I>(holdings: I) -> RenderTable
where
    I: IntoIterator<Item = &'a Holding>,
{
    let mut table = RenderTable::with_header(OutCol::holdings_cols());
    for h in holdings {
        table.rows.push(vec![
            h.account_number.clone(),
            to_journal_string(&h.trade_date),
            h.market.clone(),
            h.symbol.clone(),
            qty_str(&h.quantity),
            price_str(&h.price),
            // Undefined after dividing by a zero quantity.
            h.acb.map(|acb| dollar_precision_str(&acb)).unwrap_or_default(),
            dollar_precision_str(&h.market_value),
            dollar_precision_str(&h.book_value),
        ]);
    }
    table
}

pub fn render_gains_table(gains: &[GainLoss]) -> RenderTable {
    let mut table = RenderTable::with_header(OutCol::gains_cols());
    for g in gains {
        table.rows.push(vec![
            g.account_number.clone(),
            to_journal_string(&g.trade_date),
            g.market.clone(),
            g.symbol.clone(),
            qty_str(&g.quantity),
            price_str(&g.price),
            dollar_precision_str(&g.cost),
            dollar_precision_str(&g.proceeds),
            dollar_precision_str(&g.gain),
        ]);
    }
    table
}

pub fn render_gains_summary_table(summary: &[GainSummary]) -> RenderTable {
    let mut table = RenderTable::with_header(OutCol::gains_summary_cols());
    for row in summary {
        let cells = match row {
            GainSummary::Symbol(s) => vec![
                s.year.to_string(),
                s.account_number.clone(),
                s.market.clone(),
                s.symbol.clone(),
                dollar_precision_str(&s.gain),
                String::new(),
            ],
            GainSummary::YearTotal { year, total } => vec![
                year.to_string(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                dollar_precision_str(total),
            ],
        };
        table.rows.push(cells);
    }
    table
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use crate::portfolio::{GainLoss, GainSummary, Holding, SymbolGainSummary};
    use crate::testlib::{assert_vec_eq, TJe};

    use super::{render_gains_summary_table, render_gains_table, render_holdings_table};

    fn svec(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_render_holdings() {
        let e = TJe{acct: "A1", mkt: "CAN", sym: "XYZ", year: 2021, t_day: 45, ..TJe::d()}.x();
        let mut h = Holding::new_for_entry(&e);
        h.quantity = dec!(150);
        h.price = dec!(15);
        h.acb = Some(dec!(11));
        h.market_value = dec!(2250);
        h.book_value = dec!(1450);

        let mut undefined = h.clone();
        undefined.symbol = "ZZZ".to_string();
        undefined.quantity = dec!(0.5);
        undefined.price = dec!(1.2345);
        undefined.acb = None;

        let table = render_holdings_table(vec![&h, &undefined]);
        assert_eq!(table.header, svec(&[
            "Account number", "Trade date", "Market", "Symbol", "Quantity", "Price",
            "ACB", "Market value", "Book value"]));
        assert_vec_eq(table.rows, vec![
            svec(&["A1", "15/02/2021", "CAN", "XYZ", "150", "15.00", "11.00", "2250.00",
                   "1450.00"]),
            svec(&["A1", "15/02/2021", "CAN", "ZZZ", "0.5", "1.2345", "", "2250.00",
                   "1450.00"]),
        ]);
    }

    #[test]
    fn test_render_gains() {
        let e = TJe{acct: "A1", mkt: "USA", sym: "XYZ", year: 2022, t_day: 0, ..TJe::d()}.x();
        let g = GainLoss {
            account_number: e.account_number,
            trade_date: e.trade_date,
            market: e.market,
            symbol: e.symbol,
            quantity: dec!(50),
            price: dec!(15),
            cost: dec!(550),
            proceeds: dec!(750),
            gain: dec!(200),
        };
        let table = render_gains_table(&[g]);
        assert_eq!(table.header, svec(&[
            "Account number", "Trade date", "Market", "Symbol", "Quantity", "Price",
            "Cost", "Proceed", "Gain"]));
        assert_vec_eq(table.rows, vec![
            svec(&["A1", "01/01/2022", "USA", "XYZ", "50", "15.00", "550.00", "750.00",
                   "200.00"]),
        ]);
    }

    #[test]
    fn test_render_gains_summary() {
        let summary = vec![
            GainSummary::Symbol(SymbolGainSummary {
                year: 2021,
                account_number: "A1".to_string(),
                market: "CAN".to_string(),
                symbol: "XYZ".to_string(),
                gain: dec!(-12.3),
            }),
            GainSummary::YearTotal { year: 2021, total: dec!(-12.3) },
        ];
        let table = render_gains_summary_table(&summary);
        assert_eq!(table.header, svec(&[
            "Year", "Account number", "Market", "Symbol", "Gain", "Annual total"]));
        assert_vec_eq(table.rows, vec![
            svec(&["2021", "A1", "CAN", "XYZ", "-12.30", ""]),
            svec(&["2021", "", "", "", "", "-12.30"]),
        ]);
    }
}
