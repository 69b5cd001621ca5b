use std::borrow::BorrowMut;
use std::collections::{HashMap, HashSet};
use std::io::Read;
use std::str::FromStr;

use rust_decimal::Decimal;
use time::Date;

use crate::portfolio::csv_common::JournalCol;
use crate::portfolio::{JournalEntry, Operation};
use crate::util::date::DynDateFormat;
use crate::util::rw::{DescribedReader, WriteHandle};
use crate::write_errln;

type Error = String;

pub struct JournalCsvParseOptions {
    pub delimiter: u8,
    pub date_format: Option<DynDateFormat>,
}

impl Default for JournalCsvParseOptions {
    fn default() -> Self {
        Self { delimiter: b',', date_format: None }
    }
}

/// Validates a user-supplied field delimiter, which must be a single ASCII
/// character.
pub fn parse_delimiter(value: &str) -> Result<u8, Error> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii() => Ok(c as u8),
        _ => Err(format!("Invalid delimiter '{value}': must be a single ASCII character")),
    }
}

fn take_decimal(
    values: &mut HashMap<&str, String>,
    field_name: &str,
) -> Result<Decimal, Error> {
    match values.remove(field_name) {
        Some(value) => Decimal::from_str(&value).map_err(|e| {
            format!("Failed to parse number for {} ('{}'): {}", field_name, value, e)
        }),
        // Blank amounts are zero.
        None => Ok(Decimal::ZERO),
    }
}

fn take_date(
    values: &mut HashMap<&str, String>,
    field_name: &str,
    parse_options: &JournalCsvParseOptions,
) -> Result<Option<Date>, Error> {
    match values.remove(field_name) {
        Some(s) => crate::util::date::parse_date(&s, &parse_options.date_format)
            .map(Some)
            .map_err(|e| format!("Failed to parse {} \"{}\": {}", field_name, s, e)),
        None => Ok(None),
    }
}

fn journal_entry_from_csv_values(
    mut values: HashMap<&str, String>,
    parse_options: &JournalCsvParseOptions,
) -> Result<JournalEntry, Error> {
    let trade_date = take_date(&mut values, JournalCol::TRADE_DATE, parse_options)?
        .ok_or_else(|| format!("Missing {}", JournalCol::TRADE_DATE))?;

    Ok(JournalEntry {
        trade_date,
        settlement_date: take_date(&mut values, JournalCol::SETTLEMENT_DATE, parse_options)?,
        processing_date: take_date(&mut values, JournalCol::PROCESSING_DATE, parse_options)?,
        account_number: values.remove(JournalCol::ACCOUNT_NUMBER).unwrap_or_default(),
        account_description: values.remove(JournalCol::ACCOUNT_DESCRIPTION)
            .unwrap_or_default(),
        market: values.remove(JournalCol::MARKET).unwrap_or_default(),
        symbol: values.remove(JournalCol::SYMBOL).unwrap_or_default(),
        description: values.remove(JournalCol::DESCRIPTION).unwrap_or_default(),
        operation: Operation::from_journal_text(
            &values.remove(JournalCol::OPERATION).unwrap_or_default()),
        quantity: take_decimal(&mut values, JournalCol::QUANTITY)?,
        price: take_decimal(&mut values, JournalCol::PRICE)?,
        commission: take_decimal(&mut values, JournalCol::COMMISSION)?,
        net_amount: take_decimal(&mut values, JournalCol::NET_AMOUNT)?,
        balance_at_settlement_date:
            take_decimal(&mut values, JournalCol::BALANCE_AT_SETTLEMENT_DATE)?,
        current_balance: take_decimal(&mut values, JournalCol::CURRENT_BALANCE)?,
    })
}

/// Reads a journal export. Entries are returned in file order (which for
/// brokerage exports is newest first).
pub fn parse_journal_csv(
    desc_reader: &mut DescribedReader,
    parse_options: &JournalCsvParseOptions,
    err_stream: &mut WriteHandle,
) -> Result<Vec<JournalEntry>, Error> {
    let csv_desc = desc_reader.desc().to_string();
    let mut reader_box = desc_reader.reader()
        .map_err(|e| format!("Failed to open {csv_desc}: {e}"))?;
    let reader: &mut dyn Read = reader_box.borrow_mut();

    let mut csv_r = csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(parse_options.delimiter)
        .from_reader(reader);

    let mut col_index_to_name: HashMap<usize, &'static str> = HashMap::new();
    let mut found_col_names: HashSet<&'static str> = HashSet::new();

    let col_names = JournalCol::get_csv_cols();

    let headers_res = csv_r
        .headers()
        .map_err(|e| format!("Error in csv headers of {csv_desc}: {e}"))?;
    for (i, col) in headers_res.iter().enumerate() {
        let lower_col = col.to_lowercase();
        let san_col = lower_col.trim();
        match col_names.get(san_col) {
            Some(static_str) => {
                col_index_to_name.insert(i, static_str);
                found_col_names.insert(static_str);
            }
            None => {
                write_errln!(
                    err_stream,
                    "Warning: Unrecognized column in {csv_desc}: {san_col}"
                );
            }
        }
    }

    let col_index_to_name = col_index_to_name;

    if !found_col_names.contains(JournalCol::TRADE_DATE) {
        return Err(format!("{csv_desc} has no '{}' column", JournalCol::TRADE_DATE));
    }

    let mut entries = Vec::<JournalEntry>::new();

    for (i, record_res) in csv_r.records().enumerate() {
        // Start at 1 for the user, and include header.
        let row_num = i + 2;

        let record = record_res.map_err(|e| {
            format!("Error reading csv record in {csv_desc} at row {row_num}: {e}")
        })?;

        let mut values = HashMap::<&'static str, String>::new();
        for (i, col_val) in record.iter().enumerate() {
            if !col_val.trim().is_empty() {
                if let Some(col_name) = col_index_to_name.get(&i) {
                    values.insert(col_name, col_val.trim().to_string());
                }
            }
        }

        let entry = journal_entry_from_csv_values(values, parse_options)
            .map_err(|e| format!("Error on row {row_num} of {csv_desc}: {e}"))?;
        if !entry.operation.is_recognized() {
            tracing::debug!("parse_journal_csv: row {} of {} has unrecognized operation '{}'",
                            row_num, csv_desc, entry.operation);
        }
        entries.push(entry);
    }

    tracing::info!("parse_journal_csv: read {} entries from {}", entries.len(), csv_desc);
    Ok(entries)
}
