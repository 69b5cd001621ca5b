pub use time::Date;
use time::{macros::format_description, UtcOffset};

pub type StaticDateFormat<'a> =
    &'static [time::format_description::BorrowedFormatItem<'a>];
pub type DynDateFormat = time::format_description::OwnedFormatItem;

// Brokerage journals write dates as dd/mm/yyyy.
pub const JOURNAL_DATE_FORMAT: StaticDateFormat =
    format_description!("[day]/[month]/[year]");

pub const ISO_DATE_FORMAT: StaticDateFormat =
    format_description!("[year]-[month]-[day]");

pub fn parse_journal_date(date_str: &str) -> Result<Date, time::error::Parse> {
    Date::parse(date_str, JOURNAL_DATE_FORMAT)
}

pub fn parse_dyn_date_format(fmt: &str) -> Result<DynDateFormat, String> {
    // The documentation recommends version 2
    const VERSION: usize = 2;
    time::format_description::parse_owned::<VERSION>(fmt)
        .map_err(|e| format!("{}", e))
}

pub fn parse_date(
    date_str: &str,
    fmt: &Option<DynDateFormat>,
) -> Result<Date, time::error::Parse> {
    match fmt {
        Some(fmt_) => Date::parse(date_str, &fmt_),
        None => parse_journal_date(date_str),
    }
}

pub fn to_journal_string(d: &Date) -> String {
    // Formatting with a static, well-formed description cannot fail for a
    // valid Date, but fall back to the ISO rendering rather than panic.
    d.format(JOURNAL_DATE_FORMAT).unwrap_or_else(|_| d.to_string())
}

pub fn to_iso_string(d: &Date) -> String {
    d.format(ISO_DATE_FORMAT).unwrap_or_else(|_| d.to_string())
}

// Using UtcOffset::current_local_offset is unsound on Linux and will return
// an error unless built with an "unsafe" cfg, so go through chrono instead.
pub fn local_utc_offset() -> Result<UtcOffset, time::error::ComponentRange> {
    let now = chrono::offset::Local::now();
    let offset = now.offset();
    UtcOffset::from_whole_seconds(-1 * offset.utc_minus_local())
}

// Used by both unit and integration tests
pub mod pub_testlib {
    use time::{Date, Duration, Month};

    pub fn doy_date(year: u32, day: i64) -> Date {
        Date::from_calendar_date(year as i32, Month::January, 1)
            .unwrap()
            .saturating_add(Duration::days(day))
    }
}
