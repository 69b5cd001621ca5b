use crate::{
    app::outfmt::csv::CsvWriter,
    portfolio::{
        compute_acb,
        io::journal_csv::{parse_journal_csv, JournalCsvParseOptions},
        render::{
            render_gains_summary_table, render_gains_table, render_holdings_table,
            RenderTable,
        },
        AcbResult, ChronologicalJournal,
    },
    util::{date::DynDateFormat, rw::{DescribedReader, WriteHandle}},
    verboseln, write_errln,
};

use super::outfmt::{model::{AcbWriter, OutputType}, text::TextWriter};

pub type Error = String;

pub struct Options {
    pub delimiter: u8,
    pub date_format: Option<DynDateFormat>,
    /// Also render the tables to the out printer.
    pub print: bool,
    /// Continue with the remaining journals after one fails.
    pub keep_going: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            delimiter: b',',
            date_format: None,
            print: false,
            keep_going: false,
        }
    }
}

impl Options {
    fn parse_options(&self) -> JournalCsvParseOptions {
        JournalCsvParseOptions {
            delimiter: self.delimiter,
            date_format: self.date_format.clone(),
        }
    }
}

pub struct AppRenderResult {
    pub acb_result: AcbResult,
    pub holdings_table: RenderTable,
    pub gains_table: RenderTable,
    pub gains_summary_table: RenderTable,
}

/// Reads one journal, computes its holdings and gains, and renders them
/// into tables. Nothing is written anywhere.
pub fn run_acb_app_to_render_model(
    journal_reader: &mut DescribedReader,
    options: &Options,
    mut err_printer: WriteHandle,
) -> Result<AppRenderResult, Error> {
    let entries = parse_journal_csv(
        journal_reader, &options.parse_options(), &mut err_printer)?;
    let journal = ChronologicalJournal::from_newest_first(entries);
    let acb_result = compute_acb(&journal).map_err(|e| e.to_string())?;

    Ok(AppRenderResult {
        holdings_table: render_holdings_table(acb_result.sorted_holdings()),
        gains_table: render_gains_table(&acb_result.gains),
        gains_summary_table: render_gains_summary_table(&acb_result.gains_by_year),
        acb_result,
    })
}

fn write_render_result(
    name: &str,
    render_res: &AppRenderResult,
    writer: &mut dyn AcbWriter,
) -> Result<(), Error> {
    writer.print_render_table(OutputType::Holdings, name, &render_res.holdings_table)
        .map_err(|e| format!("Rendering holdings: {e}"))?;
    writer.print_render_table(OutputType::Gains, name, &render_res.gains_table)
        .map_err(|e| format!("Rendering gains: {e}"))?;
    writer.print_render_table(
        OutputType::GainsSummary, name, &render_res.gains_summary_table)
        .map_err(|e| format!("Rendering gains summary: {e}"))?;
    Ok(())
}

/// Runs a single journal through to the given writers.
pub fn run_acb_app_to_writers(
    writers: Vec<Box<dyn AcbWriter>>,
    mut journal_reader: DescribedReader,
    options: &Options,
    err_printer: WriteHandle,
) -> Result<AppRenderResult, Error> {
    let render_res = run_acb_app_to_render_model(
        &mut journal_reader, options, err_printer)?;

    let name = journal_reader.desc();
    for mut writer in writers {
        write_render_result(&name, &render_res, writer.as_mut())?;
        writer.finish()?;
    }
    Ok(render_res)
}

/// Processes each journal independently, writing its three csv files next
/// to it.
///
/// Returned Err is for exit code determination only.
/// All errors are written to err_printer.
pub fn run_acb_app_for_files(
    journal_readers: Vec<DescribedReader>,
    options: Options,
    out_printer: WriteHandle,
    mut err_printer: WriteHandle,
) -> Result<(), ()> {
    let mut n_failed = 0;
    for journal_reader in journal_readers {
        let name = journal_reader.desc().to_string();
        verboseln!("Processing {name}");
        tracing::info!("run_acb_app_for_files: processing {}", name);

        let mut writers: Vec<Box<dyn AcbWriter>> =
            vec![Box::new(CsvWriter::new(journal_reader.path(), options.delimiter))];
        if options.print {
            writers.push(Box::new(TextWriter::new(out_printer.clone())));
        }

        match run_acb_app_to_writers(writers, journal_reader, &options, err_printer.clone()) {
            Ok(res) => {
                verboseln!("{name}: {} holdings, {} sales",
                           res.acb_result.holdings.len(), res.acb_result.gains.len());
            }
            Err(e) => {
                write_errln!(err_printer, "acb failed for file {name}: {e}");
                n_failed += 1;
                if !options.keep_going {
                    break;
                }
            }
        }
    }

    if n_failed > 0 {
        Err(())
    } else {
        Ok(())
    }
}

// MARK: Tests
#[cfg(test)]
mod tests {
    use crate::app::outfmt::text::TextWriter;
    use crate::portfolio::io::journal_csv::testlib::{
        JournalCsvBuilder, TestJournalCsvRow as Row,
    };
    use crate::testlib::{assert_re, assert_vec_eq};
    use crate::util::rw::{DescribedReader, WriteHandle};

    use super::{
        run_acb_app_for_files, run_acb_app_to_render_model, run_acb_app_to_writers,
        Options,
    };

    fn svec(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    fn scenario_reader(delim: char) -> DescribedReader {
        // Newest first, as exported.
        JournalCsvBuilder::with_all_headers(delim).reader(&[
            Row{acct: "A1", td: "15/03/2021", mkt: "CAN", sym: "SYM", op: "Sell",
                qty: "50", price: "15", net: "750", ..Row::default()},
            Row{acct: "A1", td: "01/02/2021", op: "Fees", net: "-10", ..Row::default()},
            Row{acct: "A1", td: "10/01/2021", mkt: "CAN", sym: "SYM", op: "Buy",
                qty: "100", price: "12", net: "-1200", ..Row::default()},
            Row{acct: "A1", td: "05/01/2021", mkt: "CAN", sym: "SYM", op: "Buy",
                qty: "100", price: "10", net: "-1000", ..Row::default()},
        ])
    }

    #[test]
    fn test_render_model() {
        let render_res = run_acb_app_to_render_model(
            &mut scenario_reader(';'),
            &Options { delimiter: b';', ..Options::default() },
            WriteHandle::empty_write_handle()).unwrap();

        assert_vec_eq(render_res.holdings_table.rows, vec![
            svec(&["A1", "15/03/2021", "CAN", "SYM", "150", "15.00", "11.00",
                   "2250.00", "1450.00"]),
        ]);
        assert_vec_eq(render_res.gains_table.rows, vec![
            svec(&["A1", "15/03/2021", "CAN", "SYM", "50", "15.00", "550.00",
                   "750.00", "200.00"]),
        ]);
        assert_vec_eq(render_res.gains_summary_table.rows, vec![
            svec(&["2021", "A1", "CAN", "SYM", "200.00", ""]),
            svec(&["2021", "", "", "", "", "200.00"]),
        ]);
    }

    #[test]
    fn test_render_model_missing_symbol() {
        let mut reader = JournalCsvBuilder::with_all_headers(',').reader(&[
            Row{td: "15/03/2021", op: "Sell", qty: "1", net: "5", ..Row::default()},
        ]);
        let err = run_acb_app_to_render_model(
            &mut reader, &Options::default(), WriteHandle::empty_write_handle())
            .err().unwrap();
        assert_eq!(err, "no symbol specified in a journal entry: \
                         tradeDate=2021-03-15, operation=Sell");
    }

    #[test]
    fn test_run_to_text_writer() {
        let (handle, buff) = WriteHandle::string_buff_write_handle();
        run_acb_app_to_writers(
            vec![Box::new(TextWriter::new(handle))],
            scenario_reader(','),
            &Options::default(),
            WriteHandle::empty_write_handle()).unwrap();

        let out = buff.borrow().as_str().to_string();
        assert_re(r"(?s)Holdings for foo\.csv.*Gains for foo\.csv.*Annual gains for foo\.csv",
                  &out);
        assert_re(r"SYM\s*\|\s*150\s*\|", &out);
    }

    #[test]
    fn test_failing_files_are_reported() {
        let bad = || JournalCsvBuilder::with_custom_header_line("symbol,operation", ',')
            .reader_raw(&["ABC,Buy"]);

        // Stops at the first failure by default.
        let (err_handle, err_buff) = WriteHandle::string_buff_write_handle();
        let res = run_acb_app_for_files(
            vec![bad(), bad()], Options::default(),
            WriteHandle::empty_write_handle(), err_handle);
        assert_eq!(res, Err(()));
        assert_eq!(err_buff.borrow().as_str(),
                   "acb failed for file foo.csv: foo.csv has no 'trade date' column\n");

        let (err_handle, err_buff) = WriteHandle::string_buff_write_handle();
        let res = run_acb_app_for_files(
            vec![bad(), bad()], Options { keep_going: true, ..Options::default() },
            WriteHandle::empty_write_handle(), err_handle);
        assert_eq!(res, Err(()));
        assert_eq!(err_buff.borrow().as_str().lines().count(), 2);
    }

    #[test]
    fn test_no_files() {
        let res = run_acb_app_for_files(
            vec![], Options::default(),
            WriteHandle::empty_write_handle(), WriteHandle::empty_write_handle());
        assert_eq!(res, Ok(()));
    }
}
