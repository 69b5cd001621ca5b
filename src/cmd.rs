use std::path::PathBuf;

use clap::Parser;

use crate::{
    app::{run_acb_app_for_files, Options},
    portfolio::{csv_common::JournalCol, io::journal_csv::parse_delimiter},
    util::{
        date::parse_dyn_date_format,
        rw::{DescribedReader, WriteHandle},
    },
    write_errln,
};

const ABOUT: &str = "Average cost base (ACB) calculator for brokerage journals";

fn get_long_about() -> String {
    format!("\
Computes the average cost base (ACB) of each security held, and the capital
gain or loss realized by each sale, from a brokerage transaction journal.

For each journal file provided, three csv files are written next to it:
  {{file}}_holdings.csv       current holdings and their ACB
  {{file}}_gains.csv          each sale, with its cost and gain (or loss)
  {{file}}_gains_summary.csv  gains per year and symbol, with annual totals

Journals are expected in the order the brokerage exports them, newest entry
first. Each should contain a header with these column names:
{}",
        JournalCol::export_order_cols().join(", "))
}

#[derive(Parser, Debug)]
#[command(version = crate::app::ACB_APP_VERSION,
          about = ABOUT, long_about = get_long_about())]
pub struct Args {
    #[arg(required = true)]
    csv_files: Vec<PathBuf>,

    /// Field delimiter of the journal files. Output files use the same one.
    #[arg(short, long, default_value = ",")]
    pub delimiter: String,

    /// Format of how dates appear in the journal files.
    /// The default is "[day]/[month]/[year]".
    ///
    /// See https://time-rs.github.io/book/api/format-description.html
    #[arg(long)]
    pub date_fmt: Option<String>,

    /// Also print the computed tables
    #[arg(short, long, default_value_t = false)]
    pub print: bool,

    /// Continue with the remaining files after one fails
    #[arg(short, long, default_value_t = false)]
    pub keep_going: bool,

    /// Print verbose output
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Args {
    fn to_options(&self) -> Result<Options, String> {
        let date_format = match &self.date_fmt {
            Some(fmt) => Some(parse_dyn_date_format(fmt)
                .map_err(|e| format!("Invalid --date-fmt '{fmt}': {e}"))?),
            None => None,
        };
        Ok(Options {
            delimiter: parse_delimiter(&self.delimiter)?,
            date_format,
            print: self.print,
            keep_going: self.keep_going,
        })
    }
}

/// Returned Err is for exit code determination only.
pub fn command_main() -> Result<(), ()> {
    crate::tracing::setup_tracing();

    let args = Args::parse();
    crate::log::set_verbose(args.verbose);
    tracing::debug!("command_main: {:?}", args);

    let mut err_printer = WriteHandle::stderr_write_handle();

    let options = match args.to_options() {
        Ok(o) => o,
        Err(e) => {
            write_errln!(err_printer, "{e}");
            return Err(());
        }
    };

    let readers = args.csv_files.iter()
        .map(|p| DescribedReader::from_file_path(p.clone()))
        .collect();

    run_acb_app_for_files(
        readers, options, WriteHandle::stdout_write_handle(), err_printer)
}
