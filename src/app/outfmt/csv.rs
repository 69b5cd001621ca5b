use std::{
    fs::File,
    path::{Path, PathBuf},
};

use crate::portfolio::render::RenderTable;

use super::model::{AcbWriter, Error, OutputType};

/// Writes each table next to its journal, as `{journal}_holdings.csv`,
/// `{journal}_gains.csv` and `{journal}_gains_summary.csv`.
pub struct CsvWriter {
    journal_path: PathBuf,
    delimiter: u8,
}

impl CsvWriter {
    pub fn new(journal_path: PathBuf, delimiter: u8) -> CsvWriter {
        CsvWriter { journal_path, delimiter }
    }

    pub fn output_path(journal_path: &Path, out_type: OutputType) -> PathBuf {
        let suffix = match out_type {
            OutputType::Holdings => "_holdings.csv",
            OutputType::Gains => "_gains.csv",
            OutputType::GainsSummary => "_gains_summary.csv",
        };
        // Appended to the raw path, which need not be valid UTF-8.
        let mut path = journal_path.as_os_str().to_os_string();
        path.push(suffix);
        PathBuf::from(path)
    }
}

impl AcbWriter for CsvWriter {
    fn print_render_table(
        &mut self,
        out_type: OutputType,
        _name: &str,
        table_model: &RenderTable,
    ) -> Result<(), Error> {
        let file_path = CsvWriter::output_path(&self.journal_path, out_type);
        let fp = File::create(&file_path).map_err(|e| {
            format!("Failed to create {}: {}", file_path.display(), e)
        })?;

        let mut csv_w = csv::WriterBuilder::new()
            .has_headers(true)
            .delimiter(self.delimiter)
            .from_writer(fp);

        csv_w
            .write_record(&table_model.header)
            .map_err(|e| e.to_string())?;
        for row in &table_model.rows {
            csv_w.write_record(row).map_err(|e| e.to_string())?;
        }
        csv_w.flush().map_err(|e| e.to_string())?;

        tracing::debug!("CsvWriter wrote {} rows to {}",
                        table_model.rows.len(), file_path.display());
        Ok(())
    }
}
