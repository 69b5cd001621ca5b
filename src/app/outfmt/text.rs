use std::io::Write;

use tabled::settings::{
    object::{Cell, Columns, Rows},
    style::On,
    Alignment, Border,
};

use crate::{portfolio::render::RenderTable, util::rw::WriteHandle};

use super::model::{AcbWriter, Error, OutputType};

/// Renders tables for reading on a console.
pub struct TextWriter {
    w: WriteHandle,
}

impl TextWriter {
    pub fn new(w: WriteHandle) -> TextWriter {
        TextWriter { w }
    }
}

struct CellBorder {
    top: char,
    bottom: char,
    left: char,
    right: char,
    top_left: char,
    top_right: char,
    bottom_left: char,
    bottom_right: char,
}

impl CellBorder {
    pub fn to_border(&self) -> Border<On, On, On, On> {
        Border::full(
            self.top,
            self.bottom,
            self.left,
            self.right,
            self.top_left,
            self.top_right,
            self.bottom_left,
            self.bottom_right,
        )
    }
}

impl Default for CellBorder {
    fn default() -> Self {
        Self {
            top: '-',
            bottom: '-',
            left: '|',
            right: '|',
            top_left: '+',
            top_right: '+',
            bottom_left: '+',
            bottom_right: '+',
        }
    }
}

impl AcbWriter for TextWriter {
    fn print_render_table(
        &mut self,
        out_type: OutputType,
        name: &str,
        table_model: &RenderTable,
    ) -> Result<(), Error> {
        let map_write_err = |e| format!("{e}");

        let title = match out_type {
            OutputType::Holdings => format!("Holdings for {}", name),
            OutputType::Gains => format!("Gains for {}", name),
            OutputType::GainsSummary => format!("Annual gains for {}", name),
        };

        writeln!(self.w, "{}", title).map_err(map_write_err)?;

        if table_model.rows.is_empty() {
            writeln!(self.w, "(none)\n").map_err(map_write_err)?;
            return Ok(());
        }

        let n_cols = table_model.header.len();
        let mut table_bldr = tabled::builder::Builder::default();
        table_bldr.push_record(
            table_model
                .header
                .iter()
                .map(|h| h.to_uppercase())
                .collect::<Vec<String>>(),
        );
        for row in &table_model.rows {
            table_bldr.push_record(row);
        }

        let mut table = table_bldr.build();
        table.with(tabled::settings::Style::ascii());
        // Center the header
        table.modify(Rows::first(), Alignment::center());

        // Set top row borders (nothing on outer edge)
        table.modify(
            Rows::first(),
            CellBorder {
                top: ' ',
                top_left: ' ',
                top_right: ' ',
                ..Default::default()
            }
            .to_border(),
        );
        // Set left col borders
        table.modify(
            Columns::first(),
            CellBorder {
                left: ' ',
                top_left: '-',
                bottom_left: '-',
                ..Default::default()
            }
            .to_border(),
        );
        // Set right col borders
        table.modify(
            Columns::last(),
            CellBorder {
                right: ' ',
                top_right: '-',
                bottom_right: '-',
                ..Default::default()
            }
            .to_border(),
        );
        // Set upper-left corner borders
        table.modify(
            Cell::new(0, 0),
            CellBorder {
                left: ' ',
                top: ' ',
                top_right: ' ',
                top_left: ' ',
                bottom_left: '-',
                ..Default::default()
            }
            .to_border(),
        );
        // Set upper-right corner borders
        table.modify(
            Cell::new(0, n_cols - 1),
            CellBorder {
                right: ' ',
                top: ' ',
                top_right: ' ',
                top_left: ' ',
                bottom_right: '-',
                ..Default::default()
            }
            .to_border(),
        );

        writeln!(self.w, "{table}\n").map_err(map_write_err)?;
        Ok(())
    }
}
