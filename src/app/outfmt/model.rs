use crate::portfolio::render::RenderTable;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum OutputType {
    Holdings,
    Gains,
    GainsSummary,
}

pub type Error = String;

pub trait AcbWriter {
    /// `name` identifies the journal the table was computed from.
    fn print_render_table(
        &mut self,
        out_type: OutputType,
        name: &str,
        table_model: &RenderTable,
    ) -> Result<(), Error>;

    fn finish(self: Box<Self>) -> Result<(), Error> {
        Ok(())
    }
}
