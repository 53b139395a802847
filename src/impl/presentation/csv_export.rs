use base64::{engine::general_purpose::STANDARD, Engine as _};
use fractic_server_error::ServerError;

use crate::{entities::FilteredView, errors::CsvWriteFailed};

pub(crate) struct CsvExporter;

impl CsvExporter {
    pub(crate) fn new() -> Self {
        Self
    }

    /// Serializes the rows of `view` with the source headers and cell text,
    /// in store order.
    pub(crate) fn export(&self, view: &FilteredView<'_>) -> Result<String, ServerError> {
        let mut writer = csv::WriterBuilder::new()
            .flexible(true)
            .from_writer(vec![]);
        writer
            .write_record(view.store().headers())
            .map_err(|e| CsvWriteFailed::with_debug(&e))?;
        for row in view.raw_rows() {
            writer
                .write_record(row)
                .map_err(|e| CsvWriteFailed::with_debug(&e))?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| CsvWriteFailed::with_debug(&e))?;
        String::from_utf8(bytes).map_err(|e| CsvWriteFailed::with_debug(&e))
    }

    /// Download link for the filtered rows ('data:text/csv;base64,...').
    pub(crate) fn data_uri(&self, view: &FilteredView<'_>) -> Result<String, ServerError> {
        let csv = self.export(view)?;
        Ok(format!("data:text/csv;base64,{}", STANDARD.encode(csv)))
    }
}
