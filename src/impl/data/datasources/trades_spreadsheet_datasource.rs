use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Data, Reader as _};
use fractic_server_error::ServerError;

use crate::{
    data::models::{
        raw_table_model::{RawCell, RawTable},
        receipt_date_model::from_excel_serial,
    },
    errors::{EmptySource, InvalidSpreadsheet},
};

pub(crate) trait TradesSpreadsheetDatasource: Send + Sync {
    /// Reads the first worksheet. Row 0 is the header row.
    fn from_bytes(&self, bytes: &[u8]) -> Result<RawTable, ServerError>;
}

pub(crate) struct TradesSpreadsheetDatasourceImpl;

impl TradesSpreadsheetDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl TradesSpreadsheetDatasource for TradesSpreadsheetDatasourceImpl {
    fn from_bytes(&self, bytes: &[u8]) -> Result<RawTable, ServerError> {
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
            .map_err(|e| InvalidSpreadsheet::with_debug("could not open workbook", &e))?;
        let first_sheet = workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| InvalidSpreadsheet::new("workbook has no worksheets"))?;
        let range = workbook
            .worksheet_range(&first_sheet)
            .map_err(|e| InvalidSpreadsheet::with_debug("could not read first worksheet", &e))?;

        let mut rows = range.rows();
        let headers: Vec<String> = match rows.next() {
            Some(header_row) => header_row.iter().map(|c| cell(c).text().into_owned()).collect(),
            None => return Err(EmptySource::new()),
        };
        if headers.iter().all(|h| h.trim().is_empty()) {
            return Err(EmptySource::new());
        }
        let rows: Vec<Vec<RawCell>> = rows.map(|row| row.iter().map(cell).collect()).collect();
        Ok(RawTable { headers, rows })
    }
}

fn cell(data: &Data) -> RawCell {
    match data {
        Data::Empty => RawCell::Empty,
        Data::String(s) => RawCell::Text(s.clone()),
        Data::Int(i) => RawCell::Number(*i as f64),
        Data::Float(f) => RawCell::Number(*f),
        Data::Bool(b) => RawCell::Text(b.to_string()),
        Data::DateTime(dt) => match from_excel_serial(dt.as_f64()) {
            Some(d) => RawCell::Date(d),
            None => RawCell::Number(dt.as_f64()),
        },
        Data::DateTimeIso(s) | Data::DurationIso(s) => RawCell::Text(s.clone()),
        Data::Error(_) => RawCell::Empty,
    }
}
