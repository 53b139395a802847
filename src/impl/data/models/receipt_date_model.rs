use chrono::{Duration, NaiveDate, NaiveDateTime};

use super::raw_table_model::RawCell;

const DATE_FORMATS: [&str; 5] = ["%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y", "%d-%b-%Y", "%d %b %Y"];
const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%d/%m/%Y %H:%M"];

/// Largest serial Excel accepts (9999-12-31).
const MAX_EXCEL_SERIAL: f64 = 2_958_465.0;

/// Receipt date of a transaction line. Values that cannot be interpreted as a
/// date are treated as missing rather than failing the load.
#[derive(Debug)]
pub(crate) struct ReceiptDateModel(pub Option<NaiveDate>);

impl ReceiptDateModel {
    pub(crate) fn from_cell(cell: &RawCell) -> Self {
        ReceiptDateModel(match cell {
            RawCell::Empty => None,
            RawCell::Date(d) => Some(*d),
            RawCell::Number(serial) => from_excel_serial(*serial),
            RawCell::Text(s) => parse_text(s.trim()),
        })
    }
}

impl Into<Option<NaiveDate>> for ReceiptDateModel {
    fn into(self) -> Option<NaiveDate> {
        self.0
    }
}

fn parse_text(s: &str) -> Option<NaiveDate> {
    if s.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|f| NaiveDate::parse_from_str(s, f).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|f| NaiveDateTime::parse_from_str(s, f).ok())
                .map(|dt| dt.date())
        })
}

/// Excel day serials count from 1899-12-30 (which absorbs the 1900 leap-year
/// bug for every date after February 1900). The time-of-day fraction is
/// dropped.
pub(crate) fn from_excel_serial(serial: f64) -> Option<NaiveDate> {
    if !(1.0..=MAX_EXCEL_SERIAL).contains(&serial) {
        return None;
    }
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    epoch.checked_add_signed(Duration::days(serial.trunc() as i64))
}
