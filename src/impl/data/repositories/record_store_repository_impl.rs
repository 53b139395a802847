use std::str::FromStr as _;

use async_trait::async_trait;
use chrono::NaiveDate;
use fractic_server_error::ServerError;
use tracing::{info, warn};

use crate::{
    data::{
        datasources::{
            trades_csv_datasource::{TradesCsvDatasource, TradesCsvDatasourceImpl},
            trades_spreadsheet_datasource::{
                TradesSpreadsheetDatasource, TradesSpreadsheetDatasourceImpl,
            },
        },
        models::{
            amount_model::AmountModel,
            column_header_model::ColumnHeaderModel,
            raw_table_model::{RawCell, RawTable},
            receipt_date_model::ReceiptDateModel,
        },
    },
    domain::repositories::record_store_repository::RecordStoreRepository,
    entities::{Column, Dimension, Measure, RecordStore, SourceFormat, TradeRecord},
    errors::{InvalidAmount, MissingRequiredColumn, ReadError, UnsupportedSourceFormat},
};

pub(crate) struct RecordStoreRepositoryImpl<
    DS1 = TradesCsvDatasourceImpl,         // Default.
    DS2 = TradesSpreadsheetDatasourceImpl, // Default.
> where
    DS1: TradesCsvDatasource,
    DS2: TradesSpreadsheetDatasource,
{
    csv_datasource: DS1,
    spreadsheet_datasource: DS2,
}

#[async_trait]
impl<DS1, DS2> RecordStoreRepository for RecordStoreRepositoryImpl<DS1, DS2>
where
    DS1: TradesCsvDatasource,
    DS2: TradesSpreadsheetDatasource,
{
    fn from_string(&self, csv: &str, required: &[Column]) -> Result<RecordStore, ServerError> {
        build_store(self.csv_datasource.from_string(csv)?, required)
    }

    fn from_bytes(
        &self,
        bytes: &[u8],
        format: SourceFormat,
        required: &[Column],
    ) -> Result<RecordStore, ServerError> {
        let table = match format {
            SourceFormat::Csv => self.csv_datasource.from_bytes(bytes)?,
            SourceFormat::Spreadsheet => self.spreadsheet_datasource.from_bytes(bytes)?,
        };
        build_store(table, required)
    }

    async fn from_file<P>(&self, path: P, required: &[Column]) -> Result<RecordStore, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let path = path.as_ref();
        let format = SourceFormat::from_path(path)
            .ok_or_else(|| UnsupportedSourceFormat::new(&path.display().to_string()))?;
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| ReadError::with_debug(&e))?;
        info!(path = %path.display(), ?format, bytes = bytes.len(), "read trade records source");
        self.from_bytes(&bytes, format, required)
    }
}

impl RecordStoreRepositoryImpl {
    pub(crate) fn new() -> Self {
        RecordStoreRepositoryImpl {
            csv_datasource: TradesCsvDatasourceImpl::new(),
            spreadsheet_datasource: TradesSpreadsheetDatasourceImpl::new(),
        }
    }
}

/// Maps a raw table onto the canonical schema. Fully blank rows are dropped.
fn build_store(table: RawTable, required: &[Column]) -> Result<RecordStore, ServerError> {
    let header_model = ColumnHeaderModel::resolve(&table.headers);
    if let Some(missing) = required.iter().find(|c| header_model.position(**c).is_none()) {
        return Err(MissingRequiredColumn::new(missing.label()));
    }

    let mut records = Vec::with_capacity(table.rows.len());
    let mut raw_rows = Vec::with_capacity(table.rows.len());
    let mut unparsed_dates = 0usize;
    for (i, row) in table.rows.into_iter().enumerate() {
        if row.iter().all(RawCell::is_blank) {
            continue;
        }
        // Header is line 1.
        let line = i + 2;
        let cell = |column: Column| header_model.position(column).and_then(|p| row.get(p));

        let mut record = TradeRecord::default();
        for dimension in Dimension::ALL {
            if let Some(c) = cell(dimension.column()).filter(|c| !c.is_blank()) {
                record.set_dimension(dimension, Some(c.text().into_owned()));
            }
        }
        for measure in Measure::ALL {
            if let Some(c) = cell(measure.column()) {
                record.set_measure(measure, parse_amount(c, measure, line)?);
            }
        }
        if let Some(c) = cell(Column::ReceiptDate) {
            let date: Option<NaiveDate> = ReceiptDateModel::from_cell(c).into();
            if date.is_none() && !c.is_blank() {
                unparsed_dates += 1;
            }
            record.receipt_date = date;
        }

        raw_rows.push(row.iter().map(|c| c.text().into_owned()).collect());
        records.push(record);
    }

    if unparsed_dates > 0 {
        warn!(
            unparsed_dates,
            "receipt dates could not be parsed and are treated as missing"
        );
    }
    let columns = header_model.columns().collect();
    info!(
        rows = records.len(),
        columns = ?header_model.columns().collect::<Vec<_>>(),
        "loaded trade records"
    );
    Ok(RecordStore::new(table.headers, raw_rows, records, columns))
}

fn parse_amount(cell: &RawCell, measure: Measure, line: usize) -> Result<Option<f64>, ServerError> {
    let invalid = |value: &str| InvalidAmount::new(value, measure.column().label(), line);
    match cell {
        c if c.is_blank() => Ok(None),
        RawCell::Number(n) if n.is_finite() => Ok(Some(*n)),
        RawCell::Text(s) => AmountModel::from_str(s)
            .map(|a| Some(a.into()))
            .map_err(|_| invalid(s)),
        other => Err(invalid(other.text().as_ref())),
    }
}
