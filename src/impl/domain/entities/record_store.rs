use std::{
    collections::{BTreeSet, HashSet},
    path::Path,
};

use super::{
    column::{Column, Dimension},
    trade_record::TradeRecord,
};

/// Immutable in-memory table of trade records, loaded once per session and
/// shared by reference with every pipeline run.
///
/// Besides the typed records, the store keeps the source header row and the
/// raw cell text of every row so that filtered views can be exported with the
/// original column names.
#[derive(Debug, Clone)]
pub struct RecordStore {
    headers: Vec<String>,
    raw_rows: Vec<Vec<String>>,
    records: Vec<TradeRecord>,
    columns: HashSet<Column>,
}

/// Ordered subset of a [`RecordStore`], identified by ascending row indices.
#[derive(Debug, Clone)]
pub struct FilteredView<'a> {
    store: &'a RecordStore,
    indices: Vec<usize>,
}

/// Encoding of an uploaded or bundled source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Csv,
    /// Any workbook calamine can open (xlsx, xlsm, xls, ods).
    Spreadsheet,
}

// --

impl SourceFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "csv" => Some(SourceFormat::Csv),
            "xlsx" | "xlsm" | "xls" | "ods" => Some(SourceFormat::Spreadsheet),
            _ => None,
        }
    }
}

impl RecordStore {
    /// Assembles a store from already-parsed rows. `raw_rows` and `records`
    /// must be index-aligned.
    pub(crate) fn new(
        headers: Vec<String>,
        raw_rows: Vec<Vec<String>>,
        records: Vec<TradeRecord>,
        columns: HashSet<Column>,
    ) -> Self {
        debug_assert_eq!(raw_rows.len(), records.len());
        Self {
            headers,
            raw_rows,
            records,
            columns,
        }
    }

    /// Builds a store with the full canonical schema directly from records,
    /// e.g. for adapters that obtain rows from somewhere other than a file.
    pub fn from_records(records: Vec<TradeRecord>) -> Self {
        let headers = Column::ALL.iter().map(|c| c.label().to_string()).collect();
        let raw_rows = records
            .iter()
            .map(|r| {
                Column::ALL
                    .iter()
                    .map(|c| match (c.as_dimension(), c.as_measure()) {
                        (Some(d), _) => r.dimension(d).unwrap_or_default().to_string(),
                        (_, Some(m)) => r.measure(m).map(|v| v.to_string()).unwrap_or_default(),
                        _ => r
                            .receipt_date
                            .map(|d| d.format("%Y-%m-%d").to_string())
                            .unwrap_or_default(),
                    })
                    .collect()
            })
            .collect();
        Self {
            headers,
            raw_rows,
            records,
            columns: Column::ALL.into_iter().collect(),
        }
    }

    pub fn all_records(&self) -> &[TradeRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Header row as it appeared in the source.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn has_column(&self, column: impl Into<Column>) -> bool {
        self.columns.contains(&column.into())
    }

    /// Sorted filter options for the given column. Nulls are excluded.
    pub fn distinct_values(&self, dimension: Dimension) -> BTreeSet<String> {
        self.records
            .iter()
            .filter_map(|r| r.dimension(dimension))
            .map(str::to_string)
            .collect()
    }

    /// Sorted receipt years present in the data, for the year filter.
    pub fn distinct_years(&self) -> BTreeSet<i32> {
        self.records.iter().filter_map(|r| r.receipt_year()).collect()
    }

    /// Unfiltered view over every record.
    pub fn view(&self) -> FilteredView<'_> {
        FilteredView {
            store: self,
            indices: (0..self.records.len()).collect(),
        }
    }

    pub(crate) fn raw_row(&self, index: usize) -> &[String] {
        &self.raw_rows[index]
    }
}

impl<'a> FilteredView<'a> {
    pub(crate) fn with_indices(store: &'a RecordStore, indices: Vec<usize>) -> Self {
        Self { store, indices }
    }

    pub fn store(&self) -> &'a RecordStore {
        self.store
    }

    /// Row positions in the backing store, ascending.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn records(&self) -> impl Iterator<Item = &'a TradeRecord> + '_ {
        let records = self.store.all_records();
        self.indices.iter().map(move |&i| &records[i])
    }

    pub(crate) fn raw_rows(&self) -> impl Iterator<Item = &'a [String]> + '_ {
        let store = self.store;
        self.indices.iter().map(move |&i| store.raw_row(i))
    }
}
