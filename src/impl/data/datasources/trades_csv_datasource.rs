use fractic_server_error::ServerError;

use crate::{
    data::models::raw_table_model::{RawCell, RawTable},
    errors::{EmptySource, InvalidCsv},
};

pub(crate) trait TradesCsvDatasource: Send + Sync {
    fn from_string(&self, s: &str) -> Result<RawTable, ServerError>;

    fn from_bytes(&self, bytes: &[u8]) -> Result<RawTable, ServerError>;
}

pub(crate) struct TradesCsvDatasourceImpl;

impl TradesCsvDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl TradesCsvDatasource for TradesCsvDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<RawTable, ServerError> {
        self.from_bytes(s.as_bytes())
    }

    fn from_bytes(&self, bytes: &[u8]) -> Result<RawTable, ServerError> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(bytes);
        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| InvalidCsv::with_debug(&e))?
            .iter()
            .map(str::to_string)
            .collect();
        if headers.iter().all(|h| h.trim().is_empty()) {
            return Err(EmptySource::new());
        }
        let width = headers.len();
        let rows = reader
            .records()
            .map(|r| {
                r.map_err(|e| InvalidCsv::with_debug(&e)).map(|r| {
                    // Short rows are padded, extra trailing cells dropped.
                    (0..width)
                        .map(|i| match r.get(i) {
                            Some(s) if !s.is_empty() => RawCell::Text(s.to_string()),
                            _ => RawCell::Empty,
                        })
                        .collect()
                })
            })
            .collect::<Result<Vec<Vec<RawCell>>, ServerError>>()?;
        Ok(RawTable { headers, rows })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_headers_and_pads_short_rows() {
        let table = TradesCsvDatasourceImpl::new()
            .from_string("HS Code,Importer,CIF Value (N)\n8703,Acme,\"1,000\"\n8704,Zenith\n")
            .ok()
            .unwrap_or_default();
        assert_eq!(table.headers, vec!["HS Code", "Importer", "CIF Value (N)"]);
        assert_eq!(
            table.rows,
            vec![
                vec![
                    RawCell::Text("8703".to_string()),
                    RawCell::Text("Acme".to_string()),
                    RawCell::Text("1,000".to_string()),
                ],
                vec![
                    RawCell::Text("8704".to_string()),
                    RawCell::Text("Zenith".to_string()),
                    RawCell::Empty,
                ],
            ]
        );
    }

    #[test]
    fn empty_input_has_no_header_row() {
        assert!(TradesCsvDatasourceImpl::new().from_string("").is_err());
    }
}
