use chrono::{Datelike as _, NaiveDate};

use super::column::{Dimension, Measure};

/// One customs transaction line.
///
/// Categorical fields are `None` for empty cells and otherwise hold the cell
/// text verbatim. Currency fields are `None` for empty cells; they are not
/// checked for sign or for `cif_value >= fob_value`.
#[derive(Debug, Clone, Default, PartialEq, serde_derive::Serialize)]
pub struct TradeRecord {
    pub hs_code: Option<String>,
    pub country_of_origin: Option<String>,
    pub country_of_supply: Option<String>,
    pub importer: Option<String>,
    pub cif_value: Option<f64>,
    pub fob_value: Option<f64>,
    pub total_tax: Option<f64>,
    pub receipt_date: Option<NaiveDate>,
}

// --

impl TradeRecord {
    pub fn dimension(&self, dimension: Dimension) -> Option<&str> {
        match dimension {
            Dimension::HsCode => self.hs_code.as_deref(),
            Dimension::CountryOfOrigin => self.country_of_origin.as_deref(),
            Dimension::CountryOfSupply => self.country_of_supply.as_deref(),
            Dimension::Importer => self.importer.as_deref(),
        }
    }

    pub fn measure(&self, measure: Measure) -> Option<f64> {
        match measure {
            Measure::CifValue => self.cif_value,
            Measure::FobValue => self.fob_value,
            Measure::TotalTax => self.total_tax,
        }
    }

    pub fn receipt_year(&self) -> Option<i32> {
        self.receipt_date.map(|d| d.year())
    }

    pub(crate) fn set_dimension(&mut self, dimension: Dimension, value: Option<String>) {
        match dimension {
            Dimension::HsCode => self.hs_code = value,
            Dimension::CountryOfOrigin => self.country_of_origin = value,
            Dimension::CountryOfSupply => self.country_of_supply = value,
            Dimension::Importer => self.importer = value,
        }
    }

    pub(crate) fn set_measure(&mut self, measure: Measure, value: Option<f64>) {
        match measure {
            Measure::CifValue => self.cif_value = value,
            Measure::FobValue => self.fob_value = value,
            Measure::TotalTax => self.total_tax = value,
        }
    }
}
