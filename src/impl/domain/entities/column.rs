use std::{fmt, str::FromStr, sync::LazyLock};

use fractic_server_error::ServerError;
use regex::Regex;

use crate::errors::UnknownDimension;

static NON_ALPHANUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}]+").expect("hardcoded regex should be valid"));

/// Canonical schema of a customs transaction extract.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    serde_derive::Serialize,
    serde_derive::Deserialize,
)]
pub enum Column {
    HsCode,
    CountryOfOrigin,
    CountryOfSupply,
    Importer,
    CifValue,
    FobValue,
    TotalTax,
    ReceiptDate,
}

/// Categorical columns that can be filtered on and grouped by.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    serde_derive::Serialize,
    serde_derive::Deserialize,
)]
pub enum Dimension {
    HsCode,
    CountryOfOrigin,
    CountryOfSupply,
    Importer,
}

/// Currency columns that can be summed.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    serde_derive::Serialize,
    serde_derive::Deserialize,
)]
pub enum Measure {
    CifValue,
    FobValue,
    TotalTax,
}

// --

impl Column {
    pub const ALL: [Column; 8] = [
        Column::HsCode,
        Column::CountryOfOrigin,
        Column::CountryOfSupply,
        Column::Importer,
        Column::CifValue,
        Column::FobValue,
        Column::TotalTax,
        Column::ReceiptDate,
    ];

    /// Header spelling used by the cleaned trade and customs extract, and for
    /// synthesized exports.
    pub fn label(self) -> &'static str {
        match self {
            Column::HsCode => "HS Code",
            Column::CountryOfOrigin => "Country of Origin",
            Column::CountryOfSupply => "Country of Supply",
            Column::Importer => "Importer",
            Column::CifValue => "CIF Value (N)",
            Column::FobValue => "FOB Value (N)",
            Column::TotalTax => "Total Tax(N)",
            Column::ReceiptDate => "Receipt Date",
        }
    }

    /// Accepted header spellings, already normalized (see
    /// [`Column::normalize_header`]).
    fn aliases(self) -> &'static [&'static str] {
        match self {
            Column::HsCode => &["hs code", "hs product", "hs"],
            Column::CountryOfOrigin => &["country of origin"],
            Column::CountryOfSupply => &["country of supply"],
            Column::Importer => &["importer", "importer name"],
            Column::CifValue => &["cif value n", "cif value"],
            Column::FobValue => &["fob value n", "fob value"],
            Column::TotalTax => &["total tax n", "total tax"],
            Column::ReceiptDate => &["receipt date", "date"],
        }
    }

    /// Lowercase, collapse every run of non-alphanumeric characters into a
    /// single space, and trim. "Total Tax(N)" and "total tax (n)" both become
    /// "total tax n".
    pub fn normalize_header(header: &str) -> String {
        NON_ALPHANUMERIC
            .replace_all(&header.to_lowercase(), " ")
            .trim()
            .to_string()
    }

    /// Resolves a source header to its canonical column, if recognized.
    pub fn from_header(header: &str) -> Option<Column> {
        let normalized = Self::normalize_header(header);
        Column::ALL
            .into_iter()
            .find(|c| c.aliases().contains(&normalized.as_str()))
    }

    pub fn as_dimension(self) -> Option<Dimension> {
        match self {
            Column::HsCode => Some(Dimension::HsCode),
            Column::CountryOfOrigin => Some(Dimension::CountryOfOrigin),
            Column::CountryOfSupply => Some(Dimension::CountryOfSupply),
            Column::Importer => Some(Dimension::Importer),
            _ => None,
        }
    }

    pub fn as_measure(self) -> Option<Measure> {
        match self {
            Column::CifValue => Some(Measure::CifValue),
            Column::FobValue => Some(Measure::FobValue),
            Column::TotalTax => Some(Measure::TotalTax),
            _ => None,
        }
    }
}

impl Dimension {
    pub const ALL: [Dimension; 4] = [
        Dimension::HsCode,
        Dimension::CountryOfOrigin,
        Dimension::CountryOfSupply,
        Dimension::Importer,
    ];

    pub fn column(self) -> Column {
        match self {
            Dimension::HsCode => Column::HsCode,
            Dimension::CountryOfOrigin => Column::CountryOfOrigin,
            Dimension::CountryOfSupply => Column::CountryOfSupply,
            Dimension::Importer => Column::Importer,
        }
    }

    pub fn label(self) -> &'static str {
        self.column().label()
    }
}

impl Measure {
    pub const ALL: [Measure; 3] = [Measure::CifValue, Measure::FobValue, Measure::TotalTax];

    pub fn column(self) -> Column {
        match self {
            Measure::CifValue => Column::CifValue,
            Measure::FobValue => Column::FobValue,
            Measure::TotalTax => Column::TotalTax,
        }
    }

    /// Short name for axis labels and report headings.
    pub fn display_name(self) -> &'static str {
        match self {
            Measure::CifValue => "CIF Value",
            Measure::FobValue => "FOB Value",
            Measure::TotalTax => "Tax Revenue",
        }
    }
}

impl From<Dimension> for Column {
    fn from(d: Dimension) -> Self {
        d.column()
    }
}

impl From<Measure> for Column {
    fn from(m: Measure) -> Self {
        m.column()
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Dimension {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Column::from_header(s)
            .and_then(Column::as_dimension)
            .ok_or_else(|| UnknownDimension::new(s))
    }
}
