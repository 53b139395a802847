use std::{
    collections::{BTreeMap, BTreeSet},
    str::FromStr as _,
};

use fractic_server_error::ServerError;

use crate::errors::InvalidFilterExpression;

use super::column::Dimension;

/// Conjunction of inclusion filters. A dimension mapped to an empty set, like
/// an absent dimension, places no restriction on that column.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, serde_derive::Serialize, serde_derive::Deserialize,
)]
pub struct FilterSet {
    #[serde(default)]
    pub dimensions: BTreeMap<Dimension, BTreeSet<String>>,
    /// Receipt years to keep. `None` or an empty set means every year, including
    /// records without a receipt date.
    #[serde(default)]
    pub years: Option<BTreeSet<i32>>,
}

// --

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds accepted values for a dimension, extending any already present.
    pub fn with<I, S>(mut self, dimension: Dimension, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dimensions
            .entry(dimension)
            .or_default()
            .extend(values.into_iter().map(Into::into));
        self
    }

    /// Adds one `COLUMN=VALUE` expression, where `COLUMN` is any accepted
    /// header name of a categorical column. The value is matched exactly.
    pub fn with_expression(self, expression: &str) -> Result<Self, ServerError> {
        let (column, value) = expression
            .split_once('=')
            .filter(|(_, value)| !value.is_empty())
            .ok_or_else(|| InvalidFilterExpression::new(expression))?;
        let dimension = Dimension::from_str(column.trim())?;
        Ok(self.with(dimension, [value]))
    }

    pub fn with_years<I: IntoIterator<Item = i32>>(mut self, years: I) -> Self {
        self.years.get_or_insert_with(BTreeSet::new).extend(years);
        self
    }

    /// Dimensions that actually restrict rows.
    pub fn active_dimensions(&self) -> impl Iterator<Item = (Dimension, &BTreeSet<String>)> + '_ {
        self.dimensions
            .iter()
            .filter(|(_, values)| !values.is_empty())
            .map(|(d, values)| (*d, values))
    }

    pub fn active_years(&self) -> Option<&BTreeSet<i32>> {
        self.years.as_ref().filter(|y| !y.is_empty())
    }

    pub fn is_unrestricted(&self) -> bool {
        self.active_dimensions().next().is_none() && self.active_years().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_column_value_expressions() {
        let filters = FilterSet::new()
            .with_expression("Country of Origin=NG")
            .and_then(|f| f.with_expression("country of origin=GH"))
            .and_then(|f| f.with_expression("Importer=A=B"))
            .expect("expressions should parse");
        assert_eq!(
            filters,
            FilterSet::new()
                .with(Dimension::CountryOfOrigin, ["GH", "NG"])
                .with(Dimension::Importer, ["A=B"])
        );
    }

    #[test]
    fn rejects_malformed_expressions() {
        assert!(FilterSet::new().with_expression("NG").is_err());
        assert!(FilterSet::new().with_expression("Importer=").is_err());
        assert!(FilterSet::new().with_expression("CIF Value (N)=5").is_err());
        assert!(FilterSet::new().with_expression("Declarant=X").is_err());
    }

    #[test]
    fn empty_sets_are_unrestricted() {
        let filters = FilterSet::new()
            .with(Dimension::HsCode, Vec::<String>::new())
            .with_years([]);
        assert!(filters.is_unrestricted());
        assert!(!FilterSet::new().with_years([2023]).is_unrestricted());
    }
}
