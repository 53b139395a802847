use fractic_server_error::ServerError;
use iso_currency::Currency;

use crate::{
    domain::entities::dashboard_config::validate_top_n,
    entities::{Column, DashboardConfig, Dimension, Measure, ViewSpec, DEFAULT_TOP_N},
    errors::InvalidIsoCurrencyCode,
    ext::standard_views::{customs_overview_views, CUSTOMS_OVERVIEW_TREND},
};

/// On-disk (RON) shape of a dashboard configuration. Every field is optional
/// and falls back to the standard customs overview. Parsed with the
/// `implicit_some` extension, so optional fields need no `Some(..)` wrapper.
///
/// ```ron
/// (
///     currency: "NGN",
///     required_columns: [CifValue, Importer],
///     views: [
///         (title: "Top Importers", dimension: Importer, measure: CifValue, top_n: 15),
///     ],
///     trend: TotalTax,
/// )
/// ```
#[derive(Debug, serde_derive::Deserialize)]
pub(crate) struct DashboardConfigModel {
    #[serde(default = "default_currency")]
    currency: String,
    #[serde(default = "default_required_columns")]
    required_columns: Vec<Column>,
    #[serde(default)]
    views: Option<Vec<ViewSpecModel>>,
    #[serde(default = "default_trend")]
    trend: Option<Measure>,
}

#[derive(Debug, serde_derive::Deserialize)]
pub(crate) struct ViewSpecModel {
    title: String,
    dimension: Dimension,
    measure: Measure,
    #[serde(default = "default_top_n")]
    top_n: usize,
}

fn default_currency() -> String {
    "NGN".to_string()
}

fn default_required_columns() -> Vec<Column> {
    vec![Column::CifValue]
}

fn default_trend() -> Option<Measure> {
    Some(CUSTOMS_OVERVIEW_TREND)
}

fn default_top_n() -> usize {
    DEFAULT_TOP_N.get()
}

impl DashboardConfigModel {
    pub(crate) fn validate(self) -> Result<DashboardConfig, ServerError> {
        let currency = Currency::from_code(self.currency.trim())
            .ok_or_else(|| InvalidIsoCurrencyCode::new(&self.currency))?;
        let views = match self.views {
            Some(views) => views
                .into_iter()
                .map(|v| {
                    Ok(ViewSpec::top(
                        v.title,
                        v.dimension,
                        v.measure,
                        validate_top_n(v.top_n)?,
                    ))
                })
                .collect::<Result<Vec<_>, ServerError>>()?,
            None => customs_overview_views(),
        };
        Ok(DashboardConfig {
            currency,
            required_columns: self.required_columns,
            views,
            trend: self.trend,
        })
    }
}
