use std::num::NonZeroUsize;

use fractic_server_error::ServerError;
use iso_currency::Currency;

use crate::{
    errors::InvalidTopN,
    ext::standard_views::{customs_overview_views, CUSTOMS_OVERVIEW_TREND},
};

use super::{
    column::{Column, Dimension, Measure},
    dashboard_report::DashboardRequest,
    filter_set::FilterSet,
};

pub const DEFAULT_TOP_N: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(n) => n,
    None => panic!("default top-N must be non-zero"),
};
pub const MAX_TOP_N: usize = 50;

/// One ranked chart: group `dimension`, sum `measure`, keep the `top_n`
/// largest groups.
#[derive(Debug, Clone, PartialEq, Eq, serde_derive::Serialize)]
pub struct ViewSpec {
    pub title: String,
    pub dimension: Dimension,
    pub measure: Measure,
    pub top_n: NonZeroUsize,
}

/// Describes which views a dashboard shows and how amounts are labeled.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub currency: Currency,
    /// Columns whose absence fails the load instead of disabling single views.
    pub required_columns: Vec<Column>,
    pub views: Vec<ViewSpec>,
    pub trend: Option<Measure>,
}

// --

impl ViewSpec {
    /// Validated constructor; `top_n` must be in `1..=MAX_TOP_N`.
    pub fn new(
        title: impl Into<String>,
        dimension: Dimension,
        measure: Measure,
        top_n: usize,
    ) -> Result<Self, ServerError> {
        Ok(Self::top(title, dimension, measure, validate_top_n(top_n)?))
    }

    pub fn top(
        title: impl Into<String>,
        dimension: Dimension,
        measure: Measure,
        top_n: NonZeroUsize,
    ) -> Self {
        Self {
            title: title.into(),
            dimension,
            measure,
            top_n,
        }
    }
}

pub(crate) fn validate_top_n(top_n: usize) -> Result<NonZeroUsize, ServerError> {
    NonZeroUsize::new(top_n)
        .filter(|n| n.get() <= MAX_TOP_N)
        .ok_or_else(|| InvalidTopN::new(top_n, MAX_TOP_N))
}

impl DashboardConfig {
    /// Replaces the top-N of every view.
    pub fn with_top_n(mut self, top_n: usize) -> Result<Self, ServerError> {
        let top_n = validate_top_n(top_n)?;
        for view in &mut self.views {
            view.top_n = top_n;
        }
        Ok(self)
    }

    pub fn request(&self, filters: FilterSet) -> DashboardRequest {
        DashboardRequest {
            filters,
            views: self.views.clone(),
            trend: self.trend,
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            currency: Currency::NGN,
            required_columns: vec![Column::CifValue],
            views: customs_overview_views(),
            trend: Some(CUSTOMS_OVERVIEW_TREND),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_n_outside_bounds_is_rejected() {
        assert!(validate_top_n(0).is_err());
        assert!(validate_top_n(MAX_TOP_N + 1).is_err());
        assert_eq!(validate_top_n(MAX_TOP_N).ok().map(NonZeroUsize::get), Some(MAX_TOP_N));
    }

    #[test]
    fn top_n_override_applies_to_every_view() {
        let config = DashboardConfig::default().with_top_n(5).ok();
        let top_ns: Vec<usize> = config
            .into_iter()
            .flat_map(|c| c.views)
            .map(|v| v.top_n.get())
            .collect();
        assert_eq!(top_ns, vec![5; 5]);
    }
}
