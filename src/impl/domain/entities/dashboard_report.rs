use super::{
    aggregate::{MonthlyPoint, RankedGroup},
    column::Measure,
    dashboard_config::ViewSpec,
    filter_set::FilterSet,
};

// Before the pipeline runs.
// ---

#[derive(Debug, Clone, PartialEq, serde_derive::Serialize)]
pub struct DashboardRequest {
    pub filters: FilterSet,
    pub views: Vec<ViewSpec>,
    pub trend: Option<Measure>,
}

// After the pipeline runs.
// ---

/// Scalar headline figures for the filtered rows. Totals for columns absent
/// from the source are `None`; totals over zero rows are `Some(0.0)`.
#[derive(Debug, Clone, PartialEq, serde_derive::Serialize)]
pub struct KeyMetrics {
    pub record_count: usize,
    pub total_cif: Option<f64>,
    pub total_fob: Option<f64>,
    pub total_tax: Option<f64>,
    /// Mean over rows with a CIF value.
    pub average_cif: Option<f64>,
    pub unique_importers: Option<usize>,
    pub unique_origins: Option<usize>,
    /// Pearson correlation between CIF value and total tax.
    pub cif_tax_correlation: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, serde_derive::Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ViewOutcome {
    Ranked { groups: Vec<RankedGroup> },
    Skipped { notice: String },
}

#[derive(Debug, Clone, PartialEq, serde_derive::Serialize)]
pub struct ViewReport {
    pub spec: ViewSpec,
    pub outcome: ViewOutcome,
}

#[derive(Debug, Clone, PartialEq, serde_derive::Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TrendReport {
    Series {
        measure: Measure,
        points: Vec<MonthlyPoint>,
    },
    Skipped {
        notice: String,
    },
    Disabled,
}

#[derive(Debug, Clone, PartialEq, serde_derive::Serialize)]
pub struct DashboardReport {
    pub metrics: KeyMetrics,
    pub views: Vec<ViewReport>,
    pub trend: TrendReport,
}

// --

impl ViewOutcome {
    /// Ranked groups, or `None` when the view was skipped.
    pub fn groups(&self) -> Option<&[RankedGroup]> {
        match self {
            ViewOutcome::Ranked { groups } => Some(groups),
            ViewOutcome::Skipped { .. } => None,
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, ViewOutcome::Skipped { .. })
    }
}
