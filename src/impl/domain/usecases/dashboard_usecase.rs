use async_trait::async_trait;
use fractic_server_error::ServerError;
use tracing::{debug, warn};

use crate::{
    data::repositories::record_store_repository_impl::RecordStoreRepositoryImpl,
    domain::{
        logic::{
            aggregator::Aggregator, filter_stage::FilterStage, monthly_trend::MonthlyTrend,
            ranker::Ranker, summary::SummaryCalculator,
        },
        repositories::record_store_repository::RecordStoreRepository,
    },
    entities::{
        Column, DashboardConfig, DashboardReport, DashboardRequest, FilterSet, FilteredView,
        RecordStore, SourceFormat, TrendReport, ViewOutcome, ViewReport, ViewSpec,
    },
    errors::ColumnNotInSource,
};

#[async_trait]
pub trait DashboardUsecase: Send + Sync {
    async fn load_from_file<P>(
        &self,
        path: P,
        config: &DashboardConfig,
    ) -> Result<RecordStore, ServerError>
    where
        P: AsRef<std::path::Path> + Send;

    fn load_from_string(
        &self,
        csv: &str,
        config: &DashboardConfig,
    ) -> Result<RecordStore, ServerError>;

    fn load_from_upload(
        &self,
        bytes: &[u8],
        format: SourceFormat,
        config: &DashboardConfig,
    ) -> Result<RecordStore, ServerError>;

    /// Filtered rows, or a schema error if a filter names an absent column.
    fn filtered_view<'a>(
        &self,
        store: &'a RecordStore,
        filters: &FilterSet,
    ) -> Result<FilteredView<'a>, ServerError>;

    /// Runs every requested view. Never fails: views that cannot be computed
    /// are reported as skipped.
    fn run(&self, store: &RecordStore, request: &DashboardRequest) -> DashboardReport;
}

pub(crate) struct DashboardUsecaseImpl<
    R1 = RecordStoreRepositoryImpl, // Default.
> where
    R1: RecordStoreRepository,
{
    records_repository: R1,
}

#[async_trait]
impl<R1> DashboardUsecase for DashboardUsecaseImpl<R1>
where
    R1: RecordStoreRepository,
{
    async fn load_from_file<P>(
        &self,
        path: P,
        config: &DashboardConfig,
    ) -> Result<RecordStore, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        self.records_repository
            .from_file(path, &config.required_columns)
            .await
    }

    fn load_from_string(
        &self,
        csv: &str,
        config: &DashboardConfig,
    ) -> Result<RecordStore, ServerError> {
        self.records_repository
            .from_string(csv, &config.required_columns)
    }

    fn load_from_upload(
        &self,
        bytes: &[u8],
        format: SourceFormat,
        config: &DashboardConfig,
    ) -> Result<RecordStore, ServerError> {
        self.records_repository
            .from_bytes(bytes, format, &config.required_columns)
    }

    fn filtered_view<'a>(
        &self,
        store: &'a RecordStore,
        filters: &FilterSet,
    ) -> Result<FilteredView<'a>, ServerError> {
        let stage = FilterStage::new(filters);
        stage.check_columns(store)?;
        Ok(stage.apply(store.view()))
    }

    fn run(&self, store: &RecordStore, request: &DashboardRequest) -> DashboardReport {
        let view = match self.filtered_view(store, &request.filters) {
            Ok(view) => view,
            Err(e) => {
                // Filtering on an absent column disables every view; the metrics
                // still describe the unfiltered data.
                warn!(error = %e, "filters cannot be applied");
                return skipped_report(store, request, e.to_string());
            }
        };
        if view.is_empty() {
            warn!(filters = ?request.filters, "filters matched no records");
        }

        let views = request
            .views
            .iter()
            .map(|spec| ViewReport {
                spec: spec.clone(),
                outcome: match run_view(&view, spec) {
                    Ok(outcome) => outcome,
                    Err(e) => {
                        warn!(view = %spec.title, error = %e, "view skipped");
                        ViewOutcome::Skipped {
                            notice: e.to_string(),
                        }
                    }
                },
            })
            .collect();

        let trend = match request.trend {
            None => TrendReport::Disabled,
            Some(measure) => match require(store, &[Column::ReceiptDate, measure.column()]) {
                Ok(()) => TrendReport::Series {
                    measure,
                    points: MonthlyTrend::new(measure).compute(view.records()),
                },
                Err(e) => {
                    warn!(error = %e, "monthly trend skipped");
                    TrendReport::Skipped {
                        notice: e.to_string(),
                    }
                }
            },
        };

        DashboardReport {
            metrics: SummaryCalculator::new(&view).process(),
            views,
            trend,
        }
    }
}

impl DashboardUsecaseImpl {
    pub(crate) fn new() -> Self {
        DashboardUsecaseImpl {
            records_repository: RecordStoreRepositoryImpl::new(),
        }
    }
}

fn run_view(view: &FilteredView<'_>, spec: &ViewSpec) -> Result<ViewOutcome, ServerError> {
    require(view.store(), &[spec.dimension.column(), spec.measure.column()])?;
    let aggregates = Aggregator::new(spec.dimension, spec.measure).aggregate(view.records());
    debug!(
        view = %spec.title,
        groups = aggregates.len(),
        rows = view.len(),
        "aggregated view"
    );
    Ok(ViewOutcome::Ranked {
        groups: Ranker::new(spec.top_n).rank(aggregates),
    })
}

fn require(store: &RecordStore, columns: &[Column]) -> Result<(), ServerError> {
    match columns.iter().find(|c| !store.has_column(**c)) {
        Some(missing) => Err(ColumnNotInSource::new(missing.label())),
        None => Ok(()),
    }
}

fn skipped_report(store: &RecordStore, request: &DashboardRequest, notice: String) -> DashboardReport {
    let unfiltered = store.view();
    DashboardReport {
        metrics: SummaryCalculator::new(&unfiltered).process(),
        views: request
            .views
            .iter()
            .map(|spec| ViewReport {
                spec: spec.clone(),
                outcome: ViewOutcome::Skipped {
                    notice: notice.clone(),
                },
            })
            .collect(),
        trend: match request.trend {
            None => TrendReport::Disabled,
            Some(_) => TrendReport::Skipped { notice },
        },
    }
}
