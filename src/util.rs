use fractic_server_error::ServerError;

use crate::{
    data::datasources::dashboard_config_ron_datasource::{
        DashboardConfigRonDatasource as _, DashboardConfigRonDatasourceImpl,
    },
    domain::usecases::dashboard_usecase::{DashboardUsecase as _, DashboardUsecaseImpl},
    entities::{
        DashboardConfig, DashboardReport, DashboardRequest, FilterSet, RecordStore, SourceFormat,
    },
    presentation::{csv_export::CsvExporter, text_report_printer::TextReportPrinter},
};

pub type TextReport = String;

pub struct TradeDashboardUtil {
    dashboard_usecase: DashboardUsecaseImpl,
    config_datasource: DashboardConfigRonDatasourceImpl,
    printer: TextReportPrinter,
    exporter: CsvExporter,
}

impl TradeDashboardUtil {
    pub fn new() -> Self {
        Self {
            dashboard_usecase: DashboardUsecaseImpl::new(),
            config_datasource: DashboardConfigRonDatasourceImpl::new(),
            printer: TextReportPrinter::new(),
            exporter: CsvExporter::new(),
        }
    }

    // Configuration.
    // ---

    pub fn parse_config(&self, ron: &str) -> Result<DashboardConfig, ServerError> {
        self.config_datasource.from_string(ron)
    }

    pub async fn load_config<P>(&self, path: P) -> Result<DashboardConfig, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        self.config_datasource.from_file(path).await
    }

    // Loading.
    // ---

    /// Loads a bundled or local dataset; the format follows the file extension.
    pub async fn from_file<P>(
        &self,
        path: P,
        config: &DashboardConfig,
    ) -> Result<RecordStore, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        self.dashboard_usecase.load_from_file(path, config).await
    }

    pub fn from_csv_string(
        &self,
        csv: &str,
        config: &DashboardConfig,
    ) -> Result<RecordStore, ServerError> {
        self.dashboard_usecase.load_from_string(csv, config)
    }

    /// Loads user-supplied bytes (e.g. an uploaded file).
    pub fn from_upload(
        &self,
        bytes: &[u8],
        format: SourceFormat,
        config: &DashboardConfig,
    ) -> Result<RecordStore, ServerError> {
        self.dashboard_usecase.load_from_upload(bytes, format, config)
    }

    // Pipeline.
    // ---

    pub fn run(&self, store: &RecordStore, request: &DashboardRequest) -> DashboardReport {
        self.dashboard_usecase.run(store, request)
    }

    /// Runs the pipeline and renders the plain-text report.
    pub fn run_and_print(
        &self,
        store: &RecordStore,
        config: &DashboardConfig,
        filters: FilterSet,
    ) -> (DashboardReport, TextReport) {
        let report = self.run(store, &config.request(filters));
        let text = self.printer.print(&report, config.currency);
        (report, text)
    }

    pub fn print(&self, report: &DashboardReport, config: &DashboardConfig) -> TextReport {
        self.printer.print(report, config.currency)
    }

    // Export.
    // ---

    /// Filtered rows as CSV with the source's original headers.
    pub fn export_csv(&self, store: &RecordStore, filters: &FilterSet) -> Result<String, ServerError> {
        let view = self.dashboard_usecase.filtered_view(store, filters)?;
        self.exporter.export(&view)
    }

    pub fn export_data_uri(
        &self,
        store: &RecordStore,
        filters: &FilterSet,
    ) -> Result<String, ServerError> {
        let view = self.dashboard_usecase.filtered_view(store, filters)?;
        self.exporter.data_uri(&view)
    }
}

impl Default for TradeDashboardUtil {
    fn default() -> Self {
        Self::new()
    }
}
