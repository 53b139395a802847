use async_trait::async_trait;
use fractic_server_error::ServerError;
use ron::{extensions::Extensions, Options};

use crate::{
    data::models::dashboard_config_model::DashboardConfigModel,
    entities::DashboardConfig,
    errors::{InvalidRon, ReadError},
};

#[async_trait]
pub(crate) trait DashboardConfigRonDatasource: Send + Sync {
    fn from_string(&self, s: &str) -> Result<DashboardConfig, ServerError>;

    async fn from_file<P>(&self, path: P) -> Result<DashboardConfig, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}

pub(crate) struct DashboardConfigRonDatasourceImpl;

impl DashboardConfigRonDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DashboardConfigRonDatasource for DashboardConfigRonDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<DashboardConfig, ServerError> {
        let model: DashboardConfigModel = Options::default()
            .with_default_extension(Extensions::IMPLICIT_SOME)
            .from_str(s)
            .map_err(|e| InvalidRon::with_debug("DashboardConfig", &e))?;
        model.validate()
    }

    async fn from_file<P>(&self, path: P) -> Result<DashboardConfig, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let s = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ReadError::with_debug(&e))?;
        self.from_string(&s)
    }
}
