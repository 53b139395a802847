use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::entities::{Column, RecordStore, SourceFormat};

#[async_trait]
pub trait RecordStoreRepository: Send + Sync {
    fn from_string(&self, csv: &str, required: &[Column]) -> Result<RecordStore, ServerError>;

    fn from_bytes(
        &self,
        bytes: &[u8],
        format: SourceFormat,
        required: &[Column],
    ) -> Result<RecordStore, ServerError>;

    async fn from_file<P>(&self, path: P, required: &[Column]) -> Result<RecordStore, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}
