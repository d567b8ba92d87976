use crate::core::settings::EngineSettings;
use crate::domain::model::TransformResult;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Backing medium for persisted documents (palette collections, exports).
pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn settings(&self) -> &EngineSettings;
    fn output_path(&self) -> &str;
    fn export_format(&self) -> &str;
    fn save_palettes(&self) -> bool;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    type Input: Send;

    async fn extract(&self) -> Result<Self::Input>;
    async fn transform(&self, input: Self::Input) -> Result<TransformResult>;
    async fn load(&self, result: TransformResult) -> Result<String>;
}
