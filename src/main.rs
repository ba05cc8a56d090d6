use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use doclens::application::services::DocumentPipeline;
use doclens::infrastructure::llm::OpenAiDeriver;
use doclens::infrastructure::observability::{TracingConfig, init_tracing};
use doclens::infrastructure::storage::AzureBlobStore;
use doclens::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();

    init_tracing(
        TracingConfig::default(),
        settings.server.port,
    );

    let blob_store = Arc::new(AzureBlobStore::new(
        settings.storage.azure_account.clone(),
        settings.storage.azure_access_key.clone(),
    ));
    let pipeline = Arc::new(DocumentPipeline::new(blob_store));

    let deriver = Arc::new(OpenAiDeriver::new(
        settings.llm.api_key.clone(),
        settings.llm.chat_model.clone(),
    ));

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;

    let state = AppState {
        pipeline,
        deriver,
        settings,
    };

    let router = create_router(state);

    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
