use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use shuppinhyo::application::ports::{SheetRepository, ValuationRepository};
use shuppinhyo::application::services::{SheetIngestionService, ValuationService};
use shuppinhyo::infrastructure::observability::{init_tracing, TracingConfig};
use shuppinhyo::infrastructure::persistence::{
    create_pool, ensure_schema, SqliteSheetRepository, SqliteValuationRepository,
};
use shuppinhyo::infrastructure::text_processing::PdfAdapter;
use shuppinhyo::presentation::{create_router, AppState, Environment, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env()?;

    // Production always logs JSON; elsewhere LOG_FORMAT decides.
    let tracing_config = TracingConfig {
        environment: settings.environment.to_string(),
        json_format: settings.logging.json_format || settings.environment == Environment::Prod,
    };
    init_tracing(tracing_config, settings.server.port);

    let pool = create_pool(&settings.database.url, settings.database.max_connections).await?;
    ensure_schema(&pool).await?;

    let sheet_repository: Arc<dyn SheetRepository> =
        Arc::new(SqliteSheetRepository::new(pool.clone()));
    let valuation_repository: Arc<dyn ValuationRepository> =
        Arc::new(SqliteValuationRepository::new(pool));

    let extractor = Arc::new(PdfAdapter::new());

    let ingestion_service = Arc::new(SheetIngestionService::new(
        Arc::clone(&extractor),
        Arc::clone(&sheet_repository),
    ));
    let valuation_service = Arc::new(ValuationService::new(
        Arc::clone(&sheet_repository),
        valuation_repository,
    ));

    let state = AppState {
        ingestion_service,
        valuation_service,
        sheet_repository,
        settings: settings.clone(),
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
