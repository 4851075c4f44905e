use std::sync::Arc;

use anyhow::Context;
use storage::AssessmentStore;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use vision::GeminiClient;

mod config;
mod error;
mod features;
mod routes;
mod state;

use config::Config;
use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::assessments::handlers::create_assessment,
        features::assessments::handlers::list_assessments,
        features::assessments::handlers::get_assessment,
        features::assessments::handlers::update_assessment,
        features::assessments::handlers::list_flagged,
        features::assessments::handlers::list_by_status,
        features::stats::handlers::today_stats,
    ),
    components(
        schemas(
            storage::models::Assessment,
            storage::dto::assessment::AssessmentResponse,
            storage::dto::assessment::UpdateAssessmentRequest,
            storage::dto::stats::DailyStats,
            features::assessments::handlers::CreateAssessmentForm,
        )
    ),
    tags(
        (name = "assessments", description = "Fitness-for-duty assessment endpoints"),
        (name = "stats", description = "Daily statistics endpoints"),
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting Fitness-for-Duty Assessment API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    if config.gemini_api_key.is_empty() {
        tracing::warn!("GEMINI_API_KEY is not set, assessment creation will fail until it is");
    }

    let store = AssessmentStore::new();
    let analyzer = Arc::new(GeminiClient::new(
        config.gemini_base_url.clone(),
        config.gemini_model.clone(),
        config.gemini_api_key.clone(),
    ));
    tracing::info!("Vision client ready (model: {})", config.gemini_model);

    let state = AppState { store, analyzer };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = routes::router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors);

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .context("Failed to bind server address")?;
    axum::serve(listener, app).await?;

    Ok(())
}
