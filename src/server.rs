use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use std::{
    net::SocketAddr,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::{SystemTime, UNIX_EPOCH},
};
use tower_http::services::{ServeDir, ServeFile};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::api::{ApiCatalogResponse, ApiGenerateRequest, ApiGenerateResponse};
use postcraft::catalog;
use postcraft::config::ComposerConfig;
use postcraft::generate_with_options;

#[derive(Clone)]
struct AppState {
    config: Arc<ComposerConfig>,
}

static REQUEST_COUNTER: AtomicUsize = AtomicUsize::new(0);

pub async fn serve(args: crate::ServeArgs) -> Result<(), String> {
    init_tracing();

    let (config, config_path) = ComposerConfig::load(None)?;
    if let Some(path) = config_path.as_ref() {
        debug!(path = %path.display(), "composer config path");
    }
    let state = AppState {
        config: Arc::new(config),
    };

    let web_root = args.web_root;
    let index_path = format!("{}/index.html", web_root.trim_end_matches('/'));
    let static_service = ServeDir::new(web_root).not_found_service(ServeFile::new(index_path));

    let app = Router::new()
        .route("/api/health", get(health))
        .route("/api/generate", post(generate_handler))
        .route("/api/catalog", get(catalog_handler))
        .nest_service("/", static_service)
        .with_state(state);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .map_err(|err| format!("invalid bind address: {}", err))?;

    info!(%addr, "starting postcraft server");

    axum::serve(
        tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|err| format!("failed to bind server: {}", err))?,
        app,
    )
    .await
    .map_err(|err| format!("server error: {}", err))?;

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

async fn health() -> impl IntoResponse {
    StatusCode::OK
}

async fn generate_handler(
    State(state): State<AppState>,
    Json(request): Json<ApiGenerateRequest>,
) -> Result<Json<ApiGenerateResponse>, (StatusCode, String)> {
    let request_id = request
        .request_id
        .clone()
        .unwrap_or_else(generate_request_id);
    let (input, salt, hashtag_count) = request
        .into_input(&state.config.defaults)
        .map_err(|err| (StatusCode::BAD_REQUEST, err))?;

    debug!(request_id = %request_id, salt, "composing post");
    let output = generate_with_options(&input, salt, hashtag_count);

    Ok(Json(ApiGenerateResponse::from_output(output, request_id)))
}

async fn catalog_handler() -> Json<ApiCatalogResponse> {
    Json(ApiCatalogResponse {
        tones: catalog::tone_options(),
        intents: catalog::intent_options(),
        lengths: catalog::length_options(),
        presets: catalog::starter_presets(),
    })
}

fn generate_request_id() -> String {
    let counter = REQUEST_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("req-{}-{}", now_ms(), counter)
}

fn now_ms() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_millis())
        .unwrap_or(0)
}
