use axum::routing::{get, post};
use axum::Router;
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use arena_api::state::AppState;
use arena_api::{config, handlers, middleware};

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up ARENA_ADMIN_PASSWORD etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = config::config();
    tracing::info!("Starting Arena API in {:?} mode", config.environment);
    if config.admin.password.is_empty() {
        tracing::warn!("no admin password configured; admin endpoints will reject every request");
    }

    let app = app(AppState::new());

    // Allow tests or deployments to override port via env
    let port = std::env::var("ARENA_PORT")
        .ok()
        .or_else(|| std::env::var("PORT").ok())
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3000);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    println!("🚀 Arena API server listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}

fn app(state: AppState) -> Router {
    let mut app = Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .merge(public_routes())
        .merge(owner_routes())
        .merge(admin_routes())
        .with_state(state);

    let api = &config::config().api;
    if api.enable_cors {
        app = app.layer(CorsLayer::permissive());
    }
    if api.enable_request_logging {
        app = app.layer(TraceLayer::new_for_http());
    }
    app
}

fn public_routes() -> Router<AppState> {
    use handlers::public;

    Router::new()
        .route("/player/register", post(public::register))
        .route("/leaderboard", get(public::leaderboard))
}

fn owner_routes() -> Router<AppState> {
    use handlers::owner;

    Router::new()
        .route("/player/pause", post(owner::pause))
        .route("/player/resume", post(owner::resume))
        .route("/player/reset", post(owner::reset))
        .route("/player/unregister", post(owner::unregister))
        .route("/player/info", get(owner::player_info))
        .layer(axum::middleware::from_fn(middleware::basic_auth_middleware))
}

fn admin_routes() -> Router<AppState> {
    use handlers::admin;

    Router::new()
        .route("/player/register-with-score", post(admin::register_with_score))
        .route(
            "/players.csv",
            get(admin::export_players_csv).post(admin::import_players_csv),
        )
        .route("/admin/maxNumberOfUsers", get(admin::max_users))
        .route("/admin/increaseMaxNumberOfUsers", get(admin::increase_max_users))
        .route("/admin/decreaseMaxNumberOfUsers", get(admin::decrease_max_users))
        .route("/admin/removeGame", post(admin::remove_game))
        .layer(axum::middleware::from_fn(middleware::admin_auth_middleware))
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "success": true,
        "data": {
            "name": "Arena API",
            "version": version,
            "description": "Player registry and session gateway for the Arena game competition server",
            "endpoints": {
                "register": "POST /player/register?email&pseudo&serverURL (public)",
                "leaderboard": "GET /leaderboard (public)",
                "lifecycle": "POST /player/{pause,resume,reset,unregister}?email (owner)",
                "info": "GET /player/info?email (owner)",
                "roster": "GET|POST /players.csv (admin)",
                "limits": "GET /admin/{max,increaseMax,decreaseMax}NumberOfUsers (admin)",
                "force_remove": "POST /admin/removeGame?email (admin)",
            }
        }
    }))
}

async fn health(
    axum::extract::State(state): axum::extract::State<AppState>,
) -> axum::response::Json<Value> {
    axum::response::Json(json!({
        "success": true,
        "data": {
            "status": "ok",
            "timestamp": chrono::Utc::now(),
            "registered_players": state.registry.leaderboard().len(),
            "max_players": state.registry.max_users(),
        }
    }))
}
