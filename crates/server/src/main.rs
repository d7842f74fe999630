mod clear_timer;
mod doc;
mod dtos;
mod routes;
mod seed;
mod state;
mod utils;

use crate::{
    doc::ApiDoc,
    routes::{clear, course, health},
    state::AppState,
    utils::shutdown::shutdown_signal,
};
use axum::{
    Router,
    routing::{get, post},
};
use log::info;
use persistence::{LocalStore, local::DEFAULT_DATA_PATH};
use tower_http::compression::CompressionLayer;
use tracker::Tracker;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    let data_path =
        std::env::var("COURSE_DATA_PATH").unwrap_or_else(|_| DEFAULT_DATA_PATH.to_string());
    let mut tracker = Tracker::load(Box::new(LocalStore::new(&data_path)));

    if tracker.is_empty() && std::env::var("COURSE_SEED_DEMO").is_ok_and(|v| v == "1") {
        seed::seed_demo_courses(&mut tracker);
    }

    info!("loaded {} courses from {data_path}", tracker.len());

    let state = AppState::new(tracker);

    let app = Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health))
        .route(
            "/courses",
            get(course::list_courses)
                .post(course::create_course)
                .put(course::update_course)
                .delete(course::delete_course),
        )
        .route("/courses/facets", get(course::get_course_facets))
        .route("/courses/clear-all", post(clear::begin_clear_all))
        .route("/courses/clear-all/confirm", post(clear::confirm_clear_all))
        .route("/courses/clear-all/cancel", post(clear::cancel_clear_all))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CompressionLayer::new())
        .with_state(state);

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .expect("failed to bind listener");
    info!("Running axum on http://{bind_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server failed");
}
