use axum::{
    extract::{rejection::JsonRejection, Json, State},
    routing::{get, post},
    Router,
};
use tokio::task::spawn_blocking;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{error, info, warn};

use crate::{
    app_state::AppState,
    dataset,
    error::ApiError,
    models::{review_text, AnalysisResult, AnalyzePayload},
};

// --- Router ---

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/load_data", get(load_data_handler))
        .route("/analyze", post(analyze_handler))
        .with_state(app_state)
}

/// Router completo: rutas + trazas por petición + CORS abierto para clientes
/// servidos desde otro origen.
pub fn create_app(app_state: AppState) -> Router {
    create_router(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

// --- Handlers ---

/// Carga el CSV configurado y analiza todas sus filas.
#[axum::debug_handler]
async fn load_data_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<AnalysisResult>>, ApiError> {
    let path = state.config.dataset_path.clone();
    let classifier = state.classifier.clone();

    // Lectura y análisis son síncronos: fuera del runtime async.
    let result = spawn_blocking(move || {
        dataset::load_reviews(&path).map(|rows| {
            classifier.analyze_all(rows.into_iter().map(|row| (row.review, row.rating)))
        })
    })
    .await;

    match result {
        Ok(Ok(results)) => {
            info!("Dataset analizado: {} reseñas.", results.len());
            Ok(Json(results))
        }
        Ok(Err(err)) => {
            let api_err = ApiError::from(err);
            match &api_err {
                ApiError::Processing(_) => error!("Error procesando el CSV: {}", api_err),
                _ => warn!("Carga de dataset rechazada: {}", api_err),
            }
            Err(api_err)
        }
        Err(join_err) => {
            error!("La tarea de carga del CSV falló: {}", join_err);
            Err(ApiError::Processing(join_err.to_string()))
        }
    }
}

/// Analiza la lista de reseñas enviada en el cuerpo.
#[axum::debug_handler]
async fn analyze_handler(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzePayload>, JsonRejection>,
) -> Result<Json<Vec<AnalysisResult>>, ApiError> {
    let Json(payload) = payload.map_err(|rejection| {
        warn!("Cuerpo de /analyze inválido: {}", rejection.body_text());
        ApiError::Validation(rejection.body_text())
    })?;

    let reviews = match payload.reviews {
        Some(reviews) if !reviews.is_empty() => reviews,
        _ => return Err(ApiError::Validation("No reviews provided.".to_string())),
    };

    let results = state
        .classifier
        .analyze_all(reviews.iter().map(|value| (review_text(value), None)));
    info!("Lote analizado: {} reseñas.", results.len());
    Ok(Json(results))
}
