// Módulos de la aplicación
mod api;
mod app_state;
mod config;
mod dataset;
mod error;
mod models;
mod sentiment;

use crate::app_state::AppState;
use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Cargar .env e inicializar logging
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Cargar configuración
    let cfg = config::AppConfig::from_env().context("Error al cargar la configuración")?;

    // 3. Inicializar el analizador (una sola vez, compartido entre peticiones)
    let app_state = AppState::new(cfg);
    info!("Analizador VADER listo. Dataset: {}", app_state.config.dataset_path.display());

    // 4. Router con CORS abierto para clientes servidos desde otro origen
    let server_addr = app_state.config.server_addr;
    let app = api::create_app(app_state);

    // 5. Iniciar el servidor
    let listener = tokio::net::TcpListener::bind(server_addr)
        .await
        .with_context(|| format!("No se pudo escuchar en {server_addr}"))?;
    info!("🚀 Servidor escuchando en http://{}", server_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            info!("Señal de apagado recibida, iniciando cierre del servidor.");
        })
        .await?;

    info!("✅ Servidor cerrado correctamente.");
    Ok(())
}
