//! Carga y gestión de configuración del servicio (dirección de escucha + dataset).

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use anyhow::{anyhow, Result};

/// Todas las interfaces, puerto fijo 5000 (accesible desde clientes web externos).
pub const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:5000";
/// Fichero de reseñas que se espera junto al servicio.
pub const DEFAULT_DATASET_PATH: &str = "sample_reviews.csv";

/// Configuración completa de la aplicación.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub server_addr: SocketAddr,
    pub dataset_path: PathBuf,
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno (usando .env si existe).
    pub fn from_env() -> Result<Self> {
        let server_addr_str =
            env::var("SERVER_ADDR").unwrap_or_else(|_| DEFAULT_SERVER_ADDR.to_string());
        let dataset_path =
            env::var("DATASET_PATH").unwrap_or_else(|_| DEFAULT_DATASET_PATH.to_string());

        Self::from_parts(&server_addr_str, &dataset_path)
    }

    fn from_parts(server_addr: &str, dataset_path: &str) -> Result<Self> {
        let server_addr = server_addr
            .parse::<SocketAddr>()
            .map_err(|e| anyhow!("SERVER_ADDR inválida ({server_addr}): {e}"))?;

        Ok(Self {
            server_addr,
            dataset_path: PathBuf::from(dataset_path),
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_addr: SocketAddr::from(([0, 0, 0, 0], 5000)),
            dataset_path: PathBuf::from(DEFAULT_DATASET_PATH),
        }
    }
}
